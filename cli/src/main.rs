//! portrait CLI - predictive portrait report generator

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use portrait::{
    CompanyInfo, JsonFormat, LayoutOptions, PageSpec, Portrait, ReportRequest, SectionBreak,
    SegmentOptions, SubjectProfile,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "portrait")]
#[command(author = "MS360")]
#[command(version)]
#[command(about = "Turn AI-written report text into a paginated predictive portrait PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a PDF report
    Generate {
        /// Report text ("-" for stdin); the fallback report is used if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        company: CompanyArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        segment: SegmentArgs,
    },

    /// Show how report text is split into sections
    Sections {
        /// Report text ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        #[command(flatten)]
        segment: SegmentArgs,
    },

    /// Print the laid-out pages as JSON
    Layout {
        /// Report text ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        company: CompanyArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        segment: SegmentArgs,
    },

    /// Print a plain-text preview of the report
    Preview {
        /// Report text ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        #[command(flatten)]
        company: CompanyArgs,
    },

    /// Generate many reports from a JSON array of requests
    Batch {
        /// JSON file: [{"profile": {...}, "content": "..."}, ...]
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        #[command(flatten)]
        company: CompanyArgs,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct ProfileArgs {
    /// Subject's full name
    #[arg(long)]
    name: String,

    /// Subject's e-mail address
    #[arg(long)]
    email: String,

    /// Business sector
    #[arg(long)]
    sector: String,

    /// Current position
    #[arg(long)]
    position: String,

    /// Stated ambitions
    #[arg(long)]
    ambitions: String,

    /// Generation date stamped on the report (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,
}

impl ProfileArgs {
    fn profile(&self) -> SubjectProfile {
        SubjectProfile::new(
            self.name.as_str(),
            self.email.as_str(),
            self.sector.as_str(),
            self.position.as_str(),
            self.ambitions.as_str(),
        )
    }
}

#[derive(Args)]
struct CompanyArgs {
    /// Company branding as JSON
    #[arg(long, value_name = "FILE", env = "PORTRAIT_COMPANY_FILE")]
    company: Option<PathBuf>,

    /// Company name
    #[arg(long, env = "PORTRAIT_COMPANY_NAME")]
    company_name: Option<String>,

    /// Company tagline
    #[arg(long, env = "PORTRAIT_COMPANY_TAGLINE")]
    company_tagline: Option<String>,

    /// Company website
    #[arg(long, env = "PORTRAIT_COMPANY_WEBSITE")]
    company_website: Option<String>,

    /// Company contact e-mail
    #[arg(long, env = "PORTRAIT_COMPANY_EMAIL")]
    company_email: Option<String>,

    /// Company phone number
    #[arg(long, env = "PORTRAIT_COMPANY_PHONE")]
    company_phone: Option<String>,
}

impl CompanyArgs {
    fn company(&self) -> Result<CompanyInfo, Box<dyn std::error::Error>> {
        let mut company = match &self.company {
            Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
            None => CompanyInfo::default(),
        };
        if let Some(name) = &self.company_name {
            company = company.with_name(name.as_str());
        }
        if let Some(tagline) = &self.company_tagline {
            company = company.with_tagline(tagline.as_str());
        }
        if let Some(website) = &self.company_website {
            company = company.with_website(website.as_str());
        }
        if let Some(email) = &self.company_email {
            company = company.with_email(email.as_str());
        }
        if let Some(phone) = &self.company_phone {
            company = company.with_phone(phone.as_str());
        }
        Ok(company)
    }
}

#[derive(Args)]
struct LayoutArgs {
    /// Let sections flow on from one another instead of starting new pages
    #[arg(long)]
    continuous: bool,

    /// Use US Letter pages instead of A4
    #[arg(long)]
    letter: bool,

    /// Body pages only: no cover, contents or closing page
    #[arg(long)]
    content_only: bool,

    /// Omit page footers
    #[arg(long)]
    no_footers: bool,
}

impl LayoutArgs {
    fn options(&self) -> LayoutOptions {
        let mut options = LayoutOptions::new().with_footers(!self.no_footers);
        if self.continuous {
            options = options.with_section_break(SectionBreak::Continuous);
        }
        if self.letter {
            options = options.with_page(PageSpec::letter());
        }
        if self.content_only {
            options = options.content_only();
        }
        options
    }
}

#[derive(Args)]
struct SegmentArgs {
    /// Minimum share of text kept by segmentation (0.0-1.0)
    #[arg(long, default_value = "0.8", env = "PORTRAIT_COVERAGE_THRESHOLD")]
    threshold: f32,

    /// Minimum number of detected sections
    #[arg(long, default_value = "2", env = "PORTRAIT_MIN_SECTIONS")]
    min_sections: usize,
}

impl SegmentArgs {
    fn options(&self) -> SegmentOptions {
        SegmentOptions::new()
            .with_coverage_threshold(self.threshold)
            .with_min_sections(self.min_sections)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            profile,
            company,
            layout,
            segment,
        } => cmd_generate(input.as_deref(), &output, &profile, &company, &layout, &segment),
        Commands::Sections {
            input,
            json,
            compact,
            segment,
        } => cmd_sections(&input, json, compact, &segment),
        Commands::Layout {
            input,
            output,
            compact,
            profile,
            company,
            layout,
            segment,
        } => cmd_layout(
            &input,
            output.as_deref(),
            compact,
            &profile,
            &company,
            &layout,
            &segment,
        ),
        Commands::Preview {
            input,
            profile,
            company,
        } => cmd_preview(&input, &profile, &company),
        Commands::Batch {
            input,
            output,
            company,
            layout,
        } => cmd_batch(&input, &output, &company, &layout),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn build_portrait(
    profile: Option<&ProfileArgs>,
    company: &CompanyArgs,
) -> Result<Portrait, Box<dyn std::error::Error>> {
    let mut portrait = Portrait::new().with_company(company.company()?);
    if let Some(date) = profile.and_then(|p| p.date) {
        let at = Utc.from_utc_datetime(&date.and_hms_opt(9, 0, 0).ok_or("invalid date")?);
        portrait = portrait.with_generated_at(at);
    }
    Ok(portrait)
}

fn cmd_generate(
    input: Option<&Path>,
    output: &Path,
    profile_args: &ProfileArgs,
    company: &CompanyArgs,
    layout: &LayoutArgs,
    segment: &SegmentArgs,
) -> CliResult {
    let portrait = build_portrait(Some(profile_args), company)?
        .with_layout_options(layout.options())
        .with_segment_options(segment.options());
    let profile = profile_args.profile();

    let content = input.map(read_input).transpose()?;
    if content.is_none() {
        println!("{}", "No input text, using the fallback report".yellow());
    }

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Generating report...");
    let report = portrait.generate_or_fallback(content.as_deref(), &profile)?;
    let path = report.save(output)?;
    pb.finish_and_clear();

    println!("{} {}", "Saved to".green(), path.display());
    println!("  {} {} pages", "├─".dimmed(), report.page_count);
    println!("  {} {} bytes", "├─".dimmed(), report.size);
    let body = if report.single_block {
        "single block".yellow()
    } else {
        "structured".green()
    };
    println!("  {} {}", "└─".dimmed(), body);

    Ok(())
}

fn cmd_sections(input: &Path, json: bool, compact: bool, segment: &SegmentArgs) -> CliResult {
    let text = read_input(input)?;
    let seg = portrait::analyze(&text, &segment.options())?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", portrait::render::to_json(&seg, format)?);
        return Ok(());
    }

    println!("{}", "Segmentation".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {:?}", "Strategy".bold(), seg.strategy);
    println!("{}: {}", "Detected".bold(), seg.detected.len());
    println!("{}: {:.1}%", "Coverage".bold(), seg.coverage * 100.0);
    let verdict = if seg.body.is_single_block() {
        "single block".yellow()
    } else {
        "structured".green()
    };
    println!("{}: {}", "Body".bold(), verdict);

    println!();
    println!("{}", "Detected sections".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for section in &seg.detected {
        println!("{} ({} chars)", section.title, section.content_len());
    }

    if let Some(sections) = seg.body.sections() {
        println!();
        println!("{}", "Report sections".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for ((i, section), source) in sections.iter().enumerate().zip(&seg.sources) {
            let from = match source.detected_index() {
                Some(d) => format!("<- {}", seg.detected[d].title),
                None => "placeholder".to_string(),
            };
            println!("{}. {} {}", i + 1, section.title, from.dimmed());
        }
    }

    Ok(())
}

fn cmd_layout(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    profile_args: &ProfileArgs,
    company: &CompanyArgs,
    layout: &LayoutArgs,
    segment: &SegmentArgs,
) -> CliResult {
    let text = read_input(input)?;
    let result = build_portrait(Some(profile_args), company)?
        .with_layout_options(layout.options())
        .with_segment_options(segment.options())
        .layout(&text, &profile_args.profile())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = result.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_preview(input: &Path, profile_args: &ProfileArgs, company: &CompanyArgs) -> CliResult {
    let text = read_input(input)?;
    let result = build_portrait(Some(profile_args), company)?.layout(&text, &profile_args.profile())?;
    println!("{}", result.to_text());
    Ok(())
}

fn cmd_batch(input: &Path, output: &Path, company: &CompanyArgs, layout: &LayoutArgs) -> CliResult {
    let requests: Vec<ReportRequest> = serde_json::from_str(&fs::read_to_string(input)?)?;
    let portrait = build_portrait(None, company)?.with_layout_options(layout.options());

    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Rendering {} reports...", requests.len()));
    let results = portrait.generate_batch(&requests);
    spinner.finish_and_clear();

    let pb = ProgressBar::new(results.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut failures = 0;
    for (request, result) in requests.iter().zip(results) {
        pb.set_message(request.profile.name.clone());
        match result.and_then(|report| report.save(output)) {
            Ok(_) => {}
            Err(e) => {
                failures += 1;
                pb.println(format!("{} {}: {}", "Failed".red(), request.profile.name, e));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!(
        "\n{} {} saved, {} failed",
        "Batch complete:".green().bold(),
        requests.len() - failures,
        failures
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "portrait".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Predictive portrait report generator");
    println!();
    println!("License: MIT");
}
