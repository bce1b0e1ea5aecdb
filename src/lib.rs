//! # portrait
//!
//! Turns free-form, AI-written report text into a structured, paginated
//! "predictive portrait" document.
//!
//! The text is normalized, split into sections by a cascade of heading
//! heuristics, reconciled with a fixed seven-section outline and laid out
//! onto pages. When segmentation looks unreliable the whole text is laid
//! out as one block instead, so no content is ever dropped.
//!
//! ## Quick Start
//!
//! ```no_run
//! use portrait::{generate_report, SubjectProfile};
//!
//! fn main() -> portrait::Result<()> {
//!     let profile = SubjectProfile::new(
//!         "Jean Dupont",
//!         "jean@example.com",
//!         "Finance",
//!         "Directeur financier",
//!         "Devenir CFO",
//!     );
//!     let text = std::fs::read_to_string("report.md")?;
//!
//!     let report = generate_report(&text, &profile)?;
//!     report.save("out")?;
//!     println!("{} ({} pages)", report.filename, report.page_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Tiered segmentation**: markdown, numbered and upper-case headings,
//!   then a forced split into equal slices
//! - **Quality gate**: falls back to single-block layout below 80% coverage
//! - **Pagination**: cover, contents with real page numbers, closing letter
//!   and page footers
//! - **Outputs**: PDF, JSON and a plain-text preview
//! - **Batch generation**: independent reports rendered in parallel with Rayon

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod templates;

pub use error::{Error, Result};
pub use layout::{
    HelveticaMetrics, LaidOutDocument, LayoutEngine, LayoutOptions, PageSpec, SectionBreak,
    TextMeasure, Typography,
};
pub use model::{
    CompanyInfo, GeneratedReport, ReportContext, ReportSection, SubjectProfile,
    CANONICAL_SECTIONS,
};
pub use parser::{analyze, ReportBody, SegmentOptions, Segmentation, SplitStrategy};
pub use render::JsonFormat;

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Generate a PDF report with default options.
///
/// Fails with [`Error::MissingContent`] when `content` is blank.
pub fn generate_report(content: &str, profile: &SubjectProfile) -> Result<GeneratedReport> {
    Portrait::new().generate(content, profile)
}

/// Generate a PDF report from the static fallback body.
pub fn generate_fallback_report(profile: &SubjectProfile) -> Result<GeneratedReport> {
    Portrait::new().generate_or_fallback(None, profile)
}

/// One entry of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Subject of the report
    pub profile: SubjectProfile,

    /// AI-written body; the fallback body is used when absent or blank
    #[serde(default)]
    pub content: Option<String>,
}

impl ReportRequest {
    /// Create a request.
    pub fn new(profile: SubjectProfile, content: Option<String>) -> Self {
        Self { profile, content }
    }
}

/// Builder-style entry point for report generation.
///
/// # Example
///
/// ```no_run
/// use portrait::{Portrait, SectionBreak, LayoutOptions, SubjectProfile};
///
/// let profile = SubjectProfile::new("Ana", "ana@example.com", "Retail", "Gérante", "Ouvrir une boutique");
/// let result = Portrait::new()
///     .with_layout_options(LayoutOptions::default().with_section_break(SectionBreak::Continuous))
///     .layout("## RÉSUMÉ EXÉCUTIF\n...", &profile)
///     .unwrap();
/// println!("{}", result.to_text());
/// ```
#[derive(Clone)]
pub struct Portrait {
    segment_options: SegmentOptions,
    layout_options: LayoutOptions,
    company: CompanyInfo,
    generated_at: Option<DateTime<Utc>>,
    measure: Arc<dyn TextMeasure>,
}

impl Portrait {
    /// Create a generator with default options.
    pub fn new() -> Self {
        Self {
            segment_options: SegmentOptions::default(),
            layout_options: LayoutOptions::default(),
            company: CompanyInfo::default(),
            generated_at: None,
            measure: Arc::new(HelveticaMetrics),
        }
    }

    /// Set segmentation options.
    pub fn with_segment_options(mut self, options: SegmentOptions) -> Self {
        self.segment_options = options;
        self
    }

    /// Set layout options.
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.layout_options = options;
        self
    }

    /// Set company branding.
    pub fn with_company(mut self, company: CompanyInfo) -> Self {
        self.company = company;
        self
    }

    /// Stamp every report with a fixed time instead of the current one.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    /// Use another text measurement.
    pub fn with_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.measure = Arc::new(measure);
        self
    }

    /// Segmentation options in use.
    pub fn segment_options(&self) -> &SegmentOptions {
        &self.segment_options
    }

    /// Layout options in use.
    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout_options
    }

    fn context(&self, profile: &SubjectProfile) -> ReportContext {
        let ctx = ReportContext::new(profile.clone(), self.company.clone());
        match self.generated_at {
            Some(at) => ctx.with_generated_at(at),
            None => ctx,
        }
    }

    /// Normalize, segment and map content without laying it out.
    pub fn analyze(&self, content: &str) -> Result<Segmentation> {
        parser::analyze(content, &self.segment_options)
    }

    /// Analyse and lay out content for one subject.
    pub fn layout(&self, content: &str, profile: &SubjectProfile) -> Result<PortraitResult> {
        profile.validate()?;
        let segmentation = self.analyze(content)?;
        let context = self.context(profile);
        let document = LayoutEngine::new(&self.layout_options, self.measure.as_ref(), &context)
            .layout(&segmentation.body)?;

        Ok(PortraitResult {
            segmentation,
            document,
            context,
        })
    }

    /// Produce a finished PDF report.
    pub fn generate(&self, content: &str, profile: &SubjectProfile) -> Result<GeneratedReport> {
        self.layout(content, profile)?.into_report()
    }

    /// Produce a PDF report, substituting the fallback body when `content`
    /// is absent or blank.
    pub fn generate_or_fallback(
        &self,
        content: Option<&str>,
        profile: &SubjectProfile,
    ) -> Result<GeneratedReport> {
        match content {
            Some(text) if !parser::normalize(text).is_empty() => self.generate(text, profile),
            _ => {
                profile.validate()?;
                log::warn!(
                    "No report content for {}; using the fallback report",
                    profile.name
                );
                let date = self.context(profile).display_date();
                let text = templates::fallback_content(profile, &self.company, &date);
                self.generate(&text, profile)
            }
        }
    }

    /// Generate independent reports in parallel.
    ///
    /// Results come back in request order; one failure does not affect
    /// the others. Filenames within a batch are unique: a report whose
    /// name is already taken has its timestamp moved forward a millisecond
    /// at a time.
    pub fn generate_batch(&self, requests: &[ReportRequest]) -> Vec<Result<GeneratedReport>> {
        log::debug!("Generating {} reports", requests.len());
        let mut results: Vec<Result<GeneratedReport>> = requests
            .par_iter()
            .map(|req| self.generate_or_fallback(req.content.as_deref(), &req.profile))
            .collect();

        let mut taken = HashSet::new();
        for (req, result) in requests.iter().zip(results.iter_mut()) {
            if let Ok(report) = result {
                while !taken.insert(report.filename.clone()) {
                    report.created_at += Duration::milliseconds(1);
                    report.filename =
                        model::report_filename(&req.profile.name, report.created_at, "pdf");
                }
            }
        }
        results
    }
}

impl Default for Portrait {
    fn default() -> Self {
        Self::new()
    }
}

/// An analysed and laid-out report.
#[derive(Debug, Clone)]
pub struct PortraitResult {
    /// Analysis of the content
    pub segmentation: Segmentation,
    /// Paginated document
    pub document: LaidOutDocument,
    /// Subject, branding and timestamp
    pub context: ReportContext,
}

impl PortraitResult {
    /// Render to PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        render::to_pdf(&self.document)
    }

    /// Serialize the laid-out document.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Plain-text preview.
    pub fn to_text(&self) -> String {
        render::to_text(&self.context, &self.segmentation.body)
    }

    /// Whether the body was laid out as a single block.
    pub fn is_single_block(&self) -> bool {
        self.segmentation.body.is_single_block()
    }

    /// Filename for the PDF.
    pub fn filename(&self) -> String {
        model::report_filename(&self.context.profile.name, self.context.generated_at, "pdf")
    }

    /// Render to PDF and package with its metadata.
    pub fn into_report(self) -> Result<GeneratedReport> {
        let data = self.to_pdf()?;
        Ok(GeneratedReport::new(
            self.filename(),
            data,
            self.document.page_count() as u32,
            self.is_single_block(),
            self.context.generated_at,
        ))
    }
}
