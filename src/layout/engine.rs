//! Paginated layout of a report.
//!
//! Content flows down a [`LayoutCursor`]; a unit that does not fit below
//! the cursor moves to a fresh page of the same kind. Pages are finished
//! in two passes: the contents page is filled once every section's start
//! page is known, and footers are drawn once the page count is known.

use super::cursor::LayoutCursor;
use super::measure::{FontWeight, TextMeasure, PT_TO_MM};
use super::ops::{
    DrawOp, LaidOutDocument, LaidOutPage, PageKind, RectOp, Rgb, RuleOp, TextOp, TextStyle,
    TocEntry,
};
use super::options::{LayoutOptions, PageSpec, SectionBreak};
use crate::error::{Error, Result};
use crate::model::{ReportContext, ReportSection, FULL_CONTENT_TITLE};
use crate::parser::{split_paragraphs, ReportBody};
use crate::templates::closing_letter;

/// Gap between the last title line and the separator rule.
const RULE_OFFSET: f32 = 2.0;
const RULE_THICKNESS: f32 = 0.5;
const FOOTER_RULE_THICKNESS: f32 = 0.3;

const COVER_SUBTITLE: &str = "Analyse Personnalisée & Prédictions 2025-2027";

const CONTENTS_TITLE: &str = "SOMMAIRE";
const CONTENTS_TITLE_SIZE: f32 = 24.0;
const CONTENTS_ENTRY_SIZE: f32 = 12.0;
/// Baseline of the contents title below the top margin.
const CONTENTS_TITLE_OFFSET: f32 = 10.0;
/// Baseline of the first entry below the top margin.
const CONTENTS_FIRST_ENTRY_OFFSET: f32 = 50.0;
const CONTENTS_ENTRY_STEP: f32 = 20.0;
/// Clearance around dot leaders.
const LEADER_GAP: f32 = 2.0;

const CLOSING_TITLE: &str = "CONCLUSION ET PROCHAINES ÉTAPES";
const CLOSING_TITLE_SIZE: f32 = 20.0;
const CLOSING_TITLE_SPACING: f32 = 30.0;

/// Pages under construction and the cursor flowing over them.
struct PageWriter {
    spec: PageSpec,
    cursor: LayoutCursor,
    pages: Vec<LaidOutPage>,
    kind: PageKind,
    breaks: usize,
}

impl PageWriter {
    fn new(spec: &PageSpec) -> Self {
        Self {
            spec: spec.clone(),
            cursor: LayoutCursor::new(spec.margin_top, spec.bottom_limit()),
            pages: Vec::new(),
            kind: PageKind::Body,
            breaks: 0,
        }
    }

    fn start_page(&mut self, kind: PageKind) {
        if !self.pages.is_empty() {
            self.cursor.next_page();
        }
        self.kind = kind;
        self.pages.push(LaidOutPage {
            number: self.pages.len() + 1,
            kind,
            ops: Vec::new(),
        });
    }

    /// One-based number of the current page.
    fn page_number(&self) -> usize {
        self.pages.len()
    }

    fn on_body_page(&self) -> bool {
        !self.pages.is_empty() && self.kind == PageKind::Body
    }

    /// Make room for a unit of `height`, breaking the page if needed.
    fn reserve(&mut self, height: f32) -> Result<()> {
        let available = self.spec.printable_height();
        if height > available {
            return Err(Error::LayoutOverflow { height, available });
        }
        if self.pages.is_empty() {
            self.start_page(self.kind);
        } else if !self.cursor.fits(height) {
            self.breaks += 1;
            self.start_page(self.kind);
        }
        Ok(())
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    /// Place one line of text and return the page it landed on.
    fn line(&mut self, text: String, x: f32, style: TextStyle, line_height: f32) -> Result<usize> {
        self.reserve(line_height)?;
        let ascent = (style.font_size * PT_TO_MM).min(line_height);
        let y = self.cursor.y + ascent;
        self.push(DrawOp::Text(TextOp { text, x, y, style }));
        self.cursor.advance(line_height, 0.0);
        Ok(self.page_number())
    }

    /// Horizontal separator across the content width.
    fn rule(&mut self) -> Result<()> {
        self.reserve(RULE_OFFSET)?;
        let y = self.cursor.y + RULE_OFFSET;
        let op = RuleOp {
            x1: self.spec.margin_left,
            y1: y,
            x2: self.spec.width - self.spec.margin_right,
            y2: y,
            thickness: RULE_THICKNESS,
            color: Rgb::RULE_GREY,
        };
        self.push(DrawOp::Rule(op));
        self.cursor.advance(RULE_OFFSET, 0.0);
        Ok(())
    }
}

fn text_op(text: impl Into<String>, x: f32, y: f32, style: TextStyle) -> DrawOp {
    DrawOp::Text(TextOp {
        text: text.into(),
        x,
        y,
        style,
    })
}

/// Lays out a report body into pages of draw operations.
pub struct LayoutEngine<'a> {
    options: &'a LayoutOptions,
    measure: &'a dyn TextMeasure,
    context: &'a ReportContext,
}

impl<'a> LayoutEngine<'a> {
    /// Create an engine for one report.
    pub fn new(
        options: &'a LayoutOptions,
        measure: &'a dyn TextMeasure,
        context: &'a ReportContext,
    ) -> Self {
        Self {
            options,
            measure,
            context,
        }
    }

    /// Lay out canonical sections.
    pub fn layout_sections(&self, sections: &[ReportSection]) -> Result<LaidOutDocument> {
        self.layout(&ReportBody::Structured {
            sections: sections.to_vec(),
        })
    }

    /// Lay out text as a single untitled-section block.
    pub fn layout_text(&self, text: &str) -> Result<LaidOutDocument> {
        self.layout(&ReportBody::SingleBlock {
            text: text.to_string(),
        })
    }

    /// Lay out a report body with the configured front and back matter.
    pub fn layout(&self, body: &ReportBody) -> Result<LaidOutDocument> {
        let spec = &self.options.page;
        spec.validate()?;
        let mut writer = PageWriter::new(spec);

        if self.options.cover_page {
            self.cover(&mut writer);
        }

        let contents_index = if self.options.table_of_contents {
            writer.start_page(PageKind::Contents);
            Some(writer.pages.len() - 1)
        } else {
            None
        };

        let mut contents = Vec::new();
        match body {
            ReportBody::Structured { sections } => {
                for (i, section) in sections.iter().enumerate() {
                    let title = format!("{}. {}", i + 1, section.title);
                    let page = self.section(&mut writer, &title, &section.content)?;
                    contents.push(TocEntry { title, page });
                }
            }
            ReportBody::SingleBlock { text } => {
                let page = self.section(&mut writer, FULL_CONTENT_TITLE, text)?;
                contents.push(TocEntry {
                    title: FULL_CONTENT_TITLE.to_string(),
                    page,
                });
            }
        }

        if self.options.closing_page {
            self.closing(&mut writer)?;
        }

        let breaks = writer.breaks;
        let mut pages = writer.pages;
        if let Some(page) = contents_index.and_then(|i| pages.get_mut(i)) {
            self.contents_entries(page, &contents);
        }
        if self.options.footers {
            self.footers(&mut pages);
        }

        log::debug!(
            "Laid out {} pages ({} overflow breaks, {} sections)",
            pages.len(),
            breaks,
            contents.len()
        );

        Ok(LaidOutDocument {
            title: self.context.document_title(),
            width: spec.width,
            height: spec.height,
            pages,
            contents,
        })
    }

    fn centered(&self, text: impl Into<String>, y: f32, style: TextStyle) -> DrawOp {
        let text = text.into();
        let width = self.measure.text_width(&text, style.font_size, style.weight);
        let x = ((self.options.page.width - width) / 2.0).max(0.0);
        text_op(text, x, y, style)
    }

    fn right_aligned(&self, text: impl Into<String>, right: f32, y: f32, style: TextStyle) -> DrawOp {
        let text = text.into();
        let width = self.measure.text_width(&text, style.font_size, style.weight);
        text_op(text, right - width, y, style)
    }

    fn cover(&self, writer: &mut PageWriter) {
        writer.start_page(PageKind::Cover);
        let spec = &self.options.page;
        let profile = &self.context.profile;
        let company = &self.context.company;

        writer.push(DrawOp::Rect(RectOp {
            x: 0.0,
            y: 0.0,
            width: spec.width,
            height: spec.height,
            fill: Rgb::NAVY,
        }));

        let slate = |size| TextStyle::regular(size).with_color(Rgb::SLATE);
        let lines = [
            (
                company.product_name.to_uppercase(),
                80.0,
                TextStyle::bold(32.0).with_color(Rgb::WHITE),
            ),
            (
                COVER_SUBTITLE.to_string(),
                100.0,
                TextStyle::regular(18.0).with_color(Rgb::WHITE),
            ),
            (
                profile.name.to_uppercase(),
                140.0,
                TextStyle::bold(24.0).with_color(Rgb::GREEN),
            ),
            (
                format!("{} • {}", profile.position, profile.sector),
                160.0,
                slate(12.0),
            ),
            (
                format!("Généré le {}", self.context.display_date()),
                spec.height - 47.0,
                slate(10.0),
            ),
            (
                format!("© {} {} - {}", self.context.year(), company.name, company.tagline),
                spec.height - 27.0,
                slate(8.0),
            ),
            (
                format!("{} • {}", company.website, company.email),
                spec.height - 17.0,
                slate(8.0),
            ),
        ];
        for (text, y, style) in lines {
            writer.push(self.centered(text, y, style));
        }
    }

    /// Lay out a titled block and return the page its title starts on.
    fn section(&self, writer: &mut PageWriter, title: &str, content: &str) -> Result<usize> {
        let spec = &self.options.page;
        let typo = &self.options.typography;
        let title_lines = self.measure.wrap(
            title,
            spec.content_width(),
            typo.title_size,
            FontWeight::Bold,
        );

        match self.options.section_break {
            SectionBreak::FreshPage => writer.start_page(PageKind::Body),
            SectionBreak::Continuous if !writer.on_body_page() => {
                writer.start_page(PageKind::Body)
            }
            SectionBreak::Continuous => {
                if !writer.cursor.at_top() {
                    writer.cursor.skip(typo.section_spacing);
                }
                // Title, rule and the first body line stay together
                let keep = title_lines.len() as f32 * typo.title_line_height
                    + RULE_OFFSET
                    + typo.title_spacing
                    + typo.body_line_height;
                if !writer.cursor.at_top()
                    && !writer.cursor.fits(keep)
                    && keep <= spec.printable_height()
                {
                    writer.start_page(PageKind::Body);
                }
            }
        }

        let style = TextStyle::bold(typo.title_size).with_color(Rgb::TITLE_BLUE);
        let mut first_page = writer.page_number();
        for (i, line) in title_lines.into_iter().enumerate() {
            let page = writer.line(line, spec.margin_left, style, typo.title_line_height)?;
            if i == 0 {
                first_page = page;
            }
        }
        writer.rule()?;
        writer.cursor.skip(typo.title_spacing);

        self.paragraphs(writer, content)?;
        Ok(first_page)
    }

    fn paragraphs(&self, writer: &mut PageWriter, text: &str) -> Result<()> {
        let spec = &self.options.page;
        let typo = &self.options.typography;
        let style = TextStyle::regular(typo.body_size);

        for paragraph in split_paragraphs(text) {
            for source in paragraph.lines().filter(|l| !l.trim().is_empty()) {
                let lines =
                    self.measure
                        .wrap(source, spec.content_width(), typo.body_size, style.weight);
                for line in lines {
                    writer.line(line, spec.margin_left, style, typo.body_line_height)?;
                }
            }
            writer.cursor.skip(typo.paragraph_spacing);
        }
        Ok(())
    }

    fn closing(&self, writer: &mut PageWriter) -> Result<()> {
        let spec = &self.options.page;
        let typo = &self.options.typography;
        writer.start_page(PageKind::Closing);

        let title_style = TextStyle::bold(CLOSING_TITLE_SIZE).with_color(Rgb::TITLE_BLUE);
        let title_width = self
            .measure
            .text_width(CLOSING_TITLE, CLOSING_TITLE_SIZE, FontWeight::Bold);
        let x = ((spec.width - title_width) / 2.0).max(spec.margin_left);
        writer.line(CLOSING_TITLE.to_string(), x, title_style, typo.title_line_height)?;
        writer.cursor.skip(CLOSING_TITLE_SPACING);

        let style = TextStyle::regular(typo.body_size);
        for source in closing_letter(self.context).lines() {
            if source.trim().is_empty() {
                writer.cursor.skip(typo.body_line_height / 2.0);
                continue;
            }
            for line in self
                .measure
                .wrap(source, spec.content_width(), typo.body_size, style.weight)
            {
                writer.line(line, spec.margin_left, style, typo.body_line_height)?;
            }
        }
        Ok(())
    }

    fn contents_entries(&self, page: &mut LaidOutPage, entries: &[TocEntry]) {
        let spec = &self.options.page;
        let title_style = TextStyle::bold(CONTENTS_TITLE_SIZE).with_color(Rgb::TITLE_BLUE);
        page.ops.push(self.centered(
            CONTENTS_TITLE,
            spec.margin_top + CONTENTS_TITLE_OFFSET,
            title_style,
        ));

        let first = spec.margin_top + CONTENTS_FIRST_ENTRY_OFFSET;
        let step = match entries.len() {
            0 | 1 => CONTENTS_ENTRY_STEP,
            n => ((spec.bottom_limit() - first) / (n - 1) as f32).min(CONTENTS_ENTRY_STEP),
        };
        let bold = TextStyle::bold(CONTENTS_ENTRY_SIZE);
        let regular = TextStyle::regular(CONTENTS_ENTRY_SIZE);
        let right = spec.width - spec.margin_right;
        let dot_width = self
            .measure
            .text_width(".", CONTENTS_ENTRY_SIZE, FontWeight::Regular);

        for (i, entry) in entries.iter().enumerate() {
            let y = first + i as f32 * step;
            let number = entry.page.to_string();
            let title_width = self
                .measure
                .text_width(&entry.title, CONTENTS_ENTRY_SIZE, FontWeight::Bold);
            let number_width = self
                .measure
                .text_width(&number, CONTENTS_ENTRY_SIZE, FontWeight::Bold);

            page.ops.push(text_op(entry.title.clone(), spec.margin_left, y, bold));

            let leader_start = spec.margin_left + title_width + LEADER_GAP;
            let leader_end = right - number_width - LEADER_GAP;
            if dot_width > 0.0 && leader_end > leader_start {
                let dots = ((leader_end - leader_start) / dot_width).floor() as usize;
                if dots > 0 {
                    page.ops.push(text_op(".".repeat(dots), leader_start, y, regular));
                }
            }

            page.ops.push(self.right_aligned(number, right, y, bold));
        }
    }

    fn footers(&self, pages: &mut [LaidOutPage]) {
        let spec = &self.options.page;
        let style = TextStyle::regular(self.options.typography.footer_size)
            .with_color(Rgb::FOOTER_GREY);
        let company = &self.context.company;
        let left = format!(
            "{} - {} - {}",
            company.name, company.product_name, self.context.profile.name
        );
        let date = self.context.display_date();
        let rule_y = spec.height - spec.footer_rule_offset;
        let text_y = spec.height - spec.footer_text_offset;
        let right = spec.width - spec.margin_right;
        let total = pages.len();

        for page in pages.iter_mut().filter(|p| p.kind != PageKind::Cover) {
            page.ops.push(DrawOp::Rule(RuleOp {
                x1: spec.margin_left,
                y1: rule_y,
                x2: right,
                y2: rule_y,
                thickness: FOOTER_RULE_THICKNESS,
                color: Rgb::RULE_GREY,
            }));
            page.ops.push(text_op(left.clone(), spec.margin_left, text_y, style));
            page.ops.push(self.centered(date.clone(), text_y, style));
            page.ops.push(self.right_aligned(
                format!("Page {}/{}", page.number, total),
                right,
                text_y,
                style,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{HelveticaMetrics, Typography};
    use crate::model::{CompanyInfo, SubjectProfile, CANONICAL_SECTIONS};

    fn context() -> ReportContext {
        let profile = SubjectProfile::new(
            "Jean Dupont",
            "jean@example.com",
            "Santé",
            "Médecin",
            "Ouvrir une clinique",
        );
        ReportContext::new(profile, CompanyInfo::default())
    }

    fn sections(content: &str) -> Vec<ReportSection> {
        CANONICAL_SECTIONS
            .iter()
            .map(|t| ReportSection::new(*t, content))
            .collect()
    }

    fn layout(options: &LayoutOptions, body: &ReportBody) -> Result<LaidOutDocument> {
        let ctx = context();
        LayoutEngine::new(options, &HelveticaMetrics, &ctx).layout(body)
    }

    fn structured(content: &str) -> ReportBody {
        ReportBody::Structured {
            sections: sections(content),
        }
    }

    #[test]
    fn test_full_document_structure() {
        let doc = layout(&LayoutOptions::default(), &structured("Un paragraphe court.")).unwrap();

        assert_eq!(doc.page_count(), 10);
        assert_eq!(doc.pages[0].kind, PageKind::Cover);
        assert_eq!(doc.pages[1].kind, PageKind::Contents);
        assert_eq!(doc.pages_of(PageKind::Body).count(), 7);
        assert_eq!(doc.pages[9].kind, PageKind::Closing);

        let pages: Vec<usize> = doc.contents.iter().map(|e| e.page).collect();
        assert_eq!(pages, vec![3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(doc.contents[0].title, "1. RÉSUMÉ EXÉCUTIF");
        assert_eq!(doc.title, "Portrait Prédictif IA - Jean Dupont");
    }

    #[test]
    fn test_contents_page_lists_sections() {
        let doc = layout(&LayoutOptions::default(), &structured("Texte.")).unwrap();
        let texts: Vec<&str> = doc.pages[1].texts().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"SOMMAIRE"));
        assert!(texts.contains(&"4. RECOMMANDATIONS STRATÉGIQUES"));
        assert!(texts.contains(&"6"));
        assert!(texts.iter().any(|t| t.starts_with("....")));
    }

    #[test]
    fn test_cover_page() {
        let doc = layout(&LayoutOptions::default(), &structured("Texte.")).unwrap();
        let cover = &doc.pages[0];
        assert!(matches!(cover.ops[0], DrawOp::Rect(_)));
        let texts: Vec<&str> = cover.texts().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"PORTRAIT PRÉDICTIF IA"));
        assert!(texts.contains(&"JEAN DUPONT"));
        assert!(texts.contains(&"Médecin • Santé"));
    }

    #[test]
    fn test_footers_skip_cover() {
        let doc = layout(&LayoutOptions::default(), &structured("Texte.")).unwrap();
        let footer_count = doc
            .pages
            .iter()
            .filter(|p| p.texts().any(|t| t.text.starts_with("Page ")))
            .count();
        assert_eq!(footer_count, 9);
        assert!(!doc.pages[0].texts().any(|t| t.text.starts_with("Page ")));
        assert!(doc.pages[9].texts().any(|t| t.text == "Page 10/10"));
    }

    #[test]
    fn test_every_section_starts_fresh_page() {
        let options = LayoutOptions::default().content_only();
        let doc = layout(&options, &structured("Court.")).unwrap();
        assert_eq!(doc.page_count(), 7);
        for (page, title) in doc.pages.iter().zip(CANONICAL_SECTIONS) {
            let first = page.texts().next().unwrap();
            assert!(first.text.ends_with(title));
            assert_eq!(first.style.color, Rgb::TITLE_BLUE);
        }
    }

    #[test]
    fn test_continuous_sections_share_pages() {
        let options = LayoutOptions::default()
            .content_only()
            .with_section_break(SectionBreak::Continuous);
        let doc = layout(&options, &structured("Un paragraphe assez court.")).unwrap();
        assert!(doc.page_count() >= 2);
        assert!(doc.page_count() < 7);
        assert_eq!(doc.contents.len(), 7);
    }

    #[test]
    fn test_long_section_paginates_within_bounds() {
        let long = "Votre trajectoire professionnelle montre une progression constante. ".repeat(120);
        let options = LayoutOptions::default().content_only().with_footers(false);
        let doc = layout(&options, &structured(&long)).unwrap();

        assert!(doc.contents[1].page - doc.contents[0].page >= 2);
        let limit = options.page.bottom_limit();
        for page in &doc.pages {
            for text in page.texts() {
                assert!(text.y <= limit, "baseline {} below {}", text.y, limit);
                assert!(text.y >= options.page.margin_top);
            }
        }
    }

    #[test]
    fn test_single_block() {
        let options = LayoutOptions::default().with_closing_page(false);
        let body = ReportBody::SingleBlock {
            text: "Un texte sans aucune structure détectable.".to_string(),
        };
        let doc = layout(&options, &body).unwrap();
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.contents.len(), 1);
        assert_eq!(doc.contents[0].title, FULL_CONTENT_TITLE);
        assert_eq!(doc.contents[0].page, 3);
        assert!(doc.plain_text().contains("Un texte sans aucune structure détectable."));
    }

    #[test]
    fn test_closing_page_has_letter() {
        let doc = layout(&LayoutOptions::default(), &structured("Texte.")).unwrap();
        let closing = doc.pages_of(PageKind::Closing).next().unwrap();
        let texts: Vec<&str> = closing.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts[0], CLOSING_TITLE);
        assert!(texts.contains(&"Cher(e) Jean Dupont,"));
    }

    #[test]
    fn test_unit_taller_than_page_is_fatal() {
        let options = LayoutOptions::default().content_only().with_typography(Typography {
            body_line_height: 300.0,
            ..Typography::default()
        });
        let err = layout(&options, &structured("Texte.")).unwrap_err();
        assert!(matches!(err, Error::LayoutOverflow { .. }));
    }

    #[test]
    fn test_invalid_geometry_is_rejected() {
        let options = LayoutOptions::default().with_page(PageSpec {
            margin_top: 250.0,
            ..PageSpec::a4()
        });
        assert!(matches!(
            layout(&options, &structured("Texte.")),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_list_lines_stay_separate() {
        let options = LayoutOptions::default().content_only();
        let content = "Forces :\n- Expertise\n- Vision";
        let doc = layout(&options, &structured(content)).unwrap();
        let texts: Vec<&str> = doc.pages[0].texts().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"- Expertise"));
        assert!(texts.contains(&"- Vision"));
    }
}
