//! Report text analysis: normalization, segmentation, canonical mapping
//! and paragraph splitting.
//!
//! [`analyze`] runs the whole chain and applies the quality gate that
//! decides between a structured body and a single undivided block.

mod mapper;
mod normalize;
mod options;
mod paragraphs;
mod segmenter;

pub use mapper::{map_to_canonical, map_with_sources, normalize_title, SectionSource, TITLE_SYNONYMS};
pub use normalize::normalize;
pub use options::SegmentOptions;
pub use paragraphs::{split_blank_lines, split_chunks, split_lines, split_paragraphs, split_sentences};
pub use segmenter::{
    detect_title, forced_structure, split_markdown_headings, split_numbered_headings,
    split_uppercase_headings, Segmenter, SplitStrategy, SplitTier, SPLIT_TIERS,
};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{ReportSection, CANONICAL_SECTIONS};

/// Split text into titled sections with default options.
pub fn segment(text: &str) -> Vec<ReportSection> {
    Segmenter::default().segment(text)
}

/// Ratio of section content length to original length, in characters.
///
/// Capped at 1.0: filler synthesized for slices of very short texts can
/// outweigh the source itself.
pub fn coverage(sections: &[ReportSection], original: &str) -> f32 {
    let original_len = original.chars().count();
    if original_len == 0 {
        return 0.0;
    }
    let kept: usize = sections.iter().map(ReportSection::content_len).sum();
    (kept as f32 / original_len as f32).min(1.0)
}

/// The body a report is laid out from.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    /// One section per canonical title, in canonical order
    Structured {
        /// Canonical sections
        sections: Vec<ReportSection>,
    },
    /// Segmentation was rejected; the whole text as one block
    SingleBlock {
        /// Normalized text
        text: String,
    },
}

impl ReportBody {
    /// Whether segmentation was rejected.
    pub fn is_single_block(&self) -> bool {
        matches!(self, ReportBody::SingleBlock { .. })
    }

    /// Structured sections, if any.
    pub fn sections(&self) -> Option<&[ReportSection]> {
        match self {
            ReportBody::Structured { sections } => Some(sections),
            ReportBody::SingleBlock { .. } => None,
        }
    }
}

/// Outcome of analysing one piece of report text.
#[derive(Debug, Clone, Serialize)]
pub struct Segmentation {
    /// Normalized source text
    pub normalized: String,

    /// Heuristic that split the text
    pub strategy: SplitStrategy,

    /// Sections as detected, before mapping
    pub detected: Vec<ReportSection>,

    /// Where each canonical section's content came from
    pub sources: Vec<SectionSource>,

    /// Share of the normalized text that reached the mapped sections
    pub coverage: f32,

    /// Body to lay out
    pub body: ReportBody,
}

/// Normalize, segment and map raw report text, then apply the quality gate.
///
/// Fails only when the text is blank after normalization.
pub fn analyze(raw: &str, options: &SegmentOptions) -> Result<Segmentation> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(Error::MissingContent);
    }

    let (strategy, detected) = Segmenter::new(options.clone()).segment_with_strategy(&normalized);
    let mapped = map_with_sources(&detected, &CANONICAL_SECTIONS);
    let sources: Vec<SectionSource> = mapped.iter().map(|(_, source)| *source).collect();

    // Each detected section counts once, however many slots it fed
    let mut used: Vec<usize> = sources.iter().filter_map(SectionSource::detected_index).collect();
    used.sort_unstable();
    used.dedup();
    let retained: Vec<ReportSection> = used.iter().map(|&i| detected[i].clone()).collect();
    let coverage = coverage(&retained, &normalized);

    let accepted = detected.len() >= options.min_sections && coverage >= options.coverage_threshold;
    log::debug!(
        "{:?}: {} detected sections, coverage {:.2}",
        strategy,
        detected.len(),
        coverage
    );

    let body = if accepted {
        ReportBody::Structured {
            sections: mapped.into_iter().map(|(section, _)| section).collect(),
        }
    } else {
        log::warn!(
            "Segmentation rejected ({} sections, coverage {:.2}); rendering a single block",
            detected.len(),
            coverage
        );
        ReportBody::SingleBlock {
            text: normalized.clone(),
        }
    };

    Ok(Segmentation {
        normalized,
        strategy,
        detected,
        sources,
        coverage,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured_text() -> String {
        CANONICAL_SECTIONS
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let body = format!("Contenu détaillé de la section numéro {} avec assez de texte. ", i + 1);
                format!("## {}. {}\n{}\n", i + 1, title, body.repeat(4).trim())
            })
            .collect()
    }

    #[test]
    fn test_analyze_structured() {
        let seg = analyze(&structured_text(), &SegmentOptions::default()).unwrap();
        assert_eq!(seg.strategy, SplitStrategy::MarkdownHeadings);
        assert_eq!(seg.detected.len(), 7);
        assert!(seg.coverage >= 0.8);
        let sections = seg.body.sections().unwrap();
        assert_eq!(sections.len(), 7);
        assert!(sections[3].content.contains("numéro 4"));
    }

    #[test]
    fn test_analyze_blank_is_missing_content() {
        let err = analyze("  ** ``` **  ", &SegmentOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingContent));
    }

    #[test]
    fn test_unmapped_sections_fail_coverage() {
        let body = "Un développement suffisamment long pour compter dans la couverture.";
        let text = format!(
            "## Résumé exécutif\n{}\n## Perspectives futures\n{}\n## Annexes diverses\n{}\n## Glossaire\n{}",
            body, body, body, body
        );
        let seg = analyze(&text, &SegmentOptions::default()).unwrap();
        assert_eq!(seg.detected.len(), 4);
        assert!(seg.coverage < 0.8);
        assert!(seg.body.is_single_block());
    }

    #[test]
    fn test_single_section_fails_gate() {
        let text = "## Résumé exécutif\nUn résumé bien trop seul pour être accepté.\n## X\ncourt";
        let seg = analyze(text, &SegmentOptions::default()).unwrap();
        assert_eq!(seg.detected.len(), 1);
        assert!(seg.body.is_single_block());
    }

    #[test]
    fn test_coverage() {
        let sections = vec![ReportSection::new("A", "abcd"), ReportSection::new("B", "ef")];
        assert_eq!(coverage(&sections, "abcdefghij"), 0.6);
        assert_eq!(coverage(&sections, ""), 0.0);
        assert_eq!(coverage(&sections, "abc"), 1.0);
    }

    #[test]
    fn test_tiny_text_coverage_is_capped() {
        let seg = analyze("abc", &SegmentOptions::default()).unwrap();
        assert_eq!(seg.strategy, SplitStrategy::Forced);
        assert_eq!(seg.coverage, 1.0);
        let sections = seg.body.sections().unwrap();
        assert_eq!(sections.len(), 7);
        assert!(sections.iter().all(|s| !s.content.trim().is_empty()));
    }
}
