//! Section segmentation of free-form report text.
//!
//! Three structural heuristics are tried in a fixed order; each one is a
//! standalone function returning `Some(parts)` only when it finds more than
//! one part. When none applies, the text is sliced mechanically into one
//! chunk per canonical section.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::mapper::normalize_title;
use super::SegmentOptions;
use crate::model::{ReportSection, CANONICAL_SECTIONS, EXECUTIVE_SUMMARY};

/// Heuristic that produced a segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitStrategy {
    /// `## Heading` lines
    MarkdownHeadings,
    /// `1. Heading` lines
    NumberedHeadings,
    /// `SHOUTED HEADING` lines
    UppercaseHeadings,
    /// Equal-length slices, one per canonical section
    Forced,
}

/// A structural split tier.
pub type SplitTier = fn(&str) -> Option<Vec<&str>>;

/// Tiers in the order they are tried.
pub const SPLIT_TIERS: [(SplitStrategy, SplitTier); 3] = [
    (SplitStrategy::MarkdownHeadings, split_markdown_headings),
    (SplitStrategy::NumberedHeadings, split_numbered_headings),
    (SplitStrategy::UppercaseHeadings, split_uppercase_headings),
];

fn markdown_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^##\s+").expect("markdown heading pattern"))
}

fn numbered_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s+(\p{Lu}.*)$").expect("numbered heading pattern"))
}

fn uppercase_heading() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\p{Lu} ]{10,50}$").expect("uppercase heading pattern"))
}

fn document_title() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#\s+\S").expect("document title pattern"))
}

fn is_uppercase_heading(line: &str) -> bool {
    uppercase_heading().is_match(line) && line.chars().any(char::is_alphabetic)
}

/// Split `text` before every line for which `is_heading(index, lines)` holds.
///
/// Blank parts are dropped.
fn split_before<F>(text: &str, is_heading: F) -> Vec<&str>
where
    F: Fn(usize, &[&str]) -> bool,
{
    let raw: Vec<&str> = text.split_inclusive('\n').collect();
    let bare: Vec<&str> = raw
        .iter()
        .map(|line| line.trim_end_matches(&['\n', '\r'][..]))
        .collect();

    let mut parts = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    for (i, line) in raw.iter().enumerate() {
        if offset > 0 && is_heading(i, &bare) {
            parts.push(&text[start..offset]);
            start = offset;
        }
        offset += line.len();
    }
    parts.push(&text[start..]);

    parts.retain(|part| !part.trim().is_empty());
    parts
}

fn more_than_one(parts: Vec<&str>) -> Option<Vec<&str>> {
    if parts.len() > 1 {
        Some(parts)
    } else {
        None
    }
}

/// Split before every `## ` subheading.
pub fn split_markdown_headings(text: &str) -> Option<Vec<&str>> {
    more_than_one(split_before(text, |i, lines| {
        markdown_heading().is_match(lines[i])
    }))
}

/// Split before every `<n>. Uppercase` heading.
pub fn split_numbered_headings(text: &str) -> Option<Vec<&str>> {
    more_than_one(split_before(text, |i, lines| {
        numbered_heading().is_match(lines[i])
    }))
}

/// Split before every all-caps line of 10-50 characters followed by content.
pub fn split_uppercase_headings(text: &str) -> Option<Vec<&str>> {
    more_than_one(split_before(text, |i, lines| {
        is_uppercase_heading(lines[i]) && lines[i + 1..].iter().any(|l| !l.trim().is_empty())
    }))
}

/// Slice `text` into one equal-length chunk (by characters) per title.
///
/// Chunks are not trimmed, so their contents add up to the whole text.
pub fn forced_structure(text: &str, titles: &[&str]) -> Vec<ReportSection> {
    let chars: Vec<char> = text.chars().collect();
    let count = titles.len().max(1);
    let chunk_len = (chars.len() + count - 1) / count;

    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let start = (i * chunk_len).min(chars.len());
            let end = (start + chunk_len).min(chars.len());
            let chunk: String = chars[start..end].iter().collect();
            if chunk.trim().is_empty() {
                ReportSection::new(
                    *title,
                    format!("Contenu de la section \"{}\" à développer.", title),
                )
            } else {
                ReportSection::new(*title, chunk)
            }
        })
        .collect()
}

/// Extract a heading from the first line of a part.
///
/// Returns the raw title and the remaining body, or `None` when the part
/// carries no recognisable heading.
pub fn detect_title(part: &str) -> Option<(String, String)> {
    let part = part.trim();
    let (first, rest) = match part.split_once('\n') {
        Some((first, rest)) => (first.trim(), rest.trim()),
        None => (part, ""),
    };

    let title = if first.starts_with("##") {
        first.trim_start_matches('#').trim().to_string()
    } else if let Some(caps) = numbered_heading().captures(first) {
        caps[1].trim().to_string()
    } else if is_uppercase_heading(first) && !rest.is_empty() {
        first.to_string()
    } else {
        return None;
    };

    if title.is_empty() {
        return None;
    }
    Some((title, rest.to_string()))
}

/// Drop a leading single-`#` document title line.
fn strip_document_title(part: &str) -> &str {
    let part = part.trim();
    match part.split_once('\n') {
        Some((first, rest)) if document_title().is_match(first) => rest.trim(),
        None if document_title().is_match(part) => "",
        _ => part,
    }
}

/// Section segmenter.
pub struct Segmenter {
    options: SegmentOptions,
}

impl Segmenter {
    /// Create a segmenter with the given options.
    pub fn new(options: SegmentOptions) -> Self {
        Self { options }
    }

    /// Split text into titled sections.
    pub fn segment(&self, text: &str) -> Vec<ReportSection> {
        self.segment_with_strategy(text).1
    }

    /// Split text into titled sections, reporting which heuristic was used.
    pub fn segment_with_strategy(&self, text: &str) -> (SplitStrategy, Vec<ReportSection>) {
        for (strategy, tier) in SPLIT_TIERS {
            if let Some(parts) = tier(text) {
                let sections = self.assemble(&parts);
                log::debug!(
                    "Segmented with {:?}: {} parts, {} sections",
                    strategy,
                    parts.len(),
                    sections.len()
                );
                return (strategy, sections);
            }
        }

        log::debug!("No heading structure found, forcing canonical slices");
        (
            SplitStrategy::Forced,
            forced_structure(text, &CANONICAL_SECTIONS),
        )
    }

    fn assemble(&self, parts: &[&str]) -> Vec<ReportSection> {
        let mut sections: Vec<ReportSection> = Vec::new();

        for (i, part) in parts.iter().enumerate() {
            let part = if i == 0 {
                strip_document_title(part)
            } else {
                part.trim()
            };
            if part.is_empty() {
                continue;
            }

            let continuation = match detect_title(part) {
                Some((title, body)) if body.chars().count() >= self.options.min_section_chars => {
                    push_or_merge(&mut sections, normalize_title(&title), &body);
                    continue;
                }
                Some((title, body)) if body.is_empty() => title,
                Some((title, body)) => format!("{}\n{}", title, body),
                None => part.to_string(),
            };

            match sections.last_mut() {
                Some(previous) => previous.append(&continuation),
                None => sections.push(ReportSection::new(EXECUTIVE_SUMMARY, continuation)),
            }
        }

        sections
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmentOptions::default())
    }
}

fn push_or_merge(sections: &mut Vec<ReportSection>, title: String, body: &str) {
    match sections.iter_mut().find(|s| s.title == title) {
        Some(existing) => existing.append(body),
        None => sections.push(ReportSection::new(title, body.trim())),
    }
}
