//! Reconciliation of detected sections with the canonical outline.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

use crate::model::ReportSection;

/// Near-equivalent headings collapsed onto their canonical form.
pub const TITLE_SYNONYMS: [(&str, &str); 13] = [
    ("RESUME EXECUTIF", "RÉSUMÉ EXÉCUTIF"),
    ("RÉSUMÉ EXECUTIF", "RÉSUMÉ EXÉCUTIF"),
    ("EXECUTIVE SUMMARY", "RÉSUMÉ EXÉCUTIF"),
    ("PROFIL ACTUEL", "ANALYSE PROFIL ACTUEL"),
    ("ANALYSE PROFIL", "ANALYSE PROFIL ACTUEL"),
    ("PREDICTIONS", "PRÉDICTIONS 2025-2027"),
    ("PRÉDICTIONS", "PRÉDICTIONS 2025-2027"),
    ("RECOMMANDATIONS", "RECOMMANDATIONS STRATÉGIQUES"),
    ("OPPORTUNITES", "OPPORTUNITÉS DE CROISSANCE"),
    ("OPPORTUNITÉS", "OPPORTUNITÉS DE CROISSANCE"),
    ("PLAN ACTION", "PLAN D'ACTION CONCRET"),
    ("PLAN D'ACTION", "PLAN D'ACTION CONCRET"),
    ("CONCLUSION", "CONCLUSION ET PROCHAINES ÉTAPES"),
];

/// Canonical words shorter than this never take part in keyword matching.
const MIN_KEYWORD_CHARS: usize = 3;

fn heading_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#{1,6}\s*").expect("heading prefix pattern"))
}

fn number_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("number prefix pattern"))
}

/// Normalize a heading for matching.
///
/// Strips markdown and numbering prefixes, upper-cases, composes accents
/// and applies the synonym table.
pub fn normalize_title(title: &str) -> String {
    let title = heading_prefix().replace(title.trim(), "");
    let title = number_prefix().replace(&title, "");
    let normalized: String = title.trim().to_uppercase().nfc().collect();

    TITLE_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(normalized)
}

/// Where a canonical section's content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum SectionSource {
    /// Detected section with the same normalized title
    Exact(usize),
    /// Detected section sharing a keyword with the canonical title
    Keyword(usize),
    /// No match; placeholder content synthesized
    Placeholder,
}

impl SectionSource {
    /// Index of the detected section used, if any.
    pub fn detected_index(&self) -> Option<usize> {
        match self {
            SectionSource::Exact(i) | SectionSource::Keyword(i) => Some(*i),
            SectionSource::Placeholder => None,
        }
    }
}

fn keywords(canonical: &str) -> Vec<String> {
    canonical
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_KEYWORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// Map detected sections onto the canonical outline, recording sources.
///
/// Exact matches are resolved first for every slot. Slots left over take
/// the first detected section whose title contains one of their keywords;
/// one detected section may feed several such slots.
pub fn map_with_sources(
    detected: &[ReportSection],
    canonical: &[&str],
) -> Vec<(ReportSection, SectionSource)> {
    let detected_titles: Vec<String> = detected.iter().map(|d| normalize_title(&d.title)).collect();
    let mut claimed = vec![false; detected.len()];

    let mut sources: Vec<Option<SectionSource>> = canonical
        .iter()
        .map(|title| {
            let wanted = normalize_title(title);
            let index = detected_titles
                .iter()
                .enumerate()
                .position(|(i, t)| !claimed[i] && *t == wanted)?;
            claimed[index] = true;
            Some(SectionSource::Exact(index))
        })
        .collect();

    for (slot, title) in canonical.iter().enumerate() {
        if sources[slot].is_some() {
            continue;
        }
        let words = keywords(title);
        let found = detected_titles.iter().position(|t| {
            let lower = t.to_lowercase();
            words.iter().any(|w| lower.contains(w.as_str()))
        });
        sources[slot] = Some(match found {
            Some(index) => SectionSource::Keyword(index),
            None => SectionSource::Placeholder,
        });
    }

    canonical
        .iter()
        .zip(sources)
        .map(|(title, source)| {
            let source = source.unwrap_or(SectionSource::Placeholder);
            let section = match source.detected_index() {
                Some(i) => ReportSection::new(*title, detected[i].content.clone()),
                None => ReportSection::placeholder(*title),
            };
            (section, source)
        })
        .collect()
}

/// Map detected sections onto the canonical outline.
///
/// Always returns exactly `canonical.len()` sections, in canonical order.
pub fn map_to_canonical(detected: &[ReportSection], canonical: &[&str]) -> Vec<ReportSection> {
    map_with_sources(detected, canonical)
        .into_iter()
        .map(|(section, _)| section)
        .collect()
}
