//! Report sections and the canonical outline.

use serde::{Deserialize, Serialize};

/// The fixed, ordered outline every generated report contains.
pub const CANONICAL_SECTIONS: [&str; 7] = [
    "RÉSUMÉ EXÉCUTIF",
    "ANALYSE PROFIL ACTUEL",
    "PRÉDICTIONS 2025-2027",
    "RECOMMANDATIONS STRATÉGIQUES",
    "OPPORTUNITÉS DE CROISSANCE",
    "PLAN D'ACTION CONCRET",
    "CONCLUSION ET PROCHAINES ÉTAPES",
];

/// Title given to an untitled introduction.
pub const EXECUTIVE_SUMMARY: &str = "RÉSUMÉ EXÉCUTIF";

/// Title of the single block rendered when segmentation is rejected.
pub const FULL_CONTENT_TITLE: &str = "CONTENU COMPLET";

/// One titled part of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Section heading
    pub title: String,

    /// Raw text body
    pub content: String,
}

impl ReportSection {
    /// Create a new section.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Create a section holding placeholder content for `title`.
    pub fn placeholder(title: impl Into<String>) -> Self {
        let title = title.into();
        let content = placeholder_content(&title);
        Self { title, content }
    }

    /// Length of the content in characters.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Append a continuation chunk to the content.
    pub fn append(&mut self, chunk: &str) {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push_str("\n\n");
        }
        self.content.push_str(chunk);
    }
}

/// Content synthesized for a canonical section with no detected counterpart.
pub fn placeholder_content(title: &str) -> String {
    format!(
        "Contenu de la section \"{}\" en cours de génération par l'IA.",
        title
    )
}
