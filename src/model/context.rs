//! Per-request rendering context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CompanyInfo, SubjectProfile};

/// Everything a report needs besides its body text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContext {
    /// Subject the report is written for
    pub profile: SubjectProfile,

    /// Issuing company
    pub company: CompanyInfo,

    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl ReportContext {
    /// Create a context stamped with the current time.
    pub fn new(profile: SubjectProfile, company: CompanyInfo) -> Self {
        Self {
            profile,
            company,
            generated_at: Utc::now(),
        }
    }

    /// Override the generation timestamp.
    pub fn with_generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    /// Generation date formatted the French way (`dd/mm/yyyy`).
    pub fn display_date(&self) -> String {
        self.generated_at.format("%d/%m/%Y").to_string()
    }

    /// Generation year.
    pub fn year(&self) -> String {
        self.generated_at.format("%Y").to_string()
    }

    /// Document title used in metadata and footers.
    pub fn document_title(&self) -> String {
        format!("{} - {}", self.company.product_name, self.profile.name)
    }
}
