//! The subject profile driving personalisation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Form inputs describing the person a report is written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectProfile {
    /// Full name
    pub name: String,

    /// Contact e-mail
    pub email: String,

    /// Business sector
    pub sector: String,

    /// Current position
    pub position: String,

    /// Stated ambitions
    pub ambitions: String,
}

impl SubjectProfile {
    /// Create a new profile.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        sector: impl Into<String>,
        position: impl Into<String>,
        ambitions: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            sector: sector.into(),
            position: position.into(),
            ambitions: ambitions.into(),
        }
    }

    /// Validate the profile before it enters the pipeline.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("sector", &self.sector),
            ("position", &self.position),
            ("ambitions", &self.ambitions),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::InvalidProfile(format!("{} is required", field)));
            }
        }

        if !self.email.contains('@') {
            return Err(Error::InvalidProfile(format!(
                "'{}' is not an e-mail address",
                self.email
            )));
        }

        Ok(())
    }
}
