//! Company branding printed on reports.

use serde::{Deserialize, Serialize};

/// Branding and contact details of the company issuing reports.
///
/// Missing fields fall back to the defaults when deserialized, so a
/// configuration file only needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyInfo {
    /// Short company name
    pub name: String,

    /// Tagline
    pub tagline: String,

    /// Web site URL
    pub website: String,

    /// Contact e-mail
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Product name printed in footers
    pub product_name: String,
}

impl CompanyInfo {
    /// Create company info with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the company name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the web site.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    /// Set the contact e-mail.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the product name.
    pub fn with_product_name(mut self, product: impl Into<String>) -> Self {
        self.product_name = product.into();
        self
    }
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "MS360".to_string(),
            tagline: "Votre partenaire digital de confiance".to_string(),
            website: "https://ms360.fr".to_string(),
            email: "contact@ms360.fr".to_string(),
            phone: "+33 2 30 90 98 12".to_string(),
            product_name: "Portrait Prédictif IA".to_string(),
        }
    }
}
