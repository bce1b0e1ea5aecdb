//! Plain-text preview of a report, for e-mail bodies and terminals.

use crate::model::{ReportContext, FULL_CONTENT_TITLE};
use crate::parser::ReportBody;

const RULE_WIDTH: usize = 63;

/// Render the report body with its profile and contact blocks as text.
pub fn to_text(ctx: &ReportContext, body: &ReportBody) -> String {
    let profile = &ctx.profile;
    let company = &ctx.company;
    let mut out = String::new();

    out.push_str(&format!(
        "{} - {}\n",
        company.product_name.to_uppercase(),
        profile.name.to_uppercase()
    ));
    out.push_str(&"═".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "Généré par {} • {}\n\n",
        company.name,
        ctx.display_date()
    ));

    out.push_str("PROFIL CLIENT:\n");
    out.push_str(&format!("Nom: {}\n", profile.name));
    out.push_str(&format!("Email: {}\n", profile.email));
    out.push_str(&format!("Secteur: {}\n", profile.sector));
    out.push_str(&format!("Poste: {}\n", profile.position));
    out.push_str(&format!("Vision: {}\n\n", profile.ambitions));

    out.push_str("STRUCTURE DU RAPPORT:\n");
    match body {
        ReportBody::Structured { sections } => {
            for (i, section) in sections.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, section.title));
            }
        }
        ReportBody::SingleBlock { .. } => {
            out.push_str(FULL_CONTENT_TITLE);
            out.push('\n');
        }
    }

    out.push_str("\nCONTENU DÉTAILLÉ:\n");
    match body {
        ReportBody::Structured { sections } => {
            for (i, section) in sections.iter().enumerate() {
                out.push_str(&format!(
                    "\n{}. {}\n{}\n",
                    i + 1,
                    section.title,
                    section.content.trim()
                ));
            }
        }
        ReportBody::SingleBlock { text } => {
            out.push_str(&format!("\n{}\n", text.trim()));
        }
    }

    out.push_str("\nCONTACT:\n");
    out.push_str(&format!("{}\n{}\n{}\n\n", company.email, company.website, company.phone));
    out.push_str(&format!(
        "© {} {} - {}",
        ctx.year(),
        company.name,
        company.tagline
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompanyInfo, ReportSection, SubjectProfile};

    fn context() -> ReportContext {
        let profile = SubjectProfile::new("Léa Roux", "lea@example.com", "Retail", "Gérante", "Ouvrir trois boutiques");
        ReportContext::new(profile, CompanyInfo::default())
    }

    #[test]
    fn test_structured_preview() {
        let body = ReportBody::Structured {
            sections: vec![
                ReportSection::new("RÉSUMÉ EXÉCUTIF", "Synthèse du profil."),
                ReportSection::new("ANALYSE PROFIL ACTUEL", "Analyse détaillée."),
            ],
        };
        let text = to_text(&context(), &body);
        assert!(text.starts_with("PORTRAIT PRÉDICTIF IA - LÉA ROUX\n"));
        assert!(text.contains("Secteur: Retail"));
        assert!(text.contains("2. ANALYSE PROFIL ACTUEL\n"));
        assert!(text.contains("\n1. RÉSUMÉ EXÉCUTIF\nSynthèse du profil.\n"));
        assert!(text.contains("contact@ms360.fr"));
    }

    #[test]
    fn test_single_block_preview() {
        let body = ReportBody::SingleBlock {
            text: "Tout le contenu.".to_string(),
        };
        let text = to_text(&context(), &body);
        assert!(text.contains("STRUCTURE DU RAPPORT:\nCONTENU COMPLET\n"));
        assert!(text.contains("\nTout le contenu.\n"));
    }
}
