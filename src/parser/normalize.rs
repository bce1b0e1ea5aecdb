//! Markdown artifact removal.

use regex::Regex;
use std::sync::OnceLock;

fn bold_markers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*").expect("bold marker pattern"))
}

fn code_fences() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`{1,3}").expect("code fence pattern"))
}

/// Strip bold markers and code fences, then trim.
///
/// Case and punctuation are preserved exactly: heading detection relies
/// on them.
pub fn normalize(raw: &str) -> String {
    let text = bold_markers().replace_all(raw, "");
    let text = code_fences().replace_all(&text, "");
    text.trim().to_string()
}
