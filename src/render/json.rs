//! JSON export of analysis results and laid-out documents.

use serde::Serialize;

use crate::error::Result;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any report artifact to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
        JsonFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{analyze, SegmentOptions};

    #[test]
    fn test_segmentation_to_json_pretty() {
        let seg = analyze("Un texte sans titre.", &SegmentOptions::default()).unwrap();
        let json = to_json(&seg, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"strategy\": \"forced\""));
        assert!(json.contains("\"kind\": \"structured\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let seg = analyze("Un texte sans titre.", &SegmentOptions::default()).unwrap();
        let json = to_json(&seg.sources, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with('['));
    }
}
