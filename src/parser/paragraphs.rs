//! Paragraph splitting with a degrading fallback cascade.
//!
//! AI prose is inconsistent about blank-line paragraph breaks, so each rule
//! only runs when the previous one left the text in too few pieces.

/// Texts longer than this are re-split on single newlines.
const LINE_SPLIT_MIN_CHARS: usize = 200;
/// Lines must be longer than this to survive a single-newline split.
const LINE_MIN_CHARS: usize = 10;
/// Texts longer than this are re-split on sentence boundaries.
const SENTENCE_SPLIT_MIN_CHARS: usize = 300;
/// Sentences must be longer than this to survive a sentence split.
const SENTENCE_MIN_CHARS: usize = 20;
/// Texts longer than this are chunked mechanically.
const CHUNK_SPLIT_MIN_CHARS: usize = 500;
/// Mechanical chunk size in characters.
const CHUNK_CHARS: usize = 400;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split on blank lines.
pub fn split_blank_lines(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split on single newlines, keeping lines longer than 10 characters.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| char_len(l) > LINE_MIN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Split after `.`, `!` or `?` followed by whitespace and an uppercase
/// letter, keeping fragments longer than 20 characters.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();
        let rest = &text[end..];
        let trimmed = rest.trim_start();
        let has_gap = trimmed.len() < rest.len();
        if has_gap && trimmed.chars().next().is_some_and(char::is_uppercase) {
            fragments.push(&text[start..end]);
            start = end;
        }
    }
    fragments.push(&text[start..]);

    fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| char_len(f) > SENTENCE_MIN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Cut into fixed 400-character chunks.
pub fn split_chunks(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(CHUNK_CHARS)
        .map(|chunk| chunk.iter().collect::<String>().trim().to_string())
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Divide section text into renderable paragraphs.
///
/// Never returns an empty list for non-blank input, and every returned
/// paragraph is non-blank.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    let len = char_len(text);

    let mut paragraphs = split_blank_lines(text);

    if paragraphs.len() <= 2 && len > LINE_SPLIT_MIN_CHARS {
        paragraphs = split_lines(text);
    }

    if paragraphs.len() <= 1 && len > SENTENCE_SPLIT_MIN_CHARS {
        paragraphs = split_sentences(text);
    }

    if paragraphs.len() <= 1 && len > CHUNK_SPLIT_MIN_CHARS {
        paragraphs = split_chunks(text);
    }

    paragraphs.retain(|p| !p.trim().is_empty());
    if paragraphs.is_empty() {
        return vec![text.to_string()];
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_split() {
        let paragraphs = split_paragraphs("Premier.\n\n  Deuxième.  \n\n\n\nTroisième.");
        assert_eq!(paragraphs, vec!["Premier.", "Deuxième.", "Troisième."]);
    }

    #[test]
    fn test_short_text_stays_whole() {
        assert_eq!(split_paragraphs("Une seule phrase"), vec!["Une seule phrase"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(split_paragraphs("  \n ").is_empty());
    }

    #[test]
    fn test_single_newline_split_drops_short_lines() {
        let text = "Forces identifiées :\n\
                    - Court\n\
                    - Expertise technique reconnue dans le secteur financier\n\
                    - Position stratégique au sein de la direction générale\n\
                    - Capacité d'adaptation aux évolutions rapides du marché\n\
                    - Vision claire avec des ambitions définies";
        assert!(text.chars().count() > 200);
        let paragraphs = split_paragraphs(text);
        assert_eq!(paragraphs.len(), 5);
        assert_eq!(paragraphs[0], "Forces identifiées :");
        assert!(!paragraphs.iter().any(|p| p == "- Court"));
    }

    #[test]
    fn test_sentence_split() {
        let text = "Votre profil révèle un potentiel remarquable dans ce secteur. \
                    Vous disposez d'atouts solides pour concrétiser vos ambitions! \
                    Est-ce le bon moment pour accélérer votre trajectoire? \
                    Les prochains mois seront décisifs pour votre carrière. \
                    Nous recommandons une approche méthodique et progressive. \
                    Chaque étape sera mesurée avec soin. \
                    Ok.";
        assert!(text.chars().count() > 300);
        let paragraphs = split_paragraphs(text);
        assert_eq!(paragraphs.len(), 6);
        assert!(paragraphs[1].ends_with("ambitions!"));
    }

    #[test]
    fn test_sentence_split_requires_uppercase() {
        let fragments = split_sentences("Il mesure 3.5 mètres de long. et ensuite rien du tout ici.");
        assert_eq!(fragments.len(), 1);
    }

    #[test]
    fn test_chunk_fallback() {
        let text = "x".repeat(1000);
        let paragraphs = split_paragraphs(&text);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].len(), 400);
        assert_eq!(paragraphs[2].len(), 200);
    }

    #[test]
    fn test_never_empty_for_nonblank_input() {
        // Long enough to trigger the line and sentence rules, yet both
        // filter every piece out
        let text = "Oui.\n".repeat(70);
        let paragraphs = split_paragraphs(&text);
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs.iter().all(|p| !p.trim().is_empty()));
    }
}
