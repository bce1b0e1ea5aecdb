//! Text measurement and wrapping.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

/// Font weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Regular,
    /// Bold weight
    Bold,
}

/// Measures rendered text. Widths are in millimetres, sizes in points.
pub trait TextMeasure: Send + Sync {
    /// Width of `text` set at `font_size`.
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32;

    /// Greedy word wrap to `max_width`.
    ///
    /// Words wider than a whole line are broken between characters.
    /// Blank text yields no lines.
    fn wrap(&self, text: &str, max_width: f32, font_size: f32, weight: FontWeight) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if self.text_width(&candidate, font_size, weight) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if self.text_width(word, font_size, weight) <= max_width {
                current = word.to_string();
                continue;
            }

            for c in word.chars() {
                current.push(c);
                if current.chars().count() > 1
                    && self.text_width(&current, font_size, weight) > max_width
                {
                    current.pop();
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

// Helvetica advance widths for ASCII 32..=126, in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // {..~
];

const DEFAULT_WIDTH: u16 = 556;
const BOLD_FACTOR: f32 = 1.06;

/// Approximate metrics of the standard Helvetica faces.
///
/// Accented Latin letters are measured as their base letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    fn char_width(c: char) -> u16 {
        let base = if c.is_ascii() {
            c
        } else {
            c.nfd().next().unwrap_or(c)
        };
        match base as u32 {
            code @ 32..=126 => HELVETICA_WIDTHS[(code - 32) as usize],
            _ => DEFAULT_WIDTH,
        }
    }
}

impl TextMeasure for HelveticaMetrics {
    fn text_width(&self, text: &str, font_size: f32, weight: FontWeight) -> f32 {
        let units: u32 = text.chars().map(|c| Self::char_width(c) as u32).sum();
        let width = units as f32 / 1000.0 * font_size * PT_TO_MM;
        match weight {
            FontWeight::Regular => width,
            FontWeight::Bold => width * BOLD_FACTOR,
        }
    }
}

/// Fixed advance per character, as a fraction of the font size.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Advance of every character in em
    pub advance: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str, font_size: f32, _weight: FontWeight) -> f32 {
        text.chars().count() as f32 * self.advance * font_size * PT_TO_MM
    }
}
