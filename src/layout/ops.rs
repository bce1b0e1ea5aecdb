//! Draw operations produced by the layout engine.
//!
//! All coordinates are millimetres from the top-left corner of the page.
//! Text positions are resolved to the left edge of the run, so back ends
//! never need to measure text themselves.

use serde::Serialize;

use super::measure::FontWeight;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Body text
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Cover page text
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    /// Section and page titles
    pub const TITLE_BLUE: Rgb = Rgb(30, 64, 175);
    /// Cover page background
    pub const NAVY: Rgb = Rgb(15, 23, 42);
    /// Subject name on the cover
    pub const GREEN: Rgb = Rgb(34, 197, 94);
    /// Secondary cover text
    pub const SLATE: Rgb = Rgb(148, 163, 184);
    /// Footer text
    pub const FOOTER_GREY: Rgb = Rgb(100, 100, 100);
    /// Separator rules
    pub const RULE_GREY: Rgb = Rgb(200, 200, 200);

    /// Components scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// Font and color of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Size in points
    pub font_size: f32,
    /// Weight
    pub weight: FontWeight,
    /// Fill color
    pub color: Rgb,
}

impl TextStyle {
    /// Regular black text.
    pub fn regular(font_size: f32) -> Self {
        Self {
            font_size,
            weight: FontWeight::Regular,
            color: Rgb::BLACK,
        }
    }

    /// Bold black text.
    pub fn bold(font_size: f32) -> Self {
        Self {
            weight: FontWeight::Bold,
            ..Self::regular(font_size)
        }
    }

    /// Same style in another color.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOp {
    /// Text content, never containing a newline
    pub text: String,
    /// Left edge
    pub x: f32,
    /// Baseline
    pub y: f32,
    /// Font and color
    pub style: TextStyle,
}

/// A straight line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOp {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Stroke width in points
    pub thickness: f32,
    pub color: Rgb,
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectOp {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Rgb,
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Text(TextOp),
    Rule(RuleOp),
    Rect(RectOp),
}

impl DrawOp {
    /// The text run, if this is one.
    pub fn as_text(&self) -> Option<&TextOp> {
        match self {
            DrawOp::Text(op) => Some(op),
            _ => None,
        }
    }
}

/// Role of a page in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Cover,
    Contents,
    Body,
    Closing,
}

/// A finished page.
#[derive(Debug, Clone, Serialize)]
pub struct LaidOutPage {
    /// One-based page number
    pub number: usize,
    pub kind: PageKind,
    pub ops: Vec<DrawOp>,
}

impl LaidOutPage {
    /// Text runs in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(DrawOp::as_text)
    }
}

/// A table of contents line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Numbered section title
    pub title: String,
    /// One-based page the section starts on
    pub page: usize,
}

/// A paginated report ready for a back end.
#[derive(Debug, Clone, Serialize)]
pub struct LaidOutDocument {
    /// Document title for metadata
    pub title: String,
    /// Page width in millimetres
    pub width: f32,
    /// Page height in millimetres
    pub height: f32,
    /// Pages in reading order
    pub pages: Vec<LaidOutPage>,
    /// Where each section starts
    pub contents: Vec<TocEntry>,
}

impl LaidOutDocument {
    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages of the given kind.
    pub fn pages_of(&self, kind: PageKind) -> impl Iterator<Item = &LaidOutPage> {
        self.pages.iter().filter(move |p| p.kind == kind)
    }

    /// All text, one run per line, pages separated by a blank line.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| {
                page.texts()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
