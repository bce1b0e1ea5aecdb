//! Paginated layout of report bodies.
//!
//! The engine turns a [`ReportBody`](crate::parser::ReportBody) into a
//! [`LaidOutDocument`]: pages of positioned text runs, rules and
//! rectangles that any back end in [`render`](crate::render) can draw.

mod cursor;
mod engine;
mod measure;
mod ops;
mod options;

pub use cursor::LayoutCursor;
pub use engine::LayoutEngine;
pub use measure::{FontWeight, HelveticaMetrics, MonospaceMetrics, TextMeasure, PT_TO_MM};
pub use ops::{
    DrawOp, LaidOutDocument, LaidOutPage, PageKind, RectOp, Rgb, RuleOp, TextOp, TextStyle,
    TocEntry,
};
pub use options::{LayoutOptions, PageSpec, SectionBreak, Typography};
