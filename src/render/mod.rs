//! Back ends turning analysed and laid-out reports into output formats.

mod json;
mod pdf;
mod text;

pub use json::{to_json, JsonFormat};
pub use pdf::to_pdf;
pub use text::to_text;
