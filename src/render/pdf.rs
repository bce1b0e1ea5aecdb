//! PDF output via printpdf.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
};
use std::io::BufWriter;

use crate::error::{Error, Result};
use crate::layout::{DrawOp, FontWeight, LaidOutDocument, LaidOutPage, Rgb};

const LAYER_NAME: &str = "Layer 1";

fn pdf_color(color: Rgb) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// Render a laid-out document to PDF bytes.
///
/// Layout coordinates are measured from the top edge; PDF coordinates
/// from the bottom, so every vertical position is flipped here.
pub fn to_pdf(doc: &LaidOutDocument) -> Result<Vec<u8>> {
    if doc.pages.is_empty() {
        return Err(Error::Render("document has no pages".to_string()));
    }

    let (pdf, first_page, first_layer) =
        PdfDocument::new(&doc.title, Mm(doc.width), Mm(doc.height), LAYER_NAME);
    let fonts = Fonts {
        regular: pdf
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| Error::Render(format!("PDF font error: {e}")))?,
        bold: pdf
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| Error::Render(format!("PDF font error: {e}")))?,
    };

    for (i, page) in doc.pages.iter().enumerate() {
        let layer = if i == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (index, layer) = pdf.add_page(Mm(doc.width), Mm(doc.height), LAYER_NAME);
            pdf.get_page(index).get_layer(layer)
        };
        draw_page(&layer, page, doc.height, &fonts);
    }

    let mut buf = BufWriter::new(Vec::new());
    pdf.save(&mut buf)
        .map_err(|e| Error::Render(format!("PDF save error: {e}")))?;
    let bytes = buf
        .into_inner()
        .map_err(|e| Error::Render(format!("PDF buffer error: {e}")))?;

    log::debug!("Rendered {} pages to {} PDF bytes", doc.pages.len(), bytes.len());
    Ok(bytes)
}

fn draw_page(layer: &PdfLayerReference, page: &LaidOutPage, height: f32, fonts: &Fonts) {
    for op in &page.ops {
        match op {
            DrawOp::Rect(rect) => {
                layer.set_fill_color(pdf_color(rect.fill));
                layer.add_rect(Rect::new(
                    Mm(rect.x),
                    Mm(height - rect.y - rect.height),
                    Mm(rect.x + rect.width),
                    Mm(height - rect.y),
                ));
            }
            DrawOp::Rule(rule) => {
                layer.set_outline_color(pdf_color(rule.color));
                layer.set_outline_thickness(rule.thickness);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(rule.x1), Mm(height - rule.y1)), false),
                        (Point::new(Mm(rule.x2), Mm(height - rule.y2)), false),
                    ],
                    is_closed: false,
                });
            }
            DrawOp::Text(text) => {
                layer.set_fill_color(pdf_color(text.style.color));
                layer.use_text(
                    text.text.as_str(),
                    text.style.font_size,
                    Mm(text.x),
                    Mm(height - text.y),
                    fonts.get(text.style.weight),
                );
            }
        }
    }
}
