use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use talkbook_core::{FontFace, Page, PageGeometry};

const LAYER_NAME: &str = "Text";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("pdf error: {0}")]
    Pdf(String),
}

fn pdf_error(err: impl std::fmt::Display) -> RenderError {
    RenderError::Pdf(err.to_string())
}

fn pt(value: f32) -> Mm {
    Mm(value * 25.4 / 72.0)
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Helvetica => &self.regular,
            FontFace::HelveticaBold => &self.bold,
        }
    }
}

/// Draws laid-out pages into a PDF and returns its bytes.
pub fn render_pdf(title: &str, geometry: &PageGeometry, pages: &[Page]) -> Result<Vec<u8>, RenderError> {
    let width = pt(geometry.width);
    let height = pt(geometry.height);
    let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_error)?,
    };

    for (number, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if number == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        for line in &page.lines {
            layer.use_text(
                line.text.as_str(),
                line.size,
                pt(line.x),
                pt(line.y),
                fonts.get(line.face),
            );
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}
