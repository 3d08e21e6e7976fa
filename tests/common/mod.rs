pub mod fixtures;

use deckpress::{Deck, DeckGenerator, GenerationReport, PipelineError};
use lopdf::{Document as LopdfDocument, Object};
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub report: GenerationReport,
}

impl GeneratedPdf {
    pub fn from_bytes(
        bytes: Vec<u8>,
        report: GenerationReport,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc, report })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Width and height of a 1-based page's MediaBox, in points.
    pub fn page_dimensions(&self, page_num: u32) -> Option<(f64, f64)> {
        let pages = self.doc.get_pages();
        let page_id = pages.get(&page_num)?;
        let page_dict = self.doc.get_object(*page_id).ok()?.as_dict().ok()?;
        let media_box = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
        if media_box.len() < 4 {
            return None;
        }
        let width = number(&media_box[2])? - number(&media_box[0])?;
        let height = number(&media_box[3])? - number(&media_box[1])?;
        Some((width, height))
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

fn number(object: &Object) -> Option<f64> {
    match object {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

/// Generates a deck in memory with the default configuration.
pub fn generate_pdf(deck: &Deck) -> Result<GeneratedPdf, PipelineError> {
    let (writer, report) = DeckGenerator::new().generate(deck, Cursor::new(Vec::new()))?;
    GeneratedPdf::from_bytes(writer.into_inner(), report)
        .map_err(|e| PipelineError::Config(e.to_string()))
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
