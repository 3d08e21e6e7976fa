use crate::error::RenderError;
use crate::traits::DocumentSink;
use crate::types::RectStyle;
use deckpress_types::{Rect, Size};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// A single drawing operation captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Registered image number `image`, stretched over `rect`.
    Image { image: usize, rect: Rect },
    Rect { rect: Rect, style: RectStyle },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPage {
    pub size: Size,
    pub ops: Vec<DrawOp>,
}

/// A backend that writes nothing and remembers every page and operation.
///
/// Image registration only checks for the PNG signature, which is enough to
/// exercise the fallback path for undecodable images.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pages: Vec<RecordedPage>,
    images: Vec<Vec<u8>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    /// Bytes of every successfully registered image, by handle.
    pub fn images(&self) -> &[Vec<u8>] {
        &self.images
    }

    fn current_page(&mut self) -> Result<&mut RecordedPage, RenderError> {
        self.pages
            .last_mut()
            .ok_or_else(|| RenderError::Other("No page has been started".into()))
    }
}

impl DocumentSink for RecordingSink {
    type Image = usize;
    type Output = Vec<RecordedPage>;

    fn begin_page(&mut self, size: Size) -> Result<(), RenderError> {
        self.pages.push(RecordedPage {
            size,
            ops: Vec::new(),
        });
        Ok(())
    }

    fn register_image(&mut self, data: &[u8]) -> Result<usize, RenderError> {
        if !data.starts_with(&PNG_SIGNATURE) {
            return Err(RenderError::ImageDecode("missing PNG signature".into()));
        }
        self.images.push(data.to_vec());
        Ok(self.images.len() - 1)
    }

    fn draw_image_at(&mut self, image: &usize, rect: Rect) -> Result<(), RenderError> {
        let image = *image;
        self.current_page()?.ops.push(DrawOp::Image { image, rect });
        Ok(())
    }

    fn draw_rect_at(&mut self, rect: Rect, style: &RectStyle) -> Result<(), RenderError> {
        let style = *style;
        self.current_page()?.ops.push(DrawOp::Rect { rect, style });
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn finish(self) -> Result<Vec<RecordedPage>, RenderError> {
        Ok(self.pages)
    }
}
