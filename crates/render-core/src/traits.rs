use crate::error::RenderError;
use crate::types::RectStyle;
use deckpress_types::{Rect, Size};

/// A paginated document backend.
///
/// Coordinates are millimetres measured from the top-left corner of the
/// page; backends convert to their own units and origin. Drawing always
/// targets the page opened by the most recent `begin_page`.
pub trait DocumentSink {
    /// Backend handle of a registered image.
    type Image: Clone;
    /// What the finished document is handed back as.
    type Output;

    fn begin_page(&mut self, size: Size) -> Result<(), RenderError>;

    /// Decodes and stores encoded image bytes for later drawing.
    ///
    /// Undecodable data is reported as `RenderError::ImageDecode`.
    fn register_image(&mut self, data: &[u8]) -> Result<Self::Image, RenderError>;

    /// Draws a registered image stretched to fill `rect`.
    fn draw_image_at(&mut self, image: &Self::Image, rect: Rect) -> Result<(), RenderError>;

    /// Strokes the outline of `rect`.
    fn draw_rect_at(&mut self, rect: Rect, style: &RectStyle) -> Result<(), RenderError>;

    fn page_count(&self) -> usize;

    /// Finalizes the document and writes it out.
    fn finish(self) -> Result<Self::Output, RenderError>;
}
