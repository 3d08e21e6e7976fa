use deckpress_render_core::utils::{flip_y, mm_to_pt};
use deckpress_render_core::{DashPattern, DocumentSink, RectStyle, RenderError};
use deckpress_types::{Color, Rect, Size};
use printpdf::graphics::{
    LineDashPattern, LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder,
};
use printpdf::image::RawImage;
use printpdf::ops::Op;
use printpdf::xobject::XObjectTransform;
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb, XObjectId};
use std::io::Write;

/// An image decoded and stored in the document's XObject resources.
#[derive(Debug, Clone)]
pub struct RegisteredImage {
    id: XObjectId,
    width_px: u32,
    height_px: u32,
}

/// Operations of the page currently being drawn.
struct OpenPage {
    width_mm: f64,
    height_mm: f64,
    height_pt: f64,
    ops: Vec<Op>,
}

/// A [`DocumentSink`] that builds a `printpdf` document and writes it to `W`
/// when finished.
///
/// The writer is owned for the whole generation and handed back by
/// [`DocumentSink::finish`], so a file opened for it is closed on every path.
pub struct PrintPdfSink<W: Write> {
    document: PdfDocument,
    current: Option<OpenPage>,
    writer: W,
}

impl<W: Write> PrintPdfSink<W> {
    pub fn new(writer: W, title: &str) -> Self {
        Self {
            document: PdfDocument::new(title),
            current: None,
            writer,
        }
    }

    fn to_pdf_color(c: Color) -> printpdf::color::Color {
        let (r, g, b) = c.to_unit_rgb();
        printpdf::color::Color::Rgb(Rgb::new(r, g, b, None))
    }

    fn open_page(&mut self) -> Result<&mut OpenPage, RenderError> {
        self.current
            .as_mut()
            .ok_or_else(|| RenderError::Other("No page has been started".into()))
    }

    fn close_page(&mut self) {
        if let Some(page) = self.current.take() {
            self.document
                .pages
                .push(PdfPage::new(Mm(page.width_mm as f32), Mm(page.height_mm as f32), page.ops));
        }
    }

    fn rect_polygon(rect: Rect, page_height_pt: f64) -> Polygon {
        let x = mm_to_pt(rect.x);
        let width = mm_to_pt(rect.width);
        let height = mm_to_pt(rect.height);
        let y = flip_y(mm_to_pt(rect.bottom()), page_height_pt);
        let corner = |x: f64, y: f64| LinePoint {
            p: Point {
                x: Pt(x as f32),
                y: Pt(y as f32),
            },
            bezier: false,
        };
        Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    corner(x, y),
                    corner(x + width, y),
                    corner(x + width, y + height),
                    corner(x, y + height),
                ],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        }
    }
}

/// printpdf takes dash lengths as whole points, so a 1mm/1mm pattern
/// (2.83pt) is drawn as 3pt/3pt. Lengths never drop below one point.
fn dash_lengths_pt(dash: DashPattern) -> (i64, i64) {
    let whole_pt = |mm: f64| mm_to_pt(mm).round().max(1.0) as i64;
    (whole_pt(dash.dash), whole_pt(dash.gap))
}

impl<W: Write> DocumentSink for PrintPdfSink<W> {
    type Image = RegisteredImage;
    type Output = W;

    fn begin_page(&mut self, size: Size) -> Result<(), RenderError> {
        self.close_page();
        self.current = Some(OpenPage {
            width_mm: size.width,
            height_mm: size.height,
            height_pt: mm_to_pt(size.height),
            ops: Vec::new(),
        });
        Ok(())
    }

    fn register_image(&mut self, data: &[u8]) -> Result<RegisteredImage, RenderError> {
        let mut warnings = Vec::new();
        let raw_image = RawImage::decode_from_bytes(data, &mut warnings)
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?;
        if raw_image.width == 0 || raw_image.height == 0 {
            return Err(RenderError::ImageDecode("image has no pixels".into()));
        }
        let (width_px, height_px) = (raw_image.width as u32, raw_image.height as u32);
        let id = self.document.add_image(&raw_image);
        log::debug!("Registered {}x{} image as {:?}", width_px, height_px, id);
        Ok(RegisteredImage {
            id,
            width_px,
            height_px,
        })
    }

    fn draw_image_at(&mut self, image: &RegisteredImage, rect: Rect) -> Result<(), RenderError> {
        let page = self.open_page()?;
        let y = flip_y(mm_to_pt(rect.bottom()), page.height_pt);
        // At 72 dpi one pixel is one point, so the scale maps pixels onto the cell.
        let transform = XObjectTransform {
            translate_x: Some(Pt(mm_to_pt(rect.x) as f32)),
            translate_y: Some(Pt(y as f32)),
            scale_x: Some((mm_to_pt(rect.width) / f64::from(image.width_px)) as f32),
            scale_y: Some((mm_to_pt(rect.height) / f64::from(image.height_px)) as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        page.ops.push(Op::UseXobject {
            id: image.id.clone(),
            transform,
        });
        Ok(())
    }

    fn draw_rect_at(&mut self, rect: Rect, style: &RectStyle) -> Result<(), RenderError> {
        let page = self.open_page()?;
        let polygon = Self::rect_polygon(rect, page.height_pt);

        page.ops.push(Op::SaveGraphicsState);
        page.ops.push(Op::SetOutlineColor {
            col: Self::to_pdf_color(style.color),
        });
        page.ops.push(Op::SetOutlineThickness {
            pt: Pt(style.line_width),
        });
        if let Some(dash) = style.dash {
            let (dash_pt, gap_pt) = dash_lengths_pt(dash);
            page.ops.push(Op::SetLineDashPattern {
                dash: LineDashPattern {
                    dash_1: Some(dash_pt),
                    gap_1: Some(gap_pt),
                    ..Default::default()
                },
            });
        }
        page.ops.push(Op::DrawPolygon { polygon });
        page.ops.push(Op::RestoreGraphicsState);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.document.pages.len() + usize::from(self.current.is_some())
    }

    fn finish(mut self) -> Result<W, RenderError> {
        self.close_page();
        let mut warnings = Vec::new();
        let bytes = self.document.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warnings while saving", warnings.len());
        }
        self.writer.write_all(&bytes)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// A 2x2 RGB PNG.
    const TINY_PNG: [u8; 73] = [
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0x08, 0x02, 0x00, 0x00, 0x00, 0xfd,
        0xd4, 0x9a, 0x73, 0x00, 0x00, 0x00, 0x10, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x38,
        0x21, 0x27, 0x07, 0x44, 0x0c, 0x10, 0x0a, 0x00, 0x1f, 0x26, 0x04, 0x11, 0xa2, 0x8f, 0x22,
        0xaf, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_pdf_page_per_begin_page() {
        let mut sink = PrintPdfSink::new(Cursor::new(Vec::new()), "test");
        let image = sink.register_image(&TINY_PNG).unwrap();
        assert_eq!((image.width_px, image.height_px), (2, 2));

        sink.begin_page(Size::new(215.9, 279.4)).unwrap();
        sink.draw_image_at(&image, Rect::new(10.0, 10.0, 63.5, 88.9)).unwrap();
        sink.begin_page(Size::new(215.9, 279.4)).unwrap();
        let guide = RectStyle::dashed(Color::gray(150), 1.0, DashPattern { dash: 1.0, gap: 1.0 });
        sink.draw_rect_at(Rect::new(10.0, 10.0, 63.5, 88.9), &guide).unwrap();
        assert_eq!(sink.page_count(), 2);

        let bytes = sink.finish().unwrap().into_inner();
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn dash_lengths_round_to_whole_points() {
        assert_eq!(dash_lengths_pt(DashPattern { dash: 1.0, gap: 1.0 }), (3, 3));
        assert_eq!(dash_lengths_pt(DashPattern { dash: 0.1, gap: 2.0 }), (1, 6));
    }

    #[test]
    fn rejects_undecodable_image() {
        let mut sink = PrintPdfSink::new(Cursor::new(Vec::new()), "test");
        let err = sink.register_image(b"definitely not a png").unwrap_err();
        assert!(matches!(err, RenderError::ImageDecode(_)));
    }

    #[test]
    fn drawing_without_page_is_an_error() {
        let mut sink = PrintPdfSink::new(Cursor::new(Vec::new()), "test");
        let style = RectStyle::solid(Color::gray(200), 1.0);
        assert!(sink.draw_rect_at(Rect::default(), &style).is_err());
    }

    #[test]
    fn write_failure_surfaces_as_io_error() {
        let mut sink = PrintPdfSink::new(FailingWriter, "test");
        sink.begin_page(Size::new(210.0, 297.0)).unwrap();
        let err = sink.finish().err().unwrap();
        assert!(matches!(err, RenderError::Io(_)));
    }
}
