//! Drives a [`DocumentSink`] from a paginated plan.

use super::compositor::{CellContent, SheetPage};
use super::config::RenderConfig;
use deckpress_render_core::{DocumentSink, RenderError};
use deckpress_traits::ImageProvider;
use deckpress_types::ImageKey;
use std::collections::HashMap;

/// Counts of what was actually drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub pages: usize,
    pub images: usize,
    pub placeholders: usize,
}

/// Registers each image with the sink at most once per generation.
///
/// A key whose bytes the sink cannot decode is remembered as unusable so
/// every later cell with that key goes straight to the placeholder.
struct ImageCache<H> {
    handles: HashMap<ImageKey, Option<H>>,
}

impl<H: Clone> ImageCache<H> {
    fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    fn resolve<S, P>(
        &mut self,
        key: &ImageKey,
        images: &P,
        sink: &mut S,
    ) -> Result<Option<H>, RenderError>
    where
        S: DocumentSink<Image = H>,
        P: ImageProvider + ?Sized,
    {
        if let Some(cached) = self.handles.get(key) {
            return Ok(cached.clone());
        }

        let handle = match images.get(key) {
            Some(bytes) => match sink.register_image(&bytes) {
                Ok(handle) => Some(handle),
                Err(RenderError::ImageDecode(reason)) => {
                    log::warn!("Image '{}' could not be decoded ({}), using placeholder", key, reason);
                    None
                }
                Err(e) => return Err(e),
            },
            None => None,
        };
        self.handles.insert(key.clone(), handle.clone());
        Ok(handle)
    }
}

/// Emits every planned page into `sink`, in order.
///
/// Cells planned as images fall back to the placeholder border when their
/// image turns out to be undecodable. Cut guides are drawn over whatever
/// the cell received.
pub fn render_pages<S, P>(
    pages: &[SheetPage],
    images: &P,
    sink: &mut S,
    config: &RenderConfig,
) -> Result<RenderStats, RenderError>
where
    S: DocumentSink,
    P: ImageProvider + ?Sized,
{
    let mut cache = ImageCache::new();
    let mut stats = RenderStats::default();

    for page in pages {
        sink.begin_page(page.size)?;
        stats.pages += 1;

        for cell in &page.cells {
            let handle = match cell.content {
                CellContent::Image => cache.resolve(&cell.key, images, sink)?,
                CellContent::Placeholder => None,
            };

            match handle {
                Some(handle) => {
                    sink.draw_image_at(&handle, cell.rect)?;
                    stats.images += 1;
                }
                None => {
                    sink.draw_rect_at(cell.rect, &config.placeholder)?;
                    stats.placeholders += 1;
                }
            }

            if cell.cut_guide {
                sink.draw_rect_at(cell.rect, &config.cut_guide)?;
            }
        }
    }

    Ok(stats)
}
