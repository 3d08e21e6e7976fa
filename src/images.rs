//! Builds the per-generation image lookup from a deck's rendered card faces.

use crate::deck::RenderedCardImage;
use base64::Engine;
use deckpress_traits::{ImageError, InMemoryImageStore};
use deckpress_types::StyleId;

/// Decodes base64 image data, accepting an optional `data:...;base64,` header.
pub fn decode_data_url(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let data = data.trim();
    let payload = match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, payload)| payload),
        None => data,
    };
    base64::engine::general_purpose::STANDARD.decode(payload)
}

fn decode_rendered(rendered: &RenderedCardImage) -> Result<Vec<u8>, ImageError> {
    let key = format!("{}-{}", rendered.style_id, rendered.side);
    let bytes = decode_data_url(&rendered.image).map_err(|e| ImageError::InvalidEncoding {
        key: key.clone(),
        message: e.to_string(),
    })?;
    if bytes.is_empty() {
        return Err(ImageError::Empty(key));
    }
    Ok(bytes)
}

/// Collects the rendered images into a lookup keyed by `"{style}-{side}"`.
///
/// Entries that do not decode are skipped, so the cards using them fall back
/// to a placeholder. A later entry for the same key replaces an earlier one.
pub fn collect_rendered_images(rendered: &[RenderedCardImage]) -> InMemoryImageStore {
    let mut store = InMemoryImageStore::new();
    for entry in rendered {
        match decode_rendered(entry) {
            Ok(bytes) => {
                let style = StyleId::from(entry.style_id.as_str());
                if store.insert(&style, entry.side, bytes).is_some() {
                    log::debug!("Replacing earlier image for {}-{}", style, entry.side);
                }
            }
            Err(e) => log::warn!("Skipping rendered card image: {}", e),
        }
    }
    store
}
