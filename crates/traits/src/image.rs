//! ImageProvider trait for looking up pre-rendered card images.
//!
//! The compositor never rasterizes anything itself. It asks an
//! `ImageProvider` for the bytes of the image rendered for a
//! `(style, side)` pair and falls back to a placeholder when there is none.

use deckpress_types::{CardSide, ImageKey, StyleId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for building an image set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    #[error("Image '{key}' is not valid base64: {message}")]
    InvalidEncoding { key: String, message: String },

    #[error("Image '{0}' is empty")]
    Empty(String),
}

/// Shared image data type (reference-counted encoded bytes, usually PNG).
pub type SharedImageData = Arc<Vec<u8>>;

/// A lookup of encoded card images keyed by style and side.
///
/// A miss is not an error: callers draw a placeholder instead.
pub trait ImageProvider: Debug {
    /// Returns the image for an already-built key.
    fn get(&self, key: &ImageKey) -> Option<SharedImageData>;

    /// Returns the image rendered for `style` on `side`.
    fn image(&self, style: &StyleId, side: CardSide) -> Option<SharedImageData> {
        self.get(&ImageKey::new(style, side))
    }

    fn contains(&self, key: &ImageKey) -> bool {
        self.get(key).is_some()
    }
}

/// An in-memory image store, filled before generation and owned by it.
#[derive(Debug, Default, Clone)]
pub struct InMemoryImageStore {
    images: HashMap<ImageKey, SharedImageData>,
}

impl InMemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the image for `style` on `side`.
    ///
    /// Returns the previous image stored under the same key, if any.
    pub fn insert(
        &mut self,
        style: &StyleId,
        side: CardSide,
        data: impl Into<SharedImageData>,
    ) -> Option<SharedImageData> {
        self.images.insert(ImageKey::new(style, side), data.into())
    }

    pub fn remove(&mut self, key: &ImageKey) -> Option<SharedImageData> {
        self.images.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ImageKey> {
        self.images.keys()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageProvider for InMemoryImageStore {
    fn get(&self, key: &ImageKey) -> Option<SharedImageData> {
        self.images.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_style_and_side() {
        let mut store = InMemoryImageStore::new();
        let style = StyleId::from("hero");
        store.insert(&style, CardSide::Front, vec![1, 2, 3]);

        assert_eq!(store.image(&style, CardSide::Front).as_deref(), Some(&vec![1, 2, 3]));
        assert!(store.image(&style, CardSide::Back).is_none());
        assert!(store.contains(&ImageKey::new(&style, CardSide::Front)));
    }

    #[test]
    fn later_insert_replaces_earlier() {
        let mut store = InMemoryImageStore::new();
        let style = StyleId::from("hero");
        assert!(store.insert(&style, CardSide::Back, vec![1]).is_none());
        let previous = store.insert(&style, CardSide::Back, vec![2]);
        assert_eq!(previous.as_deref(), Some(&vec![1]));
        assert_eq!(store.len(), 1);
        assert_eq!(store.image(&style, CardSide::Back).as_deref(), Some(&vec![2]));
    }
}
