pub mod image;

pub use image::{ImageError, ImageProvider, InMemoryImageStore, SharedImageData};
