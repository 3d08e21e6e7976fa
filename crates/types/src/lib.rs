pub mod color;
pub mod geometry;
pub mod ids;
pub mod paper;

pub use color::Color;
pub use geometry::{Rect, Size};
pub use ids::{CardSide, ImageKey, StyleId};
pub use paper::PaperSize;
