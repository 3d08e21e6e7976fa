//! Core rendering abstractions for card sheet documents.
//!
//! This crate provides what document backends share:
//! - `DocumentSink` trait for abstracting page and drawing primitives
//! - `RectStyle` / `DashPattern` for stroked rectangles
//! - `RecordingSink`, a backend that only records what was drawn
//! - Unit conversion helpers

mod error;
mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use recording::{DrawOp, RecordedPage, RecordingSink};
pub use traits::DocumentSink;
pub use types::{DashPattern, RectStyle};
