//! PDF backend for card sheets built on the `printpdf` library.
//!
//! Pages are assembled in memory as `printpdf` operations and the finished
//! document is written to the caller's writer in one go.

mod renderer;

pub use renderer::{PrintPdfSink, RegisteredImage};
