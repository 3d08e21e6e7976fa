//! Print layout and pagination for card decks.
//!
//! A [`Deck`] describes a card size, a paper profile and a list of cards whose
//! faces were already rendered to PNG. This crate fits as many cards as
//! sensible onto each sheet and emits a PDF whose pages alternate fronts and
//! column-mirrored backs, ready for long-edge duplex printing.

pub mod deck;
pub mod error;
pub mod images;
pub mod pipeline;

pub use deck::{Card, Deck, FieldDefinition, FieldKind, FieldValue, ImageRef, RenderedCardImage};
pub use error::PipelineError;
pub use images::{collect_rendered_images, decode_data_url};
pub use pipeline::{DeckGenerator, GenerationReport, RenderConfig};

pub use deckpress_layout::{GridLayout, GridSlot, LayoutError, compute_layout};
pub use deckpress_render_core::{DocumentSink, RecordingSink, RenderError};
pub use deckpress_render_printpdf::PrintPdfSink;
pub use deckpress_traits::{ImageProvider, InMemoryImageStore};
pub use deckpress_types::{CardSide, Color, ImageKey, PaperSize, Rect, Size, StyleId};
