//! Deck-to-document pipeline.
//!
//! Generation runs in three steps:
//!
//! - [`compute_layout`](deckpress_layout::compute_layout) solves the card grid
//! - [`paginate`] expands repeat counts and plans alternating front and back pages
//! - [`render_pages`] draws the plan into any [`DocumentSink`](deckpress_render_core::DocumentSink)
//!
//! [`DeckGenerator`] ties them together and writes a PDF.
//!
//! # Example
//!
//! ```ignore
//! use deckpress::{Deck, DeckGenerator};
//!
//! let deck = Deck::from_path("deck.json")?;
//! let report = DeckGenerator::new().generate_to_file(&deck, "cards.pdf")?;
//! println!("{} pages", report.pages);
//! ```

pub mod compositor;
pub mod config;
mod emit;
mod generator;

pub use compositor::{CellContent, PlacedCard, SheetPage, expand_cards, paginate};
pub use config::RenderConfig;
pub use emit::{RenderStats, render_pages};
pub use generator::{DeckGenerator, GenerationReport};
