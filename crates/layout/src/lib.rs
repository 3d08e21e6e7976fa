//! Grid solver for placing identical cards on a sheet of paper.
//!
//! Given a card size and a paper profile, [`compute_layout`] picks the number
//! of columns and rows, the gap between cells and the centering margins.
//! The resulting [`GridLayout`] also answers where a given card slot lands on
//! the front and on the (column-mirrored) back page of a duplex sheet.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Card dimensions must be positive, got {width:.2} x {height:.2} mm.")]
    InvalidDimension { width: f64, height: f64 },
}

mod grid;

pub use self::grid::{
    compute_layout, GridLayout, GridSlot, IDEAL_MARGIN, IDEAL_SPACING, MIN_MARGIN,
    TARGET_CARDS_PER_PAGE,
};

// Re-export geometry types used by the grid so callers share one definition
pub use deckpress_types::{CardSide, PaperSize, Rect, Size};

#[cfg(test)]
mod grid_test;
