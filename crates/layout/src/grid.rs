use crate::LayoutError;
use deckpress_types::{CardSide, PaperSize, Rect, Size};
use serde::Serialize;

/// Margin tried first, in millimetres.
pub const IDEAL_MARGIN: f64 = 10.0;
/// Smallest margin the solver relaxes to.
pub const MIN_MARGIN: f64 = 5.0;
/// Gap between neighbouring cells tried first.
pub const IDEAL_SPACING: f64 = 2.0;
/// Soft density target (a 3x3 sheet of poker cards). Falling short of it is
/// what makes the solver relax margins and then spacing.
pub const TARGET_CARDS_PER_PAGE: usize = 9;

/// The computed sheet geometry. All lengths are millimetres.
///
/// The grid is centered: `margin_left` and `margin_top` are the leftover
/// page space split evenly on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub page_width: f64,
    pub page_height: f64,
    #[serde(rename = "cardsPerRow")]
    pub columns: usize,
    #[serde(rename = "cardsPerCol")]
    pub rows: usize,
    pub card_width: f64,
    pub card_height: f64,
    pub spacing: f64,
    pub margin_left: f64,
    pub margin_top: f64,
}

/// A cell address in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSlot {
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy)]
struct Fit {
    columns: usize,
    rows: usize,
    spacing: f64,
}

impl Fit {
    fn count(&self) -> usize {
        self.columns * self.rows
    }
}

/// Counts how many cards fit with the given margin and spacing.
///
/// `n` cards need `n * card + (n - 1) * spacing` of room, so
/// `n = floor((printable + spacing) / (card + spacing))`. Both counts are
/// clamped to at least one.
fn fit(page: (f64, f64), card: Size, margin: f64, spacing: f64) -> Fit {
    let printable_width = page.0 - 2.0 * margin;
    let printable_height = page.1 - 2.0 * margin;

    let columns = ((printable_width + spacing) / (card.width + spacing)).floor();
    let rows = ((printable_height + spacing) / (card.height + spacing)).floor();

    Fit {
        columns: (columns.max(0.0) as usize).max(1),
        rows: (rows.max(0.0) as usize).max(1),
        spacing,
    }
}

/// Solves the card grid for a card size on a paper profile.
///
/// Attempts, in order, keeping the earlier attempt on ties:
/// 1. margin 10, spacing 2
/// 2. margin 5, spacing 2 (only while below the 9-card target)
/// 3. margin 5, spacing 0 (only while still below the target)
///
/// Margins are then recomputed so the chosen grid sits in the page center.
pub fn compute_layout(card: Size, paper: PaperSize) -> Result<GridLayout, LayoutError> {
    if !card.is_positive() {
        return Err(LayoutError::InvalidDimension {
            width: card.width,
            height: card.height,
        });
    }

    let page = paper.dimensions_mm();

    let mut best = fit(page, card, IDEAL_MARGIN, IDEAL_SPACING);
    log::debug!(
        "Ideal fit for {}x{} on {}: {}x{}",
        card.width,
        card.height,
        paper.name(),
        best.columns,
        best.rows
    );

    if best.count() < TARGET_CARDS_PER_PAGE {
        let reduced_margin = fit(page, card, MIN_MARGIN, IDEAL_SPACING);
        log::debug!(
            "Reduced margin fit: {}x{}",
            reduced_margin.columns,
            reduced_margin.rows
        );
        if reduced_margin.count() > best.count() {
            best = reduced_margin;
        }

        if best.count() < TARGET_CARDS_PER_PAGE {
            let no_spacing = fit(page, card, MIN_MARGIN, 0.0);
            log::debug!("Zero spacing fit: {}x{}", no_spacing.columns, no_spacing.rows);
            if no_spacing.count() > best.count() {
                best = no_spacing;
            }
        }
    }

    let grid_width = best.columns as f64 * card.width + (best.columns - 1) as f64 * best.spacing;
    let grid_height = best.rows as f64 * card.height + (best.rows - 1) as f64 * best.spacing;

    // A single oversized card can still exceed the page; pin it to the corner.
    let margin_left = ((page.0 - grid_width) / 2.0).max(0.0);
    let margin_top = ((page.1 - grid_height) / 2.0).max(0.0);

    let layout = GridLayout {
        page_width: page.0,
        page_height: page.1,
        columns: best.columns,
        rows: best.rows,
        card_width: card.width,
        card_height: card.height,
        spacing: best.spacing,
        margin_left,
        margin_top,
    };
    log::debug!(
        "Chose {}x{} grid, spacing {}, margins {:.2}/{:.2}",
        layout.columns,
        layout.rows,
        layout.spacing,
        layout.margin_left,
        layout.margin_top
    );
    Ok(layout)
}

impl GridLayout {
    pub fn cards_per_page(&self) -> usize {
        self.columns * self.rows
    }

    pub fn page_size(&self) -> Size {
        Size::new(self.page_width, self.page_height)
    }

    pub fn card_size(&self) -> Size {
        Size::new(self.card_width, self.card_height)
    }

    /// Width of the whole grid including inner gaps.
    pub fn grid_width(&self) -> f64 {
        self.columns as f64 * self.card_width + self.columns.saturating_sub(1) as f64 * self.spacing
    }

    /// Height of the whole grid including inner gaps.
    pub fn grid_height(&self) -> f64 {
        self.rows as f64 * self.card_height + self.rows.saturating_sub(1) as f64 * self.spacing
    }

    /// Where the `index`-th card of a batch goes on the given side.
    ///
    /// Back pages mirror the column so a sheet flipped along its long edge
    /// puts every back behind its front.
    pub fn slot(&self, index: usize, side: CardSide) -> GridSlot {
        let row = index / self.columns;
        let column = index % self.columns;
        match side {
            CardSide::Front => GridSlot { row, column },
            CardSide::Back => GridSlot {
                row,
                column: self.columns - 1 - column,
            },
        }
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, slot: GridSlot) -> (f64, f64) {
        (
            self.margin_left + slot.column as f64 * (self.card_width + self.spacing),
            self.margin_top + slot.row as f64 * (self.card_height + self.spacing),
        )
    }

    pub fn cell_rect(&self, slot: GridSlot) -> Rect {
        let (x, y) = self.cell_origin(slot);
        Rect::new(x, y, self.card_width, self.card_height)
    }
}
