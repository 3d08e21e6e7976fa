//! Pagination and duplex imposition.
//!
//! The expanded card sequence is cut into batches of one sheet each. Every
//! batch yields a front page immediately followed by its back page, and the
//! back page mirrors columns so that a sheet flipped along its long edge puts
//! each back behind its own front.

use crate::deck::Card;
use deckpress_layout::{GridLayout, GridSlot};
use deckpress_traits::ImageProvider;
use deckpress_types::{CardSide, ImageKey, Rect, Size};
use std::collections::BTreeSet;

/// Flattens cards by their repeat count, keeping deck order.
pub fn expand_cards(cards: &[Card]) -> Vec<&Card> {
    let mut expanded = Vec::with_capacity(cards.iter().map(Card::copies).sum());
    for card in cards {
        expanded.extend(std::iter::repeat_n(card, card.copies()));
    }
    expanded
}

/// What ends up inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    /// The rendered image for the cell's key.
    Image,
    /// No image exists for the key; a light border marks the cell instead.
    Placeholder,
}

/// One card copy placed on one side of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCard {
    /// Index into the expanded card sequence.
    pub position: usize,
    pub card_id: String,
    pub slot: GridSlot,
    pub rect: Rect,
    pub key: ImageKey,
    pub content: CellContent,
    pub cut_guide: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetPage {
    pub side: CardSide,
    /// Zero-based sheet number; the front and back of a sheet share it.
    pub batch: usize,
    pub size: Size,
    pub cells: Vec<PlacedCard>,
}

#[allow(clippy::too_many_arguments)]
fn place_batch<P: ImageProvider + ?Sized>(
    batch: usize,
    first_position: usize,
    cards: &[&Card],
    side: CardSide,
    layout: &GridLayout,
    draw_cut_guides: bool,
    images: &P,
    missing: &mut BTreeSet<ImageKey>,
) -> SheetPage {
    let cells = cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let slot = layout.slot(index, side);
            let key = ImageKey::new(&card.style(side), side);
            let content = if images.contains(&key) {
                CellContent::Image
            } else {
                missing.insert(key.clone());
                CellContent::Placeholder
            };
            PlacedCard {
                position: first_position + index,
                card_id: card.id.clone(),
                slot,
                rect: layout.cell_rect(slot),
                key,
                content,
                cut_guide: draw_cut_guides,
            }
        })
        .collect();

    SheetPage {
        side,
        batch,
        size: layout.page_size(),
        cells,
    }
}

/// Lays out an expanded card sequence as alternating front and back pages.
///
/// Produces `2 * ceil(cards / cards_per_page)` pages and nothing for an
/// empty sequence. The last sheet may be partially filled; its empty cells
/// are simply not listed.
pub fn paginate<P: ImageProvider + ?Sized>(
    cards: &[&Card],
    layout: &GridLayout,
    draw_cut_guides: bool,
    images: &P,
) -> Vec<SheetPage> {
    let per_page = layout.cards_per_page();
    let mut pages = Vec::with_capacity(2 * cards.len().div_ceil(per_page));
    let mut missing = BTreeSet::new();

    for (batch, chunk) in cards.chunks(per_page).enumerate() {
        let first_position = batch * per_page;
        for side in [CardSide::Front, CardSide::Back] {
            pages.push(place_batch(
                batch,
                first_position,
                chunk,
                side,
                layout,
                draw_cut_guides,
                images,
                &mut missing,
            ));
        }
    }

    for key in &missing {
        log::warn!("No rendered image for '{}', drawing placeholder borders", key);
    }
    log::debug!(
        "Paginated {} cards into {} pages ({} per sheet)",
        cards.len(),
        pages.len(),
        per_page
    );
    pages
}
