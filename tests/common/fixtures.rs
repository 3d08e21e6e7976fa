#![allow(dead_code)]

use deckpress::{Card, CardSide, Deck, PaperSize, RenderedCardImage};

/// A 2x2 RGB PNG, base64 encoded.
pub const TINY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAIAAAACCAIAAAD91JpzAAAAEElEQVR4nGM4IScHRAwQCgAfJgQRoo8irwAAAABJRU5ErkJggg==";

pub const POKER: (f64, f64) = (63.5, 88.9);
pub const JUMBO: (f64, f64) = (88.9, 127.0);
pub const MINI: (f64, f64) = (44.45, 63.5);

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

pub fn deck(size: (f64, f64), paper: PaperSize) -> Deck {
    let mut deck = Deck::new(size.0, size.1);
    deck.paper_size = paper;
    deck
}

/// A poker deck on letter paper holding `n` single-copy cards.
pub fn poker_deck(n: usize) -> Deck {
    let mut deck = deck(POKER, PaperSize::Letter);
    deck.cards = (0..n).map(|i| Card::new(format!("card-{}", i))).collect();
    deck
}

pub fn rendered(style: &str, side: CardSide, image: &str) -> RenderedCardImage {
    RenderedCardImage {
        style_id: style.to_string(),
        side,
        image: image.to_string(),
    }
}

/// Images for the default front and back styles.
pub fn default_images() -> Vec<RenderedCardImage> {
    vec![
        rendered("default-front", CardSide::Front, TINY_PNG_BASE64),
        rendered(
            "default-back",
            CardSide::Back,
            &format!("data:image/png;base64,{}", TINY_PNG_BASE64),
        ),
    ]
}
