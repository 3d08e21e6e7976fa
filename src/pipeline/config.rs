use deckpress_render_core::{DashPattern, RectStyle};
use deckpress_types::Color;

/// Drawing settings that do not come from the deck itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Title written into the document metadata.
    pub title: String,
    /// Border drawn in place of a card face that has no image.
    pub placeholder: RectStyle,
    /// Dashed outline drawn around every cell when the deck asks for cut guides.
    pub cut_guide: RectStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Card Sheets".to_string(),
            placeholder: RectStyle::solid(Color::gray(200), 1.0),
            cut_guide: RectStyle::dashed(
                Color::gray(150),
                1.0,
                DashPattern { dash: 1.0, gap: 1.0 },
            ),
        }
    }
}
