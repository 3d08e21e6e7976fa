use deckpress_types::Color;

/// On/off lengths of a dashed stroke, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

/// How an unfilled rectangle is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    pub color: Color,
    /// Line width in points.
    pub line_width: f32,
    pub dash: Option<DashPattern>,
}

impl RectStyle {
    pub fn solid(color: Color, line_width: f32) -> Self {
        Self {
            color,
            line_width,
            dash: None,
        }
    }

    pub fn dashed(color: Color, line_width: f32, dash: DashPattern) -> Self {
        Self {
            color,
            line_width,
            dash: Some(dash),
        }
    }
}
