/// Points per millimetre (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f64) -> f64 {
    mm * PT_PER_MM
}

/// Convert a top-left-origin y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f64, page_height: f64) -> f64 {
    page_height - y
}
