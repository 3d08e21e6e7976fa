use crate::{compute_layout, CardSide, GridSlot, LayoutError, PaperSize, Size};

const EPSILON: f64 = 0.1;

fn grid(width: f64, height: f64, paper: PaperSize) -> crate::GridLayout {
    compute_layout(Size::new(width, height), paper).unwrap()
}

#[test]
fn test_poker_on_letter_is_three_by_three() {
    let layout = grid(63.5, 88.9, PaperSize::Letter);
    assert_eq!((layout.columns, layout.rows), (3, 3));
    // Only the zero-spacing attempt reaches nine rows*columns on letter.
    assert_eq!(layout.spacing, 0.0);
}

#[test]
fn test_poker_on_a4_is_three_by_three() {
    let layout = grid(63.5, 88.9, PaperSize::A4);
    assert_eq!((layout.columns, layout.rows), (3, 3));
    assert_eq!(layout.spacing, 2.0);
}

#[test]
fn test_jumbo_on_letter_keeps_best_achievable() {
    let layout = grid(88.9, 127.0, PaperSize::Letter);
    assert_eq!((layout.columns, layout.rows), (2, 2));
    // No relaxation improved on four cards, so the ideal spacing is kept.
    assert_eq!(layout.spacing, 2.0);
}

#[test]
fn test_mini_on_letter_is_four_by_three() {
    let layout = grid(44.45, 63.5, PaperSize::Letter);
    assert_eq!((layout.columns, layout.rows), (4, 3));
    assert_eq!(layout.spacing, 2.0);
}

#[test]
fn test_exact_fit_boundaries_are_not_rounded_away() {
    // 207.9 / 69.3 is exactly three columns at margin 5, spacing 2.
    let layout = grid(67.3, 67.3, PaperSize::Letter);
    assert_eq!((layout.columns, layout.rows), (3, 3));
    assert_eq!(layout.spacing, 2.0);

    // 269.4 / 89.8 is exactly three rows once spacing is dropped.
    let layout = grid(89.8, 89.8, PaperSize::Letter);
    assert_eq!((layout.columns, layout.rows), (2, 3));
    assert_eq!(layout.spacing, 0.0);
}

#[test]
fn test_margins_center_the_grid() {
    let layout = grid(63.5, 88.9, PaperSize::A4);
    let expected_left = (210.0 - (3.0 * 63.5 + 2.0 * 2.0)) / 2.0;
    let expected_top = (297.0 - (3.0 * 88.9 + 2.0 * 2.0)) / 2.0;
    assert!((layout.margin_left - expected_left).abs() < 1e-3);
    assert!((layout.margin_top - expected_top).abs() < 1e-3);
}

#[test]
fn test_non_positive_dimensions_are_rejected() {
    for (w, h) in [(0.0, 88.9), (63.5, 0.0), (-1.0, 88.9), (63.5, -5.0), (f64::NAN, 10.0)] {
        let err = compute_layout(Size::new(w, h), PaperSize::Letter).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimension { .. }));
    }
}

#[test]
fn test_grid_invariants_hold_across_sizes() {
    for paper in [PaperSize::Letter, PaperSize::A4] {
        let mut width = 20.0_f64;
        while width <= 200.0 {
            let mut height = 20.0_f64;
            while height <= 270.0 {
                let layout = grid(width, height, paper);
                assert!(layout.columns >= 1 && layout.rows >= 1);
                assert!(layout.margin_left >= 0.0 && layout.margin_top >= 0.0);

                let total_w = layout.grid_width() + 2.0 * layout.margin_left;
                let total_h = layout.grid_height() + 2.0 * layout.margin_top;
                assert!(
                    total_w <= layout.page_width + EPSILON,
                    "{}x{} on {:?}: width {} exceeds {}",
                    width,
                    height,
                    paper,
                    total_w,
                    layout.page_width
                );
                assert!(total_h <= layout.page_height + EPSILON);
                height += 7.3;
            }
            width += 6.1;
        }
    }
}

#[test]
fn test_oversized_card_clamps_margins_to_zero() {
    let layout = grid(300.0, 400.0, PaperSize::Letter);
    assert_eq!((layout.columns, layout.rows), (1, 1));
    assert_eq!(layout.margin_left, 0.0);
    assert_eq!(layout.margin_top, 0.0);
}

#[test]
fn test_back_slots_mirror_columns() {
    let layout = grid(63.5, 88.9, PaperSize::A4);
    for index in 0..layout.cards_per_page() {
        let front = layout.slot(index, CardSide::Front);
        let back = layout.slot(index, CardSide::Back);
        assert_eq!(front.row, back.row);
        assert_eq!(back.column, layout.columns - 1 - front.column);
    }
    assert_eq!(layout.slot(0, CardSide::Back), GridSlot { row: 0, column: 2 });
    assert_eq!(layout.slot(5, CardSide::Front), GridSlot { row: 1, column: 2 });
}

#[test]
fn test_cell_rect_steps_by_card_plus_spacing() {
    let layout = grid(63.5, 88.9, PaperSize::A4);
    let first = layout.cell_rect(GridSlot { row: 0, column: 0 });
    let next = layout.cell_rect(GridSlot { row: 1, column: 1 });
    assert!((first.x - layout.margin_left).abs() < 1e-4);
    assert!((first.y - layout.margin_top).abs() < 1e-4);
    assert!((next.x - first.x - 65.5).abs() < 1e-3);
    assert!((next.y - first.y - 90.9).abs() < 1e-3);
    assert_eq!(next.width, 63.5);
    assert_eq!(next.height, 88.9);
}

#[test]
fn test_layout_serializes_with_editor_field_names() {
    let layout = grid(63.5, 88.9, PaperSize::A4);
    let json = serde_json::to_value(layout).unwrap();
    assert_eq!(json["cardsPerRow"], 3);
    assert_eq!(json["cardsPerCol"], 3);
    assert!(json.get("marginLeft").is_some());
    assert!(json.get("pageWidth").is_some());
}
