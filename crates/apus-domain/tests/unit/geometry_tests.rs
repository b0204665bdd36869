//! Geometry tests

use apus_domain::value_objects::{Rect, Size};

#[test]
fn test_degenerate_aspect_ratio_is_zero() {
    assert_eq!(Size::new(10.0, 0.0).aspect_ratio(), 0.0);
    assert_eq!(Size::new(10.0, 5.0).aspect_ratio(), 2.0);
}

#[test]
fn test_rect_edges() {
    let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(rect.max_x(), 4.0);
    assert_eq!(rect.max_y(), 6.0);
    assert_eq!(rect.area(), 12.0);
}

#[test]
fn test_aspect_fit_pillarboxes_tall_images() {
    let rect = Rect::new(0.5, 0.0, 0.5, 1.0);
    let shown = rect.aspect_fit_to_display(Size::new(100.0, 200.0), Size::new(100.0, 100.0));

    // Image shown 50 wide, centered with a 25 offset
    assert_eq!(shown, Rect::new(50.0, 0.0, 25.0, 100.0));
}
