use super::*;

#[test]
fn ratio_of_disjoint_and_nested_rects() {
    let root = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(intersection_ratio(Rect::new(0.0, 200.0, 100.0, 300.0), root), 0.0);
    assert_eq!(intersection_ratio(Rect::new(10.0, 10.0, 20.0, 20.0), root), 1.0);
    assert_eq!(intersection_ratio(Rect::new(0.0, 50.0, 100.0, 150.0), root), 0.5);
}

#[test]
fn zero_area_target_inside_root_is_visible() {
    let root = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(intersection_ratio(Rect::new(5.0, 5.0, 5.0, 5.0), root), 1.0);
    assert_eq!(intersection_ratio(Rect::new(500.0, 5.0, 500.0, 5.0), root), 0.0);
}

#[test]
fn threshold_decides_signal() {
    let opts = VisibilityOptions::default();
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    // Effective root is 0..500 after the -100 bottom margin.
    let block = Rect::new(0.0, 420.0, 800.0, 620.0);
    // 80 of 200 px visible = 0.4.
    assert!(is_intersecting(block, viewport, &opts));

    let lower = Rect::new(0.0, 460.0, 800.0, 660.0);
    // 40 of 200 px visible = 0.2.
    assert!(!is_intersecting(lower, viewport, &opts));
}

#[test]
fn margin_delays_trigger_near_bottom_edge() {
    let opts = VisibilityOptions::default();
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    // Fully inside the raw viewport but entirely inside the trimmed 100px band.
    let block = Rect::new(0.0, 520.0, 800.0, 580.0);
    assert!(!is_intersecting(block, viewport, &opts));
}

#[test]
fn collapsed_root_never_intersects() {
    let opts = VisibilityOptions::default();
    let tiny = Rect::new(0.0, 0.0, 800.0, 50.0);
    assert!(!is_intersecting(Rect::new(0.0, 0.0, 800.0, 10.0), tiny, &opts));
}
