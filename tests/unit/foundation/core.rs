use super::*;

#[test]
fn millis_since_saturates() {
    assert_eq!(Millis(500).since(Millis(200)), Millis(300));
    assert_eq!(Millis(200).since(Millis(500)), Millis::ZERO);
    assert_eq!(Millis(u64::MAX).saturating_add(Millis(1)), Millis(u64::MAX));
}

#[test]
fn viewport_rejects_bad_dimensions() {
    assert!(Viewport::new(800.0, 600.0).is_ok());
    assert!(Viewport::new(-1.0, 600.0).is_err());
    assert!(Viewport::new(800.0, f64::NAN).is_err());
}

#[test]
fn viewport_rect_follows_scroll() {
    let vp = Viewport::new(400.0, 300.0).unwrap();
    assert_eq!(vp.rect_at(120.0), Rect::new(0.0, 120.0, 400.0, 420.0));
}
