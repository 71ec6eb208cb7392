use super::*;

#[test]
fn stacked_layout_uses_feature_height_for_ends() {
    let cfg = LayoutConfig::default();
    let layout = StoryLayout::stacked(3, 1000.0, &cfg);
    let r: Vec<Rect> = layout.rects().to_vec();
    assert_eq!(r[0], Rect::new(0.0, 900.0, 1000.0, 1100.0));
    assert_eq!(r[1], Rect::new(0.0, 1180.0, 1000.0, 1340.0));
    assert_eq!(r[2], Rect::new(0.0, 1420.0, 1000.0, 1620.0));
    assert_eq!(layout.document_height(), 1700.0 + 600.0);
}

#[test]
fn empty_layout_is_header_and_footer() {
    let cfg = LayoutConfig::default();
    let layout = StoryLayout::stacked(0, 1000.0, &cfg);
    assert!(layout.rects().is_empty());
    assert_eq!(layout.document_height(), 1500.0);
    assert!(layout.rect(0).is_none());
}

#[test]
fn scroll_to_block_targets_block_top() {
    let layout = StoryLayout::stacked(2, 500.0, &LayoutConfig::default());
    assert_eq!(layout.scroll_to_block(1), Some(1180.0));
    assert_eq!(layout.scroll_to_block(5), None);
}

#[test]
fn negative_dimensions_are_rejected() {
    let cfg = LayoutConfig {
        gap: -1.0,
        ..LayoutConfig::default()
    };
    assert!(cfg.validate().is_err());
}
