use super::*;

#[test]
fn unmounted_view_carries_chapter_decorations() {
    let block = ContentBlock {
        text: "héllo".to_string(),
        order: 2,
        total_count: 3,
    };
    let v = BlockView::unmounted(&block);
    assert!(!v.mounted);
    assert_eq!(v.heading, "Final Chapter");
    assert_eq!(v.title, "Dreams & Reality");
    assert!(v.last && !v.first);
    assert_eq!(v.phase, RevealPhase::Unseen);
    assert_eq!(v.total_len, 5);
    assert!(v.cursor_opacity.is_none());
}

#[test]
fn fresh_sequencer_view_is_mounted_and_hidden() {
    let block = ContentBlock {
        text: "hi".to_string(),
        order: 0,
        total_count: 2,
    };
    let seq = RevealSequencer::new(block, RevealTiming::default(), 0);
    let v = BlockView::of(&seq, Millis(5_000), &RevealTiming::default());
    assert!(v.mounted);
    assert_eq!(v.heading, "Chapter 1");
    assert_eq!(v.entrance, 0.0);
    assert_eq!(v.text, "");
    assert!(v.flourish.is_none());
}

#[test]
fn progress_clamps_and_handles_zero_duration() {
    assert_eq!(progress(Millis(500), Millis(1000)), 0.5);
    assert_eq!(progress(Millis(5000), Millis(1000)), 1.0);
    assert_eq!(progress(Millis(5), Millis(0)), 1.0);
}

#[test]
fn cursor_blinks_between_full_and_hidden() {
    let half = Millis(1000);
    assert_eq!(blink(Millis(0), half), 1.0);
    assert!((blink(Millis(500), half) - 0.5).abs() < 1e-12);
    assert_eq!(blink(Millis(1000), half), 0.0);
    assert_eq!(blink(Millis(2000), half), 1.0);
    assert_eq!(blink(Millis(10), Millis(0)), 1.0);
}
