use super::*;

#[test]
fn known_chapters_have_titles_and_emoji() {
    assert_eq!(title(0), "The Beginning");
    assert_eq!(emoji(0), "🌸");
    assert_eq!(title(9), "The Truth That Never Changes");
    assert_eq!(flourish(1), Some("🎂👑"));
}

#[test]
fn out_of_range_chapters_fall_back() {
    assert_eq!(title(10), FALLBACK_TITLE);
    assert_eq!(emoji(usize::MAX), FALLBACK_EMOJI);
    assert_eq!(flourish(42), None);
}

#[test]
fn headings_mark_the_final_chapter() {
    assert_eq!(heading(0, 3), "Chapter 1");
    assert_eq!(heading(1, 3), "Chapter 2");
    assert_eq!(heading(2, 3), "Final Chapter");
    assert!(is_first(0));
    assert!(!is_last(0, 0));
    assert!(is_last(0, 1));
}
