use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoryError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StoryError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        StoryError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: StoryError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, StoryError::Serde(_)));
}
