/// Crate-wide result alias.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors raised at construction and configuration boundaries.
///
/// Event handling at runtime never produces these: stale timers and signals for
/// unmounted blocks are ignored, degenerate geometry is clamped.
#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    /// Invalid configuration or script input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed keyframe track or easing parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// JSON encoding/decoding failure.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl StoryError {
    /// Build a [`StoryError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StoryError::Animation`].
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`StoryError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
