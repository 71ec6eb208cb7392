use crate::foundation::error::{StoryError, StoryResult};

pub use kurbo::{Point, Rect};

/// Virtual time in milliseconds. Used both for instants on the story clock and
/// for delays.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Time elapsed from `earlier` to `self`, zero if `earlier` is later.
    pub fn since(self, earlier: Self) -> Self {
        Self(self.0.saturating_sub(earlier.0))
    }
}

/// Stable identity of a content block: its zero-based position in the story.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BlockId(pub usize);

/// Host viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> StoryResult<Self> {
        let vp = Self { width, height };
        vp.validate()?;
        Ok(vp)
    }

    /// Fields are public, so entry points re-check literals here.
    pub fn validate(self) -> StoryResult<()> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(StoryError::validation(format!(
                "viewport dimensions must be finite and non-negative (got {}x{})",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// The visible window in document coordinates when scrolled to `scroll_y`.
    pub fn rect_at(self, scroll_y: f64) -> Rect {
        Rect::new(0.0, scroll_y, self.width, scroll_y + self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
