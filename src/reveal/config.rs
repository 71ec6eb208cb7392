use crate::foundation::{
    core::{Millis, Rect},
    error::{StoryError, StoryResult},
};

/// Delays that stage a block from first sight to fully typed text.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealTiming {
    /// From entering view to the card being revealed.
    pub reveal_delay: Millis,
    /// From reveal to the first typed character being scheduled.
    pub typing_start_delay: Millis,
    /// After `.`, `!` or `?`.
    pub sentence_pause: Millis,
    /// After `,`, `;` or `:`.
    pub clause_pause: Millis,
    /// After a space that follows an ellipsis.
    pub ellipsis_pause: Millis,
    /// Ordinary characters wait a uniform delay in `[char_min, char_max)`.
    pub char_min: Millis,
    pub char_max: Millis,
    /// Length of the card entrance transition.
    pub entrance: Millis,
    /// Half-period of the typing cursor blink.
    pub cursor_blink: Millis,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            reveal_delay: Millis(100),
            typing_start_delay: Millis(300),
            sentence_pause: Millis(400),
            clause_pause: Millis(200),
            ellipsis_pause: Millis(600),
            char_min: Millis(50),
            char_max: Millis(80),
            entrance: Millis(1000),
            cursor_blink: Millis(1000),
        }
    }
}

impl RevealTiming {
    pub fn validate(&self) -> StoryResult<()> {
        if self.char_min > self.char_max {
            return Err(StoryError::validation(format!(
                "char_min ({}ms) must be <= char_max ({}ms)",
                self.char_min.0, self.char_max.0
            )));
        }
        if self.char_max.0 == 0 {
            return Err(StoryError::validation("char_max must be > 0"));
        }
        Ok(())
    }
}

/// Per-edge offsets applied to the viewport before intersection testing.
/// Negative values shrink the viewport, like a CSS `rootMargin`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn apply(&self, r: Rect) -> Rect {
        Rect::new(
            r.x0 - self.left,
            r.y0 - self.top,
            r.x1 + self.right,
            r.y1 + self.bottom,
        )
    }
}

/// When a block counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisibilityOptions {
    /// Fraction of the block's area that must be inside the (margin-adjusted) viewport.
    pub threshold: f64,
    pub root_margin: Margins,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            root_margin: Margins {
                bottom: -100.0,
                ..Margins::default()
            },
        }
    }
}

impl VisibilityOptions {
    pub fn validate(&self) -> StoryResult<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(StoryError::validation(format!(
                "visibility threshold must lie in [0, 1] (got {})",
                self.threshold
            )));
        }
        let m = self.root_margin;
        if ![m.top, m.right, m.bottom, m.left].iter().all(|v| v.is_finite()) {
            return Err(StoryError::validation("root margins must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/config.rs"]
mod tests;
