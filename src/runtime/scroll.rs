/// Fraction of `scroll_y` applied as background parallax offset.
pub const PARALLAX_FACTOR: f64 = 0.1;
/// The "scroll down" hint hides once the page has scrolled this far.
pub const SCROLL_HINT_CUTOFF: f64 = 100.0;

/// Page-level scroll position and the values derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    scroll_y: f64,
    viewport_height: f64,
    document_height: f64,
}

impl ScrollTracker {
    pub fn new(viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height,
            document_height,
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn set_scroll(&mut self, scroll_y: f64) {
        self.scroll_y = if scroll_y.is_finite() {
            scroll_y.max(0.0)
        } else {
            0.0
        };
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    pub fn set_document_height(&mut self, height: f64) {
        self.document_height = height;
    }

    /// Scroll progress in `[0, 1]`.
    ///
    /// Pages with no scrollable range (document no taller than the viewport) report 1.0.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if !(range > 0.0) {
            return 1.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0)
    }

    pub fn parallax_offset(&self) -> f64 {
        self.scroll_y * PARALLAX_FACTOR
    }

    pub fn show_scroll_hint(&self) -> bool {
        self.scroll_y < SCROLL_HINT_CUTOFF
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scroll.rs"]
mod tests;
