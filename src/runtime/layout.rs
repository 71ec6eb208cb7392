use crate::foundation::{
    core::Rect,
    error::{StoryError, StoryResult},
};

/// Vertical rhythm used to place blocks in document space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Space taken by the title and introduction above the first block.
    pub header_height: f64,
    pub block_height: f64,
    /// Height of the first and last blocks.
    pub feature_block_height: f64,
    /// Space below every block.
    pub gap: f64,
    pub footer_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 900.0,
            block_height: 160.0,
            feature_block_height: 200.0,
            gap: 80.0,
            footer_height: 600.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> StoryResult<()> {
        let fields = [
            ("header_height", self.header_height),
            ("block_height", self.block_height),
            ("feature_block_height", self.feature_block_height),
            ("gap", self.gap),
            ("footer_height", self.footer_height),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(StoryError::validation(format!(
                    "layout {name} must be finite and non-negative (got {v})"
                )));
            }
        }
        Ok(())
    }
}

/// Block rectangles stacked top to bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct StoryLayout {
    rects: Vec<Rect>,
    document_height: f64,
}

impl StoryLayout {
    pub fn stacked(count: usize, width: f64, config: &LayoutConfig) -> Self {
        let mut y = config.header_height;
        let mut rects = Vec::with_capacity(count);
        for i in 0..count {
            let h = if i == 0 || i + 1 == count {
                config.feature_block_height
            } else {
                config.block_height
            };
            rects.push(Rect::new(0.0, y, width, y + h));
            y += h + config.gap;
        }
        Self {
            rects,
            document_height: y + config.footer_height,
        }
    }

    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied()
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn document_height(&self) -> f64 {
        self.document_height
    }

    /// Scroll offset that brings the top of block `index` to the top of the viewport.
    pub fn scroll_to_block(&self, index: usize) -> Option<f64> {
        self.rect(index).map(|r| r.y0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/layout.rs"]
mod tests;
