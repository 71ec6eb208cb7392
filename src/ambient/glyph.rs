use crate::{animation::keyframes::LoopClock, foundation::core::Point};

/// Palette for the main floating pool.
pub const HEART_PALETTE: [&str; 10] = ["💖", "💕", "💗", "💝", "💘", "🌹", "💌", "✨", "🦋", "🌸"];
pub const SPARKLE_GLYPH: &str = "✨";
pub const PETAL_GLYPH: &str = "🌸";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GlyphKind {
    /// Rises from below the viewport to above it.
    Heart,
    /// Pulses in place.
    Sparkle,
    /// Falls from above the viewport to below it.
    Petal,
}

impl GlyphKind {
    /// Horizontal sway keyframes as multiples of a glyph's sway magnitude.
    pub fn sway_pattern(self) -> [f64; 5] {
        match self {
            Self::Heart => [0.0, 1f64.sin(), -2f64.sin() * 0.7, 3f64.sin() * 0.5, 0.0],
            // Petal amplitudes are 60/40/30px against a 60px magnitude.
            Self::Petal => [
                0.0,
                0.5f64.sin(),
                -1f64.sin() * (40.0 / 60.0),
                1.5f64.sin() * 0.5,
                0.0,
            ],
            Self::Sparkle => [0.0; 5],
        }
    }
}

/// One member of the ambient pool. Sampled once and never changed afterwards.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AmbientGlyph {
    pub id: usize,
    pub kind: GlyphKind,
    pub emoji: &'static str,
    /// Horizontal origin for travelling glyphs; full position for sparkles.
    pub origin: Point,
    pub scale: f64,
    pub clock: LoopClock,
    pub sway: f64,
}
