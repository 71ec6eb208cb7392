use crate::foundation::error::{StoryError, StoryResult};

/// Timing curves used by the reveal and ambient layers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    /// Symmetric sine ease, used for blinking and sparkle pulses.
    InOutSine,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// The card entrance curve, `cubic-bezier(0.25, 0.46, 0.45, 0.94)`.
    pub const ENTRANCE: Self = Self::CubicBezier {
        x1: 0.25,
        y1: 0.46,
        x2: 0.45,
        y2: 0.94,
    };

    pub fn validate(self) -> StoryResult<()> {
        if let Self::CubicBezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(StoryError::animation("cubic-bezier control points must be finite"));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(StoryError::animation(
                    "cubic-bezier x control points must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let s = solve_bezier_param(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }
}

fn bezier_component(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

// Find s with x(s) == x. Newton first, bisection when the slope is too flat.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(s, x1, x2) - x;
        if err.abs() < 1e-7 {
            return s;
        }
        let d = bezier_slope(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let v = bezier_component(s, x1, x2);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
