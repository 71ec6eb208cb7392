//! Page-level floating glyph animation. Independent of scroll and reveal state.

use crate::{
    ambient::glyph::{AmbientGlyph, GlyphKind, HEART_PALETTE, PETAL_GLYPH, SPARKLE_GLYPH},
    animation::{
        ease::Ease,
        keyframes::{LoopClock, LoopPhase, Track},
    },
    foundation::{
        core::{Millis, Point, Viewport},
        error::{StoryError, StoryResult},
        math::{Rng64, seed_for},
    },
};

/// Half-open sampling range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Span<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn fixed(v: T) -> Self {
        Self { min: v, max: v }
    }

    fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

/// Upper bound on the glyph count of a single pool.
pub const MAX_POOL_GLYPHS: usize = 1_000;

/// One pool of same-kind glyphs. Inside [`AmbientConfig`], missing JSON fields keep
/// that pool's own defaults; standalone, they default to the heart pool.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub count: usize,
    pub period: Span<Millis>,
    pub delay: Span<Millis>,
    pub scale: Span<f64>,
    pub sway: Span<f64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::hearts()
    }
}

impl PoolConfig {
    pub fn hearts() -> Self {
        Self {
            count: 12,
            period: Span::new(Millis(8_000), Millis(14_000)),
            delay: Span::new(Millis(0), Millis(8_000)),
            scale: Span::new(1.2, 2.7),
            sway: Span::new(40.0, 120.0),
        }
    }

    pub fn sparkles() -> Self {
        Self {
            count: 6,
            period: Span::fixed(Millis(3_000)),
            delay: Span::new(Millis(0), Millis(5_000)),
            scale: Span::fixed(0.8),
            sway: Span::fixed(0.0),
        }
    }

    pub fn petals() -> Self {
        Self {
            count: 4,
            period: Span::new(Millis(12_000), Millis(20_000)),
            delay: Span::new(Millis(0), Millis(6_000)),
            scale: Span::fixed(1.2),
            sway: Span::fixed(60.0),
        }
    }

    fn validate(&self, name: &str) -> StoryResult<()> {
        if self.count > MAX_POOL_GLYPHS {
            return Err(StoryError::validation(format!(
                "{name} pool count must be <= {MAX_POOL_GLYPHS} (got {})",
                self.count
            )));
        }
        if !self.period.is_ordered()
            || !self.delay.is_ordered()
            || !self.scale.is_ordered()
            || !self.sway.is_ordered()
        {
            return Err(StoryError::validation(format!(
                "{name} pool ranges must have min <= max"
            )));
        }
        if self.count > 0 && self.period.min.0 == 0 {
            return Err(StoryError::validation(format!(
                "{name} pool loop period must be > 0"
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    #[serde(deserialize_with = "partial::hearts")]
    pub hearts: PoolConfig,
    #[serde(deserialize_with = "partial::sparkles")]
    pub sparkles: PoolConfig,
    #[serde(deserialize_with = "partial::petals")]
    pub petals: PoolConfig,
    /// Distance below the viewport where rising glyphs start.
    pub rise_from_below: f64,
    /// Distance above the viewport where rising glyphs end.
    pub rise_to_above: f64,
    /// Distance above the viewport where falling glyphs start.
    pub fall_from_above: f64,
    /// Distance below the viewport where falling glyphs end.
    pub fall_to_below: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            hearts: PoolConfig::hearts(),
            sparkles: PoolConfig::sparkles(),
            petals: PoolConfig::petals(),
            rise_from_below: 100.0,
            rise_to_above: 150.0,
            fall_from_above: 100.0,
            fall_to_below: 100.0,
        }
    }
}

impl AmbientConfig {
    pub fn validate(&self) -> StoryResult<()> {
        self.hearts.validate("hearts")?;
        self.sparkles.validate("sparkles")?;
        self.petals.validate("petals")?;
        Ok(())
    }

    pub fn pool_size(&self) -> StoryResult<usize> {
        [self.hearts.count, self.sparkles.count, self.petals.count]
            .into_iter()
            .try_fold(0usize, usize::checked_add)
            .ok_or_else(|| StoryError::validation("ambient pool size overflows"))
    }
}

/// Per-pool partial deserialization: fields absent from JSON keep that pool's
/// own defaults rather than the heart pool's.
mod partial {
    use super::{PoolConfig, Span};
    use crate::foundation::core::Millis;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct PoolPatch {
        count: Option<usize>,
        period: Option<Span<Millis>>,
        delay: Option<Span<Millis>>,
        scale: Option<Span<f64>>,
        sway: Option<Span<f64>>,
    }

    impl PoolPatch {
        fn onto(self, base: PoolConfig) -> PoolConfig {
            PoolConfig {
                count: self.count.unwrap_or(base.count),
                period: self.period.unwrap_or(base.period),
                delay: self.delay.unwrap_or(base.delay),
                scale: self.scale.unwrap_or(base.scale),
                sway: self.sway.unwrap_or(base.sway),
            }
        }
    }

    fn onto<'de, D: Deserializer<'de>>(d: D, base: PoolConfig) -> Result<PoolConfig, D::Error> {
        PoolPatch::deserialize(d).map(|patch| patch.onto(base))
    }

    pub(super) fn hearts<'de, D: Deserializer<'de>>(d: D) -> Result<PoolConfig, D::Error> {
        onto(d, PoolConfig::hearts())
    }

    pub(super) fn sparkles<'de, D: Deserializer<'de>>(d: D) -> Result<PoolConfig, D::Error> {
        onto(d, PoolConfig::sparkles())
    }

    pub(super) fn petals<'de, D: Deserializer<'de>>(d: D) -> Result<PoolConfig, D::Error> {
        onto(d, PoolConfig::petals())
    }
}

/// Rendered state of one glyph at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GlyphFrame {
    pub id: usize,
    pub kind: GlyphKind,
    pub emoji: &'static str,
    pub position: Point,
    pub opacity: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    /// Loop iteration, `None` while waiting out the start delay.
    pub iteration: Option<u64>,
}

struct Motion {
    opacity: Track<f64>,
    scale: Track<f64>,
    rotation: Track<f64>,
    sway: Track<f64>,
}

impl Motion {
    fn for_kind(kind: GlyphKind) -> StoryResult<Self> {
        let sway = kind.sway_pattern().to_vec();
        Ok(match kind {
            GlyphKind::Heart => {
                let times = vec![0.0, 0.15, 0.4, 0.8, 1.0];
                Self {
                    opacity: Track::with_times(
                        vec![0.0, 0.8, 0.9, 0.7, 0.0],
                        times.clone(),
                        Ease::Linear,
                    )?,
                    scale: Track::even(vec![0.0, 0.6, 1.0, 1.1, 0.8, 0.0], Ease::Linear)?,
                    rotation: Track::even(vec![0.0, 180.0, 360.0], Ease::Linear)?,
                    sway: Track::with_times(sway, times, Ease::Linear)?,
                }
            }
            GlyphKind::Sparkle => Self {
                opacity: Track::even(vec![0.0, 1.0, 0.0], Ease::InOutSine)?,
                scale: Track::even(vec![0.0, 1.0, 0.0], Ease::InOutSine)?,
                rotation: Track::even(vec![0.0, 180.0, 360.0], Ease::InOutSine)?,
                sway: Track::even(sway, Ease::Linear)?,
            },
            GlyphKind::Petal => Self {
                opacity: Track::even(vec![0.0, 0.7, 0.5, 0.0], Ease::Linear)?,
                scale: Track::even(vec![1.0], Ease::Linear)?,
                rotation: Track::even(vec![0.0, 180.0, 360.0], Ease::Linear)?,
                sway: Track::even(sway, Ease::Linear)?,
            },
        })
    }
}

/// Fixed pool of decorative glyphs looping forever.
pub struct AmbientLayer {
    config: AmbientConfig,
    glyphs: Vec<AmbientGlyph>,
    /// Viewport the origins were sampled against.
    sampled_for: Viewport,
    viewport: Viewport,
    hearts: Motion,
    sparkles: Motion,
    petals: Motion,
}

impl AmbientLayer {
    pub fn new(config: AmbientConfig, viewport: Viewport, seed: u64) -> StoryResult<Self> {
        config.validate()?;
        viewport.validate()?;
        let mut rng = Rng64::new(seed_for(seed, "ambient", 0));
        let mut glyphs = Vec::with_capacity(config.pool_size()?);

        let pools = [
            (GlyphKind::Heart, &config.hearts),
            (GlyphKind::Sparkle, &config.sparkles),
            (GlyphKind::Petal, &config.petals),
        ];
        for (kind, pool) in pools {
            for _ in 0..pool.count {
                let id = glyphs.len();
                glyphs.push(draw_glyph(id, kind, pool, viewport, &mut rng));
            }
        }
        tracing::debug!(
            glyphs = glyphs.len(),
            width = viewport.width,
            height = viewport.height,
            "ambient layer mounted"
        );

        Ok(Self {
            config,
            glyphs,
            sampled_for: viewport,
            viewport,
            hearts: Motion::for_kind(GlyphKind::Heart)?,
            sparkles: Motion::for_kind(GlyphKind::Sparkle)?,
            petals: Motion::for_kind(GlyphKind::Petal)?,
        })
    }

    pub fn glyphs(&self) -> &[AmbientGlyph] {
        &self.glyphs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt new viewport bounds. The pool itself is left untouched.
    pub fn resize(&mut self, viewport: Viewport) -> StoryResult<()> {
        viewport.validate()?;
        self.viewport = viewport;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "ambient layer resized"
        );
        Ok(())
    }

    pub fn sample(&self, now: Millis) -> Vec<GlyphFrame> {
        self.glyphs.iter().map(|g| self.sample_glyph(g, now)).collect()
    }

    pub fn sample_glyph(&self, glyph: &AmbientGlyph, now: Millis) -> GlyphFrame {
        let motion = match glyph.kind {
            GlyphKind::Heart => &self.hearts,
            GlyphKind::Sparkle => &self.sparkles,
            GlyphKind::Petal => &self.petals,
        };
        let (iteration, progress) = match glyph.clock.phase_at(now) {
            LoopPhase::Waiting => (None, 0.0),
            LoopPhase::Running {
                iteration,
                progress,
            } => (Some(iteration), progress),
        };

        let origin = self.map_origin(glyph.origin);
        let h = self.viewport.height;
        let y = match glyph.kind {
            GlyphKind::Heart => {
                let from = h + self.config.rise_from_below;
                let to = -self.config.rise_to_above;
                from + (to - from) * progress
            }
            GlyphKind::Petal => {
                let from = -self.config.fall_from_above;
                let to = h + self.config.fall_to_below;
                from + (to - from) * progress
            }
            GlyphKind::Sparkle => origin.y,
        };
        let x = origin.x + motion.sway.sample(progress) * glyph.sway;

        // Before the first loop starts the glyph sits at its initial keyframe.
        let (opacity, scale, rotation_deg) = if iteration.is_none() {
            (0.0, 0.0, 0.0)
        } else {
            (
                motion.opacity.sample(progress),
                motion.scale.sample(progress) * glyph.scale,
                motion.rotation.sample(progress),
            )
        };

        GlyphFrame {
            id: glyph.id,
            kind: glyph.kind,
            emoji: glyph.emoji,
            position: Point::new(x, y),
            opacity,
            scale,
            rotation_deg,
            iteration,
        }
    }

    // Origins are stored against the viewport they were sampled for; rescale them into
    // the current one so glyphs stay on screen after a resize.
    fn map_origin(&self, origin: Point) -> Point {
        let ratio = |now: f64, then: f64| if then > 0.0 { now / then } else { 1.0 };
        Point::new(
            origin.x * ratio(self.viewport.width, self.sampled_for.width),
            origin.y * ratio(self.viewport.height, self.sampled_for.height),
        )
    }
}

fn draw_glyph(
    id: usize,
    kind: GlyphKind,
    pool: &PoolConfig,
    viewport: Viewport,
    rng: &mut Rng64,
) -> AmbientGlyph {
    let emoji = match kind {
        GlyphKind::Heart => rng.pick(&HEART_PALETTE).copied().unwrap_or(HEART_PALETTE[0]),
        GlyphKind::Sparkle => SPARKLE_GLYPH,
        GlyphKind::Petal => PETAL_GLYPH,
    };
    let x = rng.range_f64(0.0, viewport.width);
    let y = match kind {
        GlyphKind::Sparkle => rng.range_f64(0.0, viewport.height),
        GlyphKind::Heart | GlyphKind::Petal => 0.0,
    };
    let scale = rng.range_f64(pool.scale.min, pool.scale.max);
    let period = Millis(rng.range_u64(pool.period.min.0, pool.period.max.0));
    let delay = Millis(rng.range_u64(pool.delay.min.0, pool.delay.max.0));
    let sway = rng.range_f64(pool.sway.min, pool.sway.max);

    AmbientGlyph {
        id,
        kind,
        emoji,
        origin: Point::new(x, y),
        scale,
        clock: LoopClock { delay, period },
        sway,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ambient/layer.rs"]
mod tests;
