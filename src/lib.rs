//! Storyreveal drives a scroll-told story page: a sequence of text blocks revealed
//! as they scroll into view and typed out character by character, over a layer of
//! ambient floating glyphs.
//!
//! # Model
//!
//! - **Reveal sequencer**: one [`RevealSequencer`] per block, a one-way state machine
//!   `Unseen -> Revealing -> Typing -> Complete` fed visibility and timer events.
//! - **Ambient layer**: an [`AmbientLayer`] with a fixed, seed-sampled pool of glyphs
//!   looping forever, independent of scrolling and of every block.
//! - **Story**: the [`Story`] host owns both, plus a virtual-time [`TimerQueue`], and
//!   produces a serializable [`StorySnapshot`] for rendering.
//!
//! Everything is single-threaded and deterministic for a given seed: time only moves
//! when the host calls [`Story::advance_to`].
#![forbid(unsafe_code)]

mod ambient;
mod animation;
mod foundation;
mod reveal;
mod runtime;

pub use ambient::glyph::{AmbientGlyph, GlyphKind, HEART_PALETTE, PETAL_GLYPH, SPARKLE_GLYPH};
pub use ambient::layer::{
    AmbientConfig, AmbientLayer, GlyphFrame, MAX_POOL_GLYPHS, PoolConfig, Span,
};
pub use animation::ease::Ease;
pub use animation::keyframes::{Lerp, LoopClock, LoopPhase, Track};
pub use foundation::core::{BlockId, Millis, Point, Rect, Viewport};
pub use foundation::error::{StoryError, StoryResult};
pub use foundation::math::{Rng64, seed_for};
pub use reveal::chapter;
pub use reveal::config::{Margins, RevealTiming, VisibilityOptions};
pub use reveal::pacing::{Pause, classify, delay_after, natural_delay};
pub use reveal::sequencer::{
    ContentBlock, RevealEvent, RevealPhase, RevealSequencer, RevealState, TimerId, Timers,
};
pub use reveal::visibility::{intersection_ratio, is_intersecting};
pub use runtime::layout::{LayoutConfig, StoryLayout};
pub use runtime::scroll::{PARALLAX_FACTOR, SCROLL_HINT_CUTOFF, ScrollTracker};
pub use runtime::snapshot::{BlockView, ScrollView, StorySnapshot};
pub use runtime::story::{Story, StoryConfig, StoryScript};
pub use runtime::timers::{Expired, OwnedTimers, TimerQueue};
