//! Typewriter pacing: how long to wait after each revealed character.

use crate::{
    foundation::{core::Millis, math::Rng64},
    reveal::config::RevealTiming,
};

/// Kind of pause that follows a revealed character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Pause {
    Sentence,
    Clause,
    Ellipsis,
    Natural,
}

/// Classify the pause after `chars[index]`, the character just revealed.
pub fn classify(chars: &[char], index: usize) -> Pause {
    match chars.get(index).copied() {
        Some('.' | '!' | '?') => Pause::Sentence,
        Some(',' | ';' | ':') => Pause::Clause,
        Some(' ') if follows_ellipsis(chars, index) => Pause::Ellipsis,
        _ => Pause::Natural,
    }
}

fn follows_ellipsis(chars: &[char], index: usize) -> bool {
    let dots = index >= 3 && chars[index - 3..index] == ['.', '.', '.'];
    let glyph = index >= 1 && chars[index - 1] == '\u{2026}';
    dots || glyph
}

/// Delay before the character after `chars[index]` is revealed.
pub fn delay_after(chars: &[char], index: usize, timing: &RevealTiming, rng: &mut Rng64) -> Millis {
    match classify(chars, index) {
        Pause::Sentence => timing.sentence_pause,
        Pause::Clause => timing.clause_pause,
        Pause::Ellipsis => timing.ellipsis_pause,
        Pause::Natural => natural_delay(timing, rng),
    }
}

/// Jittered delay in `[char_min, char_max)`.
pub fn natural_delay(timing: &RevealTiming, rng: &mut Rng64) -> Millis {
    Millis(rng.range_u64(timing.char_min.0, timing.char_max.0))
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/pacing.rs"]
mod tests;
