//! Per-block reveal state machine.
//!
//! A block moves `Unseen -> Revealing -> Typing -> Complete` and never back. The
//! sequencer does not own a clock: it asks a [`Timers`] facility to schedule wakeups
//! and is fed [`RevealEvent`]s by its host.

use crate::{
    foundation::{core::Millis, math::Rng64},
    reveal::{
        config::RevealTiming,
        pacing::{delay_after, natural_delay},
    },
};

/// Handle to a scheduled wakeup.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimerId(pub u64);

/// Scheduling facility a sequencer runs against.
pub trait Timers {
    fn now(&self) -> Millis;
    fn start(&mut self, delay: Millis) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// Read-only input describing one block of the story.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentBlock {
    pub text: String,
    /// Zero-based position; cosmetic only.
    pub order: usize,
    pub total_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RevealPhase {
    Unseen,
    Revealing,
    Typing,
    Complete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RevealState {
    pub has_entered_view: bool,
    pub is_revealed: bool,
    pub is_typing: bool,
    /// Characters (not bytes) of the text currently shown.
    pub disclosed_len: usize,
    pub is_complete: bool,
    pub revealed_at: Option<Millis>,
    pub typing_started_at: Option<Millis>,
}

impl RevealState {
    pub fn phase(&self) -> RevealPhase {
        if self.is_complete {
            RevealPhase::Complete
        } else if self.is_typing {
            RevealPhase::Typing
        } else if self.has_entered_view {
            RevealPhase::Revealing
        } else {
            RevealPhase::Unseen
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RevealEvent {
    Visibility(bool),
    Timer(TimerId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    RevealDelay,
    TypingStart,
    Advance,
}

pub struct RevealSequencer {
    block: ContentBlock,
    chars: Vec<char>,
    timing: RevealTiming,
    rng: Rng64,
    state: RevealState,
    pending: Option<(TimerId, Stage)>,
    live: bool,
}

impl RevealSequencer {
    pub fn new(block: ContentBlock, timing: RevealTiming, seed: u64) -> Self {
        let chars = block.text.chars().collect();
        Self {
            block,
            chars,
            timing,
            rng: Rng64::new(seed),
            state: RevealState::default(),
            pending: None,
            live: true,
        }
    }

    pub fn block(&self) -> &ContentBlock {
        &self.block
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }

    pub fn phase(&self) -> RevealPhase {
        self.state.phase()
    }

    pub fn text_len(&self) -> usize {
        self.chars.len()
    }

    /// The prefix of the text disclosed so far.
    pub fn disclosed_text(&self) -> &str {
        let text = &self.block.text;
        let end = text
            .char_indices()
            .nth(self.state.disclosed_len)
            .map_or(text.len(), |(i, _)| i);
        &text[..end]
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending.map(|(id, _)| id)
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Apply one event. Returns whether the state changed.
    pub fn handle(&mut self, event: RevealEvent, timers: &mut dyn Timers) -> bool {
        match event {
            RevealEvent::Visibility(intersecting) => self.on_visibility_changed(intersecting, timers),
            RevealEvent::Timer(id) => self.on_timer(id, timers),
        }
    }

    /// Latch `has_entered_view` on the first positive signal; everything else is ignored.
    pub fn on_visibility_changed(&mut self, intersecting: bool, timers: &mut dyn Timers) -> bool {
        if !self.live || !intersecting || self.state.has_entered_view {
            return false;
        }
        self.state.has_entered_view = true;
        self.schedule(Stage::RevealDelay, self.timing.reveal_delay, timers);
        tracing::debug!(
            order = self.block.order,
            at = timers.now().0,
            "block entered view"
        );
        true
    }

    pub fn on_timer(&mut self, id: TimerId, timers: &mut dyn Timers) -> bool {
        if !self.live {
            return false;
        }
        let stage = match self.pending {
            Some((pending, stage)) if pending == id => stage,
            // Stale or foreign timer.
            _ => return false,
        };
        self.pending = None;

        match stage {
            Stage::RevealDelay => {
                self.state.is_revealed = true;
                self.state.revealed_at = Some(timers.now());
                self.schedule(Stage::TypingStart, self.timing.typing_start_delay, timers);
                tracing::debug!(order = self.block.order, at = timers.now().0, "block revealed");
            }
            Stage::TypingStart => {
                self.state.is_typing = true;
                self.state.typing_started_at = Some(timers.now());
                tracing::debug!(order = self.block.order, at = timers.now().0, "typing started");
                if self.chars.is_empty() {
                    self.finish(timers);
                } else {
                    let delay = natural_delay(&self.timing, &mut self.rng);
                    self.schedule(Stage::Advance, delay, timers);
                }
            }
            Stage::Advance => {
                self.state.disclosed_len += 1;
                let shown = self.state.disclosed_len;
                tracing::trace!(order = self.block.order, shown, "character disclosed");
                if shown >= self.chars.len() {
                    self.finish(timers);
                } else {
                    let delay = delay_after(&self.chars, shown - 1, &self.timing, &mut self.rng);
                    self.schedule(Stage::Advance, delay, timers);
                }
            }
        }
        true
    }

    /// Cancel pending work and ignore every later event.
    pub fn teardown(&mut self, timers: &mut dyn Timers) {
        if let Some((id, _)) = self.pending.take() {
            timers.cancel(id);
            tracing::debug!(order = self.block.order, timer = id.0, "cancelled pending timer");
        }
        self.live = false;
    }

    fn finish(&mut self, timers: &mut dyn Timers) {
        self.state.disclosed_len = self.chars.len();
        self.state.is_complete = true;
        tracing::debug!(order = self.block.order, at = timers.now().0, "typing complete");
    }

    fn schedule(&mut self, stage: Stage, delay: Millis, timers: &mut dyn Timers) {
        let id = timers.start(delay);
        self.pending = Some((id, stage));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/sequencer.rs"]
mod tests;
