use crate::{
    ambient::layer::GlyphFrame,
    animation::ease::Ease,
    foundation::core::{BlockId, Millis},
    reveal::{
        chapter,
        config::RevealTiming,
        sequencer::{ContentBlock, RevealPhase, RevealSequencer},
    },
};

/// Everything a host needs to draw the page at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StorySnapshot {
    pub at: Millis,
    pub scroll: ScrollView,
    pub blocks: Vec<BlockView>,
    pub glyphs: Vec<GlyphFrame>,
    pub all_complete: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollView {
    pub scroll_y: f64,
    pub progress: f64,
    pub parallax_offset: f64,
    pub show_scroll_hint: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BlockView {
    pub id: BlockId,
    pub mounted: bool,
    pub heading: String,
    pub title: &'static str,
    pub emoji: &'static str,
    pub first: bool,
    pub last: bool,
    pub phase: RevealPhase,
    pub text: String,
    pub disclosed_len: usize,
    pub total_len: usize,
    /// Eased card entrance progress in `[0, 1]`.
    pub entrance: f64,
    /// Present only while characters are still being typed.
    pub cursor_opacity: Option<f64>,
    pub flourish: Option<&'static str>,
}

impl BlockView {
    pub fn of(seq: &RevealSequencer, now: Millis, timing: &RevealTiming) -> Self {
        let block = seq.block();
        let state = seq.state();
        let phase = state.phase();

        let entrance = state
            .revealed_at
            .map_or(0.0, |at| progress(now.since(at), timing.entrance));
        let entrance = Ease::ENTRANCE.apply(entrance);

        let cursor_opacity = match (phase, state.typing_started_at) {
            (RevealPhase::Typing, Some(at)) => Some(blink(now.since(at), timing.cursor_blink)),
            _ => None,
        };

        let flourish = if phase == RevealPhase::Complete {
            chapter::flourish(block.order)
        } else {
            None
        };

        Self {
            text: seq.disclosed_text().to_string(),
            disclosed_len: state.disclosed_len,
            total_len: seq.text_len(),
            phase,
            entrance,
            cursor_opacity,
            flourish,
            ..Self::unmounted(block)
        }
        .mounted()
    }

    pub fn unmounted(block: &ContentBlock) -> Self {
        Self {
            id: BlockId(block.order),
            mounted: false,
            heading: chapter::heading(block.order, block.total_count),
            title: chapter::title(block.order),
            emoji: chapter::emoji(block.order),
            first: chapter::is_first(block.order),
            last: chapter::is_last(block.order, block.total_count),
            phase: RevealPhase::Unseen,
            text: String::new(),
            disclosed_len: 0,
            total_len: block.text.chars().count(),
            entrance: 0.0,
            cursor_opacity: None,
            flourish: None,
        }
    }

    fn mounted(mut self) -> Self {
        self.mounted = true;
        self
    }
}

fn progress(elapsed: Millis, duration: Millis) -> f64 {
    if duration.0 == 0 {
        return 1.0;
    }
    (elapsed.0 as f64 / duration.0 as f64).clamp(0.0, 1.0)
}

// Fades 1 -> 0 over one half period, back to 1 over the next.
fn blink(elapsed: Millis, half_period: Millis) -> f64 {
    if half_period.0 == 0 {
        return 1.0;
    }
    let cycle = elapsed.0 / half_period.0;
    let t = Ease::InOutSine.apply((elapsed.0 % half_period.0) as f64 / half_period.0 as f64);
    if cycle % 2 == 0 { 1.0 - t } else { t }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/snapshot.rs"]
mod tests;
