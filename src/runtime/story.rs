use std::collections::BTreeMap;

use crate::{
    ambient::layer::{AmbientConfig, AmbientLayer},
    foundation::{
        core::{BlockId, Millis, Viewport},
        error::{StoryError, StoryResult},
        math::seed_for,
    },
    reveal::{
        config::{RevealTiming, VisibilityOptions},
        sequencer::{ContentBlock, RevealEvent, RevealSequencer, RevealState},
        visibility::is_intersecting,
    },
    runtime::{
        layout::{LayoutConfig, StoryLayout},
        scroll::ScrollTracker,
        snapshot::{BlockView, ScrollView, StorySnapshot},
        timers::TimerQueue,
    },
};

/// Every tunable of a story page.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// Seed for typing jitter and glyph sampling.
    pub seed: u64,
    pub reveal: RevealTiming,
    pub visibility: VisibilityOptions,
    pub ambient: AmbientConfig,
    pub layout: LayoutConfig,
}

impl StoryConfig {
    pub fn validate(&self) -> StoryResult<()> {
        self.reveal.validate()?;
        self.visibility.validate()?;
        self.ambient.validate()?;
        self.layout.validate()
    }
}

/// JSON document describing a story: its block texts plus optional config.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StoryScript {
    pub blocks: Vec<String>,
    #[serde(default)]
    pub config: StoryConfig,
}

impl StoryScript {
    pub fn from_json(s: &str) -> StoryResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Host page: owns the blocks, one sequencer per mounted block, the shared timer
/// queue, the scroll tracker and the ambient layer.
///
/// Blocks never read each other's state; the only shared pieces are the clock and
/// the viewport.
pub struct Story {
    config: StoryConfig,
    blocks: Vec<ContentBlock>,
    sequencers: BTreeMap<BlockId, RevealSequencer>,
    timers: TimerQueue,
    viewport: Viewport,
    layout: StoryLayout,
    scroll: ScrollTracker,
    ambient: Option<AmbientLayer>,
}

impl Story {
    /// Build the page and mount the ambient layer. Blocks start unmounted.
    pub fn new(texts: Vec<String>, config: StoryConfig, viewport: Viewport) -> StoryResult<Self> {
        config.validate()?;
        viewport.validate()?;
        let total_count = texts.len();
        let blocks: Vec<ContentBlock> = texts
            .into_iter()
            .enumerate()
            .map(|(order, text)| ContentBlock {
                text,
                order,
                total_count,
            })
            .collect();
        let layout = StoryLayout::stacked(blocks.len(), viewport.width, &config.layout);
        let scroll = ScrollTracker::new(viewport.height, layout.document_height());
        let ambient = AmbientLayer::new(config.ambient, viewport, config.seed)?;

        Ok(Self {
            config,
            blocks,
            sequencers: BTreeMap::new(),
            timers: TimerQueue::new(),
            viewport,
            layout,
            scroll,
            ambient: Some(ambient),
        })
    }

    pub fn from_script(script: StoryScript, viewport: Viewport) -> StoryResult<Self> {
        Self::new(script.blocks, script.config, viewport)
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn layout(&self) -> &StoryLayout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn ambient(&self) -> Option<&AmbientLayer> {
        self.ambient.as_ref()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_mounted(&self, id: BlockId) -> bool {
        self.sequencers.contains_key(&id)
    }

    pub fn sequencer(&self, id: BlockId) -> Option<&RevealSequencer> {
        self.sequencers.get(&id)
    }

    pub fn state(&self, id: BlockId) -> Option<&RevealState> {
        self.sequencers.get(&id).map(RevealSequencer::state)
    }

    /// Mount block `id` with fresh state. Mounting an already mounted block is a no-op.
    pub fn mount(&mut self, id: BlockId) -> StoryResult<()> {
        if id.0 >= self.blocks.len() {
            return Err(StoryError::validation(format!(
                "block {} does not exist (story has {} blocks)",
                id.0,
                self.blocks.len()
            )));
        }
        self.insert_sequencer(id);
        Ok(())
    }

    pub fn mount_all(&mut self) {
        for i in 0..self.blocks.len() {
            self.insert_sequencer(BlockId(i));
        }
    }

    /// Tear block `id` down, cancelling its pending timers. Returns whether it was mounted.
    pub fn unmount(&mut self, id: BlockId) -> bool {
        let Some(mut seq) = self.sequencers.remove(&id) else {
            return false;
        };
        seq.teardown(&mut self.timers.for_owner(id));
        let stray = self.timers.cancel_owner(id);
        debug_assert_eq!(stray, 0, "sequencer left timers behind");
        tracing::debug!(block = id.0, "block unmounted");
        true
    }

    /// Feed a raw visibility signal for one block. Signals for unmounted blocks are dropped.
    pub fn set_visibility(&mut self, id: BlockId, intersecting: bool) -> bool {
        self.dispatch(id, RevealEvent::Visibility(intersecting))
    }

    /// Scroll the page and derive a visibility signal for every mounted block.
    /// Returns the blocks whose state changed.
    #[tracing::instrument(skip(self))]
    pub fn scroll_to(&mut self, scroll_y: f64) -> Vec<BlockId> {
        self.scroll.set_scroll(scroll_y);
        let window = self.viewport.rect_at(self.scroll.scroll_y());
        let opts = self.config.visibility;
        let signals: Vec<(BlockId, bool)> = self
            .sequencers
            .keys()
            .filter_map(|id| {
                self.layout
                    .rect(id.0)
                    .map(|r| (*id, is_intersecting(r, window, &opts)))
            })
            .collect();

        signals
            .into_iter()
            .filter(|(id, visible)| self.dispatch(*id, RevealEvent::Visibility(*visible)))
            .map(|(id, _)| id)
            .collect()
    }

    /// Adopt a new viewport size: relayout, rescale the ambient layer, re-test visibility.
    ///
    /// An invalid viewport is rejected and the page keeps its previous size.
    pub fn resize(&mut self, viewport: Viewport) -> StoryResult<Vec<BlockId>> {
        viewport.validate()?;
        self.viewport = viewport;
        self.layout = StoryLayout::stacked(self.blocks.len(), viewport.width, &self.config.layout);
        self.scroll.set_viewport_height(viewport.height);
        self.scroll.set_document_height(self.layout.document_height());
        if let Some(ambient) = self.ambient.as_mut() {
            ambient.resize(viewport)?;
        }
        Ok(self.scroll_to(self.scroll.scroll_y()))
    }

    /// Run every timer due up to `until` in order, then move the clock to `until`.
    #[tracing::instrument(skip(self, until), fields(until = until.0))]
    pub fn advance_to(&mut self, until: Millis) -> usize {
        let mut fired = 0;
        while let Some(expired) = self.timers.pop_due(until) {
            if self.dispatch(expired.owner, RevealEvent::Timer(expired.id)) {
                fired += 1;
            }
        }
        self.timers.advance_clock(until);
        fired
    }

    pub fn advance_by(&mut self, delta: Millis) -> usize {
        self.advance_to(self.now().saturating_add(delta))
    }

    /// Run until no timers remain. Returns the number of timers delivered.
    pub fn run_until_idle(&mut self) -> usize {
        let mut fired = 0;
        while let Some(due) = self.timers.next_due() {
            fired += self.advance_to(due);
        }
        fired
    }

    /// All blocks mounted and fully typed.
    pub fn all_complete(&self) -> bool {
        self.sequencers.len() == self.blocks.len()
            && self.sequencers.values().all(|s| s.state().is_complete)
    }

    /// Remove the ambient layer; later resizes no longer reach it.
    pub fn unmount_ambient(&mut self) -> bool {
        let had = self.ambient.take().is_some();
        if had {
            tracing::debug!("ambient layer unmounted");
        }
        had
    }

    /// Unmount everything. Afterwards no timer remains and no state can change.
    pub fn teardown(&mut self) {
        let ids: Vec<BlockId> = self.sequencers.keys().copied().collect();
        for id in ids {
            self.unmount(id);
        }
        self.unmount_ambient();
    }

    pub fn snapshot(&self) -> StorySnapshot {
        let now = self.now();
        let blocks = self
            .blocks
            .iter()
            .map(|b| match self.sequencers.get(&BlockId(b.order)) {
                Some(seq) => BlockView::of(seq, now, &self.config.reveal),
                None => BlockView::unmounted(b),
            })
            .collect();
        let glyphs = self
            .ambient
            .as_ref()
            .map(|a| a.sample(now))
            .unwrap_or_default();

        StorySnapshot {
            at: now,
            scroll: ScrollView {
                scroll_y: self.scroll.scroll_y(),
                progress: self.scroll.progress(),
                parallax_offset: self.scroll.parallax_offset(),
                show_scroll_hint: self.scroll.show_scroll_hint(),
            },
            blocks,
            glyphs,
            all_complete: self.all_complete(),
        }
    }

    fn insert_sequencer(&mut self, id: BlockId) {
        if self.sequencers.contains_key(&id) {
            return;
        }
        let seed = seed_for(self.config.seed, "typing", id.0 as u64);
        let block = self.blocks[id.0].clone();
        self.sequencers
            .insert(id, RevealSequencer::new(block, self.config.reveal, seed));
        tracing::debug!(block = id.0, "block mounted");
    }

    fn dispatch(&mut self, id: BlockId, event: RevealEvent) -> bool {
        match self.sequencers.get_mut(&id) {
            Some(seq) => seq.handle(event, &mut self.timers.for_owner(id)),
            None => false,
        }
    }
}

impl Drop for Story {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/story.rs"]
mod tests;
