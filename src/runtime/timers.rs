use std::collections::{BTreeMap, HashMap};

use crate::{
    foundation::core::{BlockId, Millis},
    reveal::sequencer::{TimerId, Timers},
};

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expired {
    pub id: TimerId,
    pub owner: BlockId,
    pub at: Millis,
}

/// Virtual-time event queue shared by every block of a story.
///
/// Timers fire in `(due, id)` order, so two timers due at the same instant fire in
/// the order they were scheduled. Cancelled timers are removed eagerly and never fire.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Millis,
    next_id: u64,
    queue: BTreeMap<(Millis, TimerId), BlockId>,
    due: HashMap<TimerId, Millis>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    pub fn schedule(&mut self, owner: BlockId, delay: Millis) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let due = self.now.saturating_add(delay);
        self.queue.insert((due, id), owner);
        self.due.insert(id, due);
        id
    }

    /// Returns whether the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    /// Cancel everything `owner` has pending. Returns how many timers were dropped.
    pub fn cancel_owner(&mut self, owner: BlockId) -> usize {
        let ids: Vec<TimerId> = self
            .queue
            .iter()
            .filter(|(_, o)| **o == owner)
            .map(|((_, id), _)| *id)
            .collect();
        ids.into_iter().filter(|id| self.cancel(*id)).count()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its due time.
    pub fn pop_due(&mut self, until: Millis) -> Option<Expired> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > until {
            return None;
        }
        let ((at, id), owner) = self.queue.pop_first()?;
        debug_assert_eq!(at, due);
        self.due.remove(&id);
        self.now = self.now.max(at);
        Some(Expired { id, owner, at })
    }

    /// Move the clock forward; never backwards.
    pub fn advance_clock(&mut self, to: Millis) {
        self.now = self.now.max(to);
    }

    /// A [`Timers`] view whose timers are tagged with `owner`.
    pub fn for_owner(&mut self, owner: BlockId) -> OwnedTimers<'_> {
        OwnedTimers { queue: self, owner }
    }
}

pub struct OwnedTimers<'a> {
    queue: &'a mut TimerQueue,
    owner: BlockId,
}

impl Timers for OwnedTimers<'_> {
    fn now(&self) -> Millis {
        self.queue.now()
    }

    fn start(&mut self, delay: Millis) -> TimerId {
        self.queue.schedule(self.owner, delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.queue.cancel(id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/timers.rs"]
mod tests;
