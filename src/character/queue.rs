//! One-shot animation queue.

use std::collections::VecDeque;

/// How [`play_group`](super::CharacterController::play_group) treats a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayMode {
    /// Queue behind a running one-shot; plays immediately otherwise.
    #[default]
    Queue,
    /// Interrupt whatever is playing, from the `start` marker.
    Immediate,
    /// Interrupt whatever is playing, from the `loop start` marker.
    ImmediateLoop,
}

/// A queued one-shot request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot {
    pub group: String,
    /// Additional passes after the first.
    pub repeats: usize,
}

/// FIFO of pending one-shots.
#[derive(Debug, Clone, Default)]
pub struct OneShotQueue {
    entries: VecDeque<OneShot>,
}

impl OneShotQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: impl Into<String>, repeats: usize) {
        self.entries.push_back(OneShot {
            group: group.into(),
            repeats,
        });
    }

    pub fn pop(&mut self) -> Option<OneShot> {
        self.entries.pop_front()
    }

    #[must_use]
    pub fn front(&self) -> Option<&OneShot> {
        self.entries.front()
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Dropping {} queued one-shot(s)", self.entries.len());
        }
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OneShot> {
        self.entries.iter()
    }
}
