//! Sorted, deduplicated timestamps of an entity's additions.

use tessera_core::Window;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    times: Vec<i64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an update. Duplicate timestamps are stored once.
    pub fn insert(&mut self, time: i64) {
        if let Err(pos) = self.times.binary_search(&time) {
            self.times.insert(pos, time);
        }
    }

    /// Whether any update falls inside `[window.start, window.end)`.
    pub fn active_in(&self, window: &Window) -> bool {
        let first = self.times.partition_point(|&t| t < window.start());
        self.times.get(first).is_some_and(|&t| t < window.end())
    }

    pub fn earliest(&self) -> Option<i64> {
        self.times.first().copied()
    }

    pub fn latest(&self) -> Option<i64> {
        self.times.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.times.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
