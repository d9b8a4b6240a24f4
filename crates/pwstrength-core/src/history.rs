//! Bounded record of recently accepted submissions.

use std::collections::VecDeque;
use std::fmt;

/// Number of submissions remembered before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

/// Insertion-ordered history of the last [`HISTORY_CAPACITY`] accepted
/// candidates, oldest first.
///
/// One instance belongs to one session. There is no reset; entries leave only
/// by FIFO eviction.
///
/// Note: Custom Debug impl masks entries so candidates never reach logs.
#[derive(Clone, Default)]
pub struct RecentHistory {
    entries: VecDeque<String>,
}

impl RecentHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Exact string membership.
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.iter().any(|e| e == candidate)
    }

    /// Append a candidate, evicting the oldest entry once over capacity.
    pub fn record(&mut self, candidate: &str) {
        self.entries.push_back(candidate.to_owned());
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl fmt::Debug for RecentHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecentHistory")
            .field("len", &self.entries.len())
            .field("entries", &"***")
            .finish()
    }
}
