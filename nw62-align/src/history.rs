//! Bounded, caller-owned log of past alignments.
//!
//! The engine itself keeps no state between runs; a host that wants to
//! remember comparisons owns a [`History`] and pushes entries into it. Entries
//! are kept most-recent-first and the oldest is evicted once the capacity is
//! reached.

use std::collections::VecDeque;

use nw62_core::{preview, Summarizable};

use crate::stats::{AlignmentStats, Percent};
use crate::types::AlignmentResult;
use crate::Analysis;

/// Number of entries retained when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// An alignment annotated with the statistics shown alongside it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryEntry {
    pub alignment: AlignmentResult,
    /// Identity percentage.
    pub identity: f64,
    /// Similarity percentage.
    pub similarity: f64,
}

impl HistoryEntry {
    pub fn new(alignment: AlignmentResult, stats: &AlignmentStats) -> Self {
        Self {
            alignment,
            identity: stats.identity,
            similarity: stats.similarity,
        }
    }
}

impl From<&Analysis> for HistoryEntry {
    fn from(analysis: &Analysis) -> Self {
        HistoryEntry::new(analysis.alignment.clone(), &analysis.stats)
    }
}

impl Summarizable for HistoryEntry {
    fn summary(&self) -> String {
        format!(
            "{} vs {}  score {}  {}% id",
            preview(&String::from_utf8_lossy(&self.alignment.seq1), 20),
            preview(&String::from_utf8_lossy(&self.alignment.seq2), 20),
            self.alignment.score,
            Percent(self.identity)
        )
    }
}

/// Most-recent-first collection with a fixed capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Create an empty history holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Rebuild a history from entries ordered most-recent-first.
    ///
    /// Entries beyond `capacity` (the oldest ones) are dropped.
    pub fn from_entries(capacity: usize, entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        let entries: VecDeque<HistoryEntry> = entries.into_iter().take(capacity).collect();
        Self { capacity, entries }
    }

    /// Record `entry` as the most recent one.
    ///
    /// Returns the evicted oldest entry if the history was full.
    pub fn push(&mut self, entry: HistoryEntry) -> Option<HistoryEntry> {
        if self.capacity == 0 {
            return Some(entry);
        }
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            let evicted = self.entries.pop_back();
            log::debug!("history full ({}), evicted oldest entry", self.capacity);
            evicted
        } else {
            None
        }
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// The entry at `index`, where 0 is the most recent.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
