//! Weight history.
//!
//! # Invariants
//! - Entries are sorted by date ascending.
//! - At most one entry exists per date; re-recording a date updates it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// Weight in kg.
    pub weight: f64,
}

/// Date-sorted weight list, persisted as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightHistory {
    entries: Vec<WeightEntry>,
}

impl WeightHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from arbitrary entries, restoring the sort and
    /// per-date uniqueness invariants (the last entry for a date wins).
    pub fn from_entries(entries: impl IntoIterator<Item = WeightEntry>) -> Self {
        let mut history = Self::new();
        for entry in entries {
            history.record(entry.date, entry.weight);
        }
        history
    }

    /// Inserts or updates the entry for `date`.
    pub fn record(&mut self, date: NaiveDate, weight: f64) {
        match self
            .entries
            .binary_search_by(|entry| entry.date.cmp(&date))
        {
            Ok(index) => self.entries[index].weight = weight,
            Err(index) => self.entries.insert(index, WeightEntry { date, weight }),
        }
    }

    /// Removes the entry for `date`. Returns the removed weight.
    pub fn remove(&mut self, date: NaiveDate) -> Option<f64> {
        let index = self
            .entries
            .binary_search_by(|entry| entry.date.cmp(&date))
            .ok()?;
        Some(self.entries.remove(index).weight)
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.entries
            .binary_search_by(|entry| entry.date.cmp(&date))
            .ok()
            .map(|index| self.entries[index].weight)
    }

    pub fn latest(&self) -> Option<&WeightEntry> {
        self.entries.last()
    }

    /// Latest weight recorded on or before `date`.
    pub fn as_of(&self, date: NaiveDate) -> Option<f64> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.date <= date)
            .map(|entry| entry.weight)
    }

    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    /// The last `count` entries.
    pub fn tail(&self, count: usize) -> &[WeightEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
