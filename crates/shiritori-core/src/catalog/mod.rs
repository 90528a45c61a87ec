//! Primary catalog: reading → entry.
//!
//! `CatalogLoader` parses the comma-separated catalog text; `Catalog` is the
//! read-only result. Readings keep their first-insertion position even when a
//! later row overwrites the entry, so every scan is deterministic.

mod loader;
#[cfg(test)]
mod tests;

pub use loader::CatalogLoader;

use std::collections::HashMap;

use crate::entry::ShiritoriEntry;

/// Counters gathered while loading one catalog text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Non-empty data lines seen (header excluded).
    pub rows: usize,
    /// Rows that created a new reading.
    pub inserted: usize,
    /// Rows that replaced an earlier row with the same reading.
    pub overwritten: usize,
    /// Rows with fewer than five columns.
    pub malformed: usize,
    /// Rows whose reading was empty after trimming.
    pub empty_reading: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ShiritoriEntry>,
    by_reading: HashMap<String, usize>,
    stats: LoadStats,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by reading. Returns `true` if an earlier entry was replaced.
    pub(crate) fn upsert(&mut self, entry: ShiritoriEntry) -> bool {
        if let Some(&pos) = self.by_reading.get(&entry.reading) {
            self.entries[pos] = entry;
            return true;
        }
        self.by_reading
            .insert(entry.reading.clone(), self.entries.len());
        self.entries.push(entry);
        false
    }

    pub(crate) fn set_stats(&mut self, stats: LoadStats) {
        self.stats = stats;
    }

    pub fn get(&self, reading: &str) -> Option<&ShiritoriEntry> {
        self.by_reading.get(reading).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, reading: &str) -> bool {
        self.by_reading.contains_key(reading)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order of their readings.
    pub fn iter(&self) -> impl Iterator<Item = &ShiritoriEntry> {
        self.entries.iter()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

impl PartialEq for Catalog {
    /// Value equality: same reading set with equal entries. Order and stats are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|e| other.get(&e.reading).is_some_and(|o| o == e))
    }
}

impl Eq for Catalog {}
