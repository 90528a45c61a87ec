//! Read-only query surface over a loaded catalog and its head index.


use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{debug, debug_span};

use crate::blocklist::Blocklist;
use crate::catalog::Catalog;
use crate::entry::ShiritoriEntry;
use crate::filter::EntryFilter;
use crate::head_index::HeadIndex;

/// Which initial-character queries honour the NG-word list.
///
/// The head index is always filtered. Conditioned initial queries scan the
/// catalog instead, and by default (`IndexOnly`) that scan does not consult
/// the blocklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlocklistScope {
    #[default]
    IndexOnly,
    AllInitialQueries,
}

pub struct QueryEngine {
    catalog: Catalog,
    index: HeadIndex,
    blocklist: Blocklist,
    scope: BlocklistScope,
    rng: Mutex<StdRng>,
}

impl QueryEngine {
    /// Build the head index from `catalog` and wrap both. `blocklist = None`
    /// leaves the index unfiltered.
    pub fn new(catalog: Catalog, blocklist: Option<Blocklist>) -> Self {
        let index = HeadIndex::build(&catalog, blocklist.as_ref());
        Self {
            catalog,
            index,
            blocklist: blocklist.unwrap_or_default(),
            scope: BlocklistScope::default(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_scope(mut self, scope: BlocklistScope) -> Self {
        self.scope = scope;
        self
    }

    /// Replace the random source with a seeded one for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn head_index(&self) -> &HeadIndex {
        &self.index
    }

    pub fn blocklist(&self) -> &Blocklist {
        &self.blocklist
    }

    pub fn scope(&self) -> BlocklistScope {
        self.scope
    }

    // --- Unconditioned lookups (primary catalog) ---

    pub fn exists(&self, reading: &str) -> bool {
        !reading.is_empty() && self.catalog.contains(reading)
    }

    pub fn surface(&self, reading: &str) -> Option<&str> {
        self.lookup(reading).map(|e| e.surface.as_str())
    }

    pub fn surface_variants(&self, reading: &str) -> Option<Vec<&str>> {
        self.lookup(reading).map(ShiritoriEntry::surface_variants)
    }

    // --- Conditioned lookups (primary catalog + filter chain) ---

    pub fn exists_with_condition(&self, reading: &str, filter: EntryFilter) -> bool {
        self.lookup_with_condition(reading, filter).is_some()
    }

    pub fn surface_with_condition(&self, reading: &str, filter: EntryFilter) -> Option<&str> {
        self.lookup_with_condition(reading, filter)
            .map(|e| e.surface.as_str())
    }

    // --- Initial-character queries ---

    /// Uniform draw among admissible catalog entries starting with `head`.
    pub fn random_by_initial(&self, head: char, filter: EntryFilter) -> Option<&ShiritoriEntry> {
        let candidates = self.list_by_initial(head, filter);
        self.choose(&candidates).copied()
    }

    /// All admissible catalog entries starting with `head`, in catalog order.
    pub fn list_by_initial(&self, head: char, filter: EntryFilter) -> Vec<&ShiritoriEntry> {
        let _span = debug_span!("list_by_initial", %head, ?filter).entered();
        let skip_blocked = self.scope == BlocklistScope::AllInitialQueries;
        let candidates: Vec<&ShiritoriEntry> = self
            .catalog
            .iter()
            .filter(|e| e.head() == Some(head))
            .filter(|e| filter.admits(e))
            .filter(|e| !(skip_blocked && self.blocklist.contains(&e.reading)))
            .collect();
        debug!(candidates = candidates.len());
        candidates
    }

    /// Uniform draw from the NG-filtered head index bucket, no filter chain.
    pub fn random_in_index(&self, head: char) -> Option<&ShiritoriEntry> {
        self.choose(self.index.bucket(head))
    }

    /// The NG-filtered head index bucket for `head`, no filter chain.
    pub fn list_in_index(&self, head: char) -> &[ShiritoriEntry] {
        self.index.bucket(head)
    }

    fn lookup(&self, reading: &str) -> Option<&ShiritoriEntry> {
        if reading.is_empty() {
            return None;
        }
        self.catalog.get(reading)
    }

    fn lookup_with_condition(&self, reading: &str, filter: EntryFilter) -> Option<&ShiritoriEntry> {
        self.lookup(reading).filter(|e| filter.admits(e))
    }

    fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut *self.rng())
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        // A panic while drawing cannot leave the generator in an invalid state.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
