use std::collections::HashMap;

use tracing::{debug_span, info, warn};

use crate::blocklist::Blocklist;
use crate::catalog::Catalog;
use crate::entry::ShiritoriEntry;

/// Catalog entries bucketed by the first character of their reading.
///
/// Buckets hold copies of catalog entries in catalog order. Entries whose
/// reading is blocklisted are removed once, at build time.
#[derive(Debug, Clone, Default)]
pub struct HeadIndex {
    buckets: HashMap<char, Vec<ShiritoriEntry>>,
}

impl HeadIndex {
    pub fn build(catalog: &Catalog, blocklist: Option<&Blocklist>) -> Self {
        let _span = debug_span!("build_head_index", entries = catalog.len()).entered();

        let mut buckets: HashMap<char, Vec<ShiritoriEntry>> = HashMap::new();
        for entry in catalog.iter() {
            let Some(head) = entry.head() else {
                continue;
            };
            buckets.entry(head).or_default().push(entry.clone());
        }

        let Some(blocklist) = blocklist else {
            warn!("no NG-word list supplied; head index is unfiltered");
            return Self { buckets };
        };

        let mut removed = 0usize;
        for bucket in buckets.values_mut() {
            let before = bucket.len();
            bucket.retain(|e| !blocklist.contains(&e.reading));
            removed += before - bucket.len();
        }
        info!(
            ng_words = blocklist.len(),
            removed, "NG words excluded from head index"
        );

        Self { buckets }
    }

    /// Entries starting with `head`; empty when no reading starts with it.
    pub fn bucket(&self, head: char) -> &[ShiritoriEntry] {
        self.buckets.get(&head).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Heads that have a bucket (possibly emptied by the blocklist), sorted.
    pub fn heads(&self) -> Vec<char> {
        let mut heads: Vec<char> = self.buckets.keys().copied().collect();
        heads.sort_unstable();
        heads
    }

    /// Total entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
