use tracing::{debug_span, error, info, warn};

use super::{Catalog, LoadStats};
use crate::entry::{CompoundTier, ShiritoriEntry};

/// Minimum column count: reading, surface, pos class, pos subclass, compound.
const MIN_COLUMNS: usize = 5;

/// Parses catalog CSV text.
///
/// Format: header line, then `reading,surface,pos_class,pos_subclass,compound[,...]`.
/// No quoting; extra trailing columns are ignored.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(text: &str) -> Catalog {
        let _span = debug_span!("load_catalog", bytes = text.len()).entered();

        let mut catalog = Catalog::new();
        let mut stats = LoadStats::default();
        let mut header_seen = false;

        for raw in text.split('\n') {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if !header_seen {
                header_seen = true;
                continue;
            }
            stats.rows += 1;

            let Some(entry) = parse_row(line) else {
                warn!(line, "skipping catalog row with fewer than {MIN_COLUMNS} columns");
                stats.malformed += 1;
                continue;
            };
            if entry.reading.is_empty() {
                stats.empty_reading += 1;
                continue;
            }

            if catalog.upsert(entry) {
                stats.overwritten += 1;
            } else {
                stats.inserted += 1;
            }
        }

        info!(
            entries = catalog.len(),
            rows = stats.rows,
            overwritten = stats.overwritten,
            malformed = stats.malformed,
            "catalog loaded"
        );
        catalog.set_stats(stats);
        catalog
    }

    /// Like [`load`](Self::load), but an absent source yields an empty catalog
    /// and an error diagnostic instead of failing.
    pub fn load_or_empty(text: Option<&str>) -> Catalog {
        match text {
            Some(text) => Self::load(text),
            None => {
                error!("catalog source is missing; starting with an empty catalog");
                Catalog::new()
            }
        }
    }
}

fn parse_row(line: &str) -> Option<ShiritoriEntry> {
    let mut cols = line.split(',').map(str::trim);
    let reading = cols.next()?;
    let surface = cols.next()?;
    let pos_class = cols.next()?;
    let pos_subclass = cols.next()?;
    let compound = cols.next()?;
    Some(ShiritoriEntry {
        reading: reading.to_string(),
        surface: surface.to_string(),
        pos_class: pos_class.to_string(),
        pos_subclass: pos_subclass.to_string(),
        compound: CompoundTier::parse(compound),
    })
}
