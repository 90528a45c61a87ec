//! One row per reading, chosen by a word-chain suitability score.
//!
//! Score = 10 for a common noun, plus 3 / 2 / 1 for compound tier A / B / other.
//! A higher-scoring candidate replaces the current row; an equal score appends
//! its surface as a `/` alternative.

use std::collections::HashMap;
use std::fmt::Write as _;

use shiritori_engine::{CompoundTier, COMMON_NOUN};

pub const CATALOG_HEADER: &str = "reading,surface,pos2,pos3,compound";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub reading: String,
    pub surface: String,
    pub pos2: String,
    pub pos3: String,
    pub compound: String,
    pub score: u8,
}

impl CatalogRow {
    pub fn new(reading: &str, surface: &str, pos2: &str, pos3: &str, compound: &str) -> Self {
        Self {
            reading: reading.to_string(),
            surface: surface.to_string(),
            pos2: pos2.to_string(),
            pos3: pos3.to_string(),
            compound: compound.to_string(),
            score: score(pos2, compound),
        }
    }
}

fn score(pos2: &str, compound: &str) -> u8 {
    let pos_score = if pos2 == COMMON_NOUN { 10 } else { 0 };
    let compound_score = match CompoundTier::parse(compound) {
        CompoundTier::A => 3,
        CompoundTier::B => 2,
        _ => 1,
    };
    pos_score + compound_score
}

/// Outcome of offering a candidate row to the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Inserted,
    Replaced,
    Merged,
    Ignored,
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    rows: Vec<CatalogRow>,
    by_reading: HashMap<String, usize>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, row: CatalogRow) -> Offer {
        let Some(&pos) = self.by_reading.get(&row.reading) else {
            self.by_reading.insert(row.reading.clone(), self.rows.len());
            self.rows.push(row);
            return Offer::Inserted;
        };

        let current = &mut self.rows[pos];
        if row.score > current.score {
            *current = row;
            Offer::Replaced
        } else if row.score == current.score {
            if current.surface.split('/').any(|s| s == row.surface) {
                return Offer::Ignored;
            }
            let surface = format!("{}/{}", current.surface, row.surface);
            *current = CatalogRow { surface, ..row };
            Offer::Merged
        } else {
            Offer::Ignored
        }
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as catalog CSV: header, then one row per reading in first-seen order.
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(CATALOG_HEADER.len() + 1 + self.rows.len() * 32);
        out.push_str(CATALOG_HEADER);
        out.push('\n');
        for r in &self.rows {
            let _ = writeln!(
                out,
                "{},{},{},{},{}",
                r.reading, r.surface, r.pos2, r.pos3, r.compound
            );
        }
        out
    }
}
