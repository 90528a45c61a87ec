use std::fs;
use std::path::Path;

use shiritori_engine::unicode::{is_hiragana, is_hiragana_reading, is_kanji, is_katakana, kata_to_hira};

use super::{list_lexicon_files, CatalogBuilder, CatalogRow, CatalogSource, SourceError};

/// Columns used: surface(0), pos1(5), pos2(6), pos3(7), reading(11), split tier(14).
const MIN_COLUMNS: usize = 15;

/// SudachiDict lexicon files in read order. Other `*.csv` files follow, by name.
const LEXICON_PRIORITY: [&str; 3] = ["small_lex.csv", "core_lex.csv", "notcore_lex.csv"];

/// SudachiDict lexicon CSV source.
///
/// File format: 18-column CSV (comma-separated), readings in katakana.
/// Files matched: `*.csv` in the input directory. `small_lex`, `core_lex` and
/// `notcore_lex` are read first, in that order, so the earlier file decides
/// reading order and which surface leads a `/` merge.
///
/// Only nouns usable in word-chain play are kept: no numerals, no personal
/// names, place names only when tier `A`, hiragana readings that do not end
/// in `ん`, and surfaces written purely in kana or kanji.
pub struct SudachiSource;

impl CatalogSource for SudachiSource {
    fn parse_dir(&self, dir: &Path) -> Result<CatalogBuilder, SourceError> {
        let mut files = list_lexicon_files(dir, "*.csv", |name| name.ends_with(".csv"))?;
        files.sort_by_key(|e| file_priority(&e.file_name().to_string_lossy()));

        let mut builder = CatalogBuilder::new();
        let mut total_lines = 0u64;
        let mut skipped = 0u64;

        for file_entry in &files {
            let path = file_entry.path();
            eprintln!("Reading {}...", path.display());
            let content = fs::read_to_string(&path)?;

            for line in content.lines() {
                total_lines += 1;
                if line.is_empty() {
                    skipped += 1;
                    continue;
                }
                let fields: Vec<&str> = line.split(',').collect();
                let Some(row) = select_row(&fields) else {
                    skipped += 1;
                    continue;
                };
                builder.offer(row);
            }
        }

        eprintln!(
            "  (skipped {skipped} of {total_lines} lines, {} readings kept)",
            builder.len()
        );
        Ok(builder)
    }
}

fn file_priority(name: &str) -> usize {
    LEXICON_PRIORITY
        .iter()
        .position(|p| *p == name)
        .unwrap_or(LEXICON_PRIORITY.len())
}

/// Apply the word-chain filter rules to one lexicon line.
fn select_row(fields: &[&str]) -> Option<CatalogRow> {
    if fields.len() < MIN_COLUMNS {
        return None;
    }
    let surface = fields[0];
    let (pos1, pos2, pos3) = (fields[5], fields[6], fields[7]);
    let compound = fields[14];

    if pos1 != "名詞" || pos2 == "数詞" || pos3 == "人名" {
        return None;
    }
    if pos3 == "地名" && compound != "A" {
        return None;
    }

    let reading = kata_to_hira(fields[11]);
    if !is_hiragana_reading(&reading) || reading.ends_with('ん') {
        return None;
    }
    if !is_valid_surface(surface) {
        return None;
    }

    Some(CatalogRow::new(&reading, surface, pos2, pos3, compound))
}

/// Kana and CJK ideographs only: no Latin letters, digits or symbols.
fn is_valid_surface(surface: &str) -> bool {
    !surface.is_empty()
        && surface
            .chars()
            .all(|c| is_hiragana(c) || is_katakana(c) || is_kanji(c))
}
