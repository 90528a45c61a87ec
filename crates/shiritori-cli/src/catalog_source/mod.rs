mod selection;
mod sudachi;

use std::fs;
use std::io;
use std::path::Path;

pub use selection::{CatalogBuilder, CatalogRow, Offer};
pub use sudachi::SudachiSource;

/// A pluggable lexicon source that turns raw lexicon files into catalog rows.
pub trait CatalogSource {
    /// Parse all lexicon files in `dir` into a deduplicated catalog.
    fn parse_dir(&self, dir: &Path) -> Result<CatalogBuilder, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// List files in `dir` whose names satisfy `predicate`, sorted by name.
///
/// Returns an error if no matching files are found, using `label` in the
/// message (e.g. `"*.csv"`).
pub(super) fn list_lexicon_files(
    dir: &Path,
    label: &str,
    predicate: impl Fn(&str) -> bool,
) -> Result<Vec<fs::DirEntry>, SourceError> {
    let mut files: Vec<fs::DirEntry> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            predicate(&name.to_string_lossy())
        })
        .collect();
    files.sort_by_key(|e| e.file_name());

    if files.is_empty() {
        return Err(SourceError::Parse(format!(
            "no {label} files found in {}",
            dir.display()
        )));
    }

    Ok(files)
}

/// Create a `CatalogSource` by name. Returns `None` for unknown source names.
pub fn from_name(name: &str) -> Option<Box<dyn CatalogSource>> {
    match name {
        "sudachi" => Some(Box::new(SudachiSource)),
        _ => None,
    }
}
