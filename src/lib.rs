//! Shiritori dictionary service.
//!
//! Wraps `shiritori-core` in a [`ShiritoriService`] that a host application
//! constructs once and passes to whatever needs word lookups.

mod service;
pub mod trace_init;

pub use service::ShiritoriService;
pub use shiritori_core::settings::{self, Settings, SettingsError};
pub use shiritori_core::entry::{COMMON_NOUN, PROPER_NOUN};
pub use shiritori_core::unicode::{self, parse_initial};
pub use shiritori_core::{
    Blocklist, BlocklistScope, Catalog, CatalogLoader, CompoundFilterMode, CompoundTier,
    EntryFilter, HeadIndex, QueryEngine, ShiritoriEntry,
};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("IO error: {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests;
