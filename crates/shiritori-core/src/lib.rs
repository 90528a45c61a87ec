//! Word-chain (shiritori) lexical lookup.
//!
//! Catalog text is loaded into a reading-keyed [`Catalog`], projected into a
//! per-initial [`HeadIndex`] with NG words removed, and served through a
//! [`QueryEngine`] that applies one [`EntryFilter`] to every conditioned query.

pub mod blocklist;
pub mod catalog;
pub mod entry;
pub mod filter;
pub mod head_index;
pub mod query;
pub mod settings;
pub mod unicode;

pub use blocklist::Blocklist;
pub use catalog::{Catalog, CatalogLoader, LoadStats};
pub use entry::{CompoundTier, ShiritoriEntry};
pub use filter::{CompoundFilterMode, EntryFilter};
pub use head_index::HeadIndex;
pub use query::{BlocklistScope, QueryEngine};
