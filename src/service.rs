use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use shiritori_core::settings::{parse_settings_toml, Settings};
use shiritori_core::{Blocklist, CatalogLoader, EntryFilter, QueryEngine, ShiritoriEntry};
use tracing::{error, info, warn};

use crate::ServiceError;

/// Host-facing handle to a loaded shiritori dictionary.
///
/// Construct once at startup and share by reference (or `Arc`). Queries run
/// against an immutable [`QueryEngine`] snapshot; a reload builds a complete
/// new engine first and then swaps the single shared reference, so readers
/// never see a half-built index.
pub struct ShiritoriService {
    engine: RwLock<Arc<QueryEngine>>,
    settings: Settings,
}

impl ShiritoriService {
    /// Build from already-read text. `None` sources are reported, not fatal:
    /// a missing catalog yields an empty engine, a missing blocklist an
    /// unfiltered head index.
    pub fn from_sources(
        catalog_text: Option<&str>,
        blocklist_text: Option<&str>,
        settings: &Settings,
    ) -> Self {
        Self {
            engine: RwLock::new(Arc::new(build_engine(catalog_text, blocklist_text, settings))),
            settings: settings.clone(),
        }
    }

    /// Read the catalog and blocklist files named in `settings.resources`.
    pub fn open(settings: &Settings) -> Self {
        let (catalog, blocklist) = read_resources(settings);
        Self::from_sources(catalog.as_deref(), blocklist.as_deref(), settings)
    }

    /// Parse a settings TOML file, then [`open`](Self::open) its resources.
    pub fn from_settings_file(path: &Path) -> Result<Self, ServiceError> {
        let content = fs::read_to_string(path).map_err(|e| ServiceError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let settings = parse_settings_toml(&content)?;
        Ok(Self::open(&settings))
    }

    /// Re-read the resource files and atomically replace the engine.
    pub fn reload(&self) {
        let (catalog, blocklist) = read_resources(&self.settings);
        self.reload_from_sources(catalog.as_deref(), blocklist.as_deref());
    }

    /// Replace the engine with one built from `catalog_text` / `blocklist_text`.
    pub fn reload_from_sources(&self, catalog_text: Option<&str>, blocklist_text: Option<&str>) {
        let fresh = Arc::new(build_engine(catalog_text, blocklist_text, &self.settings));
        let entries = fresh.catalog().len();
        *self.engine.write().unwrap_or_else(|p| p.into_inner()) = fresh;
        info!(entries, "shiritori engine reloaded");
    }

    /// Current engine snapshot. Stays valid across later reloads.
    pub fn engine(&self) -> Arc<QueryEngine> {
        Arc::clone(&self.engine.read().unwrap_or_else(|p| p.into_inner()))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The `[filter]` section of the settings.
    pub fn default_filter(&self) -> EntryFilter {
        self.settings.filter
    }

    pub fn exists(&self, reading: &str) -> bool {
        self.engine().exists(reading)
    }

    pub fn surface(&self, reading: &str) -> Option<String> {
        self.engine().surface(reading).map(str::to_string)
    }

    pub fn surface_variants(&self, reading: &str) -> Option<Vec<String>> {
        self.engine()
            .surface_variants(reading)
            .map(|v| v.into_iter().map(str::to_string).collect())
    }

    pub fn exists_with_condition(&self, reading: &str, filter: EntryFilter) -> bool {
        self.engine().exists_with_condition(reading, filter)
    }

    pub fn surface_with_condition(&self, reading: &str, filter: EntryFilter) -> Option<String> {
        self.engine()
            .surface_with_condition(reading, filter)
            .map(str::to_string)
    }

    pub fn random_by_initial(&self, head: char, filter: EntryFilter) -> Option<ShiritoriEntry> {
        self.engine().random_by_initial(head, filter).cloned()
    }

    pub fn list_by_initial(&self, head: char, filter: EntryFilter) -> Vec<ShiritoriEntry> {
        self.engine()
            .list_by_initial(head, filter)
            .into_iter()
            .cloned()
            .collect()
    }
}

fn build_engine(
    catalog_text: Option<&str>,
    blocklist_text: Option<&str>,
    settings: &Settings,
) -> QueryEngine {
    let catalog = CatalogLoader::load_or_empty(catalog_text);
    let blocklist = blocklist_text.map(Blocklist::parse);
    let engine = QueryEngine::new(catalog, blocklist).with_scope(settings.blocklist.scope);
    match settings.random.seed {
        Some(seed) => engine.with_seed(seed),
        None => engine,
    }
}

fn read_resources(settings: &Settings) -> (Option<String>, Option<String>) {
    let catalog_path = &settings.resources.catalog;
    let catalog = fs::read_to_string(catalog_path)
        .map_err(|e| error!(path = %catalog_path.display(), "cannot read catalog: {e}"))
        .ok();

    let blocklist = settings.resources.blocklist.as_ref().and_then(|path| {
        fs::read_to_string(path)
            .map_err(|e| warn!(path = %path.display(), "cannot read NG-word list: {e}"))
            .ok()
    });

    (catalog, blocklist)
}
