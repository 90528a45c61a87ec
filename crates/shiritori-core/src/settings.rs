//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! The engine itself never reads the singleton; hosts pass a `&Settings` in.

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::filter::EntryFilter;
use crate::query::BlocklistScope;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub resources: ResourceSettings,
    pub filter: EntryFilter,
    #[serde(default)]
    pub blocklist: BlocklistSettings,
    #[serde(default)]
    pub random: RandomSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceSettings {
    pub catalog: PathBuf,
    pub blocklist: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlocklistSettings {
    #[serde(default)]
    pub scope: BlocklistScope,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomSettings {
    pub seed: Option<u64>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_empty_path {
        ($value:expr, $field:literal) => {
            if $value.as_os_str().is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: $field.to_string(),
                    reason: "path must not be empty".to_string(),
                });
            }
        };
    }

    check_non_empty_path!(s.resources.catalog, "resources.catalog");
    if let Some(blocklist) = &s.resources.blocklist {
        check_non_empty_path!(blocklist, "resources.blocklist");
    }

    Ok(())
}
