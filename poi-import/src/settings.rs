//! Database location settings.
//!
//! The database path is resolved from, in order: an explicit override (the
//! `--db` flag), the `POI_IMPORT_DB` environment variable, `[database] path`
//! in `~/.config/poi-import/settings.toml`, and finally the platform data
//! directory.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the database location.
pub const DB_ENV_VAR: &str = "POI_IMPORT_DB";

/// Canonical path to the settings file: `~/.config/poi-import/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("poi-import").join("settings.toml")
}

/// Default database location: `<data dir>/poi-import/pois.db`.
pub fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("poi-import").join("pois.db")
}

/// Resolve the database path using the priority chain above.
pub fn resolve_db_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = std::env::var_os(DB_ENV_VAR).filter(|v| !v.is_empty()) {
        return PathBuf::from(p);
    }
    if let Some(p) = load_db_path(&settings_path()) {
        return p;
    }
    default_db_path()
}

/// Read `database.path` from a settings file, if the file exists and sets it.
pub fn load_db_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    db_path_from_settings(&contents)
}

/// Extract `database.path` from settings TOML. Malformed TOML is ignored.
pub fn db_path_from_settings(contents: &str) -> Option<PathBuf> {
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::debug!("Ignoring malformed settings file: {e}");
            return None;
        }
    };
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
