//! Import PoI files into the database.
//!
//! This crate owns the import run: extension dispatch, required-field
//! checks, keyed upserts and the counters that come out of them. It also
//! resolves where the database lives.

pub mod import;
pub mod progress;
pub mod settings;

pub use import::{ImportError, ImportStats, import_file, import_paths};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use settings::{resolve_db_path, settings_path};
