//! Import PoI source files into the store.
//!
//! Each path is dispatched to a format parser by extension. Records missing an
//! external id, name or category are counted and dropped; everything else is
//! upserted by external id. Nothing is rolled back: every upsert stands on its
//! own.

use std::fmt;
use std::path::Path;

use poi_core::types::{ImportLog, PoiRecord};
use poi_db::{OperationError, PoiStore, now_timestamp};
use poi_formats::{PoiFormat, display_extension};
use thiserror::Error;

use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("No input files given; provide at least one path")]
    NoPaths,
    #[error("Database error: {0}")]
    Store(#[from] OperationError),
}

/// Counters for one import run or one file within it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub created: u64,
    pub updated: u64,
    pub skipped: u64,
    pub files_imported: u64,
    pub files_skipped: u64,
}

impl ImportStats {
    /// Records that reached the store.
    pub fn stored(&self) -> u64 {
        self.created + self.updated
    }

    fn absorb(&mut self, other: &ImportStats) {
        self.created += other.created;
        self.updated += other.updated;
        self.skipped += other.skipped;
        self.files_imported += other.files_imported;
        self.files_skipped += other.files_skipped;
    }
}

impl fmt::Display for ImportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created: {}, Updated: {}, Skipped: {}",
            self.created, self.updated, self.skipped
        )
    }
}

/// Import every path in order and return the combined counters.
///
/// Unsupported extensions, missing files and files that can't be opened are
/// skipped with a warning. An empty `paths` slice is rejected before any
/// file is touched. A store failure stops the run; upserts made before it
/// are kept.
pub fn import_paths<S, P>(
    store: &S,
    paths: &[P],
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError>
where
    S: PoiStore + ?Sized,
    P: AsRef<Path>,
{
    if paths.is_empty() {
        return Err(ImportError::NoPaths);
    }

    let mut stats = ImportStats::default();

    for path in paths {
        let path = path.as_ref();

        let Some(format) = PoiFormat::from_path(path) else {
            log::warn!(
                "Skipping {} (unsupported extension: {})",
                path.display(),
                display_extension(path)
            );
            stats.files_skipped += 1;
            continue;
        };

        if !path.exists() {
            log::warn!("Skipping {} (does not exist)", path.display());
            stats.files_skipped += 1;
            continue;
        }
        if !path.is_file() {
            log::warn!("Skipping {} (not a regular file)", path.display());
            stats.files_skipped += 1;
            continue;
        }

        let file_stats = import_file(store, path, format, progress)?;
        stats.absorb(&file_stats);
    }

    Ok(stats)
}

/// Import a single file of a known format.
///
/// A file that can't be opened or whose document can't be parsed at all is
/// reported and counted as a skipped file. A document that breaks partway
/// keeps the records read before the break.
pub fn import_file<S>(
    store: &S,
    path: &Path,
    format: PoiFormat,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError>
where
    S: PoiStore + ?Sized,
{
    let mut stats = ImportStats::default();

    if let Some(p) = progress {
        p.on_file(path, format);
    }

    let records = match format.parse_file(path) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Skipping {} ({})", path.display(), e);
            stats.files_skipped = 1;
            return Ok(stats);
        }
    };

    for (i, item) in records.enumerate() {
        match item {
            Ok(record) => import_record(store, record, &mut stats)?,
            Err(e) if e.is_fatal() => {
                log::warn!("Stopped reading {} after {} record(s): {}", path.display(), i, e);
                break;
            }
            Err(e) => {
                log::warn!("{}: skipping unreadable record {}: {}", path.display(), i + 1, e);
                stats.skipped += 1;
            }
        }

        if let Some(p) = progress {
            p.on_record(i + 1, path);
        }
    }

    stats.files_imported = 1;
    store.record_import(&ImportLog {
        id: 0,
        source_format: format.extension().to_string(),
        source_path: path.display().to_string(),
        imported_at: now_timestamp(),
        records_created: stats.created as i64,
        records_updated: stats.updated as i64,
        records_skipped: stats.skipped as i64,
    })?;

    if let Some(p) = progress {
        p.on_file_complete(path, &stats);
    }

    Ok(stats)
}

/// Validate one parsed record and upsert it.
fn import_record<S>(store: &S, record: PoiRecord, stats: &mut ImportStats) -> Result<(), ImportError>
where
    S: PoiStore + ?Sized,
{
    let Some(record) = record.normalized() else {
        log::debug!("Skipping record without external id, name or category");
        stats.skipped += 1;
        return Ok(());
    };

    let (poi, created) = store.upsert_poi(&record)?;
    if created {
        log::debug!("Created {} (#{})", poi, poi.id);
        stats.created += 1;
    } else {
        log::debug!("Updated {} (#{})", poi, poi.id);
        stats.updated += 1;
    }
    Ok(())
}
