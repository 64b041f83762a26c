//! Import progress reporting.

use std::path::Path;

use poi_formats::PoiFormat;

use crate::import::ImportStats;

/// Trait for receiving import progress updates.
pub trait ImportProgress {
    /// Called when a file is about to be read.
    fn on_file(&self, path: &Path, format: PoiFormat);

    /// Called after each record of the current file is processed.
    fn on_record(&self, current: usize, path: &Path);

    /// Called when a file has been fully read.
    fn on_file_complete(&self, path: &Path, stats: &ImportStats);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _path: &Path, _format: PoiFormat) {}
    fn on_record(&self, _current: usize, _path: &Path) {}
    fn on_file_complete(&self, _path: &Path, _stats: &ImportStats) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_file(&self, path: &Path, format: PoiFormat) {
        log::info!("Processing {} ({}) ...", path.display(), format);
    }

    fn on_record(&self, current: usize, path: &Path) {
        if current.is_multiple_of(500) {
            log::info!("  [{}] {}", current, path.display());
        }
    }

    fn on_file_complete(&self, path: &Path, stats: &ImportStats) {
        log::info!("  {}: {}", path.display(), stats);
    }
}
