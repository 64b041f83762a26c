use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use poi_import::{LogProgress, import_paths};

use crate::CliError;

use super::open_db;

/// Import the given files and print the created/updated/skipped summary.
pub(crate) fn run_import(db_path: &Path, paths: &[PathBuf]) -> Result<(), CliError> {
    let conn = open_db(db_path)?;

    let stats = import_paths(&conn, paths, Some(&LogProgress))?;

    if stats.files_skipped > 0 {
        log::info!(
            "{} file(s) imported, {} skipped",
            stats.files_imported,
            stats.files_skipped
        );
    }
    println!(
        "{} {}.",
        "Import complete.".if_supports_color(Stdout, |t| t.green()),
        stats
    );
    Ok(())
}
