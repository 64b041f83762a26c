use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{open_db, truncate_str};

const RECENT_IMPORTS: usize = 5;

pub(crate) fn run_stats(db_path: &Path) -> Result<(), CliError> {
    let conn = open_db(db_path)?;
    let query_err = |e: poi_db::OperationError| {
        CliError::database(format!("Failed to query statistics: {}", e))
    };

    let stats = poi_db::poi_stats(&conn).map_err(query_err)?;
    let categories = poi_db::category_counts(&conn).map_err(query_err)?;
    let imports = poi_db::list_import_logs(&conn, RECENT_IMPORTS).map_err(query_err)?;

    println!("{}", "PoI Database Statistics".if_supports_color(Stdout, |t| t.bold()));
    println!("  Database: {}", db_path.display());
    println!();
    println!("  PoIs:         {:>8}", stats.pois);
    println!("  Categories:   {:>8}", stats.categories);
    println!("  Rated:        {:>8}", stats.rated);
    println!("  Located:      {:>8}", stats.located);
    println!("  Imports:      {:>8}", stats.imports);

    if !categories.is_empty() {
        println!();
        println!("{}", "By category".if_supports_color(Stdout, |t| t.bold()));
        for (category, count) in &categories {
            println!("  {:<24} {:>8}", truncate_str(category, 24), count);
        }
    }

    if !imports.is_empty() {
        println!();
        println!("{}", "Recent imports".if_supports_color(Stdout, |t| t.bold()));
        for entry in &imports {
            println!(
                "  {}  [{}] {}  (+{} ~{} -{})",
                entry.imported_at.if_supports_color(Stdout, |t| t.dimmed()),
                entry.source_format,
                entry.source_path,
                entry.records_created,
                entry.records_updated,
                entry.records_skipped,
            );
        }
    }

    Ok(())
}
