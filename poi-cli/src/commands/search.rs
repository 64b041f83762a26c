use std::path::Path;

use crate::CliError;

use super::{open_db, print_pois};

pub(crate) fn run_search(db_path: &Path, query: &str, json: bool) -> Result<(), CliError> {
    let conn = open_db(db_path)?;
    let pois = poi_db::search_pois(&conn, query)
        .map_err(|e| CliError::database(format!("Search failed: {}", e)))?;

    if pois.is_empty() && !json {
        log::info!("No PoIs match '{}'", query);
        return Ok(());
    }
    print_pois(&pois, json)
}
