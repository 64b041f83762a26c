use std::path::Path;

use crate::CliError;

use super::{open_db, print_pois};

pub(crate) fn run_list(db_path: &Path, category: Option<&str>, json: bool) -> Result<(), CliError> {
    let conn = open_db(db_path)?;
    let pois = poi_db::list_pois(&conn, category)
        .map_err(|e| CliError::database(format!("Failed to list PoIs: {}", e)))?;

    if pois.is_empty() && !json {
        match category {
            Some(c) => log::info!("No PoIs in category '{}'", c),
            None => log::info!("No PoIs stored yet. Run 'poi import <files>' first."),
        }
        return Ok(());
    }
    print_pois(&pois, json)
}
