//! Read queries for the PoI database.
//!
//! Provides lookup by natural or internal key, listing with a category
//! filter, admin-style search, and summary statistics.

use poi_core::types::*;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use crate::operations::OperationError;

const POI_COLUMNS: &str = "id, external_id, name, category, latitude, longitude,
    avg_rating, description, created_at, updated_at";

// ── PoI Lookups ─────────────────────────────────────────────────────────────

/// Find a PoI by its external id (exact match).
pub fn find_poi_by_external_id(
    conn: &Connection,
    external_id: &str,
) -> Result<Option<Poi>, OperationError> {
    let sql = format!("SELECT {POI_COLUMNS} FROM pois WHERE external_id = ?1");
    conn.query_row(&sql, params![external_id], row_to_poi)
        .optional()
        .map_err(Into::into)
}

/// Find a PoI by its internal id.
pub fn find_poi_by_id(conn: &Connection, id: i64) -> Result<Option<Poi>, OperationError> {
    let sql = format!("SELECT {POI_COLUMNS} FROM pois WHERE id = ?1");
    conn.query_row(&sql, params![id], row_to_poi)
        .optional()
        .map_err(Into::into)
}

/// List PoIs ordered by internal id, optionally restricted to one category
/// (exact match).
pub fn list_pois(conn: &Connection, category: Option<&str>) -> Result<Vec<Poi>, OperationError> {
    match category {
        Some(category) => {
            let sql = format!("SELECT {POI_COLUMNS} FROM pois WHERE category = ?1 ORDER BY id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params![category], row_to_poi)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
        None => {
            let sql = format!("SELECT {POI_COLUMNS} FROM pois ORDER BY id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], row_to_poi)?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        }
    }
}

/// Search PoIs the way the record browser does.
///
/// The query is split on whitespace and every term must match, either as the
/// exact internal id or as a case-insensitive substring of the external id.
/// An empty query returns everything.
pub fn search_pois(conn: &Connection, query: &str) -> Result<Vec<Poi>, OperationError> {
    let terms: Vec<&str> = query.split_whitespace().collect();

    let mut sql = format!("SELECT {POI_COLUMNS} FROM pois");
    let mut values: Vec<String> = Vec::with_capacity(terms.len() * 2);
    for (i, term) in terms.iter().enumerate() {
        sql.push_str(if i == 0 { " WHERE " } else { " AND " });
        let id_param = values.len() + 1;
        sql.push_str(&format!(
            "(CAST(id AS TEXT) = ?{id_param} OR external_id LIKE ?{} ESCAPE '\\')",
            id_param + 1
        ));
        values.push(term.to_string());
        values.push(format!("%{}%", escape_like(term)));
    }
    sql.push_str(" ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), row_to_poi)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn row_to_poi(row: &rusqlite::Row<'_>) -> rusqlite::Result<Poi> {
    Ok(Poi {
        id: row.get(0)?,
        external_id: row.get(1)?,
        name: row.get(2)?,
        category: row.get(3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
        avg_rating: row.get(6)?,
        description: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Summary counts for the whole database.
#[derive(Debug, Default)]
pub struct PoiStats {
    pub pois: i64,
    pub categories: i64,
    pub rated: i64,
    pub located: i64,
    pub imports: i64,
}

/// Gather summary statistics.
pub fn poi_stats(conn: &Connection) -> Result<PoiStats, OperationError> {
    let count = |sql: &str| -> Result<i64, OperationError> {
        Ok(conn.query_row(sql, [], |row| row.get(0))?)
    };

    Ok(PoiStats {
        pois: count("SELECT COUNT(*) FROM pois")?,
        categories: count("SELECT COUNT(DISTINCT category) FROM pois")?,
        rated: count("SELECT COUNT(*) FROM pois WHERE avg_rating IS NOT NULL")?,
        located: count(
            "SELECT COUNT(*) FROM pois WHERE latitude IS NOT NULL AND longitude IS NOT NULL",
        )?,
        imports: count("SELECT COUNT(*) FROM import_log")?,
    })
}

/// Number of PoIs per category, most populated first.
pub fn category_counts(conn: &Connection) -> Result<Vec<(String, i64)>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) AS n FROM pois GROUP BY category ORDER BY n DESC, category",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Import Log ──────────────────────────────────────────────────────────────

/// List the most recent import log entries, newest first.
pub fn list_import_logs(conn: &Connection, limit: usize) -> Result<Vec<ImportLog>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, source_format, source_path, imported_at,
                records_created, records_updated, records_skipped
         FROM import_log ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit as i64], |row| {
        Ok(ImportLog {
            id: row.get(0)?,
            source_format: row.get(1)?,
            source_path: row.get(2)?,
            imported_at: row.get(3)?,
            records_created: row.get(4)?,
            records_updated: row.get(5)?,
            records_skipped: row.get(6)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}
