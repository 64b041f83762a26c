//! Write operations: PoI upsert and import logging.

use chrono::{SecondsFormat, Utc};
use poi_core::types::*;
use rusqlite::{Connection, Transaction, TransactionBehavior, params};
use thiserror::Error;

use crate::queries::find_poi_by_external_id;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

/// Current UTC time as stored in timestamp columns.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

// ── PoI Operations ──────────────────────────────────────────────────────────

/// Insert or fully replace the PoI keyed by `record.external_id`.
///
/// Returns the stored entity and whether it was newly created. The internal
/// id and `created_at` never change after creation; `updated_at` is set on
/// every call. Runs in its own transaction, which takes the write lock up
/// front so concurrent writers wait on the busy timeout instead of failing.
pub fn upsert_poi(conn: &Connection, record: &PoiRecord) -> Result<(Poi, bool), OperationError> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let now = now_timestamp();

    let existed: bool = tx.query_row(
        "SELECT EXISTS(SELECT 1 FROM pois WHERE external_id = ?1)",
        params![record.external_id],
        |row| row.get(0),
    )?;

    tx.execute(
        "INSERT INTO pois (external_id, name, category, latitude, longitude,
             avg_rating, description, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
         ON CONFLICT(external_id) DO UPDATE SET
             name = excluded.name,
             category = excluded.category,
             latitude = excluded.latitude,
             longitude = excluded.longitude,
             avg_rating = excluded.avg_rating,
             description = excluded.description,
             updated_at = excluded.updated_at",
        params![
            record.external_id,
            record.name,
            record.category,
            record.latitude,
            record.longitude,
            record.avg_rating,
            record.description,
            now,
        ],
    )?;

    let poi = find_poi_by_external_id(&tx, &record.external_id)?.ok_or_else(|| {
        OperationError::NotFound {
            entity_type: "poi".to_string(),
            id: record.external_id.clone(),
        }
    })?;
    tx.commit()?;

    Ok((poi, !existed))
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Insert an import log entry. Returns the generated ID.
pub fn insert_import_log(conn: &Connection, log: &ImportLog) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_format, source_path, imported_at,
             records_created, records_updated, records_skipped)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            log.source_format,
            log.source_path,
            log.imported_at,
            log.records_created,
            log.records_updated,
            log.records_skipped,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
