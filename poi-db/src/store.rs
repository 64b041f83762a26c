//! The storage seam the importer writes through.

use poi_core::types::{ImportLog, Poi, PoiRecord};
use rusqlite::Connection;

use crate::operations::{self, OperationError};

/// Keyed upsert storage for PoIs.
///
/// Implementations guarantee at most one entity per `external_id`, full field
/// replacement on update, a stable internal id and creation time, and a fresh
/// update time on every successful upsert.
pub trait PoiStore {
    /// Insert or replace the entity for `record.external_id`. The boolean is
    /// `true` when a new entity was created.
    fn upsert_poi(&self, record: &PoiRecord) -> Result<(Poi, bool), OperationError>;

    /// Remember that a source file was imported. Stores without an import
    /// log may ignore this.
    fn record_import(&self, _entry: &ImportLog) -> Result<(), OperationError> {
        Ok(())
    }
}

impl PoiStore for Connection {
    fn upsert_poi(&self, record: &PoiRecord) -> Result<(Poi, bool), OperationError> {
        operations::upsert_poi(self, record)
    }

    fn record_import(&self, entry: &ImportLog) -> Result<(), OperationError> {
        operations::insert_import_log(self, entry)?;
        Ok(())
    }
}
