//! SQLite persistence layer for imported points of interest.
//!
//! Provides schema creation, the keyed upsert the importer relies on, and
//! query APIs backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{OperationError, insert_import_log, now_timestamp, upsert_poi};
pub use queries::{
    PoiStats, category_counts, find_poi_by_external_id, find_poi_by_id, list_import_logs,
    list_pois, poi_stats, search_pois,
};
pub use schema::{SchemaError, open_database, open_memory};
pub use store::PoiStore;
