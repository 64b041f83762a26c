//! Data model types for imported points of interest.
//!
//! `PoiRecord` is what every format parser produces; `Poi` is what the store
//! hands back once a record has been persisted.

use serde::{Deserialize, Serialize};

// ── Canonical record ────────────────────────────────────────────────────────

/// A point of interest as read from a source file, before persistence.
///
/// Parsers fill every field they can and leave required fields empty when the
/// source lacks them; the importer decides whether the record is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    pub external_id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Mean of all valid ratings in the source entry.
    #[serde(default)]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub description: String,
}

impl PoiRecord {
    /// Trim the key fields and return the record only if all of
    /// `external_id`, `name` and `category` are non-empty.
    pub fn normalized(mut self) -> Option<PoiRecord> {
        trim_in_place(&mut self.external_id);
        trim_in_place(&mut self.name);
        trim_in_place(&mut self.category);

        if self.external_id.is_empty() || self.name.is_empty() || self.category.is_empty() {
            return None;
        }
        Some(self)
    }
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}

// ── Stored entity ───────────────────────────────────────────────────────────

/// A persisted point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    /// Internal row identifier, assigned once on creation.
    pub id: i64,
    pub external_id: String,
    pub name: String,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub avg_rating: Option<f64>,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Poi {
    /// The mutable fields of this entity as a canonical record.
    pub fn to_record(&self) -> PoiRecord {
        PoiRecord {
            external_id: self.external_id.clone(),
            name: self.name.clone(),
            category: self.category.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            avg_rating: self.avg_rating,
            description: self.description.clone(),
        }
    }
}

impl std::fmt::Display for Poi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.external_id)
    }
}

// ── Import tracking ─────────────────────────────────────────────────────────

/// One imported source file, as recorded in the import log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLog {
    pub id: i64,
    /// "csv", "json" or "xml".
    pub source_format: String,
    pub source_path: String,
    pub imported_at: String,
    pub records_created: i64,
    pub records_updated: i64,
    pub records_skipped: i64,
}
