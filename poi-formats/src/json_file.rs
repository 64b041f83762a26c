//! JSON PoI parser.
//!
//! The document is either one object or an array of objects:
//!
//! ```json
//! [{"id": "J-1", "name": "JSON Place", "coordinates": [10.5, -20.25],
//!   "category": "Cafe", "ratings": [5, 4, 5], "description": "from json"}]
//! ```

use std::io::Read;
use std::path::Path;

use poi_core::{PoiRecord, RawValue, avg_rating, to_float};
use serde_json::Value;

use crate::error::FormatError;

/// Lazy iterator over the objects of a JSON document.
pub struct JsonRecords {
    items: std::vec::IntoIter<Value>,
}

/// Read PoI records from a JSON document.
///
/// The whole document is parsed up front; mapping to records happens as the
/// iterator is consumed.
pub fn read_json<R: Read>(reader: R) -> Result<JsonRecords, FormatError> {
    let document: Value = serde_json::from_reader(reader)?;
    let items = match document {
        Value::Array(items) => items,
        single => vec![single],
    };
    Ok(JsonRecords {
        items: items.into_iter(),
    })
}

/// Open a JSON file and read PoI records from it.
pub fn parse_json_file(path: &Path) -> Result<JsonRecords, FormatError> {
    let file = std::fs::File::open(path)?;
    read_json(std::io::BufReader::new(file))
}

impl Iterator for JsonRecords {
    type Item = Result<PoiRecord, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next().map(|item| Ok(map_object(&item)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

/// Map one JSON value to a record. Non-object values yield an empty record.
fn map_object(item: &Value) -> PoiRecord {
    let coordinates: &[Value] = match item.get("coordinates") {
        Some(Value::Array(pair)) => pair.as_slice(),
        _ => &[],
    };
    let coordinate = |i: usize| {
        coordinates
            .get(i)
            .and_then(|v| to_float(&raw_value(v)))
    };

    PoiRecord {
        external_id: text_field(item.get("id")),
        name: text_field(item.get("name")),
        category: text_field(item.get("category")),
        latitude: coordinate(0),
        longitude: coordinate(1),
        avg_rating: item
            .get("ratings")
            .and_then(|ratings| avg_rating(&raw_value(ratings))),
        description: description_field(item.get("description")),
    }
}

/// Strings as-is, numbers in their JSON spelling, anything else empty.
fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Like [`text_field`], but a zero number counts as no description.
fn description_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        other => text_field(other),
    }
}

fn raw_value(value: &Value) -> RawValue<'_> {
    match value {
        Value::Number(n) => n.as_f64().map_or(RawValue::Absent, RawValue::Number),
        Value::String(s) => RawValue::Text(s),
        Value::Array(items) => RawValue::Sequence(items.iter().map(raw_value).collect()),
        Value::Null | Value::Bool(_) | Value::Object(_) => RawValue::Absent,
    }
}

#[cfg(test)]
#[path = "tests/json_tests.rs"]
mod tests;
