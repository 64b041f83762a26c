//! CSV PoI parser.
//!
//! Columns are located by header name, so column order is free and any of the
//! known columns may be missing:
//!
//! ```text
//! poi_id,poi_name,poi_latitude,poi_longitude,poi_category,poi_ratings
//! T-1,Test Place,10.0,20.0,Cafe,4.5
//! ```

use std::io::Read;
use std::path::Path;

use poi_core::{PoiRecord, RawValue, avg_rating, to_float};

use crate::error::FormatError;

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Default)]
struct CsvColumns {
    id: Option<usize>,
    name: Option<usize>,
    category: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
    ratings: Option<usize>,
}

impl CsvColumns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        };
        Self {
            id: find("poi_id"),
            name: find("poi_name"),
            category: find("poi_category"),
            latitude: find("poi_latitude"),
            longitude: find("poi_longitude"),
            ratings: find("poi_ratings"),
        }
    }

    fn to_record(&self, row: &csv::StringRecord) -> PoiRecord {
        let cell = |col: Option<usize>| col.and_then(|i| row.get(i));
        let text = |col: Option<usize>| cell(col).unwrap_or("").to_string();

        PoiRecord {
            external_id: text(self.id),
            name: text(self.name),
            category: text(self.category),
            latitude: to_float(&RawValue::from(cell(self.latitude))),
            longitude: to_float(&RawValue::from(cell(self.longitude))),
            avg_rating: avg_rating(&RawValue::from(cell(self.ratings))),
            description: String::new(),
        }
    }
}

/// Lazy iterator over the data rows of a CSV source.
pub struct CsvRecords<R> {
    reader: csv::Reader<R>,
    columns: CsvColumns,
    row: csv::StringRecord,
    done: bool,
}

/// Read PoI records from CSV content with a header row.
///
/// Fails only if the header row itself can't be read.
pub fn read_csv<R: Read>(reader: R) -> Result<CsvRecords<R>, FormatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = CsvColumns::from_headers(reader.headers()?);
    if columns.id.is_none() {
        log::debug!("CSV header has no poi_id column; every row will lack an id");
    }

    Ok(CsvRecords {
        reader,
        columns,
        row: csv::StringRecord::new(),
        done: false,
    })
}

/// Open a CSV file and read PoI records from it.
pub fn parse_csv_file(path: &Path) -> Result<CsvRecords<std::fs::File>, FormatError> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}

impl<R: Read> Iterator for CsvRecords<R> {
    type Item = Result<PoiRecord, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_record(&mut self.row) {
            Ok(true) => Some(Ok(self.columns.to_record(&self.row))),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                // Row-level errors (bad UTF-8) leave the reader usable; I/O errors don't.
                let err = FormatError::from(e);
                self.done = err.is_fatal();
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/csv_tests.rs"]
mod tests;
