//! Readers for PoI source files.
//!
//! Each format module turns one file into a lazy sequence of
//! [`PoiRecord`](poi_core::PoiRecord)s in document order. Parsers never check
//! required fields; that is left to the importer.

pub mod csv_file;
pub mod error;
pub mod format;
pub mod json_file;
pub mod xml_file;

pub use csv_file::{CsvRecords, parse_csv_file, read_csv};
pub use error::FormatError;
pub use format::{PoiFormat, PoiRecords, display_extension};
pub use json_file::{JsonRecords, parse_json_file, read_json};
pub use xml_file::{XmlRecords, parse_xml_file, read_xml};
