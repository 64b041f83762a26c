//! Source format detection and dispatch.

use std::fmt;
use std::path::Path;

use poi_core::PoiRecord;

use crate::error::FormatError;
use crate::{csv_file, json_file, xml_file};

/// A lazily parsed sequence of records from one source file.
pub type PoiRecords = Box<dyn Iterator<Item = Result<PoiRecord, FormatError>>>;

/// The supported PoI source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiFormat {
    Csv,
    Json,
    Xml,
}

impl PoiFormat {
    pub const ALL: [PoiFormat; 3] = [PoiFormat::Csv, PoiFormat::Json, PoiFormat::Xml];

    /// Lowercase file extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            PoiFormat::Csv => "csv",
            PoiFormat::Json => "json",
            PoiFormat::Xml => "xml",
        }
    }

    /// Look up a format by extension, case-insensitively, with or without
    /// the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }

    /// Detect the format of a path from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Open `path` and return its records in document order.
    pub fn parse_file(self, path: &Path) -> Result<PoiRecords, FormatError> {
        Ok(match self {
            PoiFormat::Csv => Box::new(csv_file::parse_csv_file(path)?),
            PoiFormat::Json => Box::new(json_file::parse_json_file(path)?),
            PoiFormat::Xml => Box::new(xml_file::parse_xml_file(path)?),
        })
    }

    /// Detect the format of `path` and parse it.
    pub fn parse_path(path: &Path) -> Result<(PoiFormat, PoiRecords), FormatError> {
        let format = Self::from_path(path).ok_or_else(|| {
            FormatError::UnsupportedExtension(display_extension(path))
        })?;
        Ok((format, format.parse_file(path)?))
    }
}

impl fmt::Display for PoiFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The extension of `path` as shown in messages, e.g. ".txt" or "(none)".
pub fn display_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => "(none)".to_string(),
    }
}
