/// Errors that can occur while reading a PoI source file.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),
}

impl FormatError {
    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument(msg.into())
    }

    /// Whether the underlying reader can no longer make progress.
    pub fn is_fatal(&self) -> bool {
        match self {
            FormatError::Csv(e) => e.is_io_error(),
            FormatError::Io(_)
            | FormatError::Json(_)
            | FormatError::XmlParse(_)
            | FormatError::InvalidDocument(_)
            | FormatError::UnsupportedExtension(_) => true,
        }
    }
}
