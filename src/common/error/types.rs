//! Unified error types for odtree.
//!
//! Structural and configuration failures surface through this type. Content
//! level anomalies (unknown tags, missing optional parts, malformed scalar
//! attributes) are absorbed by the transformation and never reach it.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for odtree operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Definition catalog missing or malformed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested source document does not exist
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Package member not found
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error came from the definition catalog.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Whether this error reports a missing source document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type for odtree operations.
pub type Result<T> = std::result::Result<T, Error>;
