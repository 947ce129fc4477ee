//! Error types for enumsplice.

use std::path::PathBuf;
use thiserror::Error;

use crate::text_location::TextLocation;

/// Main error type for enumsplice operations.
#[derive(Error, Debug)]
pub enum EnumSpliceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Enum not found: {0}")]
    NotFound(String),

    #[error("Enum {0} has no balanced closing brace")]
    Malformed(String),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Cannot write {field} of entry '{entry}': {reason}")]
    InvalidEntryText {
        entry: String,
        field: &'static str,
        reason: String,
    },

    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Enum {name} is declared twice ({first} and {second})")]
    AmbiguousDocument {
        name: String,
        first: TextLocation,
        second: TextLocation,
    },

    #[error("File conflict: {path} has been modified externally")]
    FileConflict { path: PathBuf },
}

impl EnumSpliceError {
    /// Creates an `InvalidName` error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for enumsplice operations.
pub type Result<T> = std::result::Result<T, EnumSpliceError>;
