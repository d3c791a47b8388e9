use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::codec::Violation;

/// Error types for proffie-config.
///
/// Covers everything that can go wrong while reading, checking or writing a
/// ProffieOS configuration file, plus the tool's own settings file.
#[derive(Error, Debug)]
pub enum ProffieError {
    /// A file could not be opened, read or written.
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The document failed a structural check and cannot be encoded.
    #[error("{0}")]
    Precondition(#[from] Violation),

    /// The configuration text contained a token that could not be interpreted.
    #[error("There was an error parsing config, please ensure it is valid: line {line}: {details}")]
    Parse {
        /// 1-based line of the offending token
        line: usize,
        /// Parse error details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A value could not be serialized for output.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// A specialized `Result` type for proffie-config operations.
pub type Result<T> = std::result::Result<T, ProffieError>;

impl ProffieError {
    /// Creates an I/O error carrying the path that failed.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying I/O error
    /// * `path` - Path of the file being accessed
    pub fn io(error: io::Error, path: &Path) -> Self {
        ProffieError::Io {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ProffieError::TomlParse {
            location,
            details: error.to_string(),
        }
    }

    /// Creates a parse error at the given line.
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        ProffieError::Parse {
            line,
            details: details.into(),
        }
    }
}
