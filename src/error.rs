//! Error types for IFC Filter.

use std::path::PathBuf;
use thiserror::Error;

/// Diagnostic printed when the source file cannot be read.
pub const READ_DIAGNOSTIC: &str = "Error in reading file.";

/// Diagnostic printed when either output file cannot be written.
pub const WRITE_DIAGNOSTIC: &str = "Error in writing files.";

/// Errors that can occur while filtering an IFC file.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The source file could not be opened or a read failed mid-stream.
    #[error("failed to read file '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file could not be created or a write failed mid-stream.
    #[error("failed to write file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The source path is too short to strip a 4-character extension.
    #[error("source path '{path}' is shorter than 4 characters")]
    PathTooShort { path: String },
}

impl FilterError {
    /// Fixed human-readable diagnostic for this error kind.
    ///
    /// A path too short to name its outputs never gets as far as opening
    /// the source, so it is reported on the read side.
    #[must_use]
    pub fn diagnostic(&self) -> &'static str {
        match self {
            Self::SourceRead { .. } | Self::PathTooShort { .. } => READ_DIAGNOSTIC,
            Self::OutputWrite { .. } => WRITE_DIAGNOSTIC,
        }
    }
}

/// Errors that can occur when exporting a filter report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write or flush the report.
    #[error("failed to write report '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
