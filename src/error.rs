//! Error types for SliceScope
//!
//! This module provides structured error handling using thiserror,
//! replacing ad-hoc String-based errors with proper typed errors.

use thiserror::Error;

/// Main error type for SliceScope operations
#[derive(Error, Debug)]
pub enum SliceError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Unsupported file format
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Column not found in data
    #[error("Column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    /// Empty dataset error
    #[error("Dataset is empty or has no rows")]
    EmptyDataset,

    /// Dataset has no numeric columns to slice
    #[error("Dataset has no numeric columns")]
    NoNumericColumns,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for SliceScope operations
pub type Result<T> = std::result::Result<T, SliceError>;

/// UI-friendly error message formatting
impl SliceError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            SliceError::FileIo(e) => format!("File error: {}", e),
            SliceError::Polars(e) => format!("Data error: {}", e),
            SliceError::UnsupportedFormat { extension } => {
                format!("Unsupported file format: '.{}'", extension)
            }
            SliceError::ColumnNotFound { column } => {
                format!("Column '{}' not found", column)
            }
            SliceError::EmptyDataset => "Dataset is empty".to_string(),
            SliceError::NoNumericColumns => "Dataset has no numeric columns".to_string(),
            SliceError::Json(e) => format!("JSON error: {}", e),
            SliceError::Clipboard(e) => format!("Clipboard error: {}", e),
            SliceError::Custom(msg) => msg.clone(),
        }
    }

    /// Get a short title for the error (for toast notifications)
    pub fn title(&self) -> &'static str {
        match self {
            SliceError::FileIo(_) => "File Error",
            SliceError::Polars(_) => "Data Error",
            SliceError::UnsupportedFormat { .. } => "Unsupported Format",
            SliceError::ColumnNotFound { .. } => "Column Not Found",
            SliceError::EmptyDataset => "Empty Dataset",
            SliceError::NoNumericColumns => "No Numeric Columns",
            SliceError::Json(_) => "JSON Error",
            SliceError::Clipboard(_) => "Clipboard Error",
            SliceError::Custom(_) => "Error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SliceError::ColumnNotFound {
            column: "density".to_string(),
        };
        assert_eq!(err.user_message(), "Column 'density' not found");
        assert_eq!(err.title(), "Column Not Found");

        let err = SliceError::UnsupportedFormat {
            extension: "xlsx".to_string(),
        };
        assert_eq!(err.user_message(), "Unsupported file format: '.xlsx'");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let slice_err: SliceError = io_err.into();
        assert!(matches!(slice_err, SliceError::FileIo(_)));
    }
}
