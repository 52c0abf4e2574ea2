//! Custom error types for the cleaning tool.
//!
//! This module provides the error hierarchy using `thiserror` for better
//! error handling and context throughout the analyze/suggest/apply flow.

use thiserror::Error;

/// The main error type for dataset inspection and cleaning.
#[derive(Error, Debug)]
pub enum JanitorError {
    /// Input file missing, unreadable, or without a header row.
    #[error("Failed to read dataset '{path}': {reason}")]
    DatasetRead { path: String, reason: String },

    /// The reader produced a dataset with no columns at all.
    #[error("Dataset has no columns (missing header row?)")]
    EmptyDataset,

    /// Gap-fill was requested on a column where every value is missing.
    #[error("No fill value available for column '{column}': every value is missing")]
    NoFillValueAvailable { column: String },

    /// An action name or index outside the suggested set was selected.
    #[error("Unknown cleaning action: {0}")]
    UnknownAction(String),

    /// The selection input is not a well-formed list of 1-based indices.
    #[error("Invalid selection: '{0}' (expected comma-separated step numbers, e.g. 1,2)")]
    InvalidSelection(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<JanitorError>,
    },
}

impl JanitorError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        JanitorError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for cleaning operations.
pub type Result<T> = std::result::Result<T, JanitorError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| JanitorError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = JanitorError::NoFillValueAvailable {
            column: "email".to_string(),
        };
        assert!(err.to_string().contains("email"));

        let err = JanitorError::UnknownAction("Sort rows".to_string());
        assert!(err.to_string().contains("Sort rows"));
    }

    #[test]
    fn test_with_context() {
        let err = JanitorError::EmptyDataset.with_context("While loading input");
        assert!(err.to_string().contains("While loading input"));
        assert!(matches!(
            err,
            JanitorError::WithContext { source, .. } if matches!(*source, JanitorError::EmptyDataset)
        ));
    }

    #[test]
    fn test_result_ext_on_polars_result() {
        let failing: std::result::Result<(), polars::error::PolarsError> = Err(
            polars::error::PolarsError::ComputeError("boom".into()),
        );
        let err = failing.context("During analysis").unwrap_err();
        assert!(err.to_string().contains("During analysis"));
    }
}
