//! Custom error types for finplan
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finplan operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for record fields supplied by the user
    #[error("Validation error in field '{field}': {message}")]
    Validation { field: &'static str, message: String },

    /// Record-not-found errors (position out of range)
    #[error("{entity_type} not found at position {index}")]
    NotFound {
        entity_type: &'static str,
        index: usize,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create a validation error for a named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a "not found" error for income records
    pub fn income_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Income record",
            index,
        }
    }

    /// Create a "not found" error for expense records
    pub fn expense_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense record",
            index,
        }
    }

    /// Create a "not found" error for investment records
    pub fn investment_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Investment record",
            index,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finplan operations
pub type PlannerResult<T> = Result<T, PlannerError>;
