//! # Error Types
//!
//! Structured error types for tremie_core. The calculation has exactly one way
//! to fail: an input that is not a real number. The error still carries the
//! field name and the offending text so a form can point at the right box.
//!
//! ## Example
//!
//! ```rust
//! use tremie_core::errors::{CalcError, CalcResult};
//!
//! fn parse_depth(text: &str) -> CalcResult<f64> {
//!     text.trim()
//!         .parse()
//!         .map_err(|_| CalcError::invalid_input("depth_ft", text, "Not a number"))
//! }
//!
//! assert!(parse_depth("12.5").is_ok());
//! assert_eq!(parse_depth("deep").unwrap_err().field(), "depth_ft");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tremie_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value could not be read as a real number.
    ///
    /// No result is produced; callers keep whatever they displayed before.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the input field that was rejected
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidInput { field, .. } => field,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
