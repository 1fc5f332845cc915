//! # Error Types
//!
//! Structured error types for taishin_core. Each variant carries enough
//! context for a caller (human or program) to locate the offending input or
//! table entry without re-running the diagnosis.
//!
//! Degenerate inputs such as an empty wall list or an unanswered screening
//! questionnaire are *not* errors; they produce worst-case results instead.
//!
//! ## Example
//!
//! ```rust
//! use taishin_core::errors::{CalcError, CalcResult};
//!
//! fn validate_z(z: f64) -> CalcResult<()> {
//!     if z <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "region_coefficient_z".to_string(),
//!             value: z.to_string(),
//!             reason: "Region coefficient must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for taishin_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for diagnosis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The required-capacity coefficient table has no entry for this combination.
    ///
    /// This signals a table defect rather than a user-input problem and aborts
    /// the whole diagnosis run.
    #[error(
        "Required-capacity coefficient not found: floor {target_floor} of a {total_floors}-storey building, roof '{roof_weight}'"
    )]
    CoefficientNotFound {
        total_floors: u8,
        target_floor: u8,
        roof_weight: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
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

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CoefficientNotFound error
    pub fn coefficient_not_found(total_floors: u8, target_floor: u8, roof_weight: impl Into<String>) -> Self {
        CalcError::CoefficientNotFound {
            total_floors,
            target_floor,
            roof_weight: roof_weight.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by a defect in the static reference tables
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, CalcError::CoefficientNotFound { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CoefficientNotFound { .. } => "COEFFICIENT_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
