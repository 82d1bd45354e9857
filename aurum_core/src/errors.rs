//! # Error Types
//!
//! Structured error types for aurum_core. Every failure carries enough
//! context (field name, offending value, reason) for a caller to report it
//! or fix the input programmatically.
//!
//! ## Example
//!
//! ```rust
//! use aurum_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_mm: f64) -> CalcResult<()> {
//!     if width_mm <= 0.0 {
//!         return Err(CalcError::invalid_measurement(
//!             "width_mm",
//!             width_mm,
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_width(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for aurum_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for valuation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Ring size label is not in the circumference table
    #[error("Unknown ring size '{label}' - expected a label from {min} to {max}")]
    InvalidSizeKey { label: String, min: String, max: String },

    /// A width, thickness or price is zero, negative or not finite
    #[error("Invalid measurement for '{field}': {value} - {reason}")]
    InvalidMeasurement {
        field: String,
        value: String,
        reason: String,
    },

    /// Any other invalid input (inverted range, unknown enum text, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Gold purity grade not recognized
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// No usable market price for the requested purity
    #[error("No price available for {purity}: {reason}")]
    PriceUnavailable { purity: String, reason: String },

    /// Settings file could not be parsed
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

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
    /// Create an InvalidSizeKey error
    pub fn invalid_size_key(label: impl Into<String>, min: impl Into<String>, max: impl Into<String>) -> Self {
        CalcError::InvalidSizeKey {
            label: label.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create an InvalidMeasurement error
    pub fn invalid_measurement(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        CalcError::InvalidMeasurement {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a PriceUnavailable error
    pub fn price_unavailable(purity: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::PriceUnavailable {
            purity: purity.into(),
            reason: reason.into(),
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

    /// Whether the error comes from the caller's input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidSizeKey { .. }
                | CalcError::InvalidMeasurement { .. }
                | CalcError::InvalidInput { .. }
                | CalcError::MaterialNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidSizeKey { .. } => "INVALID_SIZE_KEY",
            CalcError::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::PriceUnavailable { .. } => "PRICE_UNAVAILABLE",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
