// src/error.rs
use std::fmt;

/// Error types for the path-exotics library
#[derive(Debug, Clone, PartialEq)]
pub enum McError {
    /// A statistic was requested over zero elements
    EmptySequence { operation: String },

    /// Path buffer cannot hold the initial price
    InvalidBuffer { length: usize },

    /// Invalid configuration supplied by a driver
    InvalidConfiguration { field: String, reason: String },

    /// Aggregated result is not a finite number
    NumericalInstability { method: String, reason: String },
}

impl fmt::Display for McError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            McError::EmptySequence { operation } => {
                write!(f, "Cannot compute {} of an empty sequence", operation)
            }
            McError::InvalidBuffer { length } => {
                write!(
                    f,
                    "Invalid path buffer of length {}: at least one slot is required",
                    length
                )
            }
            McError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            McError::NumericalInstability { method, reason } => {
                write!(f, "Numerical instability in {}: {}", method, reason)
            }
        }
    }
}

impl std::error::Error for McError {}

/// Result type alias for path-exotics operations
pub type McResult<T> = Result<T, McError>;

/// Validation utilities
pub mod validation {
    use super::{McError, McResult};

    /// Reject empty input before a reduction is attempted
    pub fn validate_non_empty(operation: &str, xs: &[f64]) -> McResult<()> {
        if xs.is_empty() {
            Err(McError::EmptySequence {
                operation: operation.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Path buffers must hold at least the initial price
    pub fn validate_buffer(path: &[f64]) -> McResult<()> {
        if path.is_empty() {
            Err(McError::InvalidBuffer { length: 0 })
        } else {
            Ok(())
        }
    }

    /// Validate that a computed quantity is finite and not NaN
    pub fn validate_finite(method: &str, name: &str, value: f64) -> McResult<()> {
        if !value.is_finite() {
            Err(McError::NumericalInstability {
                method: method.to_string(),
                reason: format!("{} is not finite: {}", name, value),
            })
        } else {
            Ok(())
        }
    }
}
