//! Error types for the calorie calculator

use thiserror::Error;

/// Calculator error types
///
/// Every rejection is terminal for the call that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("{0}")]
    InvalidInput(String),
}

impl CalculatorError {
    /// Human-readable message carried by the error
    pub fn message(&self) -> &str {
        match self {
            CalculatorError::InvalidInput(msg) => msg,
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
