//! Calorie Calculator Shared Library
//!
//! This crate contains the calculator core (formulas, closed enumerations,
//! input validation) and the request/response types shared by the HTTP
//! backend and the WASM bindings.

pub mod calculator;
pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use calculator::*;
pub use errors::*;
pub use health_metrics::*;
pub use types::*;
