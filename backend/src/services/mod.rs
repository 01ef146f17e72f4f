//! Business logic services
//!
//! Services wrap the shared calculator with request logging and error
//! conversion for the HTTP layer.

pub mod calculator;

pub use calculator::CalculatorService;
