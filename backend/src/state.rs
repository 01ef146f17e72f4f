//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The state is
//! read-only during request handling.

use crate::config::AppConfig;
use crate::services::CalculatorService;
use std::sync::Arc;

/// Shared application state
///
/// Cloning is O(1): the config is behind an `Arc` and the calculator
/// service is zero-sized.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Stateless calculator service
    pub calculator: CalculatorService,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            calculator: CalculatorService::new(),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the calculator service
    #[inline]
    pub fn calculator(&self) -> &CalculatorService {
        &self.calculator
    }
}
