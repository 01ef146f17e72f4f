//! Calculator service
//!
//! Stateless wrapper around the shared calculator operations. Each call is
//! independent; the service holds no data and clones for free.

use crate::error::ApiError;
use calorie_calculator_shared::{
    calculate_body_fat_percentage_for, calculate_calories_for, BodyFatRequest, CaloriesRequest,
    CalculatorOptionsResponse,
};
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Estimate daily calorie needs in kcal/day
    #[instrument(skip(self, req), fields(gender = %req.gender, goal = %req.goal))]
    pub fn calories(&self, req: &CaloriesRequest) -> Result<f64, ApiError> {
        match calculate_calories_for(req) {
            Ok(calories) => {
                debug!(calories, activity_level = %req.activity_level, "calculated daily calories");
                Ok(calories)
            }
            Err(e) => {
                warn!(error = %e, "rejected calorie calculation");
                Err(e.into())
            }
        }
    }

    /// Estimate body fat percentage (two decimals)
    #[instrument(skip(self, req), fields(gender = %req.gender))]
    pub fn body_fat_percentage(&self, req: &BodyFatRequest) -> Result<f64, ApiError> {
        match calculate_body_fat_percentage_for(req) {
            Ok(percentage) => {
                debug!(percentage, "calculated body fat percentage");
                Ok(percentage)
            }
            Err(e) => {
                warn!(error = %e, "rejected body fat calculation");
                Err(e.into())
            }
        }
    }

    /// Accepted values for the enumerated inputs
    pub fn options(&self) -> CalculatorOptionsResponse {
        CalculatorOptionsResponse::from_enums()
    }
}
