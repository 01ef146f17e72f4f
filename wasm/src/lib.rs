//! Calorie Calculator WASM Module
//!
//! WebAssembly bindings so browsers can run both calculators locally with
//! the same validation and formulas as the backend.

use calorie_calculator_shared::{activity_multiplier, CalculatorError};
use wasm_bindgen::prelude::*;

fn to_js_error(err: CalculatorError) -> JsError {
    JsError::new(err.message())
}

/// Estimate daily calorie needs (kcal/day); height in centimeters
#[wasm_bindgen(js_name = calculateCalories)]
pub fn calculate_calories(
    gender: &str,
    age: i32,
    weight_kg: f64,
    height_cm: f64,
    activity_level: &str,
    goal: &str,
) -> Result<f64, JsError> {
    calorie_calculator_shared::calculate_calories(gender, age, weight_kg, height_cm, activity_level, goal)
        .map_err(to_js_error)
}

/// Estimate body fat percentage (two decimals); height in meters
#[wasm_bindgen(js_name = calculateBodyFatPercentage)]
pub fn calculate_body_fat_percentage(
    gender: &str,
    age: i32,
    weight_kg: f64,
    height_m: f64,
) -> Result<f64, JsError> {
    calorie_calculator_shared::calculate_body_fat_percentage(gender, age, weight_kg, height_m)
        .map_err(to_js_error)
}

/// Activity multiplier for a level name; unknown names give 1.2
#[wasm_bindgen(js_name = activityMultiplier)]
pub fn lookup_activity_multiplier(level: &str) -> f64 {
    activity_multiplier(level)
}
