//! Calculator API routes

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use calorie_calculator_shared::{
    BodyFatPercentageResponse, BodyFatRequest, CaloriesRequest, CaloriesResponse,
    CalculatorOptionsResponse,
};

/// Create calculator routes
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route("/calories", post(calculate_calories))
        .route("/body-fat", post(calculate_body_fat_percentage))
        .route("/options", get(get_options))
}

/// POST /api/v1/calculator/calories - Estimate daily energy expenditure
///
/// Height is in centimeters. Returns kcal/day at full precision.
async fn calculate_calories(
    State(state): State<AppState>,
    payload: Result<Json<CaloriesRequest>, JsonRejection>,
) -> ApiResult<Json<CaloriesResponse>> {
    let Json(req) = payload?;
    let calories = state.calculator().calories(&req)?;
    Ok(Json(CaloriesResponse::new(calories)))
}

/// POST /api/v1/calculator/body-fat - Estimate body fat percentage
///
/// Height is in meters. Returns a percentage rounded to two decimals.
async fn calculate_body_fat_percentage(
    State(state): State<AppState>,
    payload: Result<Json<BodyFatRequest>, JsonRejection>,
) -> ApiResult<Json<BodyFatPercentageResponse>> {
    let Json(req) = payload?;
    let body_fat_percentage = state.calculator().body_fat_percentage(&req)?;
    Ok(Json(BodyFatPercentageResponse { body_fat_percentage }))
}

/// GET /api/v1/calculator/options - List accepted genders, activity levels and goals
async fn get_options(State(state): State<AppState>) -> Json<CalculatorOptionsResponse> {
    Json(state.calculator().options())
}
