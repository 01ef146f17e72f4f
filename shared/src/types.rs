//! API request and response types
//!
//! Field names are camelCase on the wire. Request fields default when
//! absent (empty string, zero), and string fields also accept `null` as
//! empty, so both are reported by the calculator's own validation rather
//! than as a decode failure.

use crate::health_metrics::{ActivityLevel, Gender, Goal};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a string field, reading `null` as the empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Energy expenditure request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaloriesRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub gender: String,
    pub age: i32,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(deserialize_with = "null_as_empty")]
    pub activity_level: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub goal: String,
}

/// Energy expenditure response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaloriesResponse {
    pub calories: f64,
    pub unit: String,
}

impl CaloriesResponse {
    pub fn new(calories: f64) -> Self {
        Self {
            calories,
            unit: "kcal/day".to_string(),
        }
    }
}

/// Body fat request (weight in kg, height in meters)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyFatRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub gender: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
}

/// Body fat response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFatPercentageResponse {
    pub body_fat_percentage: f64,
}

/// Accepted activity level with its multiplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLevelOption {
    pub name: String,
    pub multiplier: f64,
    pub description: String,
}

/// Accepted goal with its daily kcal offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOption {
    pub name: String,
    pub calorie_adjustment: f64,
    pub description: String,
}

/// Accepted values for the calculator's enumerated inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorOptionsResponse {
    pub genders: Vec<String>,
    pub activity_levels: Vec<ActivityLevelOption>,
    pub goals: Vec<GoalOption>,
}

impl CalculatorOptionsResponse {
    /// Build the option listing from the enumerations
    pub fn from_enums() -> Self {
        Self {
            genders: Gender::ALL.iter().map(|g| g.to_string()).collect(),
            activity_levels: ActivityLevel::ALL
                .iter()
                .map(|level| ActivityLevelOption {
                    name: level.to_string(),
                    multiplier: level.multiplier(),
                    description: level.description().to_string(),
                })
                .collect(),
            goals: Goal::ALL
                .iter()
                .map(|goal| GoalOption {
                    name: goal.to_string(),
                    calorie_adjustment: goal.calorie_adjustment(),
                    description: goal.description().to_string(),
                })
                .collect(),
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
