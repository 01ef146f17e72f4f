//! Calculator operations
//!
//! The two public operations: validate the raw fields, then compute.
//! Both are pure and safe to call from any number of threads at once.

use crate::errors::CalculatorResult;
use crate::health_metrics::{estimate_body_fat_percentage, estimate_daily_energy_expenditure};
use crate::types::{BodyFatRequest, CaloriesRequest};
use crate::validation::{validate_body_fat_request, validate_calories_request};

/// Estimate daily calorie needs (kcal/day)
///
/// Height is in centimeters. The result is not rounded.
pub fn calculate_calories(
    gender: &str,
    age: i32,
    weight_kg: f64,
    height_cm: f64,
    activity_level: &str,
    goal: &str,
) -> CalculatorResult<f64> {
    let req = CaloriesRequest {
        gender: gender.to_string(),
        age,
        weight_kg,
        height_cm,
        activity_level: activity_level.to_string(),
        goal: goal.to_string(),
    };
    calculate_calories_for(&req)
}

/// Estimate daily calorie needs from a request body
pub fn calculate_calories_for(req: &CaloriesRequest) -> CalculatorResult<f64> {
    let profile = validate_calories_request(req)?;
    Ok(estimate_daily_energy_expenditure(&profile))
}

/// Estimate body fat percentage, rounded to two decimals
///
/// Height is in meters.
pub fn calculate_body_fat_percentage(
    gender: &str,
    age: i32,
    weight_kg: f64,
    height_m: f64,
) -> CalculatorResult<f64> {
    let req = BodyFatRequest {
        gender: gender.to_string(),
        age,
        weight: weight_kg,
        height: height_m,
    };
    calculate_body_fat_percentage_for(&req)
}

/// Estimate body fat percentage from a request body
pub fn calculate_body_fat_percentage_for(req: &BodyFatRequest) -> CalculatorResult<f64> {
    let profile = validate_body_fat_request(req)?;
    Ok(estimate_body_fat_percentage(&profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalculatorError;
    use proptest::prelude::*;

    #[test]
    fn test_calories_examples() {
        let male = calculate_calories("male", 25, 70.0, 175.0, "moderate", "maintain").unwrap();
        assert!((male - 2594.3125).abs() < 1e-9);

        let female = calculate_calories("female", 30, 60.0, 165.0, "light", "lose").unwrap();
        assert!((female - 1315.34375).abs() < 1e-9);
    }

    #[test]
    fn test_body_fat_example() {
        let bf = calculate_body_fat_percentage("male", 40, 80.0, 1.8).unwrap();
        assert_eq!(bf, 22.03);
    }

    #[test]
    fn test_errors_are_invalid_input() {
        let err = calculate_calories("x", 25, 70.0, 175.0, "moderate", "maintain").unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidInput(_)));

        let err = calculate_body_fat_percentage("x", 25, 70.0, 1.75).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidInput(_)));
    }

    fn gender_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![Just("male"), Just("female"), Just("MALE"), Just("Female")]
    }

    fn activity_strategy() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("sedentary"),
            Just("light"),
            Just("moderate"),
            Just("active"),
            Just("very active")
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: gain is exactly +300 and lose exactly -500 relative to maintain
        #[test]
        fn prop_goal_is_pure_offset(
            gender in gender_strategy(),
            activity in activity_strategy(),
            age in 1i32..100,
            weight in 20.0f64..250.0,
            height in 100.0f64..230.0
        ) {
            let maintain = calculate_calories(gender, age, weight, height, activity, "maintain").unwrap();
            let gain = calculate_calories(gender, age, weight, height, activity, "gain").unwrap();
            let lose = calculate_calories(gender, age, weight, height, activity, "lose").unwrap();
            prop_assert!((gain - maintain - 300.0).abs() < 1e-9);
            prop_assert!((lose - maintain + 500.0).abs() < 1e-9);
        }

        /// Property: identical inputs give bit-identical outputs
        #[test]
        fn prop_calls_are_deterministic(
            gender in gender_strategy(),
            activity in activity_strategy(),
            age in 1i32..100,
            weight in 20.0f64..250.0,
            height_cm in 100.0f64..230.0
        ) {
            let a = calculate_calories(gender, age, weight, height_cm, activity, "gain").unwrap();
            let b = calculate_calories(gender, age, weight, height_cm, activity, "gain").unwrap();
            prop_assert_eq!(a.to_bits(), b.to_bits());

            let height_m = height_cm / 100.0;
            let c = calculate_body_fat_percentage(gender, age, weight, height_m).unwrap();
            let d = calculate_body_fat_percentage(gender, age, weight, height_m).unwrap();
            prop_assert_eq!(c.to_bits(), d.to_bits());
        }

        /// Property: any non-positive age, weight or height is rejected by both operations
        #[test]
        fn prop_non_positive_rejected(
            age in -100i32..=0,
            weight in -500.0f64..=0.0,
            height in -3.0f64..=0.0,
            which in 0usize..3
        ) {
            let (a, w, h) = match which {
                0 => (age, 70.0, 1.75),
                1 => (30, weight, 1.75),
                _ => (30, 70.0, height),
            };
            prop_assert!(calculate_calories("male", a, w, h * 100.0, "light", "maintain").is_err());
            prop_assert!(calculate_body_fat_percentage("male", a, w, h).is_err());
        }

        /// Property: unknown genders are rejected by both operations
        #[test]
        fn prop_unknown_gender_rejected(gender in "[a-zA-Z ]{0,12}") {
            let lowered = gender.to_lowercase();
            prop_assume!(lowered != "male" && lowered != "female");
            prop_assert!(calculate_calories(&gender, 30, 70.0, 175.0, "light", "maintain").is_err());
            prop_assert!(calculate_body_fat_percentage(&gender, 30, 70.0, 1.75).is_err());
        }
    }
}
