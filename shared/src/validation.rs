//! Input validation functions
//!
//! Turns raw request fields into the typed profiles consumed by
//! [`crate::health_metrics`]. Energy expenditure checks run in a fixed order
//! and report the first failure; the body fat check reports a single
//! combined failure.

use crate::errors::CalculatorError;
use crate::health_metrics::{ActivityLevel, BodyFatProfile, EnergyProfile, Gender, Goal};
use crate::types::{BodyFatRequest, CaloriesRequest};

pub const INVALID_GENDER_MESSAGE: &str = "Invalid gender. Use 'male' or 'female'.";
pub const NON_POSITIVE_MEASUREMENT_MESSAGE: &str = "Age, weight, and height must be positive.";
pub const INVALID_ACTIVITY_LEVEL_MESSAGE: &str =
    "Invalid activity level. Use: sedentary, light, moderate, active, very active.";
pub const INVALID_GOAL_MESSAGE: &str = "Invalid goal. Use: maintain, lose, gain.";
pub const INVALID_BODY_FAT_INPUT_MESSAGE: &str =
    "Invalid input. Weight, height, and age must be positive and gender must be 'male' or 'female'.";

/// Validate gender (case-insensitive "male" or "female")
pub fn validate_gender(gender: &str) -> Result<Gender, CalculatorError> {
    gender
        .parse()
        .map_err(|_| CalculatorError::InvalidInput(INVALID_GENDER_MESSAGE.to_string()))
}

/// Validate that age, weight and height are all strictly positive
pub fn validate_positive_measurements(age: i32, weight: f64, height: f64) -> Result<(), CalculatorError> {
    if age <= 0 || weight <= 0.0 || height <= 0.0 {
        return Err(CalculatorError::InvalidInput(
            NON_POSITIVE_MEASUREMENT_MESSAGE.to_string(),
        ));
    }
    Ok(())
}

/// Validate activity level (lowercased, one of the five known levels)
pub fn validate_activity_level(level: &str) -> Result<ActivityLevel, CalculatorError> {
    level
        .parse()
        .map_err(|_| CalculatorError::InvalidInput(INVALID_ACTIVITY_LEVEL_MESSAGE.to_string()))
}

/// Validate goal (lowercased, one of maintain/lose/gain)
pub fn validate_goal(goal: &str) -> Result<Goal, CalculatorError> {
    goal.parse()
        .map_err(|_| CalculatorError::InvalidInput(INVALID_GOAL_MESSAGE.to_string()))
}

/// Validate an energy expenditure request
///
/// Order: gender, then measurements, then activity level, then goal.
pub fn validate_calories_request(req: &CaloriesRequest) -> Result<EnergyProfile, CalculatorError> {
    let sex = validate_gender(&req.gender)?;
    validate_positive_measurements(req.age, req.weight_kg, req.height_cm)?;
    let activity_level = validate_activity_level(&req.activity_level)?;
    let goal = validate_goal(&req.goal)?;

    Ok(EnergyProfile {
        sex,
        age_years: req.age,
        weight_kg: req.weight_kg,
        height_cm: req.height_cm,
        activity_level,
        goal,
    })
}

/// Validate a body fat request
///
/// Any failing field produces the same generic error.
pub fn validate_body_fat_request(req: &BodyFatRequest) -> Result<BodyFatProfile, CalculatorError> {
    let invalid = || CalculatorError::InvalidInput(INVALID_BODY_FAT_INPUT_MESSAGE.to_string());

    if req.weight <= 0.0 || req.height <= 0.0 || req.age <= 0 {
        return Err(invalid());
    }
    let sex: Gender = req.gender.parse().map_err(|_| invalid())?;

    Ok(BodyFatProfile {
        sex,
        age_years: req.age,
        weight_kg: req.weight,
        height_m: req.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn calories_request() -> CaloriesRequest {
        CaloriesRequest {
            gender: "male".to_string(),
            age: 25,
            weight_kg: 70.0,
            height_cm: 175.0,
            activity_level: "moderate".to_string(),
            goal: "maintain".to_string(),
        }
    }

    fn body_fat_request() -> BodyFatRequest {
        BodyFatRequest {
            gender: "female".to_string(),
            age: 30,
            weight: 60.0,
            height: 1.65,
        }
    }

    fn message(err: CalculatorError) -> String {
        err.message().to_string()
    }

    #[test]
    fn test_valid_calories_request() {
        let profile = validate_calories_request(&calories_request()).unwrap();
        assert_eq!(profile.sex, Gender::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Maintain);
        assert_eq!(profile.height_cm, 175.0);
    }

    #[test]
    fn test_gender_checked_first() {
        // Every field is invalid; the gender message must win
        let req = CaloriesRequest {
            gender: String::new(),
            age: 0,
            weight_kg: -1.0,
            height_cm: 0.0,
            activity_level: "lazy".to_string(),
            goal: "shred".to_string(),
        };
        let err = validate_calories_request(&req).unwrap_err();
        assert_eq!(message(err), INVALID_GENDER_MESSAGE);
    }

    #[test]
    fn test_measurements_checked_before_activity() {
        let req = CaloriesRequest {
            age: 0,
            activity_level: "lazy".to_string(),
            goal: "shred".to_string(),
            ..calories_request()
        };
        let err = validate_calories_request(&req).unwrap_err();
        assert_eq!(message(err), NON_POSITIVE_MEASUREMENT_MESSAGE);
    }

    #[test]
    fn test_activity_checked_before_goal() {
        let req = CaloriesRequest {
            activity_level: "lazy".to_string(),
            goal: "shred".to_string(),
            ..calories_request()
        };
        let err = validate_calories_request(&req).unwrap_err();
        assert_eq!(message(err), INVALID_ACTIVITY_LEVEL_MESSAGE);
    }

    #[test]
    fn test_goal_checked_last() {
        let req = CaloriesRequest {
            goal: "shred".to_string(),
            ..calories_request()
        };
        let err = validate_calories_request(&req).unwrap_err();
        assert_eq!(message(err), INVALID_GOAL_MESSAGE);
    }

    #[rstest]
    #[case(0, 70.0, 175.0)]
    #[case(-5, 70.0, 175.0)]
    #[case(25, 0.0, 175.0)]
    #[case(25, -70.0, 175.0)]
    #[case(25, 70.0, 0.0)]
    #[case(25, 70.0, -175.0)]
    fn test_non_positive_measurements_rejected(#[case] age: i32, #[case] weight: f64, #[case] height: f64) {
        assert!(validate_positive_measurements(age, weight, height).is_err());
    }

    #[test]
    fn test_mixed_case_inputs_accepted() {
        let req = CaloriesRequest {
            gender: "FeMale".to_string(),
            activity_level: "VERY ACTIVE".to_string(),
            goal: "Gain".to_string(),
            ..calories_request()
        };
        let profile = validate_calories_request(&req).unwrap();
        assert_eq!(profile.sex, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, Goal::Gain);
    }

    #[test]
    fn test_valid_body_fat_request() {
        let profile = validate_body_fat_request(&body_fat_request()).unwrap();
        assert_eq!(profile.sex, Gender::Female);
        assert_eq!(profile.height_m, 1.65);
    }

    #[rstest]
    #[case(BodyFatRequest { age: 0, ..body_fat_request() })]
    #[case(BodyFatRequest { weight: 0.0, ..body_fat_request() })]
    #[case(BodyFatRequest { height: -1.8, ..body_fat_request() })]
    #[case(BodyFatRequest { gender: "robot".to_string(), ..body_fat_request() })]
    #[case(BodyFatRequest { gender: String::new(), ..body_fat_request() })]
    fn test_body_fat_rejections_share_one_message(#[case] req: BodyFatRequest) {
        let err = validate_body_fat_request(&req).unwrap_err();
        assert_eq!(message(err), INVALID_BODY_FAT_INPUT_MESSAGE);
    }
}
