//! Health metrics calculations module
//!
//! Provides the energy expenditure and body fat formulas together with the
//! closed enumerations they are parameterised by.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Closed Inputs**: Gender, activity level and goal are enums, parsed
//!    once at the boundary
//! 3. **Explicit Units**: Every length/mass argument names its unit

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Input Enumerations
// ============================================================================

/// Gender used by the physiological formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All accepted values, in display order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else {
            Err(format!("Unknown gender: {}", s))
        }
    }
}

/// Activity multiplier applied when a level name is not recognised
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(rename = "sedentary")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(rename = "light")]
    Light,
    /// Moderate exercise 3-5 days/week
    #[serde(rename = "moderate")]
    Moderate,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "active")]
    Active,
    /// Very hard exercise, physical job
    #[serde(rename = "very active")]
    VeryActive,
}

impl ActivityLevel {
    /// All accepted values, in ascending order of activity
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Canonical lowercase name as accepted on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Weight goal applied on top of TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    /// All accepted values, in display order
    pub const ALL: [Goal; 3] = [Goal::Maintain, Goal::Lose, Goal::Gain];

    /// Daily calorie offset in kcal for this goal
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Maintain => 0.0,
            Goal::Lose => -500.0,
            Goal::Gain => 300.0,
        }
    }

    /// Apply the goal to a TDEE value
    ///
    /// Offsets come from [`Goal::calorie_adjustment`]; adding -500.0 is
    /// bit-identical to subtracting 500.0. Maintain returns the input as is
    /// so a -0.0 TDEE keeps its sign.
    pub fn apply(&self, tdee: f64) -> f64 {
        match self {
            Goal::Maintain => tdee,
            Goal::Lose | Goal::Gain => tdee + self.calorie_adjustment(),
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Maintain => "Keep current weight",
            Goal::Lose => "500 kcal daily deficit",
            Goal::Gain => "300 kcal daily surplus",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "maintain" => Ok(Goal::Maintain),
            "lose" => Ok(Goal::Lose),
            "gain" => Ok(Goal::Gain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Look up an activity multiplier by name
///
/// Unrecognised names fall back to the sedentary multiplier (1.2).
pub fn activity_multiplier(level: &str) -> f64 {
    level
        .parse::<ActivityLevel>()
        .map(|l| l.multiplier())
        .unwrap_or(DEFAULT_ACTIVITY_MULTIPLIER)
}

/// Apply a goal given by name to a TDEE value
///
/// Unrecognised names leave the value unchanged, same as `maintain`.
pub fn apply_goal_adjustment(tdee: f64, goal: &str) -> f64 {
    goal.parse::<Goal>().map(|g| g.apply(tdee)).unwrap_or(tdee)
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Validated inputs for the daily energy expenditure estimate
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyProfile {
    pub sex: Gender,
    /// Age in years
    pub age_years: i32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(profile: &EnergyProfile) -> f64 {
    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    bmr * profile.activity_level.multiplier()
}

/// Estimate daily calorie needs in kcal/day: TDEE adjusted for the goal
///
/// The value is returned at full precision, no rounding.
pub fn estimate_daily_energy_expenditure(profile: &EnergyProfile) -> f64 {
    profile.goal.apply(calculate_tdee(profile))
}

// ============================================================================
// Body Fat Estimation
// ============================================================================

/// Validated inputs for the body fat estimate
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFatProfile {
    pub sex: Gender,
    /// Age in years
    pub age_years: i32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Round to two decimal places, half away from zero
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Estimate body fat percentage from BMI
///
/// Men: BF% = 1.20 × BMI + 0.23 × Age - 16.8
/// Women: BF% = 1.20 × BMI + 0.23 × Age - 5.4
///
/// The result is rounded to two decimal places and is not clamped.
pub fn estimate_body_fat_percentage(profile: &BodyFatProfile) -> f64 {
    let bmi = calculate_bmi(profile.weight_kg, profile.height_m);
    let base = 1.20 * bmi + 0.23 * profile.age_years as f64;
    let body_fat = match profile.sex {
        Gender::Male => base - 16.8,
        Gender::Female => base - 5.4,
    };
    round_to_hundredths(body_fat)
}
