use std::fmt;
use std::str::FromStr;

use crate::error::{FitError, Result};

// Harris-Benedict coefficients: (base, per kg, per cm, per year of age).
const MALE_COEFFICIENTS: (f64, f64, f64, f64) = (88.362, 13.397, 4.799, 5.677);
const FEMALE_COEFFICIENTS: (f64, f64, f64, f64) = (447.593, 9.247, 3.098, 4.330);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(FitError::InvalidInput(format!("unknown sex '{}'", other))),
        }
    }
}

/// Weekly exercise level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    /// Little or no exercise.
    Sedentary,
    /// Exercise 1-3 times a week.
    Light,
    /// Exercise 4-5 times a week.
    Moderate,
    /// Daily exercise or intense exercise 3-4 times a week.
    Active,
    /// Intense exercise 6-7 times a week.
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very-active",
        })
    }
}

impl FromStr for ActivityLevel {
    type Err = FitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very-active" | "veryactive" => Ok(ActivityLevel::VeryActive),
            other => Err(FitError::InvalidInput(format!(
                "unknown activity level '{}'",
                other
            ))),
        }
    }
}

/// Body measurements and activity for the calorie estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieInput {
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: Sex,
    pub activity: ActivityLevel,
}

impl CalorieInput {
    fn validate(&self) -> Result<()> {
        for (label, value) in [
            ("age", self.age),
            ("weight", self.weight_kg),
            ("height", self.height_cm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FitError::InvalidInput(format!(
                    "{} must be a positive number, got {}",
                    label, value
                )));
            }
        }
        Ok(())
    }
}

/// Basal metabolic rate (kcal/day), revised Harris-Benedict equation.
pub fn basal_metabolic_rate(input: &CalorieInput) -> Result<f64> {
    input.validate()?;

    let (base, per_kg, per_cm, per_year) = match input.sex {
        Sex::Male => MALE_COEFFICIENTS,
        Sex::Female => FEMALE_COEFFICIENTS,
    };

    Ok(base + per_kg * input.weight_kg + per_cm * input.height_cm - per_year * input.age)
}

/// Daily calorie needs: BMR scaled by activity, rounded to whole kcal.
pub fn daily_calories(input: &CalorieInput) -> Result<u32> {
    let total = basal_metabolic_rate(input)? * input.activity.multiplier();
    if total <= 0.0 {
        return Err(FitError::InvalidInput(
            "measurements give a non-positive calorie estimate".to_string(),
        ));
    }
    Ok(total.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn male() -> CalorieInput {
        CalorieInput {
            age: 30.0,
            weight_kg: 80.0,
            height_cm: 180.0,
            sex: Sex::Male,
            activity: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_bmr_male() {
        assert_float_absolute_eq!(basal_metabolic_rate(&male()).unwrap(), 1853.632, 1e-6);
    }

    #[test]
    fn test_daily_calories_male_moderate() {
        assert_eq!(daily_calories(&male()).unwrap(), 2873);
    }

    #[test]
    fn test_daily_calories_female_sedentary() {
        let input = CalorieInput {
            age: 25.0,
            weight_kg: 60.0,
            height_cm: 165.0,
            sex: Sex::Female,
            activity: ActivityLevel::Sedentary,
        };
        assert_eq!(daily_calories(&input).unwrap(), 1686);
    }

    #[test]
    fn test_rejects_non_positive() {
        let mut input = male();
        input.weight_kg = 0.0;
        assert!(matches!(daily_calories(&input), Err(FitError::InvalidInput(_))));
    }

    #[test]
    fn test_activity_parse() {
        assert_eq!("very_active".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("VeryActive".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert!("couch".parse::<ActivityLevel>().is_err());
    }
}
