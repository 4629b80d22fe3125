// ABOUTME: Health profile model driving plan generation
// ABOUTME: HealthProfile, its enumerated attributes, required-field checks and BMI insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::bmi;

/// Declares a profile attribute enum stored as a fixed lowercase phrase
macro_rules! profile_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stored string representation
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| format!("unknown {} value: {s}", stringify!($name)))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

profile_enum! {
    /// Gender as entered by the user
    Gender {
        /// Male
        Male => "male",
        /// Female
        Female => "female",
        /// Other
        Other => "other",
        /// Declined to answer
        PreferNotToSay => "prefer not to say",
    }
}

profile_enum! {
    /// Primary fitness goal
    FitnessGoal {
        /// Reduce body fat
        LoseFat => "lose fat",
        /// Reduce body weight
        LoseWeight => "lose weight",
        /// Increase muscle mass
        BuildMuscle => "build muscle",
        /// Increase body weight
        GainWeight => "gain weight",
        /// Keep current condition
        Maintain => "maintain",
        /// Build aerobic capacity
        ImproveEndurance => "improve endurance",
    }
}

profile_enum! {
    /// Training experience
    FitnessLevel {
        /// New to training
        Beginner => "beginner",
        /// Trains regularly
        Intermediate => "intermediate",
        /// Experienced athlete
        Advanced => "advanced",
    }
}

profile_enum! {
    /// Everyday activity outside of planned workouts
    ActivityLevel {
        /// Little or no exercise
        Sedentary => "sedentary",
        /// Light exercise 1-3 days a week
        LightlyActive => "lightly active",
        /// Moderate exercise 3-5 days a week
        ModeratelyActive => "moderately active",
        /// Hard exercise 6-7 days a week
        VeryActive => "very active",
        /// Physical job plus hard exercise
        ExtremelyActive => "extremely active",
    }
}

/// Numeric profile fields that must be present before a plan can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    /// Age in years
    Age,
    /// Weight in kilograms
    Weight,
    /// Height in centimeters
    Height,
}

impl RequiredField {
    /// Field name as stored in the profile
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Weight => "weight",
            Self::Height => "height",
        }
    }

    /// Phrase used when asking the user to fill the field in
    #[must_use]
    pub const fn request_phrase(&self) -> &'static str {
        match self {
            Self::Age => "your age",
            Self::Weight => "your current weight",
            Self::Height => "your height",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body mass index category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    NormalWeight,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(value: f64) -> Self {
        if value < bmi::UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if value < bmi::NORMAL_BELOW {
            Self::NormalWeight
        } else if value < bmi::OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// A user's stored health and fitness attributes
///
/// Numeric fields are optional because a freshly registered user has not
/// filled them in yet; see [`HealthProfile::missing_required_fields`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Age in years
    #[serde(default)]
    pub age: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Gender
    #[serde(default, deserialize_with = "blank_as_none")]
    pub gender: Option<Gender>,
    /// Fitness goal
    #[serde(default, deserialize_with = "blank_as_none")]
    pub goal: Option<FitnessGoal>,
    /// Diet restrictions such as "vegetarian" or "gluten-free"
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Free-form allergies entered by the user
    #[serde(default)]
    pub custom_allergies: Vec<String>,
    /// Training experience
    #[serde(default, deserialize_with = "blank_as_none")]
    pub fitness_level: Option<FitnessLevel>,
    /// Everyday activity
    #[serde(default, deserialize_with = "blank_as_none")]
    pub activity_level: Option<ActivityLevel>,
}

impl HealthProfile {
    /// Profile seeded for newly registered users
    ///
    /// The zeroed numeric fields intentionally fail the required-field check
    /// so the first plan request asks the user to complete the profile.
    #[must_use]
    pub const fn registration_defaults() -> Self {
        Self {
            age: Some(0.0),
            weight: Some(0.0),
            height: Some(0.0),
            gender: Some(Gender::Other),
            goal: Some(FitnessGoal::Maintain),
            dietary_restrictions: Vec::new(),
            custom_allergies: Vec::new(),
            fitness_level: Some(FitnessLevel::Beginner),
            activity_level: Some(ActivityLevel::ModeratelyActive),
        }
    }

    /// Value of a required numeric field
    #[must_use]
    pub const fn required_value(&self, field: RequiredField) -> Option<f64> {
        match field {
            RequiredField::Age => self.age,
            RequiredField::Weight => self.weight,
            RequiredField::Height => self.height,
        }
    }

    /// Required fields that are absent, not a number, or not positive
    #[must_use]
    pub fn missing_required_fields(&self) -> Vec<RequiredField> {
        [RequiredField::Age, RequiredField::Weight, RequiredField::Height]
            .into_iter()
            .filter(|field| !is_usable_measure(self.required_value(*field)))
            .collect()
    }

    /// Whether every required field holds a usable value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_required_fields().is_empty()
    }

    /// Body mass index, when weight and height are usable
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight.filter(|w| is_usable_measure(Some(*w)))?;
        let height_m = self.height.filter(|h| is_usable_measure(Some(*h)))? / bmi::CM_PER_METER;
        Some(weight / (height_m * height_m))
    }

    /// BMI category, when BMI can be computed
    #[must_use]
    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }

    /// Dietary restrictions followed by custom allergies
    pub fn all_restrictions(&self) -> impl Iterator<Item = &str> {
        self.dietary_restrictions
            .iter()
            .chain(&self.custom_allergies)
            .map(String::as_str)
    }
}

fn is_usable_measure(value: Option<f64>) -> bool {
    value.is_some_and(|v| v.is_finite() && v > 0.0)
}

/// Treats a missing, null or blank string as an unset attribute
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_profile() -> HealthProfile {
        HealthProfile {
            age: Some(32.0),
            weight: Some(70.0),
            height: Some(175.0),
            ..HealthProfile::default()
        }
    }

    #[test]
    fn test_complete_profile_has_no_missing_fields() {
        assert!(complete_profile().is_complete());
    }

    #[test]
    fn test_zero_nan_and_absent_are_missing() {
        let profile = HealthProfile {
            age: Some(0.0),
            weight: Some(f64::NAN),
            height: None,
            ..HealthProfile::default()
        };
        assert_eq!(
            profile.missing_required_fields(),
            vec![RequiredField::Age, RequiredField::Weight, RequiredField::Height]
        );
    }

    #[test]
    fn test_negative_values_are_missing() {
        let profile = HealthProfile {
            height: Some(-170.0),
            ..complete_profile()
        };
        assert_eq!(profile.missing_required_fields(), vec![RequiredField::Height]);
    }

    #[test]
    fn test_registration_defaults_are_incomplete() {
        assert_eq!(
            HealthProfile::registration_defaults()
                .missing_required_fields()
                .len(),
            3
        );
    }

    #[test]
    fn test_bmi_and_category() {
        let profile = HealthProfile {
            weight: Some(80.0),
            height: Some(200.0),
            ..complete_profile()
        };
        let value = profile.bmi().expect("bmi should be computed");
        assert!((value - 20.0).abs() < 1e-9);
        assert_eq!(profile.bmi_category(), Some(BmiCategory::NormalWeight));

        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(HealthProfile::default().bmi(), None);
    }

    #[test]
    fn test_deserialize_camel_case_and_phrases() {
        let profile: HealthProfile = serde_json::from_value(json!({
            "age": 28,
            "weight": 64.5,
            "height": 168,
            "gender": "prefer not to say",
            "goal": "",
            "dietaryRestrictions": ["vegan"],
            "customAllergies": ["peanuts"],
            "fitnessLevel": "Intermediate",
            "activityLevel": "lightly active"
        }))
        .expect("profile should deserialize");

        assert_eq!(profile.weight, Some(64.5));
        assert_eq!(profile.gender, Some(Gender::PreferNotToSay));
        assert_eq!(profile.goal, None);
        assert_eq!(profile.fitness_level, Some(FitnessLevel::Intermediate));
        assert_eq!(profile.activity_level, Some(ActivityLevel::LightlyActive));
        assert_eq!(
            profile.all_restrictions().collect::<Vec<_>>(),
            vec!["vegan", "peanuts"]
        );
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let result = serde_json::from_value::<HealthProfile>(json!({ "goal": "fly" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_uses_stored_phrases() {
        let profile = HealthProfile {
            goal: Some(FitnessGoal::ImproveEndurance),
            ..complete_profile()
        };
        let value = serde_json::to_value(&profile).expect("profile should serialize");
        assert_eq!(value["goal"], "improve endurance");
        assert_eq!(value["dietaryRestrictions"], json!([]));
    }
}
