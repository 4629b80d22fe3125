// ABOUTME: Generated daily meal and workout plan models
// ABOUTME: Meal, Exercise, per-day plans, and the MealPlan/WorkoutPlan pair handed to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Type of meal
///
/// Labels the parser does not recognise deserialize as [`MealType::Snack`].
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    #[default]
    Snack,
}

impl MealType {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Whether this is one of the three main meals
    #[must_use]
    pub const fn is_main_meal(&self) -> bool {
        !matches!(self, Self::Snack)
    }
}

impl FromStr for MealType {
    type Err = String;

    // Models occasionally label snacks around training sessions
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "pre-workout" | "post-workout" => Ok(Self::Snack),
            other => Err(format!("unknown meal type: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for MealType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(parse_label(&Value::deserialize(deserializer)?))
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exercise intensity
///
/// Unrecognised labels deserialize as [`Intensity::Moderate`].
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Easy effort
    Light,
    /// Sustainable effort
    #[default]
    Moderate,
    /// Hard effort
    High,
}

impl Intensity {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "low" => Ok(Self::Light),
            "moderate" | "medium" => Ok(Self::Moderate),
            "high" | "vigorous" => Ok(Self::High),
            other => Err(format!("unknown intensity: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for Intensity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(parse_label(&Value::deserialize(deserializer)?))
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Readers for loosely typed model output; none of them reject a value.

fn parse_label<T: FromStr + Default>(value: &Value) -> T {
    value
        .as_str()
        .and_then(|label| label.parse().ok())
        .unwrap_or_default()
}

fn leading_number(text: &str) -> f64 {
    let trimmed = text.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && c == '-')))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed
        .get(..end)
        .and_then(|number| number.parse().ok())
        .unwrap_or_default()
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) => leading_number(&s),
        _ => 0.0,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_macros<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Macros>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).ok())
    } else {
        Ok(None)
    }
}

/// Macronutrient breakdown in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein in grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,
    /// Carbohydrates in grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub carbs: f64,
    /// Fat in grams
    #[serde(default, deserialize_with = "lenient_number")]
    pub fat: f64,
}

/// A single planned meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Clock time, e.g. "7:00 AM"
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: String,
    /// Meal slot
    #[serde(default)]
    pub meal_type: MealType,
    /// Dish name
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Ingredients and preparation
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// Calories for the meal
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,
    /// Macronutrients, when the model provided them
    #[serde(
        default,
        deserialize_with = "lenient_macros",
        skip_serializing_if = "Option::is_none"
    )]
    pub macros: Option<Macros>,
}

/// Meals for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMealPlan {
    /// Day name, e.g. "Monday"
    #[serde(default)]
    pub day: String,
    /// Meals in the order they are eaten
    pub meals: Vec<Meal>,
}

impl DayMealPlan {
    /// Sum of meal calories
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|meal| meal.calories).sum()
    }

    /// Sum of the macros of every meal that reported them
    #[must_use]
    pub fn total_macros(&self) -> Macros {
        self.meals
            .iter()
            .filter_map(|meal| meal.macros)
            .fold(Macros::default(), |acc, m| Macros {
                protein: acc.protein + m.protein,
                carbs: acc.carbs + m.carbs,
                fat: acc.fat + m.fat,
            })
    }
}

/// A single planned exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Clock time, e.g. "6:30 AM"
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: String,
    /// Exercise name
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Free-form duration, e.g. "30 minutes"; bare numbers are kept as written
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: String,
    /// Effort level
    #[serde(default)]
    pub intensity: Intensity,
    /// How to perform it
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// Body area or modality, e.g. "cardio"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<String>,
}

/// Exercises for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayWorkoutPlan {
    /// Day name, e.g. "Monday"
    #[serde(default)]
    pub day: String,
    /// Exercises in the order they are performed
    pub exercises: Vec<Exercise>,
}

/// Generated meal plan
///
/// `days` holds exactly one entry: generation always targets today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// When the plan was generated
    pub date: DateTime<Utc>,
    /// Planned days
    pub days: Vec<DayMealPlan>,
    /// Allergen warnings raised by the model
    pub allergies_warning: Vec<String>,
    /// Nutritional summary as text (structured summaries are serialized as JSON)
    pub nutritional_summary: Option<String>,
    /// Ingredients to buy for the planned meals
    pub shopping_list: Vec<String>,
}

/// Generated workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// When the plan was generated
    pub date: DateTime<Utc>,
    /// Planned days
    pub days: Vec<DayWorkoutPlan>,
    /// Distinct focus areas across all exercises, in order of first appearance
    pub focus_areas: Vec<String>,
}

/// Result of a successful generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Today's meals
    pub meal_plan: MealPlan,
    /// Today's workout
    pub workout_plan: WorkoutPlan,
}
