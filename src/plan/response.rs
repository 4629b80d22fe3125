// ABOUTME: Decodes and structurally validates the model's plan document
// ABOUTME: Repair, JSON parse, minimum-shape checks, then lenient typed deserialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use super::repair::clean_json_response;
use crate::constants::plan_rules;
use crate::errors::PlanGenerationError;
use crate::models::{DayMealPlan, DayWorkoutPlan};

/// Plan document as produced by the model
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiGeneratedPlan {
    /// Today's meals
    pub meal_plan: DayMealPlan,
    /// Today's exercises
    pub workout_plan: DayWorkoutPlan,
    /// Allergen warnings
    #[serde(default)]
    pub allergies_warning: Option<Vec<String>>,
    /// Free text or `{calories, protein, carbs, fat}`
    #[serde(default)]
    pub nutritional_summary: Option<Value>,
    /// Ingredients to buy
    #[serde(default)]
    pub shopping_list: Option<Vec<String>>,
}

/// Repair and parse raw model output into a plan
///
/// # Errors
///
/// `ResponseDecode` when the cleaned text is not JSON, `ResponseShape` when it
/// fails the minimum-shape checks, `Generation` when a meal or exercise entry
/// is not an object.
pub fn decode_plan(raw: &str) -> Result<AiGeneratedPlan, PlanGenerationError> {
    let cleaned = clean_json_response(raw);

    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        error!(
            error = %e,
            raw_text = %raw,
            cleaned_text = %cleaned,
            "Failed to parse AI response"
        );
        PlanGenerationError::ResponseDecode {
            message: e.to_string(),
            raw: raw.to_owned(),
            cleaned: cleaned.clone(),
        }
    })?;

    validate_shape(&value)?;

    serde_json::from_value(value).map_err(|e| {
        error!(error = %e, "AI plan passed shape checks but could not be mapped");
        PlanGenerationError::generation(format!("failed to map AI plan: {e}"))
    })
}

/// Minimum structure: a meal plan with at least three meals and a workout
/// plan with an exercise list
///
/// # Errors
///
/// Returns `ResponseShape` naming the first failed check.
pub fn validate_shape(value: &Value) -> Result<(), PlanGenerationError> {
    let meal_plan = value
        .get("mealPlan")
        .filter(|v| v.is_object())
        .ok_or_else(|| PlanGenerationError::shape("missing mealPlan object"))?;

    let meal_count = meal_plan
        .get("meals")
        .and_then(Value::as_array)
        .map(Vec::len)
        .ok_or_else(|| PlanGenerationError::shape("mealPlan has no meals list"))?;

    if meal_count < plan_rules::MIN_MEALS {
        return Err(PlanGenerationError::shape(format!(
            "meal plan must include at least {} meals, got {meal_count}",
            plan_rules::MIN_MEALS
        )));
    }

    value
        .get("workoutPlan")
        .filter(|v| v.is_object())
        .ok_or_else(|| PlanGenerationError::shape("missing workoutPlan object"))?
        .get("exercises")
        .filter(|v| v.is_array())
        .ok_or_else(|| PlanGenerationError::shape("workoutPlan has no exercises list"))?;

    Ok(())
}
