// ABOUTME: Maps a validated model document onto the MealPlan / WorkoutPlan pair
// ABOUTME: Single-day wrapping, summary normalization and focus-area collection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::response::AiGeneratedPlan;
use crate::models::{DailyPlan, Exercise, MealPlan, WorkoutPlan};

/// Build the caller-facing plans
///
/// `day` fills in day names the model left blank.
#[must_use]
pub fn map_generated_plan(
    generated: AiGeneratedPlan,
    day: &str,
    generated_at: DateTime<Utc>,
) -> DailyPlan {
    let AiGeneratedPlan {
        mut meal_plan,
        mut workout_plan,
        allergies_warning,
        nutritional_summary,
        shopping_list,
    } = generated;

    if meal_plan.day.trim().is_empty() {
        day.clone_into(&mut meal_plan.day);
    }
    if workout_plan.day.trim().is_empty() {
        day.clone_into(&mut workout_plan.day);
    }

    let focus_areas = focus_areas(&workout_plan.exercises);

    DailyPlan {
        meal_plan: MealPlan {
            date: generated_at,
            days: vec![meal_plan],
            allergies_warning: allergies_warning.unwrap_or_default(),
            nutritional_summary: summary_text(nutritional_summary),
            shopping_list: shopping_list.unwrap_or_default(),
        },
        workout_plan: WorkoutPlan {
            date: generated_at,
            days: vec![workout_plan],
            focus_areas,
        },
    }
}

/// Text form of the nutritional summary: strings pass through, structured
/// values are serialized, null becomes `None`
#[must_use]
pub fn summary_text(summary: Option<Value>) -> Option<String> {
    match summary {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(structured) => Some(structured.to_string()),
    }
}

/// Distinct non-empty focus areas in order of first appearance
#[must_use]
pub fn focus_areas(exercises: &[Exercise]) -> Vec<String> {
    let mut seen = HashSet::new();
    exercises
        .iter()
        .filter_map(|exercise| exercise.focus_area.as_deref())
        .filter(|area| !area.is_empty())
        .filter(|area| seen.insert(*area))
        .map(str::to_owned)
        .collect()
}
