// ABOUTME: Tests for model output repair and plan document validation
// ABOUTME: Fences, block comments, trailing commas, and the minimum plan shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

mod common;

use common::plan_document;
use pierre_plan_generator::errors::PlanGenerationError;
use pierre_plan_generator::models::{Intensity, MealType};
use pierre_plan_generator::plan::clean_json_response;
use pierre_plan_generator::plan::mapping::{focus_areas, summary_text};
use pierre_plan_generator::plan::response::{decode_plan, validate_shape};
use serde_json::{json, Value};

// ============================================================================
// clean_json_response
// ============================================================================

#[test]
fn test_clean_document_is_unchanged() {
    let text = r#"{"a": [1, 2], "b": {"c": "d"}}"#;
    assert_eq!(clean_json_response(text), text);
}

#[test]
fn test_strips_json_fence_and_trailing_commas() {
    let text = "```json\n{\"meals\": [1, 2, 3,], \"day\": \"Monday\",}\n```";

    let cleaned = clean_json_response(text);

    let parsed: Value = serde_json::from_str(&cleaned).unwrap();
    assert_eq!(parsed, json!({ "meals": [1, 2, 3], "day": "Monday" }));
}

#[test]
fn test_strips_bare_fence() {
    let cleaned = clean_json_response("```\n{\"ok\": true}\n```\n");
    assert_eq!(cleaned, "{\"ok\": true}");
}

#[test]
fn test_strips_block_comments() {
    let text = "{\n  /* breakfast first */\n  \"meal\": \"oats\" /* high fiber\n  and cheap */\n}";

    let parsed: Value = serde_json::from_str(&clean_json_response(text)).unwrap();

    assert_eq!(parsed, json!({ "meal": "oats" }));
}

#[test]
fn test_trailing_comma_with_whitespace_before_bracket() {
    let cleaned = clean_json_response("[1, 2 ,\n\t ]");
    assert_eq!(cleaned, "[1, 2 ]");
}

#[test]
fn test_prose_passes_through_trimmed() {
    assert_eq!(clean_json_response("  no json here \n"), "no json here");
}

// ============================================================================
// validate_shape / decode_plan
// ============================================================================

fn shape_reason(value: &Value) -> String {
    match validate_shape(value) {
        Err(PlanGenerationError::ResponseShape { reason }) => reason,
        other => panic!("expected ResponseShape, got {other:?}"),
    }
}

#[test]
fn test_valid_document_passes_shape_check() {
    assert!(validate_shape(&plan_document(3)).is_ok());
}

#[test]
fn test_missing_meal_plan_fails_shape_check() {
    let reason = shape_reason(&json!({ "workoutPlan": { "exercises": [] } }));
    assert!(reason.contains("mealPlan"));
}

#[test]
fn test_meal_plan_without_meals_fails_shape_check() {
    let mut document = plan_document(3);
    document["mealPlan"] = json!({ "day": "Monday" });
    assert!(shape_reason(&document).contains("meals"));
}

#[test]
fn test_two_meals_fails_shape_check() {
    let reason = shape_reason(&plan_document(2));
    assert!(reason.contains("at least 3 meals"), "{reason}");
}

#[test]
fn test_empty_exercise_list_is_accepted() {
    let mut document = plan_document(3);
    document["workoutPlan"]["exercises"] = json!([]);
    assert!(validate_shape(&document).is_ok());
}

#[test]
fn test_array_root_fails_shape_check() {
    assert!(shape_reason(&json!([1, 2, 3])).contains("mealPlan"));
}

#[test]
fn test_decode_reports_raw_and_cleaned_text() {
    let raw = "```json\n{\"mealPlan\": \n```";

    match decode_plan(raw) {
        Err(PlanGenerationError::ResponseDecode {
            raw: got_raw,
            cleaned,
            message,
        }) => {
            assert_eq!(got_raw, raw);
            assert_eq!(cleaned, "{\"mealPlan\":");
            assert!(!message.is_empty());
        }
        other => panic!("expected ResponseDecode, got {other:?}"),
    }
}

#[test]
fn test_decode_fills_missing_day_and_time_with_defaults() {
    let mut document = plan_document(3);
    document["mealPlan"]
        .as_object_mut()
        .unwrap()
        .remove("day");
    document["mealPlan"]["meals"][0]
        .as_object_mut()
        .unwrap()
        .remove("time");

    let plan = decode_plan(&document.to_string()).unwrap();

    assert_eq!(plan.meal_plan.day, "");
    assert_eq!(plan.meal_plan.meals[0].time, "");
}

#[test]
fn test_decode_accepts_loosely_typed_fields() {
    let mut document = plan_document(3);
    document["mealPlan"]["meals"][0]["calories"] = json!("350");
    document["mealPlan"]["meals"][1]["mealType"] = json!("brunch");
    document["workoutPlan"]["exercises"][0]["duration"] = json!(30);
    document["workoutPlan"]["exercises"][1]["intensity"] = json!("extreme");

    let plan = decode_plan(&document.to_string()).unwrap();

    let meals = &plan.meal_plan.meals;
    assert!((meals[0].calories - 350.0).abs() < f64::EPSILON);
    assert_eq!(meals[1].meal_type, MealType::Snack);
    let exercises = &plan.workout_plan.exercises;
    assert_eq!(exercises[0].duration, "30");
    assert_eq!(exercises[1].intensity, Intensity::Moderate);
}

#[test]
fn test_decode_reports_generation_error_for_non_object_meals() {
    let mut document = plan_document(3);
    document["mealPlan"]["meals"] = json!(["oatmeal", "eggs", "toast"]);

    match decode_plan(&document.to_string()) {
        Err(PlanGenerationError::Generation { message }) => {
            assert!(message.starts_with("failed to map AI plan"), "{message}");
        }
        other => panic!("expected Generation, got {other:?}"),
    }
}

// ============================================================================
// Mapping helpers
// ============================================================================

#[test]
fn test_focus_areas_are_distinct_non_empty_in_first_seen_order() {
    let plan = decode_plan(&plan_document(3).to_string()).unwrap();
    let mut exercises = plan.workout_plan.exercises;
    exercises[3].focus_area = Some(String::new());

    assert_eq!(focus_areas(&exercises), vec!["cardio", "legs"]);
}

#[test]
fn test_summary_text_normalization() {
    assert_eq!(summary_text(None), None);
    assert_eq!(summary_text(Some(Value::Null)), None);
    assert_eq!(
        summary_text(Some(json!("About 2000 kcal"))),
        Some("About 2000 kcal".to_owned())
    );
    assert_eq!(
        summary_text(Some(json!({ "calories": 2000 }))),
        Some("{\"calories\":2000}".to_owned())
    );
}
