// ABOUTME: Tests for prompt construction from a health profile
// ABOUTME: Values, defaults, restrictions line, weekday and output-format instructions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

mod common;

use chrono::Weekday;
use common::sample_profile;
use pierre_plan_generator::models::HealthProfile;
use pierre_plan_generator::plan::prompt::restrictions_line;
use pierre_plan_generator::plan::{build_prompt, day_name, PlanRequest};

#[test]
fn test_prompt_embeds_profile_values_and_day() {
    let prompt = build_prompt(&sample_profile(), Weekday::Thu);

    assert!(prompt.contains("TODAY (Thursday)"));
    assert!(prompt.contains("- Age: 34\n"));
    assert!(prompt.contains("- Weight: 72.5 kg"));
    assert!(prompt.contains("- Height: 178 cm"));
    assert!(prompt.contains("- Gender: female"));
    assert!(prompt.contains("- Fitness Goal: build muscle"));
    assert!(prompt.contains("- Dietary Restrictions: vegetarian, peanuts"));
    assert!(prompt.contains("- Fitness Level: intermediate"));
    assert!(prompt.contains("- Activity Level: very active"));
    assert!(prompt.contains("\"day\": \"Thursday\""));
}

#[test]
fn test_prompt_defaults_optional_fields() {
    let profile = HealthProfile {
        age: Some(40.0),
        weight: Some(80.0),
        height: Some(170.0),
        ..HealthProfile::default()
    };

    let prompt = build_prompt(&profile, Weekday::Sun);

    assert!(prompt.contains("- Gender: unspecified"));
    assert!(prompt.contains("- Fitness Goal: maintain"));
    assert!(prompt.contains("- Fitness Level: beginner"));
    assert!(prompt.contains("- Activity Level: moderate"));
    assert!(prompt.contains("- Dietary Restrictions: none"));
}

#[test]
fn test_prompt_mandates_meals_and_json_only_output() {
    let prompt = build_prompt(&sample_profile(), Weekday::Mon);

    assert!(prompt.contains("At least 3 main meals"));
    assert!(prompt.contains("2 snacks"));
    assert!(prompt.contains("Strictly avoid every dietary restriction and allergy"));
    assert!(prompt.contains("Respond with ONLY a single JSON object"));
    assert!(prompt.contains("\"mealPlan\""));
    assert!(prompt.contains("\"workoutPlan\""));
    assert!(prompt.contains("\"shoppingList\""));
}

#[test]
fn test_prompt_is_deterministic() {
    let profile = sample_profile();
    assert_eq!(
        build_prompt(&profile, Weekday::Wed),
        build_prompt(&profile, Weekday::Wed)
    );
}

#[test]
fn test_restrictions_line_orders_restrictions_before_allergies() {
    let profile = HealthProfile {
        dietary_restrictions: vec!["vegan".to_owned(), "gluten-free".to_owned()],
        custom_allergies: vec!["sesame".to_owned(), "  ".to_owned()],
        ..HealthProfile::default()
    };

    assert_eq!(restrictions_line(&profile), "vegan, gluten-free, sesame");
}

#[test]
fn test_plan_request_carries_day_name() {
    let request = PlanRequest::new(&sample_profile(), Weekday::Sat);

    assert_eq!(request.day, "Saturday");
    assert_eq!(day_name(Weekday::Tue), "Tuesday");
    assert!(request.prompt.contains("Focus only on today's plan (Saturday)"));
}
