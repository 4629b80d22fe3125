// ABOUTME: Builds the natural-language instruction sent to the text generation service
// ABOUTME: Embeds the weekday and every profile attribute, and pins the JSON output shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Weekday;

use super::clock::day_name;
use crate::constants::{plan_rules, profile_defaults};
use crate::models::HealthProfile;

/// Prompt text plus the day it targets; never persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// Full instruction text
    pub prompt: String,
    /// English day name embedded in the prompt
    pub day: &'static str,
}

impl PlanRequest {
    /// Build the request for `profile` on `weekday`
    #[must_use]
    pub fn new(profile: &HealthProfile, weekday: Weekday) -> Self {
        Self {
            prompt: build_prompt(profile, weekday),
            day: day_name(weekday),
        }
    }
}

fn measure(value: Option<f64>) -> String {
    value.map_or_else(|| "unspecified".to_owned(), |v| v.to_string())
}

/// Restrictions line: dietary restrictions then custom allergies, or "none"
#[must_use]
pub fn restrictions_line(profile: &HealthProfile) -> String {
    let joined = profile
        .all_restrictions()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        profile_defaults::NO_RESTRICTIONS.to_owned()
    } else {
        joined
    }
}

/// Render the generation prompt
///
/// Output is a pure function of the profile and the weekday.
#[must_use]
pub fn build_prompt(profile: &HealthProfile, weekday: Weekday) -> String {
    let today = day_name(weekday);
    let age = measure(profile.age);
    let weight = measure(profile.weight);
    let height = measure(profile.height);
    let gender = profile
        .gender
        .map_or(profile_defaults::GENDER, |g| g.as_str());
    let goal = profile.goal.map_or(profile_defaults::GOAL, |g| g.as_str());
    let fitness_level = profile
        .fitness_level
        .map_or(profile_defaults::FITNESS_LEVEL, |l| l.as_str());
    let activity_level = profile
        .activity_level
        .map_or(profile_defaults::ACTIVITY_LEVEL, |l| l.as_str());
    let restrictions = restrictions_line(profile);
    let main_meals = plan_rules::MAIN_MEALS;
    let snacks = plan_rules::SNACKS;

    format!(
        r#"Create a detailed, personalized daily fitness plan for TODAY ({today}) with these specifications:

User Profile:
- Age: {age}
- Gender: {gender}
- Weight: {weight} kg
- Height: {height} cm
- Fitness Goal: {goal}
- Dietary Restrictions: {restrictions}
- Fitness Level: {fitness_level}
- Activity Level: {activity_level}

Requirements:
1. Today's Meal Plan:
   - At least {main_meals} main meals (breakfast, lunch, dinner) + {snacks} snacks
   - Exact serving sizes and preparation instructions
   - Calorie count for each meal
   - Macronutrient breakdown (protein, carbs, fat)
   - Strictly avoid every dietary restriction and allergy listed above

2. Today's Workout Plan:
   - Varied exercises matching the {fitness_level} fitness level
   - Include both cardio and strength training if appropriate
   - Specify duration and intensity (light, moderate or high)
   - Include proper warm-up and cool-down

3. Additional Information:
   - Highlight potential allergy concerns
   - Provide a daily nutritional summary (as an object with calories, protein, carbs, fat)
   - Include a shopping list for today's meals

IMPORTANT:
- Respond with ONLY a single JSON object
- Do NOT include prose, comments, or markdown code fences
- Format meal times consistently (e.g., "7:00 AM" not "7am")
- Focus only on today's plan ({today})

Example structure:
{{
  "mealPlan": {{
    "day": "{today}",
    "meals": [
      {{
        "time": "7:00 AM",
        "mealType": "breakfast",
        "name": "Meal Name",
        "description": "Detailed description with ingredients",
        "calories": 350,
        "macros": {{
          "protein": 20,
          "carbs": 40,
          "fat": 10
        }}
      }}
    ]
  }},
  "workoutPlan": {{
    "day": "{today}",
    "exercises": [
      {{
        "time": "6:30 AM",
        "name": "Exercise Name",
        "duration": "30 minutes",
        "intensity": "moderate",
        "description": "Detailed instructions",
        "focusArea": "cardio"
      }}
    ]
  }},
  "allergiesWarning": ["Contains nuts"],
  "nutritionalSummary": {{
    "calories": 2000,
    "protein": 100,
    "carbs": 250,
    "fat": 70
  }},
  "shoppingList": ["Item 1", "Item 2"]
}}"#
    )
}
