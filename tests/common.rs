// ABOUTME: Shared test utilities for plan generator integration tests
// ABOUTME: Scripted LLM provider, sample profiles, canned plan documents and quiet logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_plan_generator`

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc, Weekday};
use pierre_plan_generator::config::RetryConfig;
use pierre_plan_generator::errors::AppError;
use pierre_plan_generator::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};
use pierre_plan_generator::models::{
    ActivityLevel, FitnessGoal, FitnessLevel, Gender, HealthProfile,
};
use pierre_plan_generator::plan::{FixedClock, PlanGenerator};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Profiles
// ============================================================================

/// A complete profile with restrictions and allergies
pub fn sample_profile() -> HealthProfile {
    HealthProfile {
        age: Some(34.0),
        weight: Some(72.5),
        height: Some(178.0),
        gender: Some(Gender::Female),
        goal: Some(FitnessGoal::BuildMuscle),
        dietary_restrictions: vec!["vegetarian".to_owned()],
        custom_allergies: vec!["peanuts".to_owned()],
        fitness_level: Some(FitnessLevel::Intermediate),
        activity_level: Some(ActivityLevel::VeryActive),
    }
}

// ============================================================================
// Plan documents
// ============================================================================

/// A well-formed plan document with `meal_count` meals
pub fn plan_document(meal_count: usize) -> Value {
    let meal_types = ["breakfast", "snack", "lunch", "snack", "dinner"];
    let meals: Vec<Value> = (0..meal_count)
        .map(|i| {
            json!({
                "time": format!("{}:00 AM", 7 + i),
                "mealType": meal_types[i % meal_types.len()],
                "name": format!("Meal {}", i + 1),
                "description": "Seasonal ingredients",
                "calories": 400,
                "macros": { "protein": 25, "carbs": 45, "fat": 12 }
            })
        })
        .collect();

    json!({
        "mealPlan": { "day": "Monday", "meals": meals },
        "workoutPlan": {
            "day": "Monday",
            "exercises": [
                {
                    "time": "6:30 AM",
                    "name": "Brisk walk",
                    "duration": "10 minutes",
                    "intensity": "light",
                    "description": "Warm-up",
                    "focusArea": "cardio"
                },
                {
                    "time": "6:40 AM",
                    "name": "Goblet squats",
                    "duration": "15 minutes",
                    "intensity": "high",
                    "description": "4 sets of 10",
                    "focusArea": "legs"
                },
                {
                    "time": "6:55 AM",
                    "name": "Intervals",
                    "duration": "10 minutes",
                    "intensity": "moderate",
                    "description": "1 minute on, 1 minute off",
                    "focusArea": "cardio"
                },
                {
                    "time": "7:05 AM",
                    "name": "Stretching",
                    "duration": "5 minutes",
                    "intensity": "light",
                    "description": "Cool-down"
                }
            ]
        },
        "allergiesWarning": ["Granola may contain traces of peanuts"],
        "nutritionalSummary": { "calories": 2000, "protein": 125, "carbs": 225, "fat": 60 },
        "shoppingList": ["Rolled oats", "Lentils", "Spinach"]
    })
}

/// A well-formed plan document as text
pub fn valid_plan_text() -> String {
    plan_document(5).to_string()
}

// ============================================================================
// Scripted provider
// ============================================================================

/// LLM provider that replays scripted results and counts calls
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<String, AppError>>>,
    calls: AtomicU32,
    requests: Mutex<Vec<ChatRequest>>,
    capabilities: LlmCapabilities,
}

impl ScriptedProvider {
    /// Replay `script` in order; once exhausted every call fails
    pub fn new(script: Vec<Result<String, AppError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
            capabilities: LlmCapabilities::structured_output(),
        }
    }

    /// Advertise `capabilities` instead of structured output
    pub fn with_capabilities(mut self, capabilities: LlmCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Always succeed with `content`
    pub fn succeeding(content: impl Into<String>) -> Self {
        Self::new(vec![Ok(content.into())])
    }

    /// Fail `failures` times, then succeed with `content`
    pub fn failing_then(failures: usize, content: impl Into<String>) -> Self {
        let mut script: Vec<Result<String, AppError>> = (0..failures)
            .map(|i| {
                Err(AppError::service_unavailable(format!(
                    "scripted failure {}",
                    i + 1
                )))
            })
            .collect();
        script.push(Ok(content.into()));
        Self::new(script)
    }

    /// Number of `complete` calls so far
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        self.capabilities
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["scripted-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.requests.lock().unwrap().push(request.clone());

        let next = self.script.lock().unwrap().pop_front();
        let content = next.unwrap_or_else(|| {
            Err(AppError::service_unavailable(format!(
                "script exhausted at call {call}"
            )))
        })?;

        Ok(ChatResponse {
            content,
            model: "scripted-model".to_owned(),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Retry budget with no waiting between attempts
pub fn fast_retry() -> RetryConfig {
    RetryConfig {
        max_retries: 3,
        base_delay: Duration::ZERO,
        attempt_timeout: Duration::from_secs(5),
    }
}

/// Clock frozen on Monday 2025-03-03 09:00 UTC
pub fn monday_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap()).with_weekday(Weekday::Mon)
}

/// Generator over `provider` with fast retries and the Monday clock
pub fn test_generator(provider: Arc<ScriptedProvider>) -> PlanGenerator {
    init_test_logging();
    PlanGenerator::new(provider)
        .with_retry_config(fast_retry())
        .with_clock(Arc::new(monday_clock()))
}
