// ABOUTME: AI daily plan generator turning a health profile into meal and workout plans
// ABOUTME: Precondition check, prompt, retried generation call, repair, validation and mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generator
//!
//! Pipeline for one request:
//!
//! 1. Check the profile has a usable age, weight and height. If not, return
//!    [`PlanOutcome::ProfileIncomplete`] without touching the network.
//! 2. Build the prompt for today's weekday ([`prompt::build_prompt`]).
//! 3. Call the provider in JSON mode with retry ([`retry::with_retry`]).
//! 4. Repair, parse and validate the output ([`response::decode_plan`]).
//! 5. Map it onto [`DailyPlan`] ([`mapping::map_generated_plan`]).
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_plan_generator::llm::GeminiProvider;
//! use pierre_plan_generator::models::HealthProfile;
//! use pierre_plan_generator::plan::{PlanGenerator, PlanOutcome};
//!
//! # async fn run(profile: HealthProfile) -> Result<(), Box<dyn std::error::Error>> {
//! let generator = PlanGenerator::new(Arc::new(GeminiProvider::new("api-key")));
//! match generator.generate_daily_plan(&profile).await? {
//!     PlanOutcome::Generated(plan) => println!("{} meals", plan.meal_plan.days[0].meals.len()),
//!     PlanOutcome::ProfileIncomplete(guidance) => println!("{}", guidance.user_message),
//! }
//! # Ok(())
//! # }
//! ```

/// Injectable source of the current day
pub mod clock;
/// Model document to plan mapping
pub mod mapping;
/// Prompt construction
pub mod prompt;
/// Model output repair
pub mod repair;
/// Model output decoding and shape validation
pub mod response;
/// Retry loop for the generation call
pub mod retry;

pub use clock::{day_name, FixedClock, PlanClock, SystemClock};
pub use prompt::{build_prompt, PlanRequest};
pub use repair::clean_json_response;

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::{GenerationConfig, PlannerConfig, RetryConfig};
use crate::errors::{AppError, PlanGenerationError};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{DailyPlan, HealthProfile, MealPlan, WorkoutPlan};
use crate::profile::{validate_required_fields, ProfileGuidance, ProfileStore};

/// Result of a generation request that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// Plans for today
    Generated(DailyPlan),
    /// The profile lacks age, weight or height; nothing was sent to the service
    ProfileIncomplete(ProfileGuidance),
}

impl PlanOutcome {
    /// The generated plan, if any
    #[must_use]
    pub const fn plan(&self) -> Option<&DailyPlan> {
        match self {
            Self::Generated(plan) => Some(plan),
            Self::ProfileIncomplete(_) => None,
        }
    }

    /// The guidance, if the profile was incomplete
    #[must_use]
    pub const fn guidance(&self) -> Option<&ProfileGuidance> {
        match self {
            Self::Generated(_) => None,
            Self::ProfileIncomplete(guidance) => Some(guidance),
        }
    }
}

/// Wire form of a [`PlanOutcome`]
///
/// Generated: `{ mealPlan, workoutPlan }`. Incomplete profile:
/// `{ mealPlan: null, workoutPlan: null, userMessage }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Meal plan, null when the profile was incomplete
    pub meal_plan: Option<MealPlan>,
    /// Workout plan, null when the profile was incomplete
    pub workout_plan: Option<WorkoutPlan>,
    /// Guidance for the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
}

impl From<PlanOutcome> for PlanResponse {
    fn from(outcome: PlanOutcome) -> Self {
        match outcome {
            PlanOutcome::Generated(plan) => Self {
                meal_plan: Some(plan.meal_plan),
                workout_plan: Some(plan.workout_plan),
                user_message: None,
            },
            PlanOutcome::ProfileIncomplete(guidance) => Self {
                meal_plan: None,
                workout_plan: None,
                user_message: Some(guidance.user_message),
            },
        }
    }
}

/// Generates daily meal and workout plans through an injected provider
#[derive(Clone)]
pub struct PlanGenerator {
    provider: Arc<dyn LlmProvider>,
    generation: GenerationConfig,
    retry: RetryConfig,
    clock: Arc<dyn PlanClock>,
}

impl PlanGenerator {
    /// Create a generator with default sampling, retry budget and the system clock
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            generation: GenerationConfig::default(),
            retry: RetryConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a generator from loaded configuration
    #[must_use]
    pub fn from_config(provider: Arc<dyn LlmProvider>, config: &PlannerConfig) -> Self {
        Self::new(provider)
            .with_generation_config(config.generation)
            .with_retry_config(config.retry)
    }

    /// Override sampling parameters
    #[must_use]
    pub const fn with_generation_config(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Override the retry budget
    #[must_use]
    pub const fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Override the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn PlanClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the chat request sent for a prompt
    #[must_use]
    pub fn chat_request(&self, prompt: &str) -> ChatRequest {
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_temperature(self.generation.temperature)
            .with_max_tokens(self.generation.max_output_tokens);
        if self.provider.capabilities().supports_json_mode() {
            request.with_json_response()
        } else {
            request
        }
    }

    /// Generate today's plan for a profile
    ///
    /// An incomplete profile yields [`PlanOutcome::ProfileIncomplete`] and no
    /// provider call is made.
    ///
    /// # Errors
    ///
    /// - `ServiceUnavailable` when every attempt failed
    /// - `ResponseDecode` when the output is not JSON after repair
    /// - `ResponseShape` when the JSON lacks the minimum plan structure
    /// - `Generation` when a meal or exercise entry cannot be mapped
    #[instrument(skip(self, profile), fields(provider = self.provider.name()))]
    pub async fn generate_daily_plan(
        &self,
        profile: &HealthProfile,
    ) -> Result<PlanOutcome, PlanGenerationError> {
        if let Err(guidance) = validate_required_fields(profile) {
            info!(
                missing = ?guidance.missing_fields,
                "Profile incomplete, skipping plan generation"
            );
            return Ok(PlanOutcome::ProfileIncomplete(guidance));
        }

        let request = PlanRequest::new(profile, self.clock.weekday());
        let chat_request = self.chat_request(&request.prompt);

        let response = retry::with_retry(&self.retry, "plan generation", || {
            self.provider.complete(&chat_request)
        })
        .await?;

        let generated = response::decode_plan(&response.content)?;
        let plan = mapping::map_generated_plan(generated, request.day, self.clock.now());

        info!(
            day = request.day,
            meals = plan.meal_plan.days.first().map_or(0, |day| day.meals.len()),
            exercises = plan
                .workout_plan
                .days
                .first()
                .map_or(0, |day| day.exercises.len()),
            focus_areas = plan.workout_plan.focus_areas.len(),
            model = %response.model,
            "Generated daily plan"
        );

        Ok(PlanOutcome::Generated(plan))
    }

    /// Load a stored profile and generate today's plan for it
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for unknown users, otherwise the
    /// [`PlanGenerationError`] converted into an [`AppError`].
    #[instrument(skip(self, store), fields(user_id = %user_id))]
    pub async fn generate_for_user(
        &self,
        store: &dyn ProfileStore,
        user_id: Uuid,
    ) -> Result<PlanOutcome, AppError> {
        let profile = store.get_profile(user_id).await?;
        self.generate_daily_plan(&profile)
            .await
            .map_err(|e| AppError::from(e).with_user_id(user_id))
    }
}

impl Debug for PlanGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanGenerator")
            .field("provider", &self.provider.name())
            .field("generation", &self.generation)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}
