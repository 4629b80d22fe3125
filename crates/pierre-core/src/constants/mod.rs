// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Generation defaults, retry budget, timeouts and service names for the plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Service names used in structured logs
pub mod service_names {
    /// Library and binary service name
    pub const PIERRE_PLAN_GENERATOR: &str = "pierre-plan-generator";
    /// Name of the text generation service in error messages
    pub const GEMINI: &str = "Gemini";
}

/// Sampling parameters for plan generation requests
pub mod generation {
    /// Low temperature keeps structured output stable across calls
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;
    /// Output ceiling large enough for a full day of meals and exercises
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;
    /// Highest temperature accepted by the provider
    pub const MAX_TEMPERATURE: f32 = 2.0;
    /// MIME type requested for JSON-mode responses
    pub const JSON_MIME_TYPE: &str = "application/json";
}

/// Retry budget for the outbound text generation call
pub mod retry {
    /// Retries after the first attempt
    pub const DEFAULT_MAX_RETRIES: u32 = 3;
    /// Delay unit; the n-th retry waits n times this long
    pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;
    /// Deadline applied to each individual attempt
    pub const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 60;
}

/// HTTP client timeouts
pub mod timeouts {
    /// Request timeout for the shared HTTP client
    pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 90;
    /// Connect timeout for the shared HTTP client
    pub const HTTP_CLIENT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Plan shape requirements
pub mod plan_rules {
    /// Minimum number of meals a generated plan must contain
    pub const MIN_MEALS: usize = 3;
    /// Main meals requested in the prompt
    pub const MAIN_MEALS: usize = 3;
    /// Snacks requested in the prompt
    pub const SNACKS: usize = 2;
}

/// Defaults substituted for optional profile fields in prompts
pub mod profile_defaults {
    /// Gender when unset
    pub const GENDER: &str = "unspecified";
    /// Goal when unset
    pub const GOAL: &str = "maintain";
    /// Fitness level when unset
    pub const FITNESS_LEVEL: &str = "beginner";
    /// Activity level when unset
    pub const ACTIVITY_LEVEL: &str = "moderate";
    /// Restrictions line when no restriction or allergy is listed
    pub const NO_RESTRICTIONS: &str = "none";
}

/// Body mass index category thresholds
pub mod bmi {
    /// Upper bound of the underweight range
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Upper bound of the normal range
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Upper bound of the overweight range
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
}
