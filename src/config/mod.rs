// ABOUTME: Environment-driven configuration for the plan generator
// ABOUTME: Gemini credentials, sampling parameters, retry budget and HTTP client timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Configuration
//!
//! All settings come from environment variables. Only the Gemini API key is
//! required; everything else has a default taken from `pierre_core::constants`.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `GEMINI_API_KEY` (or `GOOGLE_API_KEY`) | required |
//! | `GEMINI_MODEL` | `gemini-2.5-flash` |
//! | `GEMINI_BASE_URL` | Google Generative Language v1beta endpoint |
//! | `PLAN_TEMPERATURE` | `0.3` |
//! | `PLAN_MAX_OUTPUT_TOKENS` | `8192` |
//! | `PLAN_MAX_RETRIES` | `3` |
//! | `PLAN_RETRY_BASE_DELAY_MS` | `1000` |
//! | `PLAN_ATTEMPT_TIMEOUT_SECS` | `60` |
//! | `HTTP_CLIENT_TIMEOUT_SECS` | `90` |
//! | `HTTP_CLIENT_CONNECT_TIMEOUT_SECS` | `10` |

use std::env;
use std::fmt::{self, Debug, Formatter};
use std::str::FromStr;
use std::time::Duration;

use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};

use crate::constants::{generation, retry, timeouts};
use crate::errors::{AppError, AppResult};

/// Primary environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Fallback environment variable for the Gemini API key
pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default base URL for the Gemini API
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Read an environment variable, falling back to a default
#[must_use]
pub fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an optional environment variable, using `default` when unset or blank
///
/// # Errors
///
/// Returns `InvalidInput` when the variable is set but does not parse.
pub fn parse_env_or<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|_| {
            AppError::invalid_input(format!("Invalid value for {key}: {raw}"))
        }),
        _ => Ok(default),
    }
}

// ============================================================================
// Gemini
// ============================================================================

/// Gemini credentials and endpoint
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// API base URL without trailing slash
    pub base_url: String,
}

impl GeminiConfig {
    /// Create a config for the default model and endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
        }
    }

    /// Load from `GEMINI_API_KEY` / `GOOGLE_API_KEY`, `GEMINI_MODEL` and `GEMINI_BASE_URL`
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when neither key variable holds a value.
    pub fn from_env() -> AppResult<Self> {
        let api_key = [GEMINI_API_KEY_ENV, GOOGLE_API_KEY_ENV]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .map(|value| value.trim().to_owned())
            .find(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError::config_missing(format!(
                    "{GEMINI_API_KEY_ENV} (or {GOOGLE_API_KEY_ENV}) environment variable not set"
                ))
            })?;

        Ok(Self {
            api_key,
            model: env_var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            base_url: env_var_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
        })
    }
}

impl Debug for GeminiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

// ============================================================================
// Sampling
// ============================================================================

/// Sampling parameters sent with every plan request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Output token ceiling
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: generation::DEFAULT_TEMPERATURE,
            max_output_tokens: generation::DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GenerationConfig {
    /// Load from `PLAN_TEMPERATURE` and `PLAN_MAX_OUTPUT_TOKENS`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unparsable or out-of-range values.
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            temperature: parse_env_or("PLAN_TEMPERATURE", generation::DEFAULT_TEMPERATURE)?,
            max_output_tokens: parse_env_or(
                "PLAN_MAX_OUTPUT_TOKENS",
                generation::DEFAULT_MAX_OUTPUT_TOKENS,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when temperature is outside 0.0-2.0 or the token ceiling is zero.
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=generation::MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(AppError::invalid_input(format!(
                "PLAN_TEMPERATURE must be between 0.0 and {}, got {}",
                generation::MAX_TEMPERATURE,
                self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(AppError::invalid_input(
                "PLAN_MAX_OUTPUT_TOKENS must be greater than zero",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Retry
// ============================================================================

/// Retry budget for the outbound generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// The n-th retry waits `base_delay * n`
    pub base_delay: Duration,
    /// Deadline for a single attempt
    pub attempt_timeout: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: retry::DEFAULT_MAX_RETRIES,
            base_delay: Duration::from_millis(retry::DEFAULT_BASE_DELAY_MS),
            attempt_timeout: Duration::from_secs(retry::DEFAULT_ATTEMPT_TIMEOUT_SECS),
        }
    }
}

impl RetryConfig {
    /// Load from `PLAN_MAX_RETRIES`, `PLAN_RETRY_BASE_DELAY_MS` and `PLAN_ATTEMPT_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unparsable values or a zero attempt timeout.
    pub fn from_env() -> AppResult<Self> {
        let attempt_timeout_secs =
            parse_env_or("PLAN_ATTEMPT_TIMEOUT_SECS", retry::DEFAULT_ATTEMPT_TIMEOUT_SECS)?;
        if attempt_timeout_secs == 0 {
            return Err(AppError::invalid_input(
                "PLAN_ATTEMPT_TIMEOUT_SECS must be greater than zero",
            ));
        }

        Ok(Self {
            max_retries: parse_env_or("PLAN_MAX_RETRIES", retry::DEFAULT_MAX_RETRIES)?,
            base_delay: Duration::from_millis(parse_env_or(
                "PLAN_RETRY_BASE_DELAY_MS",
                retry::DEFAULT_BASE_DELAY_MS,
            )?),
            attempt_timeout: Duration::from_secs(attempt_timeout_secs),
        })
    }

    /// Total attempts including the first
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before the given retry (1-based)
    #[must_use]
    pub fn delay_for_retry(&self, retry_number: u32) -> Duration {
        self.base_delay.saturating_mul(retry_number)
    }
}

// ============================================================================
// HTTP client
// ============================================================================

/// HTTP client timeout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: timeouts::HTTP_CLIENT_TIMEOUT_SECS,
            connect_timeout_secs: timeouts::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl HttpClientConfig {
    /// Load HTTP client configuration from environment
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unparsable values.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            timeout_secs: parse_env_or(
                "HTTP_CLIENT_TIMEOUT_SECS",
                timeouts::HTTP_CLIENT_TIMEOUT_SECS,
            )?,
            connect_timeout_secs: parse_env_or(
                "HTTP_CLIENT_CONNECT_TIMEOUT_SECS",
                timeouts::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }

    /// Build a reqwest client with these timeouts
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the TLS backend cannot be initialized.
    pub fn build_client(&self) -> AppResult<Client> {
        ClientBuilder::new()
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Complete planner configuration
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Gemini credentials and endpoint
    pub gemini: GeminiConfig,
    /// Sampling parameters
    pub generation: GenerationConfig,
    /// Retry budget
    pub retry: RetryConfig,
    /// HTTP client timeouts
    pub http_client: HttpClientConfig,
}

impl PlannerConfig {
    /// Load the full configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` without an API key, `InvalidInput` for malformed values.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            gemini: GeminiConfig::from_env()?,
            generation: GenerationConfig::from_env()?,
            retry: RetryConfig::from_env()?,
            http_client: HttpClientConfig::from_env()?,
        })
    }
}
