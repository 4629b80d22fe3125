// ABOUTME: Error taxonomy for AI daily plan generation
// ABOUTME: Separates transport exhaustion, decode failures, shape failures and catch-all errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Generation Errors
//!
//! - `ServiceUnavailable` - the text service kept failing until the retry budget ran out
//! - `ResponseDecode` - the model output was not JSON even after cleanup (never retried)
//! - `ResponseShape` - the JSON parsed but lacked the required plan structure
//! - `Generation` - anything else that went wrong while building the plan
//!
//! An incomplete profile is not an error; it is reported as a normal outcome
//! by the generator.

use serde_json::json;
use thiserror::Error;

use super::{AppError, ErrorCode};

/// Message shown to users when plan generation fails for an unexpected reason
pub const GENERIC_GENERATION_FAILURE: &str =
    "Failed to generate fitness plan. Please try again later.";

/// Errors produced while generating a daily plan
#[derive(Debug, Error)]
pub enum PlanGenerationError {
    /// The text generation service failed on every attempt
    #[error("text generation service unavailable after {attempts} attempt(s): {source}")]
    ServiceUnavailable {
        /// Total attempts made, including the first one
        attempts: u32,
        /// Error from the final attempt
        #[source]
        source: AppError,
    },

    /// The service output could not be parsed as JSON after cleanup
    #[error("invalid response format from AI: {message}")]
    ResponseDecode {
        /// Parser error message
        message: String,
        /// Text exactly as returned by the service
        raw: String,
        /// Text after the repair pass
        cleaned: String,
    },

    /// The output parsed but did not contain a usable plan
    #[error("invalid plan structure from AI: {reason}")]
    ResponseShape {
        /// Which structural check failed
        reason: String,
    },

    /// Unexpected failure while assembling the plan
    #[error("plan generation failed: {message}")]
    Generation {
        /// Diagnostic detail, not shown to users
        message: String,
    },
}

impl PlanGenerationError {
    /// Create a structural validation error
    #[must_use]
    pub fn shape(reason: impl Into<String>) -> Self {
        Self::ResponseShape {
            reason: reason.into(),
        }
    }

    /// Create a catch-all generation error
    #[must_use]
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::ServiceUnavailable { .. } => ErrorCode::ExternalServiceUnavailable,
            Self::ResponseDecode { .. } => ErrorCode::LlmResponseMalformed,
            Self::ResponseShape { .. } => ErrorCode::LlmResponseIncomplete,
            Self::Generation { .. } => ErrorCode::InternalError,
        }
    }

    /// Message safe to show to an end user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ServiceUnavailable { source, .. }
                if source.code == ErrorCode::ExternalRateLimited =>
            {
                source.message.clone()
            }
            Self::ServiceUnavailable { .. } => {
                "The AI planning service is temporarily unavailable. Please try again later."
                    .to_owned()
            }
            Self::ResponseDecode { .. } | Self::ResponseShape { .. } => {
                "The AI service returned an invalid plan. Please try again.".to_owned()
            }
            Self::Generation { .. } => GENERIC_GENERATION_FAILURE.to_owned(),
        }
    }
}

impl From<PlanGenerationError> for AppError {
    fn from(error: PlanGenerationError) -> Self {
        let code = error.code();
        let message = error.user_message();
        match error {
            PlanGenerationError::ServiceUnavailable { attempts, source } => {
                Self::new(code, message)
                    .with_details(json!({ "attempts": attempts }))
                    .with_source(source)
            }
            PlanGenerationError::ResponseDecode {
                message: parse_error,
                raw,
                cleaned,
            } => Self::new(code, message).with_details(json!({
                "parse_error": parse_error,
                "raw_text": raw,
                "cleaned_text": cleaned,
            })),
            PlanGenerationError::ResponseShape { reason } => {
                Self::new(code, message).with_details(json!({ "reason": reason }))
            }
            PlanGenerationError::Generation { message: detail } => {
                Self::new(code, message).with_details(json!({ "detail": detail }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_carries_texts_into_details() {
        let error = PlanGenerationError::ResponseDecode {
            message: "expected value at line 1".to_owned(),
            raw: "```json\n{oops".to_owned(),
            cleaned: "{oops".to_owned(),
        };
        let app_error = AppError::from(error);

        assert_eq!(app_error.code, ErrorCode::LlmResponseMalformed);
        assert_eq!(app_error.context.details["raw_text"], "```json\n{oops");
        assert_eq!(app_error.context.details["cleaned_text"], "{oops");
    }

    #[test]
    fn test_generation_error_hides_detail_from_user() {
        let error = PlanGenerationError::generation("serializer exploded");
        assert_eq!(error.user_message(), GENERIC_GENERATION_FAILURE);

        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::InternalError);
        assert!(!app_error.message.contains("serializer"));
    }

    #[test]
    fn test_rate_limited_exhaustion_surfaces_quota_message() {
        let error = PlanGenerationError::ServiceUnavailable {
            attempts: 4,
            source: AppError::new(
                ErrorCode::ExternalRateLimited,
                "AI service quota exceeded. Please try again in 7 seconds.",
            ),
        };
        assert_eq!(
            error.user_message(),
            "AI service quota exceeded. Please try again in 7 seconds."
        );
        assert_eq!(error.code(), ErrorCode::ExternalServiceUnavailable);
    }

    #[test]
    fn test_shape_and_decode_are_distinct_codes() {
        assert_ne!(
            PlanGenerationError::shape("meals < 3").code(),
            PlanGenerationError::ResponseDecode {
                message: String::new(),
                raw: String::new(),
                cleaned: String::new(),
            }
            .code()
        );
    }
}
