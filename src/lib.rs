// ABOUTME: Main library entry point for the Pierre daily plan generator
// ABOUTME: Turns a health profile into an AI-generated daily meal and workout plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Daily Plan Generator
//!
//! Builds a personalized daily meal and workout plan from a user's health
//! profile by asking a generative text service (Google Gemini) for a JSON plan
//! and validating what comes back.
//!
//! ## Architecture
//!
//! - **Profile**: `ProfileStore` contract, in-memory store, required-field checks
//! - **Plan**: prompt, retried generation call, output repair, validation, mapping
//! - **LLM**: `LlmProvider` trait and the Gemini implementation
//! - **Config**: environment-driven settings
//! - **Formatters**: JSON and text rendering of plans
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_plan_generator::config::PlannerConfig;
//! use pierre_plan_generator::errors::AppResult;
//! use pierre_plan_generator::llm::GeminiProvider;
//! use pierre_plan_generator::models::HealthProfile;
//! use pierre_plan_generator::plan::{PlanGenerator, PlanResponse};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = PlannerConfig::from_env()?;
//!     let provider = GeminiProvider::from_config(&config.gemini, &config.http_client)?;
//!     let generator = PlanGenerator::from_config(Arc::new(provider), &config);
//!
//!     let profile = HealthProfile::default();
//!     let response = PlanResponse::from(generator.generate_daily_plan(&profile).await?);
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Unified error handling re-exported from `pierre-core`
pub mod errors;

/// Plan rendering in JSON and text
pub mod formatters;

/// LLM provider abstraction and Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Daily plan generation pipeline
pub mod plan;

/// Profile storage and required-field validation
pub mod profile;

/// Application constants re-exported from `pierre-core`
pub use pierre_core::constants;

/// Health profile and plan models re-exported from `pierre-core`
pub use pierre_core::models;
