// ABOUTME: Core types and constants for the Pierre daily plan generator
// ABOUTME: Foundation crate with error handling, health profile and plan models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre daily
//! plan generator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PlanGenerationError`
//! - **constants**: Generation defaults, retry budget and plan rules
//! - **models**: `HealthProfile` and the generated `MealPlan` / `WorkoutPlan`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Health profile and generated plan models
pub mod models;
