// ABOUTME: Unified error handling re-exported from pierre-core
// ABOUTME: AppError, ErrorCode and the plan generation error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error types live in `pierre-core` so that models and the generator share a
//! single taxonomy; this module re-exports them under the familiar path.

pub use pierre_core::errors::*;
