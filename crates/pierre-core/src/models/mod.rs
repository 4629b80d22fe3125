// ABOUTME: Core data models for the Pierre daily plan generator
// ABOUTME: Re-exports the health profile and generated meal/workout plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `HealthProfile`: the user's stored health and fitness attributes
//! - `MealPlan` / `WorkoutPlan`: a generated plan for a single day
//! - `DailyPlan`: the pair returned by a successful generation

mod plan;
mod profile;

pub use plan::{
    DailyPlan, DayMealPlan, DayWorkoutPlan, Exercise, Intensity, Macros, Meal, MealPlan,
    MealType, WorkoutPlan,
};
pub use profile::{
    ActivityLevel, BmiCategory, FitnessGoal, FitnessLevel, Gender, HealthProfile, RequiredField,
};
