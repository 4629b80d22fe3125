// ABOUTME: Output format abstraction for rendering generated plans
// ABOUTME: Supports pretty JSON and a human-readable text view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, the `PlanResponse` wire shape pretty-printed
//! - **Text**: Terminal-friendly view of meals, exercises and extras
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pierre_plan_generator::formatters::{format_plan, OutputFormat};
//! use pierre_plan_generator::plan::PlanResponse;
//!
//! fn print(response: &PlanResponse) {
//!     if let Ok(output) = format_plan(response, OutputFormat::Text) {
//!         println!("{}", output.data);
//!     }
//! }
//! ```

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::models::{DayMealPlan, DayWorkoutPlan, MealPlan, WorkoutPlan};
use crate::plan::PlanResponse;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default)
    #[default]
    Json,
    /// Plain text for terminals
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain; charset=utf-8",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            other => Err(format!("unknown output format '{other}' (expected json or text)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered plan
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Render a plan response in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization or text rendering fails.
pub fn format_plan(
    response: &PlanResponse,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(response).map_err(|e| FormatError {
                message: e.to_string(),
                format,
            })?
        }
        OutputFormat::Text => render_text(response).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

fn render_text(response: &PlanResponse) -> Result<String, fmt::Error> {
    let mut out = String::new();

    if let Some(message) = &response.user_message {
        writeln!(out, "{message}")?;
    }
    if let Some(meal_plan) = &response.meal_plan {
        write_meal_plan(&mut out, meal_plan)?;
    }
    if let Some(workout_plan) = &response.workout_plan {
        write_workout_plan(&mut out, workout_plan)?;
    }

    Ok(out.trim_end().to_owned())
}

fn write_meal_plan(out: &mut String, plan: &MealPlan) -> fmt::Result {
    for day in &plan.days {
        write_meal_day(out, day)?;
    }

    if !plan.allergies_warning.is_empty() {
        writeln!(out, "\nAllergy warnings:")?;
        for warning in &plan.allergies_warning {
            writeln!(out, "  ! {warning}")?;
        }
    }
    if let Some(summary) = &plan.nutritional_summary {
        writeln!(out, "\nNutritional summary: {summary}")?;
    }
    if !plan.shopping_list.is_empty() {
        writeln!(out, "\nShopping list:")?;
        for item in &plan.shopping_list {
            writeln!(out, "  - {item}")?;
        }
    }
    Ok(())
}

fn write_meal_day(out: &mut String, day: &DayMealPlan) -> fmt::Result {
    writeln!(out, "Meals for {}", day.day)?;
    for meal in &day.meals {
        writeln!(
            out,
            "  {:<9} {:<10} {} ({} kcal)",
            meal.time,
            meal.meal_type.as_str(),
            meal.name,
            meal.calories
        )?;
        if let Some(macros) = meal.macros {
            writeln!(
                out,
                "            protein {}g, carbs {}g, fat {}g",
                macros.protein, macros.carbs, macros.fat
            )?;
        }
        if !meal.description.is_empty() {
            writeln!(out, "            {}", meal.description)?;
        }
    }

    let totals = day.total_macros();
    writeln!(
        out,
        "  Total: {} kcal (protein {}g, carbs {}g, fat {}g)",
        day.total_calories(),
        totals.protein,
        totals.carbs,
        totals.fat
    )
}

fn write_workout_plan(out: &mut String, plan: &WorkoutPlan) -> fmt::Result {
    for day in &plan.days {
        write_workout_day(out, day)?;
    }
    if !plan.focus_areas.is_empty() {
        writeln!(out, "\nFocus areas: {}", plan.focus_areas.join(", "))?;
    }
    Ok(())
}

fn write_workout_day(out: &mut String, day: &DayWorkoutPlan) -> fmt::Result {
    writeln!(out, "\nWorkout for {}", day.day)?;
    for exercise in &day.exercises {
        write!(
            out,
            "  {:<9} {} - {}, {} intensity",
            exercise.time, exercise.name, exercise.duration, exercise.intensity
        )?;
        if let Some(area) = &exercise.focus_area {
            write!(out, " [{area}]")?;
        }
        writeln!(out)?;
        if !exercise.description.is_empty() {
            writeln!(out, "            {}", exercise.description)?;
        }
    }
    Ok(())
}
