// ABOUTME: Subcommand implementations for the pierre-plan CLI
// ABOUTME: Plan generation with output formatting, and offline profile checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use pierre_plan_generator::config::PlannerConfig;
use pierre_plan_generator::formatters::{format_plan, OutputFormat};
use pierre_plan_generator::llm::{GeminiProvider, LlmProvider};
use pierre_plan_generator::plan::{PlanGenerator, PlanResponse};
use pierre_plan_generator::profile::{load_profile_file, validate_required_fields};
use tracing::{error, info};

/// Generate today's plan and print it
pub async fn generate(profile_path: &Path, format: OutputFormat) -> Result<()> {
    let profile = load_profile_file(profile_path).await?;

    let config = PlannerConfig::from_env()?;
    let provider = GeminiProvider::from_config(&config.gemini, &config.http_client)?;
    info!(
        provider = provider.display_name(),
        model = provider.default_model(),
        "LLM provider ready"
    );
    let generator = PlanGenerator::from_config(Arc::new(provider), &config);

    let outcome = match generator.generate_daily_plan(&profile).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, code = ?e.code(), "Plan generation failed");
            return Err(anyhow!(e.user_message()));
        }
    };

    let output = format_plan(&PlanResponse::from(outcome), format)?;
    println!("{}", output.data);
    Ok(())
}

/// Report missing fields and BMI for a profile
pub async fn check(profile_path: &Path) -> Result<()> {
    let profile = load_profile_file(profile_path).await?;

    match validate_required_fields(&profile) {
        Ok(()) => println!("Profile complete: ready for plan generation"),
        Err(guidance) => {
            let fields = guidance
                .missing_fields
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("Missing fields: {fields}");
            println!("{}", guidance.user_message);
        }
    }

    match (profile.bmi(), profile.bmi_category()) {
        (Some(bmi), Some(category)) => println!("BMI: {bmi:.1} ({})", category.label()),
        _ => println!("BMI: unavailable"),
    }

    Ok(())
}
