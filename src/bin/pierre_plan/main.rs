// ABOUTME: Pierre plan CLI - generate a daily meal and workout plan from a profile file
// ABOUTME: Loads configuration, initializes logging and drives the plan generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Generate today's plan as JSON
//! GEMINI_API_KEY=... pierre-plan generate --profile profile.json
//!
//! # Generate today's plan as readable text
//! GEMINI_API_KEY=... pierre-plan generate --profile profile.json --format text
//!
//! # Check a profile without calling the AI service
//! pierre-plan check --profile profile.json
//! ```

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pierre_plan_generator::formatters::OutputFormat;
use pierre_plan_generator::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "pierre-plan",
    about = "Pierre daily plan generator",
    long_about = "Generate a personalized daily meal and workout plan from a health profile using Google Gemini."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate today's plan
    Generate {
        /// Path to a JSON health profile
        #[arg(long)]
        profile: PathBuf,

        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },

    /// Validate a profile and show BMI without calling the AI service
    Check {
        /// Path to a JSON health profile
        #[arg(long)]
        profile: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    match cli.command {
        Command::Generate { profile, format } => commands::generate(&profile, format).await,
        Command::Check { profile } => commands::check(&profile).await,
    }
}
