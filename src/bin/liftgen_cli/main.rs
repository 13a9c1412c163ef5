// ABOUTME: Liftgen CLI - generate workouts and inspect the split rotation from JSON inputs
// ABOUTME: Prints results as JSON on stdout; logs go to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors
//!
//! Usage:
//! ```bash
//! # Generate a workout from a catalog, seed workouts and training history
//! liftgen recommend --catalog catalog.json --workouts workouts.json \
//!     --history history.json --goal hypertrophy --level intermediate --seed 42
//!
//! # Run many requests in parallel
//! liftgen batch --requests requests.json --seed 7
//!
//! # Show the split rotation
//! liftgen splits
//!
//! # Which split comes next for this history
//! liftgen next-split --history history.json
//!
//! # Which split a completed workout trained
//! liftgen identify --groups 1,5,7
//!
//! # Pick an existing workout instead of generating one
//! liftgen template --workouts workouts.json --goal weight_loss --level beginner
//! ```

mod commands;
mod helpers;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use liftgen::errors::{AppError, AppResult};
use liftgen::logging::LoggingConfig;
use liftgen::models::{ExperienceLevel, Goal, MuscleGroupId};
use liftgen::services::RecommendationService;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "liftgen",
    about = "Genetic workout recommender",
    long_about = "Generates strength workouts with a genetic algorithm that follows a rotating muscle-group split."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print indented JSON
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a workout for one user
    Recommend {
        /// Exercise catalog (JSON array of exercises)
        #[arg(long)]
        catalog: PathBuf,

        /// Existing workouts used to seed the population
        #[arg(long)]
        workouts: Option<PathBuf>,

        /// Completed workouts, most recent first
        #[arg(long)]
        history: Option<PathBuf>,

        /// Training goal (weight_loss, hypertrophy, definition, conditioning, rehabilitation)
        #[arg(long)]
        goal: Goal,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long)]
        level: ExperienceLevel,

        /// Body weight in kilograms
        #[arg(long, default_value = "70")]
        weight: f64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Reference time (RFC 3339), defaults to now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
    },

    /// Generate workouts for a JSON array of requests in parallel
    Batch {
        /// Requests file (JSON array of generation requests)
        #[arg(long)]
        requests: PathBuf,

        /// Base seed; request i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// List the split rotation
    Splits,

    /// Show the split to train next
    NextSplit {
        /// Completed workouts, most recent first
        #[arg(long)]
        history: Option<PathBuf>,

        /// Reference time (RFC 3339), defaults to now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
    },

    /// Identify the split a set of trained muscle groups belongs to
    Identify {
        /// Muscle group ids (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        groups: Vec<MuscleGroupId>,
    },

    /// Pick an existing workout for the user
    Template {
        /// Existing workouts (JSON array)
        #[arg(long)]
        workouts: PathBuf,

        /// Training goal
        #[arg(long)]
        goal: Goal,

        /// Experience level
        #[arg(long)]
        level: ExperienceLevel,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let service = RecommendationService::from_global();
    debug!(splits = service.registry().len(), "Recommender ready");

    match cli.command {
        Command::Recommend {
            catalog,
            workouts,
            history,
            goal,
            level,
            weight,
            seed,
            as_of,
        } => {
            let inputs = commands::recommend::RecommendInputs {
                catalog,
                workouts,
                history,
                goal,
                level,
                weight,
                seed,
                as_of,
            };
            commands::recommend::single(&service, &inputs, cli.pretty)?;
        }
        Command::Batch { requests, seed } => {
            commands::recommend::batch(&service, &requests, seed, cli.pretty)?;
        }
        Command::Splits => {
            commands::splits::list(&service, cli.pretty)?;
        }
        Command::NextSplit { history, as_of } => {
            commands::splits::next(&service, history.as_deref(), as_of, cli.pretty)?;
        }
        Command::Identify { groups } => {
            commands::splits::identify(&service, &groups, cli.pretty)?;
        }
        Command::Template {
            workouts,
            goal,
            level,
        } => {
            commands::recommend::template(&workouts, goal, level, cli.pretty)?;
        }
    }

    Ok(())
}
