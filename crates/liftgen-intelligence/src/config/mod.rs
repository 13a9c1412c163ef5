// ABOUTME: Recommender configuration: defaults, LIFTGEN_* environment overrides, validation
// ABOUTME: Orchestrates the genetic, selection, fitness, workout and prescription sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Recommender Configuration
//!
//! Provides type-safe configuration for every stage of the recommender.
//!
//! # Module Structure
//!
//! - `genetic` - Population sizing, operator rates, convergence
//! - `selection` - Split policy and trailing windows
//! - `fitness` - Weights of the fitness function
//! - `workout` - Exercise counts and duration estimates
//! - `prescription` - Sets/repetitions/rest table

pub mod error;
pub mod fitness;
pub mod genetic;
pub mod prescription;
pub mod selection;
pub mod workout;

pub use error::ConfigError;
pub use fitness::FitnessWeights;
pub use genetic::GeneticAlgorithmConfig;
pub use prescription::{Prescription, PrescriptionRule, PrescriptionTable};
pub use selection::{SplitPolicy, SplitSelectionConfig};
pub use workout::{DurationConfig, ExerciseCountConfig, GoalAdjustments};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static RECOMMENDER_CONFIG: OnceLock<RecommenderConfig> = OnceLock::new();

/// Main recommender configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Genetic algorithm knobs
    pub genetic: GeneticAlgorithmConfig,
    /// Target exercise counts
    pub exercise_count: ExerciseCountConfig,
    /// Split recommender settings
    pub split_selection: SplitSelectionConfig,
    /// Fitness function weights
    pub fitness: FitnessWeights,
    /// Session duration estimate
    pub durations: DurationConfig,
    /// Sets/repetitions/rest table
    pub prescriptions: PrescriptionTable,
}

impl RecommenderConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        RECOMMENDER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load recommender config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.genetic.validate()?;
        self.exercise_count.validate()?;
        self.split_selection.validate()?;
        self.fitness.validate()?;
        self.prescriptions.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Genetic algorithm overrides
        Self::apply_env_var(
            "LIFTGEN_POPULATION_SIZE",
            &mut self.genetic.population_size,
        )?;
        Self::apply_env_var(
            "LIFTGEN_MAX_GENERATIONS",
            &mut self.genetic.max_generations,
        )?;
        Self::apply_env_var("LIFTGEN_MUTATION_RATE", &mut self.genetic.mutation_rate)?;
        Self::apply_env_var("LIFTGEN_CROSSOVER_RATE", &mut self.genetic.crossover_rate)?;
        Self::apply_env_var(
            "LIFTGEN_TOURNAMENT_SIZE",
            &mut self.genetic.tournament_size,
        )?;
        Self::apply_env_var("LIFTGEN_ELITISM_COUNT", &mut self.genetic.elitism_count)?;
        Self::apply_env_var(
            "LIFTGEN_CONVERGENCE_WINDOW",
            &mut self.genetic.convergence_window,
        )?;
        Self::apply_env_var(
            "LIFTGEN_CONVERGENCE_MIN_IMPROVEMENT",
            &mut self.genetic.convergence_min_improvement,
        )?;
        Self::apply_env_var("LIFTGEN_SPLIT_AWARE", &mut self.genetic.split_aware)?;
        Self::apply_env_var("LIFTGEN_SEED_FRACTION", &mut self.genetic.seed_fraction)?;
        if let Ok(val) = env::var("LIFTGEN_TIME_BUDGET_MS") {
            let millis = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid LIFTGEN_TIME_BUDGET_MS".to_owned()))?;
            self.genetic.time_budget_ms = Some(millis);
        }

        // Split selection overrides
        Self::apply_env_var("LIFTGEN_SPLIT_POLICY", &mut self.split_selection.policy)?;
        Self::apply_env_var(
            "LIFTGEN_COVERAGE_THRESHOLD",
            &mut self.split_selection.coverage_threshold,
        )?;
        Self::apply_env_var(
            "LIFTGEN_BALANCE_WINDOW_DAYS",
            &mut self.split_selection.balance_window_days,
        )?;

        // Exercise count overrides
        Self::apply_env_var(
            "LIFTGEN_EXERCISES_BEGINNER",
            &mut self.exercise_count.beginner,
        )?;
        Self::apply_env_var(
            "LIFTGEN_EXERCISES_INTERMEDIATE",
            &mut self.exercise_count.intermediate,
        )?;
        Self::apply_env_var(
            "LIFTGEN_EXERCISES_ADVANCED",
            &mut self.exercise_count.advanced,
        )?;

        Ok(self)
    }
}
