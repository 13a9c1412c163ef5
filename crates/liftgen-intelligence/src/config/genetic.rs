// ABOUTME: Genetic algorithm configuration for the workout search
// ABOUTME: Population sizing, operator rates, selection pressure, convergence and fill ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Genetic Algorithm Configuration
//!
//! One parameterized engine serves every deployment; the knobs below replace what
//! would otherwise be several hard-coded variants of the search.

use super::error::ConfigError;
use liftgen_core::constants::genetic;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Knobs for population construction and evolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticAlgorithmConfig {
    /// Individuals per generation
    pub population_size: usize,
    /// Upper bound on generations
    pub max_generations: usize,
    /// Probability that an offspring is mutated
    pub mutation_rate: f64,
    /// Probability that two parents are recombined instead of copied
    pub crossover_rate: f64,
    /// Individuals drawn per tournament
    pub tournament_size: usize,
    /// Best individuals cloned unchanged into the next generation
    pub elitism_count: usize,
    /// Generations compared on each side of the convergence check
    pub convergence_window: usize,
    /// Minimum best-fitness gain across the window to keep evolving
    pub convergence_min_improvement: f64,
    /// Partition the catalog by the split's muscle groups; when false every exercise is primary
    pub split_aware: bool,
    /// Fraction of the initial population seeded from existing workouts (rounded up)
    pub seed_fraction: f64,
    /// Share of a chromosome drawn from primary groups (rounded up)
    pub primary_ratio: f64,
    /// Share of a chromosome drawn from secondary groups (rounded up)
    pub secondary_ratio: f64,
    /// Maximum point mutations applied to one offspring
    pub max_point_mutations: usize,
    /// Construction attempts allowed per individual
    pub max_fill_attempts: usize,
    /// Optional wall-clock budget for one evolution run, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_budget_ms: Option<u64>,
}

impl Default for GeneticAlgorithmConfig {
    fn default() -> Self {
        Self {
            population_size: genetic::POPULATION_SIZE,
            max_generations: genetic::MAX_GENERATIONS,
            mutation_rate: genetic::MUTATION_RATE,
            crossover_rate: genetic::CROSSOVER_RATE,
            tournament_size: genetic::TOURNAMENT_SIZE,
            elitism_count: genetic::ELITISM_COUNT,
            convergence_window: genetic::CONVERGENCE_WINDOW,
            convergence_min_improvement: genetic::CONVERGENCE_MIN_IMPROVEMENT,
            split_aware: true,
            seed_fraction: genetic::SEED_FRACTION,
            primary_ratio: genetic::PRIMARY_RATIO,
            secondary_ratio: genetic::SECONDARY_RATIO,
            max_point_mutations: genetic::MAX_POINT_MUTATIONS,
            max_fill_attempts: genetic::MAX_FILL_ATTEMPTS,
            time_budget_ms: None,
        }
    }
}

impl GeneticAlgorithmConfig {
    /// Number of seeded individuals wanted in a population of `population_size`
    #[must_use]
    pub fn seed_target(&self) -> usize {
        let target = (self.population_size as f64 * self.seed_fraction).ceil() as usize;
        target.min(self.population_size)
    }

    /// Wall-clock budget as a `Duration`, when configured
    #[must_use]
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_ms.map(Duration::from_millis)
    }

    /// Check internal consistency of the search parameters
    ///
    /// # Errors
    ///
    /// Returns an error if a rate is outside `[0, 1]` or not a number, the population
    /// cannot support the configured selection or elitism, or the fill ratios exceed 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "population_size must be at least 2",
            ));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_generations must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidRange(
                "mutation_rate must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::InvalidRange(
                "crossover_rate must be between 0.0 and 1.0",
            ));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::InvalidRange(
                "tournament_size must be between 1 and population_size",
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(ConfigError::InvalidRange(
                "elitism_count must be < population_size",
            ));
        }
        if self.convergence_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "convergence_window must be at least 1",
            ));
        }
        if !self.convergence_min_improvement.is_finite()
            || self.convergence_min_improvement < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "convergence_min_improvement must be non-negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.seed_fraction) {
            return Err(ConfigError::InvalidRange(
                "seed_fraction must be between 0.0 and 1.0",
            ));
        }
        if !(0.0..=1.0).contains(&self.primary_ratio)
            || !(0.0..=1.0).contains(&self.secondary_ratio)
            || self.primary_ratio + self.secondary_ratio > 1.0
        {
            return Err(ConfigError::InvalidWeights(
                "primary_ratio + secondary_ratio must be non-negative and at most 1.0",
            ));
        }
        if self.max_point_mutations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_point_mutations must be at least 1",
            ));
        }
        if self.max_fill_attempts == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_fill_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}
