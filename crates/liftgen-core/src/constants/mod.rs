// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default tuning values for the genetic recommender, split rotation, and prescriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Constants module
//!
//! Values here are the defaults the configuration layer starts from. Anything a
//! deployment may want to tune is re-exposed through the intelligence crate's config
//! structs, so code should read those instead of these constants directly.

/// Service identification
pub mod service_names {
    /// Service name used in structured logs
    pub const LIFTGEN: &str = "liftgen";
}

/// Genetic algorithm defaults
pub mod genetic {
    /// Individuals per generation
    pub const POPULATION_SIZE: usize = 25;
    /// Upper bound on generations
    pub const MAX_GENERATIONS: usize = 20;
    /// Probability that an offspring is mutated
    pub const MUTATION_RATE: f64 = 0.15;
    /// Probability that two parents are recombined instead of copied
    pub const CROSSOVER_RATE: f64 = 0.75;
    /// Individuals drawn per tournament
    pub const TOURNAMENT_SIZE: usize = 4;
    /// Best individuals carried unchanged into the next generation
    pub const ELITISM_COUNT: usize = 2;
    /// Generations compared on each side of the convergence check
    pub const CONVERGENCE_WINDOW: usize = 5;
    /// Minimum best-fitness gain across the window to keep evolving
    pub const CONVERGENCE_MIN_IMPROVEMENT: f64 = 1.0;
    /// Fraction of the initial population seeded from existing workouts
    pub const SEED_FRACTION: f64 = 0.5;
    /// Share of a chromosome drawn from the primary muscle groups
    pub const PRIMARY_RATIO: f64 = 0.6;
    /// Share of a chromosome drawn from the secondary muscle groups
    pub const SECONDARY_RATIO: f64 = 0.3;
    /// Maximum point mutations applied to one offspring
    pub const MAX_POINT_MUTATIONS: usize = 3;
    /// Construction attempts allowed per individual before giving up
    pub const MAX_FILL_ATTEMPTS: usize = 50;
}

/// Target exercise counts per experience level
pub mod exercise_count {
    /// Exercises in a beginner workout
    pub const BEGINNER: usize = 6;
    /// Exercises in an intermediate workout
    pub const INTERMEDIATE: usize = 8;
    /// Exercises in an advanced workout
    pub const ADVANCED: usize = 10;
}

/// Split rotation defaults
pub mod split_selection {
    /// Share of a split's groups that must appear in the last workout to identify it
    pub const COVERAGE_THRESHOLD: f64 = 0.5;
    /// Trailing window used by the balancing fallback
    pub const BALANCE_WINDOW_DAYS: i64 = 7;
    /// Longest trailing window accepted by validation (ten years)
    pub const MAX_BALANCE_WINDOW_DAYS: i64 = 3650;
}

/// Session duration estimates in minutes
pub mod durations {
    /// Base session time for beginners
    pub const BEGINNER_BASE_MINUTES: u32 = 35;
    /// Base session time for intermediate lifters
    pub const INTERMEDIATE_BASE_MINUTES: u32 = 50;
    /// Base session time for advanced lifters
    pub const ADVANCED_BASE_MINUTES: u32 = 65;
    /// Time added per exercise
    pub const MINUTES_PER_EXERCISE: u32 = 4;
}
