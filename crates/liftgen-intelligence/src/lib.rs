// ABOUTME: Genetic workout recommendation engine for liftgen
// ABOUTME: Split rotation, population codec, fitness evaluation, evolution and materialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

#![deny(unsafe_code)]

//! # Liftgen Intelligence
//!
//! Synthesizes a structured workout for a user by evolving candidate exercise lists
//! against a multi-term fitness function, while following a rotating training split
//! derived from the user's history.
//!
//! ## Pipeline
//!
//! - **split_recommender**: picks the split to train next from history
//! - **population**: builds the initial population from seeds and the catalog
//! - **evolution**: elitism, tournament selection, crossover and mutation
//! - **fitness**: scores a chromosome for the user and split
//! - **materializer**: prescribes sets, repetitions and rest for the winner
//! - **generator**: runs the stages above end to end

/// Read-only exercise catalog
pub mod catalog;

/// Recommender configuration with environment overrides and validation
pub mod config;

/// Recommendation error types
pub mod error;

/// Generational evolution loop and genetic operators
pub mod evolution;

/// Fitness function
pub mod fitness;

/// End-to-end recommendation pipeline
pub mod generator;

/// Chromosome-to-workout conversion
pub mod materializer;

/// Chromosome encoding and initial population
pub mod population;

/// Next-split selection from history
pub mod split_recommender;

/// Training split registry
pub mod splits;

pub use catalog::ExerciseCatalog;
pub use config::RecommenderConfig;
pub use error::{RecommendationError, RecommendationResult};
pub use evolution::{EvolutionEngine, EvolutionOutcome, GenerationStats, StopReason};
pub use fitness::{FitnessBreakdown, FitnessEvaluator};
pub use generator::{GenerationReport, GenerationRequest, WorkoutGenerator};
pub use materializer::WorkoutMaterializer;
pub use population::{Chromosome, ExercisePools, PopulationCodec};
pub use split_recommender::SplitRecommender;
pub use splits::{SplitRegistry, TrainingSplit};
