// ABOUTME: End-to-end pipeline: split selection, population, evolution, materialization
// ABOUTME: Defines the GenerationRequest input and the GenerationReport output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! # Workout Generator
//!
//! Ties the recommender stages together. Every source of variation is explicit:
//! randomness comes from the caller's generator and time from the request's `as_of`
//! (the current time when absent), so a seeded request with a fixed `as_of`
//! reproduces its workout exactly.

use crate::catalog::ExerciseCatalog;
use crate::config::RecommenderConfig;
use crate::error::{RecommendationError, RecommendationResult};
use crate::evolution::{EvolutionEngine, EvolutionOutcome};
use crate::fitness::FitnessEvaluator;
use crate::materializer::WorkoutMaterializer;
use crate::population::PopulationCodec;
use crate::split_recommender::SplitRecommender;
use crate::splits::SplitRegistry;
use chrono::{DateTime, Utc};
use liftgen_core::models::{
    Exercise, GeneratedWorkout, HistoryEntry, SeedWorkout, SplitSummary, UserProfile,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Everything the host supplies for one recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// User the workout is for
    pub user: UserProfile,
    /// Exercise catalog
    pub catalog: Vec<Exercise>,
    /// Existing workouts used as seeds
    #[serde(default)]
    pub seed_workouts: Vec<SeedWorkout>,
    /// Completed workouts, most recent first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Reference time for split selection and the generated timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
}

/// Generated workout together with how it was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// The workout
    pub workout: GeneratedWorkout,
    /// Split the workout trains
    pub split: SplitSummary,
    /// Split the rotation will suggest after this one
    pub next_split: SplitSummary,
    /// Evolution statistics
    pub outcome: EvolutionOutcome,
}

/// Runs the full recommendation pipeline
#[derive(Debug, Clone, Copy)]
pub struct WorkoutGenerator<'a> {
    config: &'a RecommenderConfig,
    registry: &'a SplitRegistry,
}

impl<'a> WorkoutGenerator<'a> {
    /// Create a generator
    #[must_use]
    pub const fn new(config: &'a RecommenderConfig, registry: &'a SplitRegistry) -> Self {
        Self { config, registry }
    }

    /// Index of the split the next workout should train
    #[must_use]
    pub fn recommend_split(&self, history: &[HistoryEntry], as_of: DateTime<Utc>) -> usize {
        SplitRecommender::new(self.registry, &self.config.split_selection).recommend(history, as_of)
    }

    /// Generate a workout for `request`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the catalog contains duplicate
    /// ids, or the catalog cannot fill a workout for the selected split
    pub fn generate<R>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> RecommendationResult<GenerationReport>
    where
        R: Rng + ?Sized,
    {
        self.config.validate()?;
        let as_of = request.as_of.unwrap_or_else(Utc::now);
        let catalog = ExerciseCatalog::new(request.catalog.clone())?;
        let user = &request.user;

        let split_index = self.recommend_split(&request.history, as_of);
        let split = self.registry.require(split_index)?;
        let length = self
            .config
            .exercise_count
            .target(user.experience_level, user.goal);
        info!(
            split = %split.name,
            goal = %user.goal,
            level = %user.experience_level,
            length,
            "Generating workout"
        );

        let genetic = &self.config.genetic;
        let codec = PopulationCodec::new(&catalog, split, genetic);
        let population =
            codec.initialize_population(length, &request.seed_workouts, user, rng)?;

        let evaluator = FitnessEvaluator::new(&catalog, split, &self.config.fitness);
        let engine = EvolutionEngine::new(genetic, evaluator, &catalog, codec.pools());
        let outcome = engine.evolve(population, user, rng)?;

        let workout = WorkoutMaterializer::new(
            &catalog,
            split,
            &self.config.prescriptions,
            &self.config.durations,
        )
        .build(&outcome.best, user, outcome.best_fitness, as_of);

        let summary = self
            .registry
            .summary(split_index)
            .ok_or(RecommendationError::SplitNotFound(split_index))?;
        let next_split = self
            .registry
            .summary(split.next_split)
            .ok_or(RecommendationError::SplitNotFound(split.next_split))?;

        Ok(GenerationReport {
            workout,
            split: summary,
            next_split,
            outcome,
        })
    }
}
