// ABOUTME: Recommendation service: single, batched and template-based workout recommendations
// ABOUTME: Adds request ids, tracing spans and AppError mapping around the generator pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use chrono::{DateTime, Utc};
use liftgen_core::errors::{AppError, AppResult};
use liftgen_core::models::{HistoryEntry, MuscleGroupId, SeedWorkout, SplitSummary, UserProfile};
use liftgen_intelligence::{
    GenerationReport, GenerationRequest, RecommenderConfig, SplitRecommender, SplitRegistry,
    WorkoutGenerator,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, info_span, warn};
use uuid::Uuid;

/// A generated workout as returned to hosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Identifier of this recommendation, also attached to its log span
    pub request_id: String,
    /// Workout, split metadata and evolution statistics
    #[serde(flatten)]
    pub report: GenerationReport,
    /// Human-readable note naming the split that comes next in rotation
    pub rotation_note: String,
}

/// Entry point for workout recommendations
///
/// Configuration and the split registry are immutable and shared, so one service
/// can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    config: Arc<RecommenderConfig>,
    registry: Arc<SplitRegistry>,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::from_global()
    }
}

impl RecommendationService {
    /// Create a service over explicit configuration and registry
    #[must_use]
    pub const fn new(config: Arc<RecommenderConfig>, registry: Arc<SplitRegistry>) -> Self {
        Self { config, registry }
    }

    /// Create a service using the global configuration and the default rotation
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(
            Arc::new(RecommenderConfig::global().clone()),
            Arc::new(SplitRegistry::default_rotation()),
        )
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Active split registry
    #[must_use]
    pub fn registry(&self) -> &SplitRegistry {
        &self.registry
    }

    /// Generate a workout for `request`
    ///
    /// # Errors
    ///
    /// Returns an `AppError` carrying the request id if the configuration is invalid,
    /// the catalog has duplicate ids, or the catalog cannot fill the selected split
    pub fn recommend<R>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> AppResult<RecommendationResponse>
    where
        R: Rng + ?Sized,
    {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "recommendation",
            request_id = %request_id,
            goal = %request.user.goal,
            level = %request.user.experience_level,
        );
        let _guard = span.enter();

        let generator = WorkoutGenerator::new(&self.config, &self.registry);
        let report = generator.generate(request, rng).map_err(|e| {
            warn!(error = %e, "Workout generation failed");
            AppError::from(e).with_request_id(&request_id)
        })?;

        info!(
            workout = %report.workout.name,
            exercises = report.workout.exercises.len(),
            fitness = report.outcome.best_fitness,
            generations = report.outcome.generations_run,
            "Workout recommended"
        );

        let rotation_note = format!(
            "Today's focus is {}. Next session in the rotation: {}.",
            report.split.name, report.next_split.name
        );
        Ok(RecommendationResponse {
            request_id,
            report,
            rotation_note,
        })
    }

    /// Generate a workout with a deterministic generator seeded from `seed`
    ///
    /// # Errors
    ///
    /// See [`RecommendationService::recommend`]
    pub fn recommend_seeded(
        &self,
        request: &GenerationRequest,
        seed: u64,
    ) -> AppResult<RecommendationResponse> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.recommend(request, &mut rng)
    }

    /// Generate workouts for independent requests in parallel
    ///
    /// Request `i` uses a generator seeded from `base_seed + i`, so the results match
    /// running [`RecommendationService::recommend_seeded`] on each request in turn.
    #[must_use]
    pub fn recommend_batch(
        &self,
        requests: &[GenerationRequest],
        base_seed: u64,
    ) -> Vec<AppResult<RecommendationResponse>> {
        info!(requests = requests.len(), base_seed, "Running recommendation batch");
        requests
            .par_iter()
            .enumerate()
            .map(|(i, request)| {
                self.recommend_seeded(request, base_seed.wrapping_add(i as u64))
            })
            .collect()
    }

    /// Split the user should train next, with display metadata
    #[must_use]
    pub fn next_split(
        &self,
        history: &[HistoryEntry],
        as_of: DateTime<Utc>,
    ) -> Option<SplitSummary> {
        let index = SplitRecommender::new(&self.registry, &self.config.split_selection)
            .recommend(history, as_of);
        self.registry.summary(index)
    }

    /// Split a completed workout most resembles, for annotating recorded history
    #[must_use]
    pub fn identify_split(&self, trained_groups: &[MuscleGroupId]) -> Option<SplitSummary> {
        let index = SplitRecommender::new(&self.registry, &self.config.split_selection)
            .identify_split(trained_groups);
        self.registry.summary(index)
    }

    /// Pick an existing workout instead of generating one
    ///
    /// Prefers a workout matching both goal and experience level, then goal alone,
    /// then the first workout available.
    #[must_use]
    pub fn recommend_template<'w>(
        user: &UserProfile,
        workouts: &'w [SeedWorkout],
    ) -> Option<&'w SeedWorkout> {
        workouts
            .iter()
            .find(|w| w.goal == user.goal && w.experience_level == user.experience_level)
            .or_else(|| workouts.iter().find(|w| w.goal == user.goal))
            .or_else(|| workouts.first())
    }
}
