// ABOUTME: Workout recommendation commands for the liftgen CLI
// ABOUTME: Handles single, batch and template recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use chrono::{DateTime, Utc};
use liftgen::errors::{AppError, AppResult, ErrorResponse};
use liftgen::intelligence::GenerationRequest;
use liftgen::models::{ExperienceLevel, Goal, SeedWorkout, UserProfile};
use liftgen::services::RecommendationService;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::helpers::display::print_json;
use crate::helpers::input::{read_json, read_optional};

type Result<T> = AppResult<T>;

/// Arguments of the `recommend` command
pub struct RecommendInputs {
    pub catalog: PathBuf,
    pub workouts: Option<PathBuf>,
    pub history: Option<PathBuf>,
    pub goal: Goal,
    pub level: ExperienceLevel,
    pub weight: f64,
    pub seed: Option<u64>,
    pub as_of: Option<DateTime<Utc>>,
}

/// Generate and print one workout
pub fn single(
    service: &RecommendationService,
    inputs: &RecommendInputs,
    pretty: bool,
) -> Result<()> {
    let request = GenerationRequest {
        user: UserProfile::new(inputs.goal, inputs.level, inputs.weight),
        catalog: read_json(&inputs.catalog)?,
        seed_workouts: read_optional(inputs.workouts.as_deref())?,
        history: read_optional(inputs.history.as_deref())?,
        as_of: inputs.as_of,
    };

    let response = match inputs.seed {
        Some(seed) => service.recommend_seeded(&request, seed)?,
        None => service.recommend(&request, &mut rand::thread_rng())?,
    };
    info!(request_id = %response.request_id, "Recommendation complete");
    print_json(&response, pretty)
}

/// Generate workouts for every request in the file and print them in order
///
/// Failed requests are reported in place as error objects.
pub fn batch(
    service: &RecommendationService,
    requests: &Path,
    base_seed: u64,
    pretty: bool,
) -> Result<()> {
    let requests: Vec<GenerationRequest> = read_json(requests)?;
    let results = service.recommend_batch(&requests, base_seed);

    let mut failures = 0_usize;
    let rendered: Vec<Value> = results
        .iter()
        .map(|result| match result {
            Ok(response) => serde_json::to_value(response).map_err(AppError::from),
            Err(e) => {
                failures += 1;
                Ok(json!({ "error": ErrorResponse::from(e) }))
            }
        })
        .collect::<Result<_>>()?;

    info!(requests = rendered.len(), failures, "Batch complete");
    print_json(&rendered, pretty)
}

/// Print the existing workout that best fits the user
pub fn template(workouts: &Path, goal: Goal, level: ExperienceLevel, pretty: bool) -> Result<()> {
    let workouts: Vec<SeedWorkout> = read_json(workouts)?;
    let user = UserProfile::new(goal, level, 0.0);
    let chosen = RecommendationService::recommend_template(&user, &workouts).ok_or_else(|| {
        AppError::invalid_input("No workouts available to choose a template from")
    })?;
    print_json(chosen, pretty)
}
