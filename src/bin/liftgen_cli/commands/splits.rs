// ABOUTME: Split rotation commands for the liftgen CLI
// ABOUTME: Lists splits, recommends the next one and identifies completed workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use chrono::{DateTime, Utc};
use liftgen::errors::{AppError, AppResult};
use liftgen::models::{HistoryEntry, MuscleGroupId};
use liftgen::services::RecommendationService;
use std::path::Path;

use crate::helpers::display::print_json;
use crate::helpers::input::read_optional;

type Result<T> = AppResult<T>;

/// Print every split in rotation order
pub fn list(service: &RecommendationService, pretty: bool) -> Result<()> {
    print_json(&service.registry().summaries(), pretty)
}

/// Print the split to train next
pub fn next(
    service: &RecommendationService,
    history: Option<&Path>,
    as_of: Option<DateTime<Utc>>,
    pretty: bool,
) -> Result<()> {
    let history: Vec<HistoryEntry> = read_optional(history)?;
    let summary = service
        .next_split(&history, as_of.unwrap_or_else(Utc::now))
        .ok_or_else(|| AppError::internal("Split registry is empty"))?;
    print_json(&summary, pretty)
}

/// Print the split the given muscle groups most resemble
pub fn identify(
    service: &RecommendationService,
    groups: &[MuscleGroupId],
    pretty: bool,
) -> Result<()> {
    let summary = service
        .identify_split(groups)
        .ok_or_else(|| AppError::internal("Split registry is empty"))?;
    print_json(&summary, pretty)
}
