// ABOUTME: Recommendation error types raised by the genetic workout pipeline
// ABOUTME: Converts domain failures into the workspace-wide AppError at the crate boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use crate::config::ConfigError;
use chrono::{DateTime, Utc};
use liftgen_core::errors::{AppError, ErrorCode};
use liftgen_core::models::ExerciseId;
use thiserror::Error;

/// Errors raised while generating a workout
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// The catalog cannot fill a chromosome of the requested length for the split
    #[error("Insufficient exercises for split {split}: required {required}, available {available}")]
    InsufficientExercises {
        /// Split name
        split: String,
        /// Chromosome length requested
        required: usize,
        /// Distinct exercises the split's pools hold
        available: usize,
    },

    /// Two catalog entries share an id
    #[error("Duplicate exercise id {0} in catalog")]
    DuplicateExercise(ExerciseId),

    /// The split registry is structurally invalid
    #[error("Invalid split registry: {0}")]
    InvalidRegistry(String),

    /// A split index is not registered
    #[error("Split index {0} is not registered")]
    SplitNotFound(usize),

    /// The trailing history window does not fit before the reference time
    #[error("History window of {days} days cannot end at {as_of}")]
    HistoryWindow {
        /// Window length in days
        days: i64,
        /// Reference time the window ends at
        as_of: DateTime<Utc>,
    },

    /// Evolution was handed an empty population
    #[error("Cannot evolve an empty population")]
    EmptyPopulation,

    /// Configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for recommendation operations
pub type RecommendationResult<T> = Result<T, RecommendationError>;

impl From<RecommendationError> for AppError {
    fn from(error: RecommendationError) -> Self {
        match error {
            RecommendationError::Config(config) => config.into(),
            other => {
                let code = match &other {
                    RecommendationError::InsufficientExercises { .. } => {
                        ErrorCode::InsufficientExercises
                    }
                    RecommendationError::DuplicateExercise(_) => ErrorCode::InvalidInput,
                    RecommendationError::SplitNotFound(_) => ErrorCode::SplitNotFound,
                    RecommendationError::InvalidRegistry(_) => ErrorCode::ConfigInvalid,
                    RecommendationError::HistoryWindow { .. } => ErrorCode::InvalidInput,
                    RecommendationError::EmptyPopulation | RecommendationError::Config(_) => {
                        ErrorCode::InternalError
                    }
                };
                Self::new(code, other.to_string()).with_source(other)
            }
        }
    }
}
