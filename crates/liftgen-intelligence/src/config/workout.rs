// ABOUTME: Workout shape configuration: target exercise counts and duration estimates
// ABOUTME: Maps experience level and goal to chromosome length and session minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use super::error::ConfigError;
use liftgen_core::constants::{durations, exercise_count};
use liftgen_core::models::{ExperienceLevel, Goal};
use serde::{Deserialize, Serialize};

/// Per-goal adjustment added to the level baseline exercise count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalAdjustments {
    /// Adjustment for weight loss
    pub weight_loss: i32,
    /// Adjustment for hypertrophy
    pub hypertrophy: i32,
    /// Adjustment for definition
    pub definition: i32,
    /// Adjustment for conditioning
    pub conditioning: i32,
    /// Adjustment for rehabilitation
    pub rehabilitation: i32,
}

impl GoalAdjustments {
    /// Adjustment for the given goal
    #[must_use]
    pub const fn for_goal(&self, goal: Goal) -> i32 {
        match goal {
            Goal::WeightLoss => self.weight_loss,
            Goal::Hypertrophy => self.hypertrophy,
            Goal::Definition => self.definition,
            Goal::Conditioning => self.conditioning,
            Goal::Rehabilitation => self.rehabilitation,
        }
    }
}

/// Target number of exercises (chromosome length)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseCountConfig {
    /// Baseline for beginners
    pub beginner: usize,
    /// Baseline for intermediate lifters
    pub intermediate: usize,
    /// Baseline for advanced lifters
    pub advanced: usize,
    /// Per-goal adjustment on top of the baseline
    pub goal_adjustments: GoalAdjustments,
}

impl Default for ExerciseCountConfig {
    fn default() -> Self {
        Self {
            beginner: exercise_count::BEGINNER,
            intermediate: exercise_count::INTERMEDIATE,
            advanced: exercise_count::ADVANCED,
            goal_adjustments: GoalAdjustments::default(),
        }
    }
}

impl ExerciseCountConfig {
    /// Exercises in a workout for this level and goal, never below one
    #[must_use]
    pub fn target(&self, level: ExperienceLevel, goal: Goal) -> usize {
        let base = match level {
            ExperienceLevel::Beginner => self.beginner,
            ExperienceLevel::Intermediate => self.intermediate,
            ExperienceLevel::Advanced => self.advanced,
        };
        let adjusted = i64::try_from(base)
            .unwrap_or(i64::MAX)
            .saturating_add(i64::from(self.goal_adjustments.for_goal(goal)));
        adjusted.max(1) as usize
    }

    /// Validate baselines
    ///
    /// # Errors
    ///
    /// Returns an error if a baseline is zero or baselines decrease with experience
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beginner == 0 || self.intermediate == 0 || self.advanced == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "exercise counts must be at least 1",
            ));
        }
        if self.beginner > self.intermediate || self.intermediate > self.advanced {
            return Err(ConfigError::InvalidRange(
                "exercise counts must not decrease with experience",
            ));
        }
        Ok(())
    }
}

/// Session duration estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationConfig {
    /// Base minutes for beginners
    pub beginner_base_minutes: u32,
    /// Base minutes for intermediate lifters
    pub intermediate_base_minutes: u32,
    /// Base minutes for advanced lifters
    pub advanced_base_minutes: u32,
    /// Minutes added per exercise
    pub minutes_per_exercise: u32,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            beginner_base_minutes: durations::BEGINNER_BASE_MINUTES,
            intermediate_base_minutes: durations::INTERMEDIATE_BASE_MINUTES,
            advanced_base_minutes: durations::ADVANCED_BASE_MINUTES,
            minutes_per_exercise: durations::MINUTES_PER_EXERCISE,
        }
    }
}

impl DurationConfig {
    /// Estimated minutes for a session of `exercises` exercises
    #[must_use]
    pub fn estimate(&self, level: ExperienceLevel, exercises: usize) -> u32 {
        let base = match level {
            ExperienceLevel::Beginner => self.beginner_base_minutes,
            ExperienceLevel::Intermediate => self.intermediate_base_minutes,
            ExperienceLevel::Advanced => self.advanced_base_minutes,
        };
        let per_exercise = u32::try_from(exercises)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.minutes_per_exercise);
        base.saturating_add(per_exercise)
    }
}
