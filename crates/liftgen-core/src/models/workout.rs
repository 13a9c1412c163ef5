// ABOUTME: Workout records exchanged with hosts: seeds, history entries and generated output
// ABOUTME: Defines SeedWorkout, HistoryEntry, GeneratedWorkout, PrescribedExercise and ExerciseRole
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::exercise::{ExerciseId, MuscleGroupId};
use super::profile::{ExperienceLevel, Goal};

/// An existing workout used to seed the initial population
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedWorkout {
    /// Workout id
    pub id: u64,
    /// Workout name
    pub name: String,
    /// Goal the workout was designed for
    pub goal: Goal,
    /// Experience level the workout was designed for
    pub experience_level: ExperienceLevel,
    /// Exercise ids in prescription order
    #[serde(default)]
    pub exercises: Vec<ExerciseId>,
}

/// Muscle group touched by one exercise of a completed workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryExercise {
    /// Muscle group id
    pub muscle_group_id: MuscleGroupId,
}

/// A completed workout from the user's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the workout was performed
    pub workout_date: DateTime<Utc>,
    /// Exercises performed, one entry per exercise
    #[serde(default)]
    pub exercises: Vec<HistoryExercise>,
}

impl HistoryEntry {
    /// Build an entry from a date and the muscle groups trained, one per exercise
    #[must_use]
    pub fn new(workout_date: DateTime<Utc>, groups: &[MuscleGroupId]) -> Self {
        Self {
            workout_date,
            exercises: groups
                .iter()
                .map(|&muscle_group_id| HistoryExercise { muscle_group_id })
                .collect(),
        }
    }

    /// Muscle group ids of every exercise, with repeats
    pub fn muscle_groups(&self) -> impl Iterator<Item = MuscleGroupId> + '_ {
        self.exercises.iter().map(|e| e.muscle_group_id)
    }
}

/// Role a muscle group plays inside a training split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseRole {
    /// Main focus of the session
    Primary,
    /// Synergist trained in support of the primary groups
    Secondary,
    /// Accessory work (core, stabilizers)
    Auxiliary,
}

impl fmt::Display for ExerciseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
            Self::Auxiliary => write!(f, "auxiliary"),
        }
    }
}

/// One exercise of a generated workout with its prescription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescribedExercise {
    /// Exercise id
    pub exercise_id: ExerciseId,
    /// Exercise name
    pub exercise_name: String,
    /// Muscle group id
    pub muscle_group_id: MuscleGroupId,
    /// Role of the muscle group in the split, `None` when outside it
    pub role: Option<ExerciseRole>,
    /// Number of working sets
    pub sets: u32,
    /// Comma-separated repetitions per set (e.g. "12,10,8")
    pub repetitions: String,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
}

/// Workout produced by the recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    /// Generated name
    pub name: String,
    /// Generated description
    pub description: String,
    /// Goal the workout targets
    pub goal: Goal,
    /// Experience level the workout targets
    pub experience_level: ExperienceLevel,
    /// Name of the split the workout trains
    pub split_name: String,
    /// Estimated session duration in minutes
    pub estimated_duration_minutes: u32,
    /// Fitness of the chromosome the workout was built from
    pub fitness: f64,
    /// When the workout was generated
    pub generated_at: DateTime<Utc>,
    /// Exercises in order
    pub exercises: Vec<PrescribedExercise>,
}

impl GeneratedWorkout {
    /// Exercise ids in prescription order
    #[must_use]
    pub fn exercise_ids(&self) -> Vec<ExerciseId> {
        self.exercises.iter().map(|e| e.exercise_id).collect()
    }
}

/// Display view of a training split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitSummary {
    /// Position in the registry
    pub index: usize,
    /// Split name
    pub name: String,
    /// Split description
    pub description: String,
    /// Name of the split that follows in rotation
    pub next_split_name: String,
}
