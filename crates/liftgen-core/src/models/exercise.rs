// ABOUTME: Exercise and muscle group reference data supplied by the catalog owner
// ABOUTME: Defines Exercise, MuscleGroup, Difficulty and the name-derived MuscleCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an exercise in the catalog
pub type ExerciseId = u32;

/// Identifier of a muscle group
pub type MuscleGroupId = u32;

/// Muscle group reference data
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MuscleGroup {
    /// Muscle group id
    pub id: MuscleGroupId,
    /// Display name (e.g. "Chest")
    pub name: String,
}

/// Exercise difficulty, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Suitable for anyone
    Easy,
    /// Requires some training background
    Medium,
    /// Requires solid technique and strength
    Hard,
}

impl Difficulty {
    /// Numeric rank used by experience matching (Easy=1, Medium=2, Hard=3)
    #[must_use]
    pub const fn rank(self) -> i32 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}

/// Coarse classification of a muscle group, derived from its name
///
/// Goal objectives reason about body regions rather than catalog ids, which differ
/// between deployments. Anything that is not one of the six major groups is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleCategory {
    /// Pectorals
    Chest,
    /// Lats, traps, spinal erectors
    Back,
    /// Quads, hamstrings
    Legs,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Core, calves, forearms, glutes and anything unrecognized
    Other,
}

impl MuscleCategory {
    /// The six categories a balanced hypertrophy program should touch
    pub const MAIN: [Self; 6] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
    ];

    /// Classify a muscle group by name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "chest" | "pectorals" | "pecs" => Self::Chest,
            "back" | "lats" => Self::Back,
            "legs" | "quadriceps" | "quads" | "hamstrings" => Self::Legs,
            "shoulders" | "deltoids" | "delts" => Self::Shoulders,
            "biceps" => Self::Biceps,
            "triceps" => Self::Triceps,
            _ => Self::Other,
        }
    }

    /// Whether exercises for this category are multi-joint compound movements
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::Chest | Self::Back | Self::Legs)
    }
}

/// A single exercise from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise id
    pub id: ExerciseId,
    /// Display name
    pub name: String,
    /// Owning muscle group id
    pub muscle_group_id: MuscleGroupId,
    /// Owning muscle group name
    pub muscle_group_name: String,
    /// Difficulty level
    #[serde(alias = "difficulty")]
    pub difficulty_level: Difficulty,
    /// Whether the exercise needs gym equipment
    #[serde(default)]
    pub equipment_required: bool,
}

impl Exercise {
    /// Create a new exercise
    #[must_use]
    pub fn new(
        id: ExerciseId,
        name: impl Into<String>,
        muscle_group: &MuscleGroup,
        difficulty_level: Difficulty,
        equipment_required: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            muscle_group_id: muscle_group.id,
            muscle_group_name: muscle_group.name.clone(),
            difficulty_level,
            equipment_required,
        }
    }

    /// Category of the owning muscle group
    #[must_use]
    pub fn category(&self) -> MuscleCategory {
        MuscleCategory::from_name(&self.muscle_group_name)
    }
}
