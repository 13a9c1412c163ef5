// ABOUTME: Training split registry: named muscle-group groupings with a rotation pointer
// ABOUTME: Immutable after construction and validated so every rotation pointer resolves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use crate::error::{RecommendationError, RecommendationResult};
use liftgen_core::models::{ExerciseRole, MuscleGroupId, SplitSummary};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::slice;

/// A named grouping of muscle groups trained together in one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSplit {
    /// Position in the registry
    pub index: usize,
    /// Display name
    pub name: String,
    /// Display description
    pub description: String,
    /// Main focus groups
    pub primary_groups: Vec<MuscleGroupId>,
    /// Supporting groups
    pub secondary_groups: Vec<MuscleGroupId>,
    /// Accessory groups
    pub auxiliary_groups: Vec<MuscleGroupId>,
    /// Index of the split recommended after this one
    pub next_split: usize,
}

impl TrainingSplit {
    /// Role of `group` in this split, checking primary then secondary then auxiliary
    #[must_use]
    pub fn role_of(&self, group: MuscleGroupId) -> Option<ExerciseRole> {
        if self.primary_groups.contains(&group) {
            Some(ExerciseRole::Primary)
        } else if self.secondary_groups.contains(&group) {
            Some(ExerciseRole::Secondary)
        } else if self.auxiliary_groups.contains(&group) {
            Some(ExerciseRole::Auxiliary)
        } else {
            None
        }
    }

    /// Union of primary and secondary groups
    #[must_use]
    pub fn focus_groups(&self) -> HashSet<MuscleGroupId> {
        self.primary_groups
            .iter()
            .chain(&self.secondary_groups)
            .copied()
            .collect()
    }
}

/// Ordered, validated set of training splits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRegistry {
    splits: Vec<TrainingSplit>,
}

fn split(
    index: usize,
    name: &str,
    description: &str,
    groups: (&[MuscleGroupId], &[MuscleGroupId], &[MuscleGroupId]),
    next_split: usize,
) -> TrainingSplit {
    TrainingSplit {
        index,
        name: name.to_owned(),
        description: description.to_owned(),
        primary_groups: groups.0.to_vec(),
        secondary_groups: groups.1.to_vec(),
        auxiliary_groups: groups.2.to_vec(),
        next_split,
    }
}

impl SplitRegistry {
    /// Build a registry from splits listed in index order
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegistry` if the list is empty, a split's index does not match
    /// its position, or a rotation pointer is out of range
    pub fn new(splits: Vec<TrainingSplit>) -> RecommendationResult<Self> {
        if splits.is_empty() {
            return Err(RecommendationError::InvalidRegistry(
                "registry must contain at least one split".to_owned(),
            ));
        }
        for (position, split) in splits.iter().enumerate() {
            if split.index != position {
                return Err(RecommendationError::InvalidRegistry(format!(
                    "split '{}' has index {} but is listed at position {position}",
                    split.name, split.index
                )));
            }
            if split.next_split >= splits.len() {
                return Err(RecommendationError::InvalidRegistry(format!(
                    "split '{}' rotates to unknown split {}",
                    split.name, split.next_split
                )));
            }
        }
        Ok(Self { splits })
    }

    /// Four-day rotation over the production catalog's muscle-group ids
    #[must_use]
    pub fn default_rotation() -> Self {
        Self {
            splits: vec![
                split(
                    0,
                    "Chest & Triceps",
                    "Pressing day: chest first, triceps to finish, shoulders and core as accessories",
                    (&[1], &[5], &[3, 7]),
                    1,
                ),
                split(
                    1,
                    "Back & Biceps",
                    "Pulling day: back first, biceps to finish, forearms and core as accessories",
                    (&[2], &[4], &[10, 7]),
                    2,
                ),
                split(
                    2,
                    "Legs & Glutes",
                    "Lower body: quads and hamstrings, glutes, calves and core",
                    (&[6], &[8], &[9, 7]),
                    3,
                ),
                split(
                    3,
                    "Shoulders & Core",
                    "Overhead work and trunk stability with light arm accessories",
                    (&[3], &[7], &[4, 5]),
                    0,
                ),
            ],
        }
    }

    /// Split at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TrainingSplit> {
        self.splits.get(index)
    }

    /// Split at `index`, or an error naming the missing index
    ///
    /// # Errors
    ///
    /// Returns `SplitNotFound` if `index` is out of range
    pub fn require(&self, index: usize) -> RecommendationResult<&TrainingSplit> {
        self.get(index)
            .ok_or(RecommendationError::SplitNotFound(index))
    }

    /// Display view of the split at `index` and its successor
    #[must_use]
    pub fn summary(&self, index: usize) -> Option<SplitSummary> {
        let split = self.get(index)?;
        let next = self.get(split.next_split)?;
        Some(SplitSummary {
            index,
            name: split.name.clone(),
            description: split.description.clone(),
            next_split_name: next.name.clone(),
        })
    }

    /// Display views of every split
    #[must_use]
    pub fn summaries(&self) -> Vec<SplitSummary> {
        (0..self.splits.len())
            .filter_map(|index| self.summary(index))
            .collect()
    }

    /// Splits in index order
    pub fn iter(&self) -> slice::Iter<'_, TrainingSplit> {
        self.splits.iter()
    }

    /// Number of splits
    #[must_use]
    pub fn len(&self) -> usize {
        self.splits.len()
    }

    /// Always false for a constructed registry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }
}

impl Default for SplitRegistry {
    fn default() -> Self {
        Self::default_rotation()
    }
}

impl<'de> Deserialize<'de> for SplitRegistry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            splits: Vec<TrainingSplit>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.splits).map_err(de::Error::custom)
    }
}
