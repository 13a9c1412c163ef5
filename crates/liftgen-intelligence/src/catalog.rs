// ABOUTME: Read-only exercise catalog with id lookup preserving input order
// ABOUTME: Rejects duplicate ids so every chromosome gene resolves to exactly one exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use crate::error::{RecommendationError, RecommendationResult};
use liftgen_core::models::{Exercise, ExerciseId};
use std::collections::HashMap;
use std::slice;

/// Exercise catalog indexed by id
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
    index: HashMap<ExerciseId, usize>,
}

impl ExerciseCatalog {
    /// Build a catalog from exercises in their listing order
    ///
    /// # Errors
    ///
    /// Returns `DuplicateExercise` if two entries share an id
    pub fn new(exercises: Vec<Exercise>) -> RecommendationResult<Self> {
        let mut index = HashMap::with_capacity(exercises.len());
        for (position, exercise) in exercises.iter().enumerate() {
            if index.insert(exercise.id, position).is_some() {
                return Err(RecommendationError::DuplicateExercise(exercise.id));
            }
        }
        Ok(Self { exercises, index })
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn get(&self, id: ExerciseId) -> Option<&Exercise> {
        self.index.get(&id).map(|&position| &self.exercises[position])
    }

    /// Whether the catalog holds `id`
    #[must_use]
    pub fn contains(&self, id: ExerciseId) -> bool {
        self.index.contains_key(&id)
    }

    /// Exercises in listing order
    pub fn iter(&self) -> slice::Iter<'_, Exercise> {
        self.exercises.iter()
    }

    /// Exercise ids in listing order
    #[must_use]
    pub fn ids(&self) -> Vec<ExerciseId> {
        self.exercises.iter().map(|e| e.id).collect()
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl<'a> IntoIterator for &'a ExerciseCatalog {
    type Item = &'a Exercise;
    type IntoIter = slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftgen_core::models::{Difficulty, MuscleGroup};

    fn chest() -> MuscleGroup {
        MuscleGroup {
            id: 1,
            name: "Chest".to_owned(),
        }
    }

    #[test]
    fn test_lookup_preserves_order() {
        let group = chest();
        let catalog = ExerciseCatalog::new(vec![
            Exercise::new(5, "Bench Press", &group, Difficulty::Medium, true),
            Exercise::new(2, "Push-up", &group, Difficulty::Easy, false),
        ])
        .unwrap();

        assert_eq!(catalog.ids(), vec![5, 2]);
        assert_eq!(catalog.get(2).map(|e| e.name.as_str()), Some("Push-up"));
        assert!(!catalog.contains(9));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let group = chest();
        let result = ExerciseCatalog::new(vec![
            Exercise::new(1, "Bench Press", &group, Difficulty::Medium, true),
            Exercise::new(1, "Push-up", &group, Difficulty::Easy, false),
        ]);
        assert!(matches!(
            result,
            Err(RecommendationError::DuplicateExercise(1))
        ));
    }
}
