// ABOUTME: Turns the winning chromosome into a named, prescribed workout record
// ABOUTME: Applies the sets/repetitions/rest table per role and estimates session duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use crate::catalog::ExerciseCatalog;
use crate::config::{DurationConfig, PrescriptionTable};
use crate::population::Chromosome;
use crate::splits::TrainingSplit;
use chrono::{DateTime, Utc};
use liftgen_core::models::{ExerciseRole, GeneratedWorkout, PrescribedExercise, UserProfile};

/// Builds workout records for one split
#[derive(Debug, Clone, Copy)]
pub struct WorkoutMaterializer<'a> {
    catalog: &'a ExerciseCatalog,
    split: &'a TrainingSplit,
    prescriptions: &'a PrescriptionTable,
    durations: &'a DurationConfig,
}

impl<'a> WorkoutMaterializer<'a> {
    /// Create a materializer
    #[must_use]
    pub const fn new(
        catalog: &'a ExerciseCatalog,
        split: &'a TrainingSplit,
        prescriptions: &'a PrescriptionTable,
        durations: &'a DurationConfig,
    ) -> Self {
        Self {
            catalog,
            split,
            prescriptions,
            durations,
        }
    }

    /// Materialize `chromosome` for `user`; unresolved genes are skipped
    #[must_use]
    pub fn build(
        &self,
        chromosome: &Chromosome,
        user: &UserProfile,
        fitness: f64,
        generated_at: DateTime<Utc>,
    ) -> GeneratedWorkout {
        let exercises: Vec<PrescribedExercise> = chromosome
            .genes()
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .map(|exercise| {
                let role = self.split.role_of(exercise.muscle_group_id);
                // groups outside the split are prescribed like accessories
                let prescription = self.prescriptions.lookup(
                    user.goal,
                    role.unwrap_or(ExerciseRole::Auxiliary),
                    user.experience_level,
                );
                PrescribedExercise {
                    exercise_id: exercise.id,
                    exercise_name: exercise.name.clone(),
                    muscle_group_id: exercise.muscle_group_id,
                    role,
                    sets: prescription.sets,
                    repetitions: prescription.repetitions.clone(),
                    rest_seconds: prescription.rest_seconds,
                }
            })
            .collect();

        let name = format!(
            "{} - {} (Genetic {})",
            self.split.name,
            user.goal.label(),
            generated_at.format("%Y-%m-%dT%H:%M")
        );
        let description = format!(
            "{} workout optimized by genetic search for {} at {} level. {}.",
            self.split.name,
            user.goal.label().to_lowercase(),
            user.experience_level,
            self.split.description
        );

        GeneratedWorkout {
            name,
            description,
            goal: user.goal,
            experience_level: user.experience_level,
            split_name: self.split.name.clone(),
            estimated_duration_minutes: self
                .durations
                .estimate(user.experience_level, exercises.len()),
            fitness,
            generated_at,
            exercises,
        }
    }
}
