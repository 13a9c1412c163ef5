// ABOUTME: Core data models shared by the recommender and its hosts
// ABOUTME: Re-exports exercise, profile and workout types as a flat namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! # Data Models
//!
//! Reference data (exercises, muscle groups), user input (profile, seeds, history)
//! and the generated workout. All types are serde-serializable with snake_case enums
//! so hosts can pass them through JSON unchanged.

mod exercise;
mod profile;
mod workout;

pub use exercise::{Difficulty, Exercise, ExerciseId, MuscleCategory, MuscleGroup, MuscleGroupId};
pub use profile::{ExperienceLevel, Goal, UserProfile};
pub use workout::{
    ExerciseRole, GeneratedWorkout, HistoryEntry, HistoryExercise, PrescribedExercise,
    SeedWorkout, SplitSummary,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_round_trips_through_strings() {
        for goal in Goal::ALL {
            let parsed: Goal = goal.to_string().parse().unwrap();
            assert_eq!(parsed, goal);
        }
        assert_eq!("Weight Loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert!("bulking".parse::<Goal>().is_err());
    }

    #[test]
    fn test_experience_ordering_and_rank() {
        assert!(ExperienceLevel::Beginner < ExperienceLevel::Advanced);
        assert_eq!(ExperienceLevel::Intermediate.rank(), Difficulty::Medium.rank());
    }

    #[test]
    fn test_muscle_category_from_name() {
        assert_eq!(MuscleCategory::from_name("CHEST"), MuscleCategory::Chest);
        assert_eq!(MuscleCategory::from_name(" legs "), MuscleCategory::Legs);
        assert_eq!(MuscleCategory::from_name("Core"), MuscleCategory::Other);
        assert!(MuscleCategory::Back.is_compound());
        assert!(!MuscleCategory::Biceps.is_compound());
    }

    #[test]
    fn test_exercise_deserializes_from_catalog_json() {
        let json = r#"{
            "id": 7,
            "name": "Squat",
            "muscle_group_id": 3,
            "muscle_group_name": "Legs",
            "difficulty_level": "medium",
            "equipment_required": false
        }"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.difficulty_level, Difficulty::Medium);
        assert_eq!(exercise.category(), MuscleCategory::Legs);
    }
}
