// ABOUTME: Exercise catalog, seed workouts and history fixtures for integration tests
// ABOUTME: Twenty exercises across seven muscle groups keyed to the default split rotation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use chrono::{DateTime, Duration, TimeZone, Utc};
use liftgen::intelligence::GenerationRequest;
use liftgen::models::{
    Difficulty, Exercise, ExperienceLevel, Goal, HistoryEntry, MuscleGroup, MuscleGroupId,
    SeedWorkout, UserProfile,
};

pub const CHEST: MuscleGroupId = 1;
pub const BACK: MuscleGroupId = 2;
pub const SHOULDERS: MuscleGroupId = 3;
pub const BICEPS: MuscleGroupId = 4;
pub const TRICEPS: MuscleGroupId = 5;
pub const LEGS: MuscleGroupId = 6;
pub const CORE: MuscleGroupId = 7;
pub const GLUTES: MuscleGroupId = 8;

/// Reference time every fixture is dated against
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0).unwrap()
}

/// `days` before [`as_of`]
pub fn days_ago(days: i64) -> DateTime<Utc> {
    as_of() - Duration::days(days)
}

fn group(id: MuscleGroupId, name: &str) -> MuscleGroup {
    MuscleGroup {
        id,
        name: name.to_owned(),
    }
}

/// Twenty exercises: three each for chest, back, legs, shoulders, biceps and triceps, two for core
pub fn exercise_catalog() -> Vec<Exercise> {
    let chest = group(CHEST, "Chest");
    let back = group(BACK, "Back");
    let legs = group(LEGS, "Legs");
    let shoulders = group(SHOULDERS, "Shoulders");
    let biceps = group(BICEPS, "Biceps");
    let triceps = group(TRICEPS, "Triceps");
    let core = group(CORE, "Core");

    vec![
        Exercise::new(1, "Barbell Bench Press", &chest, Difficulty::Medium, true),
        Exercise::new(2, "Push-up", &chest, Difficulty::Easy, false),
        Exercise::new(3, "Dumbbell Fly", &chest, Difficulty::Medium, true),
        Exercise::new(4, "Lat Pulldown", &back, Difficulty::Medium, true),
        Exercise::new(5, "Bent-over Row", &back, Difficulty::Hard, true),
        Exercise::new(6, "Pull-up", &back, Difficulty::Hard, false),
        Exercise::new(7, "Back Squat", &legs, Difficulty::Medium, false),
        Exercise::new(8, "Leg Press", &legs, Difficulty::Easy, true),
        Exercise::new(9, "Walking Lunge", &legs, Difficulty::Medium, false),
        Exercise::new(10, "Overhead Press", &shoulders, Difficulty::Medium, true),
        Exercise::new(11, "Lateral Raise", &shoulders, Difficulty::Easy, true),
        Exercise::new(12, "Front Raise", &shoulders, Difficulty::Easy, true),
        Exercise::new(13, "Barbell Curl", &biceps, Difficulty::Easy, true),
        Exercise::new(14, "Hammer Curl", &biceps, Difficulty::Easy, true),
        Exercise::new(15, "Concentration Curl", &biceps, Difficulty::Medium, true),
        Exercise::new(16, "Skull Crusher", &triceps, Difficulty::Medium, true),
        Exercise::new(17, "Rope Pushdown", &triceps, Difficulty::Easy, true),
        Exercise::new(18, "Bench Dip", &triceps, Difficulty::Hard, false),
        Exercise::new(19, "Plank", &core, Difficulty::Easy, false),
        Exercise::new(20, "Crunch", &core, Difficulty::Easy, false),
    ]
}

/// Existing workouts: one full-body hypertrophy session and one beginner fat-loss circuit
pub fn seed_workouts() -> Vec<SeedWorkout> {
    vec![
        SeedWorkout {
            id: 1,
            name: "Hypertrophy A".to_owned(),
            goal: Goal::Hypertrophy,
            experience_level: ExperienceLevel::Intermediate,
            exercises: vec![1, 4, 7, 10, 13, 16, 19, 2],
        },
        SeedWorkout {
            id: 2,
            name: "Fat Loss Circuit".to_owned(),
            goal: Goal::WeightLoss,
            experience_level: ExperienceLevel::Beginner,
            exercises: vec![2, 6, 7, 19, 8, 11],
        },
    ]
}

pub fn user(goal: Goal, level: ExperienceLevel) -> UserProfile {
    UserProfile::new(goal, level, 78.0)
}

/// Request over the fixture catalog and seeds with no history
pub fn request(goal: Goal, level: ExperienceLevel) -> GenerationRequest {
    GenerationRequest {
        user: user(goal, level),
        catalog: exercise_catalog(),
        seed_workouts: seed_workouts(),
        history: Vec::new(),
        as_of: Some(as_of()),
    }
}

/// History entry `days` before [`as_of`] training `groups`
pub fn trained(days: i64, groups: &[MuscleGroupId]) -> HistoryEntry {
    HistoryEntry::new(days_ago(days), groups)
}
