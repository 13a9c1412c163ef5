// ABOUTME: Benchmark fixtures generating exercise catalogs and generation requests
// ABOUTME: Deterministic data so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Benchmark fixtures generating exercise catalogs and generation requests.

use chrono::{DateTime, TimeZone, Utc};
use liftgen::intelligence::GenerationRequest;
use liftgen::models::{
    Difficulty, Exercise, ExperienceLevel, Goal, MuscleGroup, SeedWorkout, UserProfile,
};

/// Muscle groups of the default rotation
const GROUPS: [(u32, &str); 10] = [
    (1, "Chest"),
    (2, "Back"),
    (3, "Shoulders"),
    (4, "Biceps"),
    (5, "Triceps"),
    (6, "Legs"),
    (7, "Core"),
    (8, "Glutes"),
    (9, "Calves"),
    (10, "Forearms"),
];

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// 40 exercises, four per group - a small gym
    Small,
    /// 400 exercises - a full production catalog
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 40,
            Self::Large => 400,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// Fixed reference time for generated requests
#[must_use]
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Catalog spread round-robin over the ten muscle groups
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Exercise> {
    (0..size.count())
        .map(|index| {
            let (id, name) = GROUPS[index % GROUPS.len()];
            let group = MuscleGroup {
                id,
                name: name.to_owned(),
            };
            let difficulty = match index % 3 {
                0 => Difficulty::Easy,
                1 => Difficulty::Medium,
                _ => Difficulty::Hard,
            };
            Exercise::new(
                index as u32 + 1,
                format!("{name} Variation {index}"),
                &group,
                difficulty,
                index % 4 != 0,
            )
        })
        .collect()
}

/// Seed workouts covering every group once
#[must_use]
pub fn generate_seeds() -> Vec<SeedWorkout> {
    vec![SeedWorkout {
        id: 1,
        name: "Benchmark Full Body".to_owned(),
        goal: Goal::Hypertrophy,
        experience_level: ExperienceLevel::Intermediate,
        exercises: (1..=10).collect(),
    }]
}

/// Request for an intermediate user with no history
#[must_use]
pub fn generate_request(size: CatalogSize, goal: Goal) -> GenerationRequest {
    GenerationRequest {
        user: UserProfile::new(goal, ExperienceLevel::Intermediate, 80.0),
        catalog: generate_catalog(size),
        seed_workouts: generate_seeds(),
        history: Vec::new(),
        as_of: Some(reference_time()),
    }
}
