// ABOUTME: User profile model consumed by every scoring decision
// ABOUTME: Defines the closed Goal and ExperienceLevel enums and the UserProfile record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Training goal selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Burn fat with high-volume compound work
    WeightLoss,
    /// Build muscle mass
    Hypertrophy,
    /// Improve muscle definition
    Definition,
    /// General conditioning, bodyweight friendly
    Conditioning,
    /// Low-intensity rehabilitation work
    Rehabilitation,
}

impl Goal {
    /// Every goal, in declaration order
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::Hypertrophy,
        Self::Definition,
        Self::Conditioning,
        Self::Rehabilitation,
    ];

    /// Human-readable label used in generated workout names
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::Hypertrophy => "Hypertrophy",
            Self::Definition => "Definition",
            Self::Conditioning => "Conditioning",
            Self::Rehabilitation => "Rehabilitation",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightLoss => write!(f, "weight_loss"),
            Self::Hypertrophy => write!(f, "hypertrophy"),
            Self::Definition => write!(f, "definition"),
            Self::Conditioning => write!(f, "conditioning"),
            Self::Rehabilitation => write!(f, "rehabilitation"),
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "weight_loss" => Ok(Self::WeightLoss),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "definition" => Ok(Self::Definition),
            "conditioning" => Ok(Self::Conditioning),
            "rehabilitation" => Ok(Self::Rehabilitation),
            _ => Err(format!("Unknown goal: {s}")),
        }
    }
}

/// Training experience, ordered from least to most experienced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Less than a year of consistent training
    Beginner,
    /// Comfortable with the main lifts
    Intermediate,
    /// Several years of structured training
    Advanced,
}

impl ExperienceLevel {
    /// Every level, in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Numeric rank compared against exercise difficulty (Beginner=1 .. Advanced=3)
    #[must_use]
    pub const fn rank(self) -> i32 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("Unknown experience level: {s}")),
        }
    }
}

/// User profile supplied by the host
///
/// Height and age are carried for parity with the stored user record; the
/// recommender itself only reads `goal` and `experience_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Training goal
    pub goal: Goal,
    /// Experience level
    pub experience_level: ExperienceLevel,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl UserProfile {
    /// Create a profile with the fields the recommender uses
    #[must_use]
    pub const fn new(goal: Goal, experience_level: ExperienceLevel, weight_kg: f64) -> Self {
        Self {
            goal,
            experience_level,
            weight_kg,
            height_cm: None,
            age: None,
        }
    }
}
