// ABOUTME: Main library entry point for the liftgen workout recommender
// ABOUTME: Hosts logging setup and the recommendation service on top of the engine crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

#![deny(unsafe_code)]

//! # Liftgen
//!
//! Generates structured strength workouts with a genetic algorithm. A user's goal,
//! experience level and recent training history pick the muscle-group split to train
//! next; a population of candidate exercise lists is then evolved against a fitness
//! function that rewards split adherence, experience fit and goal-specific traits.
//!
//! ## Architecture
//!
//! - **`liftgen-core`**: error types, constants and domain models
//! - **`liftgen-intelligence`**: split rotation, population, fitness, evolution
//! - **services**: request-scoped recommendation API used by the `liftgen` binary
//! - **logging**: structured `tracing` setup shared by every binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftgen::errors::AppResult;
//! use liftgen::intelligence::GenerationRequest;
//! use liftgen::models::{ExperienceLevel, Goal, UserProfile};
//! use liftgen::services::RecommendationService;
//!
//! fn main() -> AppResult<()> {
//!     let service = RecommendationService::from_global();
//!     let request = GenerationRequest {
//!         user: UserProfile::new(Goal::Hypertrophy, ExperienceLevel::Intermediate, 80.0),
//!         catalog: Vec::new(),
//!         seed_workouts: Vec::new(),
//!         history: Vec::new(),
//!         as_of: None,
//!     };
//!     let response = service.recommend_seeded(&request, 7)?;
//!     println!("{}", response.report.workout.name);
//!     Ok(())
//! }
//! ```

/// Structured logging configuration
pub mod logging;

/// Request-scoped recommendation services
pub mod services;

pub use liftgen_core::{constants, errors, models};
pub use liftgen_intelligence as intelligence;
