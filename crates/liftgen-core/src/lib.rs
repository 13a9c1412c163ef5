// ABOUTME: Core types and constants for the liftgen genetic workout recommender
// ABOUTME: Foundation crate with error handling, domain models, and tuning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

#![deny(unsafe_code)]

//! # Liftgen Core
//!
//! Foundation crate providing shared types and constants for the liftgen workout
//! recommender. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default tuning values organized by domain
//! - **models**: Exercises, user profiles, history and generated workouts

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Exercise, `UserProfile`, `GeneratedWorkout`, etc.)
pub mod models;
