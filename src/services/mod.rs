// ABOUTME: Service layer hosts call to obtain workout recommendations
// ABOUTME: Transport-agnostic: reusable from the CLI, an HTTP handler, or a job runner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Domain service layer
//!
//! Services wrap the recommendation pipeline with request identifiers, structured
//! logging and the workspace error type, so every entry point behaves the same way.

/// Genetic and template workout recommendation
pub mod recommendation;

pub use recommendation::{RecommendationResponse, RecommendationService};
