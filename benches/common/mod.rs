// ABOUTME: Common benchmark utilities and fixtures for recommender performance testing
// ABOUTME: Provides deterministic catalog and request generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
