// ABOUTME: Re-exports command modules for the liftgen CLI
// ABOUTME: Provides workout recommendation and split rotation commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

pub mod recommend;
pub mod splits;
