// ABOUTME: Helper modules for the liftgen CLI
// ABOUTME: JSON file input and stdout output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

pub mod display;
pub mod input;
