// ABOUTME: Reads JSON input files for the liftgen CLI
// ABOUTME: Maps IO and parse failures to AppError with the offending path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use liftgen::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Deserialize the JSON document at `path`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    debug!(path = %path.display(), "Reading input");
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_input(format!("Invalid JSON in {}: {e}", path.display())).with_source(e)
    })
}

/// Deserialize `path` when given, otherwise return the default value
pub fn read_optional<T: DeserializeOwned + Default>(path: Option<&Path>) -> AppResult<T> {
    path.map_or_else(|| Ok(T::default()), read_json)
}
