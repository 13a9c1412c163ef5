// ABOUTME: Split selection configuration: which policy picks the next split and its windows
// ABOUTME: Defines SplitPolicy (rotation or recency score) and SplitSelectionConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use super::error::ConfigError;
use liftgen_core::constants::split_selection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy used to pick the next training split from history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Identify the last trained split and follow its rotation pointer,
    /// falling back to frequency balancing over the trailing window
    #[default]
    Rotation,
    /// Score every split by how recently its groups were trained
    RecencyScore,
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotation => write!(f, "rotation"),
            Self::RecencyScore => write!(f, "recency_score"),
        }
    }
}

impl FromStr for SplitPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "rotation" => Ok(Self::Rotation),
            "recency_score" | "recency" => Ok(Self::RecencyScore),
            other => Err(ConfigError::Parse(format!("Unknown split policy: {other}"))),
        }
    }
}

/// Split recommender settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitSelectionConfig {
    /// Policy used to choose the next split
    pub policy: SplitPolicy,
    /// Share of a split's primary and secondary groups the last workout must cover
    pub coverage_threshold: f64,
    /// Trailing window in days for balancing and recency scoring
    pub balance_window_days: i64,
}

impl Default for SplitSelectionConfig {
    fn default() -> Self {
        Self {
            policy: SplitPolicy::default(),
            coverage_threshold: split_selection::COVERAGE_THRESHOLD,
            balance_window_days: split_selection::BALANCE_WINDOW_DAYS,
        }
    }
}

impl SplitSelectionConfig {
    /// Validate thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if the coverage threshold is not a number in `(0, 1]` or the
    /// window is outside `1..=MAX_BALANCE_WINDOW_DAYS`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.coverage_threshold.is_finite()
            || self.coverage_threshold <= 0.0
            || self.coverage_threshold > 1.0
        {
            return Err(ConfigError::InvalidRange(
                "coverage_threshold must be in (0.0, 1.0]",
            ));
        }
        if !(1..=split_selection::MAX_BALANCE_WINDOW_DAYS).contains(&self.balance_window_days) {
            return Err(ConfigError::ValueOutOfRange(
                "balance_window_days must be between 1 and 3650",
            ));
        }
        Ok(())
    }
}
