// ABOUTME: Chooses the next training split from recent workout history
// ABOUTME: Rotation with frequency balancing by default, recency scoring as an alternative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! # Split Recommender
//!
//! History arrives most-recent-first. Selection is a pure function of the history,
//! the reference time and the registry, so the same inputs always yield the same split.
//! Failures never surface to callers: the recommender logs and answers split 0.

use crate::config::{SplitPolicy, SplitSelectionConfig};
use crate::error::{RecommendationError, RecommendationResult};
use crate::splits::{SplitRegistry, TrainingSplit};
use chrono::{DateTime, TimeDelta, Utc};
use liftgen_core::models::{HistoryEntry, MuscleGroupId};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Split recommender bound to a registry and selection settings
#[derive(Debug, Clone, Copy)]
pub struct SplitRecommender<'a> {
    registry: &'a SplitRegistry,
    config: &'a SplitSelectionConfig,
}

impl<'a> SplitRecommender<'a> {
    /// Create a recommender
    #[must_use]
    pub const fn new(registry: &'a SplitRegistry, config: &'a SplitSelectionConfig) -> Self {
        Self { registry, config }
    }

    /// Index of the split to train next
    ///
    /// `history` is ordered most-recent-first and `as_of` anchors the trailing window.
    #[must_use]
    pub fn recommend(&self, history: &[HistoryEntry], as_of: DateTime<Utc>) -> usize {
        match self.try_recommend(history, as_of) {
            Ok(index) => index,
            Err(e) => {
                warn!("Split recommendation failed: {}, falling back to split 0", e);
                0
            }
        }
    }

    fn try_recommend(
        &self,
        history: &[HistoryEntry],
        as_of: DateTime<Utc>,
    ) -> RecommendationResult<usize> {
        if self.registry.is_empty() {
            return Err(RecommendationError::InvalidRegistry(
                "no splits registered".to_owned(),
            ));
        }
        if history.is_empty() {
            debug!("No workout history, starting rotation at split 0");
            return Ok(0);
        }

        match self.config.policy {
            SplitPolicy::Rotation => self.rotation(history, as_of),
            SplitPolicy::RecencyScore => self.recency_score(history, as_of),
        }
    }

    fn rotation(
        &self,
        history: &[HistoryEntry],
        as_of: DateTime<Utc>,
    ) -> RecommendationResult<usize> {
        if let Some(last) = history.first().and_then(|entry| self.last_trained_split(entry)) {
            let next = self.registry.require(last.next_split)?;
            debug!(
                last_split = %last.name,
                next_split = %next.name,
                "Following split rotation"
            );
            return Ok(next.index);
        }
        self.balance(history, as_of)
    }

    /// First split whose primary and secondary groups are covered by the entry
    fn last_trained_split(&self, entry: &HistoryEntry) -> Option<&'a TrainingSplit> {
        let trained: HashSet<MuscleGroupId> = entry.muscle_groups().collect();
        self.registry.iter().find(|split| {
            let focus = split.focus_groups();
            if focus.is_empty() {
                return false;
            }
            let covered = focus.iter().filter(|g| trained.contains(g)).count();
            covered as f64 / focus.len() as f64 >= self.config.coverage_threshold
        })
    }

    /// Split whose focus groups were trained least often within the window
    fn balance(
        &self,
        history: &[HistoryEntry],
        as_of: DateTime<Utc>,
    ) -> RecommendationResult<usize> {
        let mut frequency: HashMap<MuscleGroupId, usize> = HashMap::new();
        for entry in within_window(history, as_of, self.config.balance_window_days)? {
            for group in entry.muscle_groups() {
                *frequency.entry(group).or_insert(0) += 1;
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for split in self.registry.iter() {
            let focus = split.focus_groups();
            let average = if focus.is_empty() {
                0.0
            } else {
                let total: usize = focus
                    .iter()
                    .map(|g| frequency.get(g).copied().unwrap_or(0))
                    .sum();
                total as f64 / focus.len() as f64
            };
            let lower = match best {
                None => true,
                Some((_, lowest)) => average < lowest,
            };
            if lower {
                best = Some((split.index, average));
            }
        }

        let (index, average) = best.ok_or_else(|| {
            RecommendationError::InvalidRegistry("no splits registered".to_owned())
        })?;
        debug!(split = index, average, "Balancing toward least-trained split");
        Ok(index)
    }

    /// Split with the highest freshness score over the window
    fn recency_score(
        &self,
        history: &[HistoryEntry],
        as_of: DateTime<Utc>,
    ) -> RecommendationResult<usize> {
        let recent: HashSet<MuscleGroupId> =
            within_window(history, as_of, self.config.balance_window_days)?
                .flat_map(HistoryEntry::muscle_groups)
                .collect();

        let score = |split: &TrainingSplit| -> i32 {
            let primary: i32 = split
                .primary_groups
                .iter()
                .map(|g| if recent.contains(g) { -10 } else { 5 })
                .sum();
            let secondary: i32 = split
                .secondary_groups
                .iter()
                .map(|g| if recent.contains(g) { -5 } else { 3 })
                .sum();
            primary + secondary
        };

        let mut best: Option<(usize, i32)> = None;
        for split in self.registry.iter() {
            let value = score(split);
            let higher = match best {
                None => true,
                Some((_, top)) => value > top,
            };
            if higher {
                best = Some((split.index, value));
            }
        }
        Ok(best.map_or(0, |(index, _)| index))
    }

    /// Classify a completed workout by the muscle groups it trained
    ///
    /// Scores `+3` per matching primary group and `+2` per matching secondary group;
    /// the first best split wins and a workout matching nothing maps to split 0.
    #[must_use]
    pub fn identify_split(&self, trained: &[MuscleGroupId]) -> usize {
        let trained: HashSet<MuscleGroupId> = trained.iter().copied().collect();
        let mut best = (0, 0);
        for split in self.registry.iter() {
            let primary = split
                .primary_groups
                .iter()
                .filter(|g| trained.contains(g))
                .count();
            let secondary = split
                .secondary_groups
                .iter()
                .filter(|g| trained.contains(g))
                .count();
            let score = primary * 3 + secondary * 2;
            if score > best.1 {
                best = (split.index, score);
            }
        }
        best.0
    }
}

/// Entries dated within `days` before `as_of`, inclusive on both ends
///
/// Fails when the window start falls outside the representable date range.
fn within_window(
    history: &[HistoryEntry],
    as_of: DateTime<Utc>,
    days: i64,
) -> RecommendationResult<impl Iterator<Item = &HistoryEntry>> {
    let cutoff = TimeDelta::try_days(days)
        .and_then(|window| as_of.checked_sub_signed(window))
        .ok_or(RecommendationError::HistoryWindow { days, as_of })?;
    Ok(history
        .iter()
        .filter(move |entry| entry.workout_date >= cutoff && entry.workout_date <= as_of))
}
