// ABOUTME: Declarative sets/repetitions/rest table keyed on goal, role and experience level
// ABOUTME: Rules are matched first-to-last with optional wildcards; hosts may prepend overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Prescription Table
//!
//! Each rule names a goal and optionally a role and an experience level. Lookup walks
//! the rules in order and returns the first match, so specific rules precede their
//! wildcard siblings. A table with no matching rule answers with `fallback`.

use super::error::ConfigError;
use liftgen_core::models::{ExerciseRole, ExperienceLevel, Goal};
use serde::{Deserialize, Serialize};
use std::iter;

/// Sets, repetitions and rest for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Working sets
    pub sets: u32,
    /// Comma-separated repetitions per set
    pub repetitions: String,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
}

impl Prescription {
    /// Create a prescription
    #[must_use]
    pub fn new(sets: u32, repetitions: &str, rest_seconds: u32) -> Self {
        Self {
            sets,
            repetitions: repetitions.to_owned(),
            rest_seconds,
        }
    }
}

/// One entry of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionRule {
    /// Goal this rule applies to
    pub goal: Goal,
    /// Role this rule applies to, any role when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ExerciseRole>,
    /// Level this rule applies to, any level when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    /// Prescription returned on match
    pub prescription: Prescription,
}

impl PrescriptionRule {
    fn matches(&self, goal: Goal, role: ExerciseRole, level: ExperienceLevel) -> bool {
        self.goal == goal
            && !self.role.is_some_and(|r| r != role)
            && !self.experience_level.is_some_and(|l| l != level)
    }
}

/// Ordered prescription rules with a fallback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionTable {
    /// Rules, most specific first
    pub rules: Vec<PrescriptionRule>,
    /// Answer when no rule matches
    pub fallback: Prescription,
}

fn rule(
    goal: Goal,
    role: Option<ExerciseRole>,
    experience_level: Option<ExperienceLevel>,
    prescription: Prescription,
) -> PrescriptionRule {
    PrescriptionRule {
        goal,
        role,
        experience_level,
        prescription,
    }
}

impl Default for PrescriptionTable {
    // Long function: the full default table written out as data
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        use ExerciseRole::{Auxiliary, Primary, Secondary};
        use ExperienceLevel::{Advanced, Beginner, Intermediate};

        let rules = vec![
            // Weight loss: high repetitions, short rest
            rule(
                Goal::WeightLoss,
                Some(Primary),
                Some(Beginner),
                Prescription::new(4, "15,12,12,10", 45),
            ),
            rule(
                Goal::WeightLoss,
                Some(Primary),
                None,
                Prescription::new(4, "18,15,12,10", 45),
            ),
            rule(
                Goal::WeightLoss,
                None,
                Some(Beginner),
                Prescription::new(3, "15,12,12", 45),
            ),
            rule(
                Goal::WeightLoss,
                None,
                None,
                Prescription::new(3, "15,12,10", 45),
            ),
            // Hypertrophy: pyramids on the primary groups
            rule(
                Goal::Hypertrophy,
                Some(Primary),
                Some(Beginner),
                Prescription::new(4, "12,10,8,8", 90),
            ),
            rule(
                Goal::Hypertrophy,
                Some(Primary),
                Some(Intermediate),
                Prescription::new(4, "12,10,8,6", 90),
            ),
            rule(
                Goal::Hypertrophy,
                Some(Primary),
                Some(Advanced),
                Prescription::new(4, "15,12,10,8", 90),
            ),
            rule(
                Goal::Hypertrophy,
                Some(Secondary),
                None,
                Prescription::new(3, "12,10,8", 90),
            ),
            rule(
                Goal::Hypertrophy,
                Some(Auxiliary),
                None,
                Prescription::new(2, "12,10,8", 90),
            ),
            // Definition
            rule(
                Goal::Definition,
                Some(Primary),
                Some(Advanced),
                Prescription::new(4, "15,12,10,8", 60),
            ),
            rule(
                Goal::Definition,
                Some(Primary),
                None,
                Prescription::new(4, "12,12,10,10", 60),
            ),
            rule(
                Goal::Definition,
                None,
                Some(Advanced),
                Prescription::new(3, "15,12,10,8", 60),
            ),
            rule(
                Goal::Definition,
                None,
                None,
                Prescription::new(3, "12,12,10,10", 60),
            ),
            // Conditioning
            rule(
                Goal::Conditioning,
                None,
                None,
                Prescription::new(3, "15,15,12", 45),
            ),
            // Rehabilitation
            rule(
                Goal::Rehabilitation,
                Some(Primary),
                None,
                Prescription::new(3, "12,10,8", 75),
            ),
            rule(
                Goal::Rehabilitation,
                None,
                None,
                Prescription::new(2, "12,10,8", 75),
            ),
        ];

        Self {
            rules,
            fallback: Prescription::new(3, "12,10,8", 60),
        }
    }
}

impl PrescriptionTable {
    /// Prescription for an exercise of `role` in a workout for `goal` at `level`
    #[must_use]
    pub fn lookup(&self, goal: Goal, role: ExerciseRole, level: ExperienceLevel) -> &Prescription {
        self.rules
            .iter()
            .find(|r| r.matches(goal, role, level))
            .map_or(&self.fallback, |r| &r.prescription)
    }

    /// Add a rule that takes precedence over every existing rule
    #[must_use]
    pub fn with_override(mut self, rule: PrescriptionRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// Validate that every prescription is usable
    ///
    /// # Errors
    ///
    /// Returns an error if a prescription has zero sets or no repetitions
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = self
            .rules
            .iter()
            .map(|r| &r.prescription)
            .chain(iter::once(&self.fallback));
        for prescription in all {
            if prescription.sets == 0 {
                return Err(ConfigError::ValueOutOfRange(
                    "prescription sets must be at least 1",
                ));
            }
            if prescription.repetitions.trim().is_empty() {
                return Err(ConfigError::MissingField("prescription repetitions"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypertrophy_advanced_primary() {
        let table = PrescriptionTable::default();
        let p = table.lookup(
            Goal::Hypertrophy,
            ExerciseRole::Primary,
            ExperienceLevel::Advanced,
        );
        assert_eq!(p.sets, 4);
        assert_eq!(p.repetitions, "15,12,10,8");
        assert_eq!(p.rest_seconds, 90);
    }

    #[test]
    fn test_weight_loss_beginner_non_primary() {
        let table = PrescriptionTable::default();
        let p = table.lookup(
            Goal::WeightLoss,
            ExerciseRole::Auxiliary,
            ExperienceLevel::Beginner,
        );
        assert_eq!((p.sets, p.repetitions.as_str()), (3, "15,12,12"));

        let p = table.lookup(
            Goal::WeightLoss,
            ExerciseRole::Secondary,
            ExperienceLevel::Advanced,
        );
        assert_eq!((p.sets, p.repetitions.as_str()), (3, "15,12,10"));
    }

    #[test]
    fn test_override_takes_precedence() {
        let table = PrescriptionTable::default().with_override(PrescriptionRule {
            goal: Goal::Conditioning,
            role: None,
            experience_level: Some(ExperienceLevel::Beginner),
            prescription: Prescription::new(2, "20,20", 30),
        });
        let p = table.lookup(
            Goal::Conditioning,
            ExerciseRole::Primary,
            ExperienceLevel::Beginner,
        );
        assert_eq!(p.rest_seconds, 30);
        let p = table.lookup(
            Goal::Conditioning,
            ExerciseRole::Primary,
            ExperienceLevel::Advanced,
        );
        assert_eq!(p.repetitions, "15,15,12");
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        let table = PrescriptionTable {
            rules: Vec::new(),
            ..PrescriptionTable::default()
        };
        let p = table.lookup(
            Goal::Definition,
            ExerciseRole::Primary,
            ExperienceLevel::Beginner,
        );
        assert_eq!(p, &Prescription::new(3, "12,10,8", 60));
    }
}
