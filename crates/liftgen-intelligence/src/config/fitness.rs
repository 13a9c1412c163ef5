// ABOUTME: Fitness function weights for scoring candidate workouts
// ABOUTME: Split adherence, experience fit, goal bonuses, redundancy and invalid gene penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Weights of every term in the additive fitness function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    /// Reward per exercise hitting a primary group
    pub primary_per_exercise: f64,
    /// Exercises each primary group should receive
    pub primary_min_exercises: usize,
    /// Penalty for a primary group below its minimum
    pub primary_shortfall_penalty: f64,
    /// Reward per exercise hitting a secondary group
    pub secondary_per_exercise: f64,
    /// Exercises each secondary group should receive
    pub secondary_min_exercises: usize,
    /// Penalty for a secondary group below its minimum
    pub secondary_shortfall_penalty: f64,
    /// Reward per exercise hitting an auxiliary group
    pub auxiliary_per_exercise: f64,
    /// Experience fit for an exercise matching the user's level exactly
    pub experience_match: f64,
    /// Experience fit lost per level of difficulty mismatch
    pub experience_gap_penalty: f64,
    /// Weight loss: reward per compound (legs, back, chest) exercise
    pub weight_loss_compound_bonus: f64,
    /// Hypertrophy: reward per main muscle category represented
    pub hypertrophy_category_bonus: f64,
    /// Definition: reward per balanced compound/isolation pair
    pub definition_balance_bonus: f64,
    /// Conditioning: reward per distinct muscle group
    pub conditioning_group_bonus: f64,
    /// Conditioning: reward per exercise without equipment
    pub conditioning_bodyweight_bonus: f64,
    /// Rehabilitation: reward per easy exercise
    pub rehabilitation_easy_bonus: f64,
    /// Rehabilitation: reward per medium exercise
    pub rehabilitation_medium_bonus: f64,
    /// Exercises a single group may take before the redundancy penalty applies
    pub redundancy_limit: usize,
    /// Penalty per exercise above the redundancy limit
    pub redundancy_penalty: f64,
    /// Penalty per unresolved or repeated gene
    pub invalid_gene_penalty: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            primary_per_exercise: 20.0,
            primary_min_exercises: 2,
            primary_shortfall_penalty: 25.0,
            secondary_per_exercise: 15.0,
            secondary_min_exercises: 1,
            secondary_shortfall_penalty: 20.0,
            auxiliary_per_exercise: 8.0,
            experience_match: 12.0,
            experience_gap_penalty: 4.0,
            weight_loss_compound_bonus: 10.0,
            hypertrophy_category_bonus: 8.0,
            definition_balance_bonus: 8.0,
            conditioning_group_bonus: 6.0,
            conditioning_bodyweight_bonus: 6.0,
            rehabilitation_easy_bonus: 12.0,
            rehabilitation_medium_bonus: 6.0,
            redundancy_limit: 4,
            redundancy_penalty: 20.0,
            invalid_gene_penalty: 50.0,
        }
    }
}

impl FitnessWeights {
    /// Validate that every weight is a finite, non-negative number
    ///
    /// # Errors
    ///
    /// Returns an error if any weight is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            self.primary_per_exercise,
            self.primary_shortfall_penalty,
            self.secondary_per_exercise,
            self.secondary_shortfall_penalty,
            self.auxiliary_per_exercise,
            self.experience_match,
            self.experience_gap_penalty,
            self.weight_loss_compound_bonus,
            self.hypertrophy_category_bonus,
            self.definition_balance_bonus,
            self.conditioning_group_bonus,
            self.conditioning_bodyweight_bonus,
            self.rehabilitation_easy_bonus,
            self.rehabilitation_medium_bonus,
            self.redundancy_penalty,
            self.invalid_gene_penalty,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "fitness weights must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
