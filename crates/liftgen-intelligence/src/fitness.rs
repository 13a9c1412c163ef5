// ABOUTME: Multi-term fitness function scoring a chromosome for a user and split
// ABOUTME: Split adherence, experience fit, goal bonus, redundancy and invalid gene penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! # Fitness Evaluator
//!
//! The score is additive and floored at zero. Genes that do not resolve in the
//! catalog, and repeated occurrences of a gene already seen, contribute nothing
//! except a flat penalty each.

use crate::catalog::ExerciseCatalog;
use crate::config::FitnessWeights;
use crate::population::Chromosome;
use crate::splits::TrainingSplit;
use liftgen_core::models::{
    Difficulty, Exercise, ExerciseId, Goal, MuscleCategory, MuscleGroupId, UserProfile,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Per-term contributions to a fitness score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    /// Rewards and shortfall penalties for hitting the split's groups
    pub split_adherence: f64,
    /// Match between exercise difficulty and user experience
    pub experience_fit: f64,
    /// Goal-specific bonus
    pub goal_bonus: f64,
    /// Penalty for overloading a single muscle group (non-positive)
    pub redundancy_penalty: f64,
    /// Penalty for unresolved and repeated genes (non-positive)
    pub invalid_penalty: f64,
    /// Sum of the terms, floored at zero
    pub total: f64,
}

/// Scores chromosomes against one catalog and split
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a ExerciseCatalog,
    split: &'a TrainingSplit,
    weights: &'a FitnessWeights,
}

impl<'a> FitnessEvaluator<'a> {
    /// Create an evaluator
    #[must_use]
    pub const fn new(
        catalog: &'a ExerciseCatalog,
        split: &'a TrainingSplit,
        weights: &'a FitnessWeights,
    ) -> Self {
        Self {
            catalog,
            split,
            weights,
        }
    }

    /// Fitness of `chromosome` for `user`, never negative
    #[must_use]
    pub fn score(&self, chromosome: &Chromosome, user: &UserProfile) -> f64 {
        self.breakdown(chromosome, user).total
    }

    /// Fitness of `chromosome` with every term reported separately
    #[must_use]
    pub fn breakdown(&self, chromosome: &Chromosome, user: &UserProfile) -> FitnessBreakdown {
        let (exercises, invalid) = self.resolve(chromosome.genes());
        if exercises.is_empty() {
            return FitnessBreakdown {
                invalid_penalty: -(invalid as f64) * self.weights.invalid_gene_penalty,
                ..FitnessBreakdown::default()
            };
        }

        let mut per_group: BTreeMap<MuscleGroupId, usize> = BTreeMap::new();
        for exercise in &exercises {
            *per_group.entry(exercise.muscle_group_id).or_insert(0) += 1;
        }

        let split_adherence = self.split_adherence(&per_group);
        let experience_fit = self.experience_fit(&exercises, user);
        let goal_bonus = self.goal_bonus(&exercises, &per_group, user.goal);
        let redundancy_penalty = -self.redundancy(&per_group);
        let invalid_penalty = -(invalid as f64) * self.weights.invalid_gene_penalty;

        let sum = split_adherence + experience_fit + goal_bonus + redundancy_penalty + invalid_penalty;
        FitnessBreakdown {
            split_adherence,
            experience_fit,
            goal_bonus,
            redundancy_penalty,
            invalid_penalty,
            total: sum.max(0.0),
        }
    }

    /// Resolved exercises (first occurrence of each id) and the count of invalid genes
    fn resolve(&self, genes: &[ExerciseId]) -> (Vec<&'a Exercise>, usize) {
        let mut seen = HashSet::with_capacity(genes.len());
        let mut exercises = Vec::with_capacity(genes.len());
        let mut invalid = 0;
        for &id in genes {
            match self.catalog.get(id) {
                Some(exercise) if seen.insert(id) => exercises.push(exercise),
                _ => invalid += 1,
            }
        }
        (exercises, invalid)
    }

    fn split_adherence(&self, per_group: &BTreeMap<MuscleGroupId, usize>) -> f64 {
        let w = self.weights;
        let count = |group: &MuscleGroupId| per_group.get(group).copied().unwrap_or(0);
        let mut score = 0.0;

        for group in &self.split.primary_groups {
            let n = count(group);
            score += n as f64 * w.primary_per_exercise;
            if n < w.primary_min_exercises {
                score -= w.primary_shortfall_penalty;
            }
        }
        for group in &self.split.secondary_groups {
            let n = count(group);
            score += n as f64 * w.secondary_per_exercise;
            if n < w.secondary_min_exercises {
                score -= w.secondary_shortfall_penalty;
            }
        }
        for group in &self.split.auxiliary_groups {
            score += count(group) as f64 * w.auxiliary_per_exercise;
        }
        score
    }

    fn experience_fit(&self, exercises: &[&Exercise], user: &UserProfile) -> f64 {
        let level = user.experience_level.rank();
        exercises
            .iter()
            .map(|e| {
                let gap = f64::from((e.difficulty_level.rank() - level).abs());
                self.weights.experience_match - self.weights.experience_gap_penalty * gap
            })
            .sum()
    }

    fn goal_bonus(
        &self,
        exercises: &[&Exercise],
        per_group: &BTreeMap<MuscleGroupId, usize>,
        goal: Goal,
    ) -> f64 {
        let w = self.weights;
        match goal {
            Goal::WeightLoss => {
                let compound = exercises.iter().filter(|e| e.category().is_compound()).count();
                compound as f64 * w.weight_loss_compound_bonus
            }
            Goal::Hypertrophy => {
                let present: HashSet<MuscleCategory> =
                    exercises.iter().map(|e| e.category()).collect();
                let represented = MuscleCategory::MAIN
                    .iter()
                    .filter(|c| present.contains(c))
                    .count();
                represented as f64 * w.hypertrophy_category_bonus
            }
            Goal::Definition => {
                let compound = exercises.iter().filter(|e| e.category().is_compound()).count();
                let isolated = exercises.len() - compound;
                compound.min(isolated) as f64 * w.definition_balance_bonus
            }
            Goal::Conditioning => {
                let bodyweight = exercises.iter().filter(|e| !e.equipment_required).count();
                per_group.len() as f64 * w.conditioning_group_bonus
                    + bodyweight as f64 * w.conditioning_bodyweight_bonus
            }
            Goal::Rehabilitation => exercises
                .iter()
                .map(|e| match e.difficulty_level {
                    Difficulty::Easy => w.rehabilitation_easy_bonus,
                    Difficulty::Medium => w.rehabilitation_medium_bonus,
                    Difficulty::Hard => 0.0,
                })
                .sum(),
        }
    }

    fn redundancy(&self, per_group: &BTreeMap<MuscleGroupId, usize>) -> f64 {
        per_group
            .values()
            .filter(|&&n| n > self.weights.redundancy_limit)
            .map(|&n| (n - self.weights.redundancy_limit) as f64 * self.weights.redundancy_penalty)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splits::SplitRegistry;
    use liftgen_core::models::{ExperienceLevel, MuscleGroup};

    fn exercise(id: ExerciseId, group: (MuscleGroupId, &str), difficulty: Difficulty) -> Exercise {
        let group = MuscleGroup {
            id: group.0,
            name: group.1.to_owned(),
        };
        Exercise::new(id, format!("Exercise {id}"), &group, difficulty, true)
    }

    fn catalog() -> ExerciseCatalog {
        ExerciseCatalog::new(vec![
            exercise(1, (1, "Chest"), Difficulty::Medium),
            exercise(2, (1, "Chest"), Difficulty::Medium),
            exercise(3, (5, "Biceps"), Difficulty::Medium),
            exercise(4, (7, "Core"), Difficulty::Medium),
            exercise(5, (2, "Back"), Difficulty::Hard),
        ])
        .unwrap()
    }

    #[test]
    fn test_breakdown_terms() {
        let catalog = catalog();
        let registry = SplitRegistry::default_rotation();
        let split = registry.get(0).unwrap();
        let weights = FitnessWeights::default();
        let evaluator = FitnessEvaluator::new(&catalog, split, &weights);
        let user = UserProfile::new(Goal::Rehabilitation, ExperienceLevel::Intermediate, 70.0);

        let b = evaluator.breakdown(&Chromosome::new(vec![1, 2, 3, 4]), &user);
        // primary 2*20, secondary 1*15, auxiliary (group 7) 1*8
        assert!((b.split_adherence - 63.0).abs() < f64::EPSILON);
        assert!((b.experience_fit - 48.0).abs() < f64::EPSILON);
        assert!((b.goal_bonus - 24.0).abs() < f64::EPSILON);
        assert!((b.total - 135.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duplicates_and_unknown_ids_penalized() {
        let catalog = catalog();
        let registry = SplitRegistry::default_rotation();
        let split = registry.get(0).unwrap();
        let weights = FitnessWeights::default();
        let evaluator = FitnessEvaluator::new(&catalog, split, &weights);
        let user = UserProfile::new(Goal::Hypertrophy, ExperienceLevel::Beginner, 70.0);

        let b = evaluator.breakdown(&Chromosome::new(vec![1, 1, 99]), &user);
        assert!((b.invalid_penalty + 100.0).abs() < f64::EPSILON);
        assert!(b.total >= 0.0);

        let empty = evaluator.score(&Chromosome::default(), &user);
        assert!(empty.abs() < f64::EPSILON);
    }
}
