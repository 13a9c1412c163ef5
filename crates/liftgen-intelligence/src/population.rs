// ABOUTME: Chromosome encoding and initial population construction for the workout search
// ABOUTME: Partitions the catalog into split role pools and fills chromosomes proportionally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! # Population Codec
//!
//! A chromosome is an ordered list of distinct exercise ids. The codec builds the
//! initial population: up to half of it from the user's existing workouts (seeds),
//! the remainder from scratch, always filling each chromosome toward the split's
//! primary/secondary/auxiliary proportions.

use crate::catalog::ExerciseCatalog;
use crate::config::GeneticAlgorithmConfig;
use crate::error::{RecommendationError, RecommendationResult};
use crate::splits::TrainingSplit;
use liftgen_core::models::{ExerciseId, ExerciseRole, SeedWorkout, UserProfile};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Ordered sequence of exercise ids forming one candidate workout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chromosome {
    genes: Vec<ExerciseId>,
}

impl Chromosome {
    /// Wrap a list of exercise ids
    #[must_use]
    pub const fn new(genes: Vec<ExerciseId>) -> Self {
        Self { genes }
    }

    /// Exercise ids in order
    #[must_use]
    pub fn genes(&self) -> &[ExerciseId] {
        &self.genes
    }

    /// Number of genes
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome holds no genes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether `id` is one of the genes
    #[must_use]
    pub fn contains(&self, id: ExerciseId) -> bool {
        self.genes.contains(&id)
    }

    /// Whether any id appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.genes.len());
        !self.genes.iter().all(|id| seen.insert(*id))
    }
}

impl From<Vec<ExerciseId>> for Chromosome {
    fn from(genes: Vec<ExerciseId>) -> Self {
        Self::new(genes)
    }
}

/// Catalog exercises partitioned by their muscle group's role in a split
#[derive(Debug, Clone, Default)]
pub struct ExercisePools {
    primary: Vec<ExerciseId>,
    secondary: Vec<ExerciseId>,
    auxiliary: Vec<ExerciseId>,
    roles: HashMap<ExerciseId, ExerciseRole>,
}

impl ExercisePools {
    /// Partition `catalog` by `split`, keeping catalog order within each pool
    ///
    /// With `split_aware` off every exercise lands in the primary pool.
    #[must_use]
    pub fn build(catalog: &ExerciseCatalog, split: &TrainingSplit, split_aware: bool) -> Self {
        let mut pools = Self::default();
        for exercise in catalog {
            let role = if split_aware {
                split.role_of(exercise.muscle_group_id)
            } else {
                Some(ExerciseRole::Primary)
            };
            let Some(role) = role else { continue };
            match role {
                ExerciseRole::Primary => pools.primary.push(exercise.id),
                ExerciseRole::Secondary => pools.secondary.push(exercise.id),
                ExerciseRole::Auxiliary => pools.auxiliary.push(exercise.id),
            }
            pools.roles.insert(exercise.id, role);
        }
        pools
    }

    /// Exercises in the pool for `role`
    #[must_use]
    pub fn pool(&self, role: ExerciseRole) -> &[ExerciseId] {
        match role {
            ExerciseRole::Primary => &self.primary,
            ExerciseRole::Secondary => &self.secondary,
            ExerciseRole::Auxiliary => &self.auxiliary,
        }
    }

    /// Pool an exercise was placed in, `None` when it is outside the split
    #[must_use]
    pub fn role_of(&self, id: ExerciseId) -> Option<ExerciseRole> {
        self.roles.get(&id).copied()
    }

    /// Every pooled exercise: primary, then secondary, then auxiliary
    pub fn union(&self) -> impl Iterator<Item = ExerciseId> + '_ {
        self.primary
            .iter()
            .chain(&self.secondary)
            .chain(&self.auxiliary)
            .copied()
    }

    /// Number of distinct pooled exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no exercise belongs to the split
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Builds and completes chromosomes for one split
#[derive(Debug)]
pub struct PopulationCodec<'a> {
    catalog: &'a ExerciseCatalog,
    split: &'a TrainingSplit,
    config: &'a GeneticAlgorithmConfig,
    pools: ExercisePools,
}

impl<'a> PopulationCodec<'a> {
    /// Create a codec, partitioning the catalog once
    #[must_use]
    pub fn new(
        catalog: &'a ExerciseCatalog,
        split: &'a TrainingSplit,
        config: &'a GeneticAlgorithmConfig,
    ) -> Self {
        let pools = ExercisePools::build(catalog, split, config.split_aware);
        Self {
            catalog,
            split,
            config,
            pools,
        }
    }

    /// Role pools for the split
    #[must_use]
    pub const fn pools(&self) -> &ExercisePools {
        &self.pools
    }

    /// Catalog the codec draws from
    #[must_use]
    pub const fn catalog(&self) -> &'a ExerciseCatalog {
        self.catalog
    }

    /// Build `population_size` chromosomes of `length` genes
    ///
    /// Seeds are existing workouts sharing the user's goal or experience level; they
    /// fill at most `seed_fraction` of the population (rounded up).
    ///
    /// # Errors
    ///
    /// Returns `InsufficientExercises` if the split's pools hold fewer than `length`
    /// distinct exercises, or if an individual cannot be completed within
    /// `max_fill_attempts`
    pub fn initialize_population<R>(
        &self,
        length: usize,
        seeds: &[SeedWorkout],
        user: &UserProfile,
        rng: &mut R,
    ) -> RecommendationResult<Vec<Chromosome>>
    where
        R: Rng + ?Sized,
    {
        let available = self.pools.len();
        if available < length {
            return Err(self.insufficient(length, available));
        }

        let size = self.config.population_size;
        let seed_target = self.config.seed_target();
        let mut population = Vec::with_capacity(size);

        let relevant = seeds.iter().filter(|seed| {
            seed.goal == user.goal || seed.experience_level == user.experience_level
        });
        for seed in relevant {
            if population.len() >= seed_target {
                break;
            }
            let genes = self.seed_genes(seed, length);
            let genes = self.complete(genes, length, rng);
            if genes.len() == length {
                population.push(Chromosome::new(genes));
            }
        }
        let seeded = population.len();

        while population.len() < size {
            population.push(self.random_individual(length, rng)?);
        }

        debug!(
            split = %self.split.name,
            size,
            seeded,
            length,
            "Initialized population"
        );
        Ok(population)
    }

    /// Resolvable, in-split, deduplicated exercises of a seed workout, truncated to `length`
    fn seed_genes(&self, seed: &SeedWorkout, length: usize) -> Vec<ExerciseId> {
        let mut seen = HashSet::new();
        seed.exercises
            .iter()
            .copied()
            .filter(|&id| self.catalog.contains(id) && self.pools.role_of(id).is_some())
            .filter(|&id| seen.insert(id))
            .take(length)
            .collect()
    }

    fn random_individual<R>(&self, length: usize, rng: &mut R) -> RecommendationResult<Chromosome>
    where
        R: Rng + ?Sized,
    {
        for _ in 0..self.config.max_fill_attempts {
            let genes = self.complete(Vec::with_capacity(length), length, rng);
            if genes.len() == length {
                return Ok(Chromosome::new(genes));
            }
        }
        Err(self.insufficient(length, self.pools.len()))
    }

    /// Fill `genes` toward the split proportions, then from the union of pools
    ///
    /// Counts include genes already present; each slot is drawn uniformly without
    /// replacement from the role pool minus present genes. The result is at most
    /// `length` long and shorter only when the pools are exhausted.
    pub fn complete<R>(&self, mut genes: Vec<ExerciseId>, length: usize, rng: &mut R) -> Vec<ExerciseId>
    where
        R: Rng + ?Sized,
    {
        let primary_target = (length as f64 * self.config.primary_ratio).ceil() as usize;
        let secondary_target = (length as f64 * self.config.secondary_ratio).ceil() as usize;
        let auxiliary_target = length.saturating_sub(primary_target + secondary_target);

        for (role, target) in [
            (ExerciseRole::Primary, primary_target),
            (ExerciseRole::Secondary, secondary_target),
            (ExerciseRole::Auxiliary, auxiliary_target),
        ] {
            let present = genes
                .iter()
                .filter(|&&id| self.pools.role_of(id) == Some(role))
                .count();
            let wanted = target
                .saturating_sub(present)
                .min(length.saturating_sub(genes.len()));
            if wanted == 0 {
                continue;
            }
            let candidates: Vec<ExerciseId> = self
                .pools
                .pool(role)
                .iter()
                .copied()
                .filter(|id| !genes.contains(id))
                .collect();
            genes.extend(candidates.choose_multiple(rng, wanted).copied());
        }

        if genes.len() < length {
            let candidates: Vec<ExerciseId> =
                self.pools.union().filter(|id| !genes.contains(id)).collect();
            let missing = length - genes.len();
            genes.extend(candidates.choose_multiple(rng, missing).copied());
        }

        genes
    }

    fn insufficient(&self, required: usize, available: usize) -> RecommendationError {
        RecommendationError::InsufficientExercises {
            split: self.split.name.clone(),
            required,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseCatalog;
    use crate::splits::SplitRegistry;
    use liftgen_core::models::{Difficulty, Exercise, MuscleGroup};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> ExerciseCatalog {
        let groups = [(1, "Chest"), (5, "Biceps"), (3, "Legs"), (9, "Calves")];
        let mut exercises = Vec::new();
        let mut id = 1;
        for (group_id, name) in groups {
            let group = MuscleGroup {
                id: group_id,
                name: name.to_owned(),
            };
            for _ in 0..3 {
                exercises.push(Exercise::new(
                    id,
                    format!("{name} {id}"),
                    &group,
                    Difficulty::Medium,
                    true,
                ));
                id += 1;
            }
        }
        ExerciseCatalog::new(exercises).unwrap()
    }

    #[test]
    fn test_pools_follow_split_roles() {
        let catalog = catalog();
        let registry = SplitRegistry::default_rotation();
        let split = registry.get(0).unwrap();

        let pools = ExercisePools::build(&catalog, split, true);
        assert_eq!(pools.pool(ExerciseRole::Primary), &[1, 2, 3]);
        assert_eq!(pools.pool(ExerciseRole::Secondary), &[4, 5, 6]);
        assert_eq!(pools.pool(ExerciseRole::Auxiliary), &[7, 8, 9]);
        assert_eq!(pools.role_of(10), None);
        assert_eq!(pools.len(), 9);

        let flat = ExercisePools::build(&catalog, split, false);
        assert_eq!(flat.pool(ExerciseRole::Primary).len(), 12);
        assert!(flat.pool(ExerciseRole::Auxiliary).is_empty());
    }

    #[test]
    fn test_complete_respects_proportions() {
        let catalog = catalog();
        let registry = SplitRegistry::default_rotation();
        let split = registry.get(0).unwrap();
        let config = GeneticAlgorithmConfig::default();
        let codec = PopulationCodec::new(&catalog, split, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        // length 5: primary ceil(3.0) = 3, secondary ceil(1.5) = 2, auxiliary 0
        let genes = codec.complete(Vec::new(), 5, &mut rng);
        let chromosome = Chromosome::new(genes);
        assert_eq!(chromosome.len(), 5);
        assert!(!chromosome.has_duplicates());
        let primary = chromosome
            .genes()
            .iter()
            .filter(|&&id| codec.pools().role_of(id) == Some(ExerciseRole::Primary))
            .count();
        assert_eq!(primary, 3);
    }

    #[test]
    fn test_complete_spills_into_union() {
        let catalog = catalog();
        let registry = SplitRegistry::default_rotation();
        let split = registry.get(0).unwrap();
        let config = GeneticAlgorithmConfig::default();
        let codec = PopulationCodec::new(&catalog, split, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        // primary wants ceil(5.4) = 6 but only 3 exist; the rest spills over
        let genes = codec.complete(vec![2], 9, &mut rng);
        assert_eq!(genes.len(), 9);
        assert_eq!(genes[0], 2);
        assert!(!Chromosome::new(genes).has_duplicates());
    }
}
