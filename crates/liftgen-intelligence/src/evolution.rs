// ABOUTME: Generational evolution loop with elitism, tournament selection, crossover and mutation
// ABOUTME: Stops on convergence, the generation cap, or an optional wall-clock budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! # Evolution Engine
//!
//! Each generation is scored in parallel with rayon, then the next one is bred
//! sequentially from the caller's random number generator so that a seeded run is
//! reproducible. Operators never change chromosome length and never emit duplicates.

use crate::catalog::ExerciseCatalog;
use crate::config::GeneticAlgorithmConfig;
use crate::error::{RecommendationError, RecommendationResult};
use crate::fitness::FitnessEvaluator;
use crate::population::{Chromosome, ExercisePools};
use liftgen_core::models::{ExerciseId, ExerciseRole, UserProfile};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use tracing::{debug, info};

/// Why an evolution run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Best fitness stopped improving across the convergence window
    Converged,
    /// The generation cap was reached
    MaxGenerations,
    /// The wall-clock budget ran out
    TimeBudget,
}

/// Best and average fitness of one generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Zero-based generation number
    pub generation: usize,
    /// Highest fitness in the generation
    pub best_fitness: f64,
    /// Mean fitness of the generation
    pub average_fitness: f64,
}

/// Result of an evolution run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionOutcome {
    /// Best chromosome of the final population
    pub best: Chromosome,
    /// Fitness of `best`
    pub best_fitness: f64,
    /// Generations scored before stopping
    pub generations_run: usize,
    /// Why the run ended
    pub stop_reason: StopReason,
    /// Per-generation statistics in order
    pub history: Vec<GenerationStats>,
}

/// Runs the genetic search for one user and split
#[derive(Debug, Clone, Copy)]
pub struct EvolutionEngine<'a> {
    config: &'a GeneticAlgorithmConfig,
    evaluator: FitnessEvaluator<'a>,
    catalog: &'a ExerciseCatalog,
    pools: &'a ExercisePools,
}

impl<'a> EvolutionEngine<'a> {
    /// Create an engine
    #[must_use]
    pub const fn new(
        config: &'a GeneticAlgorithmConfig,
        evaluator: FitnessEvaluator<'a>,
        catalog: &'a ExerciseCatalog,
        pools: &'a ExercisePools,
    ) -> Self {
        Self {
            config,
            evaluator,
            catalog,
            pools,
        }
    }

    /// Evolve `population` and return the best individual found
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `population` holds no individuals
    pub fn evolve<R>(
        &self,
        mut population: Vec<Chromosome>,
        user: &UserProfile,
        rng: &mut R,
    ) -> RecommendationResult<EvolutionOutcome>
    where
        R: Rng + ?Sized,
    {
        if population.is_empty() {
            return Err(RecommendationError::EmptyPopulation);
        }

        let started = Instant::now();
        let budget = self.config.time_budget();
        let mut history: Vec<GenerationStats> = Vec::with_capacity(self.config.max_generations);
        let mut stop_reason = StopReason::MaxGenerations;

        for generation in 0..self.config.max_generations {
            let scores = self.score_all(&population, user);
            let stats = GenerationStats {
                generation,
                best_fitness: scores.iter().copied().fold(f64::MIN, f64::max),
                average_fitness: scores.iter().sum::<f64>() / scores.len() as f64,
            };
            debug!(
                generation,
                best = stats.best_fitness,
                average = stats.average_fitness,
                "Scored generation"
            );
            history.push(stats);

            if generation >= self.config.convergence_window
                && has_converged(
                    &history,
                    self.config.convergence_window,
                    self.config.convergence_min_improvement,
                )
            {
                stop_reason = StopReason::Converged;
                break;
            }
            if budget.is_some_and(|limit| started.elapsed() >= limit) {
                stop_reason = StopReason::TimeBudget;
                break;
            }

            population = self.next_generation(&population, &scores, rng);
        }

        let scores = self.score_all(&population, user);
        let (best_index, best_fitness) = best_of(&scores);
        let best = population.swap_remove(best_index);

        info!(
            generations = history.len(),
            best_fitness,
            stop_reason = ?stop_reason,
            "Evolution finished"
        );

        Ok(EvolutionOutcome {
            best,
            best_fitness,
            generations_run: history.len(),
            stop_reason,
            history,
        })
    }

    fn score_all(&self, population: &[Chromosome], user: &UserProfile) -> Vec<f64> {
        population
            .par_iter()
            .map(|chromosome| self.evaluator.score(chromosome, user))
            .collect()
    }

    /// Elites first, then offspring of tournament-selected parents
    fn next_generation<R>(
        &self,
        population: &[Chromosome],
        scores: &[f64],
        rng: &mut R,
    ) -> Vec<Chromosome>
    where
        R: Rng + ?Sized,
    {
        let size = population.len();
        let mut order: Vec<usize> = (0..size).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

        let mut next: Vec<Chromosome> = order
            .iter()
            .take(self.config.elitism_count)
            .map(|&i| population[i].clone())
            .collect();

        while next.len() < size {
            let first = &population[tournament(scores, self.config.tournament_size, rng)];
            let second = &population[tournament(scores, self.config.tournament_size, rng)];

            let mut child = if rng.gen_bool(self.config.crossover_rate) {
                crossover(first, second, self.catalog, rng)
            } else if rng.gen_bool(0.5) {
                first.clone()
            } else {
                second.clone()
            };
            if rng.gen_bool(self.config.mutation_rate) {
                child = mutate(
                    &child,
                    self.catalog,
                    self.pools,
                    self.config.max_point_mutations,
                    rng,
                );
            }
            next.push(child);
        }
        next
    }
}

/// Index and value of the first maximum score
fn best_of(scores: &[f64]) -> (usize, f64) {
    let mut best = (0, f64::MIN);
    for (i, &score) in scores.iter().enumerate() {
        if score > best.1 {
            best = (i, score);
        }
    }
    best
}

/// Whether the best fitness of the last `window` generations failed to beat the
/// `window` generations before it by at least `min_improvement`
fn has_converged(history: &[GenerationStats], window: usize, min_improvement: f64) -> bool {
    if history.len() <= window {
        return false;
    }
    let boundary = history.len() - window;
    let peak = |stats: &[GenerationStats]| {
        stats
            .iter()
            .map(|s| s.best_fitness)
            .fold(f64::MIN, f64::max)
    };
    let recent = peak(&history[boundary..]);
    let previous = peak(&history[boundary.saturating_sub(window)..boundary]);
    recent - previous < min_improvement
}

/// Index of the fittest of `size` distinct individuals drawn at random
///
/// Ties go to the individual drawn first.
pub fn tournament<R>(scores: &[f64], size: usize, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let amount = size.clamp(1, scores.len().max(1));
    let mut winner: Option<usize> = None;
    for candidate in index::sample(rng, scores.len(), amount.min(scores.len())) {
        let better = match winner {
            None => true,
            Some(current) => scores[candidate] > scores[current],
        };
        if better {
            winner = Some(candidate);
        }
    }
    winner.unwrap_or(0)
}

/// Two-point crossover with duplicate repair
///
/// The child takes `first[..p1]`, `second[p1..p2]`, `first[p2..]`, keeps the first
/// occurrence of every id, and refills to full length from the parents' unused genes
/// and then from unused catalog exercises.
pub fn crossover<R>(
    first: &Chromosome,
    second: &Chromosome,
    catalog: &ExerciseCatalog,
    rng: &mut R,
) -> Chromosome
where
    R: Rng + ?Sized,
{
    let length = first.len();
    if length < 2 || second.len() != length {
        return first.clone();
    }

    let p1 = if length <= 2 {
        1
    } else {
        rng.gen_range(1..length - 1)
    };
    let p2 = rng.gen_range(p1 + 1..=length);

    let spliced = first.genes()[..p1]
        .iter()
        .chain(&second.genes()[p1..p2])
        .chain(&first.genes()[p2..]);

    let mut seen: HashSet<ExerciseId> = HashSet::with_capacity(length);
    let mut genes: Vec<ExerciseId> = spliced.copied().filter(|id| seen.insert(*id)).collect();

    if genes.len() < length {
        let mut unused: Vec<ExerciseId> = first
            .genes()
            .iter()
            .chain(second.genes())
            .copied()
            .filter(|id| !seen.contains(id))
            .collect();
        unused.sort_unstable();
        unused.dedup();
        unused.shuffle(rng);
        for id in unused.into_iter().take(length - genes.len()) {
            seen.insert(id);
            genes.push(id);
        }
    }

    if genes.len() < length {
        let spare: Vec<ExerciseId> = catalog
            .iter()
            .map(|e| e.id)
            .filter(|id| !seen.contains(id))
            .collect();
        genes.extend(spare.choose_multiple(rng, length - genes.len()).copied());
    }

    Chromosome::new(genes)
}

/// Replace one to `max_points` random genes with unused exercises of the same role
///
/// A catalog exercise outside every pool is treated as auxiliary. An unresolved gene,
/// or a role with no unused exercise, is left unchanged.
pub fn mutate<R>(
    chromosome: &Chromosome,
    catalog: &ExerciseCatalog,
    pools: &ExercisePools,
    max_points: usize,
    rng: &mut R,
) -> Chromosome
where
    R: Rng + ?Sized,
{
    let mut genes = chromosome.genes().to_vec();
    if genes.is_empty() {
        return Chromosome::new(genes);
    }

    let points = rng.gen_range(1..=max_points.max(1));
    for _ in 0..points {
        let position = rng.gen_range(0..genes.len());
        if !catalog.contains(genes[position]) {
            continue;
        }
        let role = pools
            .role_of(genes[position])
            .unwrap_or(ExerciseRole::Auxiliary);
        let candidates: Vec<ExerciseId> = pools
            .pool(role)
            .iter()
            .copied()
            .filter(|id| !genes.contains(id))
            .collect();
        if let Some(&replacement) = candidates.choose(rng) {
            genes[position] = replacement;
        }
    }
    Chromosome::new(genes)
}
