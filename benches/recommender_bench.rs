// ABOUTME: Criterion benchmarks for the genetic workout recommender
// ABOUTME: Measures fitness evaluation, population setup, evolution and batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Criterion benchmarks for the genetic workout recommender.
//!
//! Run one group with `cargo bench --bench recommender_bench -- "evolution"`.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_catalog, generate_request, generate_seeds, CatalogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftgen::intelligence::config::{FitnessWeights, GeneticAlgorithmConfig};
use liftgen::intelligence::{
    EvolutionEngine, ExerciseCatalog, FitnessEvaluator, PopulationCodec, RecommenderConfig,
    SplitRegistry,
};
use liftgen::models::{ExperienceLevel, Goal, UserProfile};
use liftgen::services::RecommendationService;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

const SIZES: [CatalogSize; 2] = [CatalogSize::Small, CatalogSize::Large];

/// Chromosome length for an intermediate user
const LENGTH: usize = 8;

fn bench_user() -> UserProfile {
    UserProfile::new(Goal::Hypertrophy, ExperienceLevel::Intermediate, 80.0)
}

fn bench_fitness_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness_evaluation");
    let registry = SplitRegistry::default_rotation();
    let Some(split) = registry.get(0) else {
        return;
    };
    let config = GeneticAlgorithmConfig::default();
    let weights = FitnessWeights::default();
    let user = bench_user();

    for size in SIZES {
        let Ok(catalog) = ExerciseCatalog::new(generate_catalog(size)) else {
            continue;
        };
        let codec = PopulationCodec::new(&catalog, split, &config);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let Ok(population) =
            codec.initialize_population(LENGTH, &generate_seeds(), &user, &mut rng)
        else {
            continue;
        };
        let evaluator = FitnessEvaluator::new(&catalog, split, &weights);

        group.throughput(Throughput::Elements(population.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("population", size.label()),
            &population,
            |b, population| {
                b.iter(|| {
                    population
                        .iter()
                        .map(|chromosome| evaluator.score(black_box(chromosome), &user))
                        .sum::<f64>()
                });
            },
        );
    }

    group.finish();
}

fn bench_population_init(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_init");
    let registry = SplitRegistry::default_rotation();
    let Some(split) = registry.get(0) else {
        return;
    };
    let config = GeneticAlgorithmConfig::default();
    let seeds = generate_seeds();
    let user = bench_user();

    for size in SIZES {
        let Ok(catalog) = ExerciseCatalog::new(generate_catalog(size)) else {
            continue;
        };
        let codec = PopulationCodec::new(&catalog, split, &config);

        group.bench_function(BenchmarkId::new("seeded", size.label()), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(2);
            b.iter(|| codec.initialize_population(LENGTH, black_box(&seeds), &user, &mut rng));
        });
    }

    group.finish();
}

fn bench_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolution");
    group.sample_size(20);
    let registry = SplitRegistry::default_rotation();
    let Some(split) = registry.get(0) else {
        return;
    };
    let weights = FitnessWeights::default();
    let seeds = generate_seeds();
    let user = bench_user();

    // fixed generation count so every iteration does the same work
    let config = GeneticAlgorithmConfig {
        convergence_window: 1_000,
        ..GeneticAlgorithmConfig::default()
    };

    for size in SIZES {
        let Ok(catalog) = ExerciseCatalog::new(generate_catalog(size)) else {
            continue;
        };
        let codec = PopulationCodec::new(&catalog, split, &config);
        let evaluator = FitnessEvaluator::new(&catalog, split, &weights);
        let engine = EvolutionEngine::new(&config, evaluator, &catalog, codec.pools());

        group.bench_function(BenchmarkId::new("full_run", size.label()), |b| {
            let mut rng = ChaCha8Rng::seed_from_u64(3);
            b.iter(|| {
                codec
                    .initialize_population(LENGTH, &seeds, &user, &mut rng)
                    .and_then(|population| engine.evolve(population, &user, &mut rng))
            });
        });
    }

    group.finish();
}

fn bench_recommendation_service(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation_service");
    group.sample_size(20);
    let service = RecommendationService::new(
        Arc::new(RecommenderConfig::default()),
        Arc::new(SplitRegistry::default_rotation()),
    );

    let request = generate_request(CatalogSize::Large, Goal::Hypertrophy);
    group.bench_function("single", |b| {
        b.iter(|| service.recommend_seeded(black_box(&request), 42));
    });

    let requests: Vec<_> = Goal::ALL
        .into_iter()
        .cycle()
        .take(16)
        .map(|goal| generate_request(CatalogSize::Small, goal))
        .collect();
    group.throughput(Throughput::Elements(requests.len() as u64));
    group.bench_function("batch_16", |b| {
        b.iter(|| service.recommend_batch(black_box(&requests), 7));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_fitness_evaluation,
    bench_population_init,
    bench_evolution,
    bench_recommendation_service,
);
criterion_main!(benches);
