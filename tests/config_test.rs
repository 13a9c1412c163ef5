// ABOUTME: Integration tests for recommender configuration loading and validation
// ABOUTME: Covers defaults, LIFTGEN_* environment overrides, serde input and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use liftgen::errors::{AppError, ErrorCode};
use liftgen::intelligence::config::{
    ConfigError, ExerciseCountConfig, GeneticAlgorithmConfig, GoalAdjustments, SplitPolicy,
    SplitSelectionConfig,
};
use liftgen::intelligence::RecommenderConfig;
use liftgen::models::{ExperienceLevel, Goal};
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 9] = [
    "LIFTGEN_POPULATION_SIZE",
    "LIFTGEN_COVERAGE_THRESHOLD",
    "LIFTGEN_BALANCE_WINDOW_DAYS",
    "LIFTGEN_CONVERGENCE_MIN_IMPROVEMENT",
    "LIFTGEN_MUTATION_RATE",
    "LIFTGEN_SPLIT_POLICY",
    "LIFTGEN_TIME_BUDGET_MS",
    "LIFTGEN_EXERCISES_INTERMEDIATE",
    "LIFTGEN_SPLIT_AWARE",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
fn test_defaults_are_valid() {
    let config = RecommenderConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.genetic.population_size, 25);
    assert_eq!(config.genetic.max_generations, 20);
    assert_eq!(config.genetic.seed_target(), 13);
    assert!(config.genetic.split_aware);
    assert_eq!(config.split_selection.policy, SplitPolicy::Rotation);
}

#[test]
#[serial]
fn test_environment_overrides_apply() {
    clear_overrides();
    env::set_var("LIFTGEN_POPULATION_SIZE", "40");
    env::set_var("LIFTGEN_SPLIT_POLICY", "recency_score");
    env::set_var("LIFTGEN_TIME_BUDGET_MS", "250");
    env::set_var("LIFTGEN_EXERCISES_INTERMEDIATE", "9");
    env::set_var("LIFTGEN_SPLIT_AWARE", "false");

    let config = RecommenderConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.genetic.population_size, 40);
    assert_eq!(config.split_selection.policy, SplitPolicy::RecencyScore);
    assert_eq!(config.genetic.time_budget_ms, Some(250));
    assert!(!config.genetic.split_aware);
    assert_eq!(
        config
            .exercise_count
            .target(ExperienceLevel::Intermediate, Goal::Hypertrophy),
        9
    );
}

#[test]
#[serial]
fn test_unparsable_override_is_rejected() {
    clear_overrides();
    env::set_var("LIFTGEN_POPULATION_SIZE", "lots");

    let result = RecommenderConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("LIFTGEN_MUTATION_RATE", "1.5");

    let result = RecommenderConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_non_numeric_and_oversized_overrides_fail_validation() {
    clear_overrides();
    env::set_var("LIFTGEN_COVERAGE_THRESHOLD", "NaN");
    let result = RecommenderConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));

    env::set_var("LIFTGEN_CONVERGENCE_MIN_IMPROVEMENT", "NaN");
    let result = RecommenderConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

    env::set_var("LIFTGEN_BALANCE_WINDOW_DAYS", "1000000000");
    let result = RecommenderConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_genetic_validation_rules() {
    let base = GeneticAlgorithmConfig::default();

    let invalid = [
        GeneticAlgorithmConfig {
            population_size: 1,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            max_generations: 0,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            crossover_rate: -0.1,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            tournament_size: 0,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            tournament_size: 26,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            elitism_count: 25,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            primary_ratio: 0.8,
            secondary_ratio: 0.4,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            convergence_min_improvement: f64::NAN,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            primary_ratio: f64::NAN,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            secondary_ratio: f64::NAN,
            ..base.clone()
        },
        GeneticAlgorithmConfig {
            mutation_rate: f64::NAN,
            ..base.clone()
        },
    ];
    for config in &invalid {
        assert!(config.validate().is_err(), "accepted {config:?}");
    }
    assert!(base.validate().is_ok());
}

#[test]
fn test_split_selection_validation() {
    let config = SplitSelectionConfig {
        coverage_threshold: 0.0,
        ..SplitSelectionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SplitSelectionConfig {
        balance_window_days: 0,
        ..SplitSelectionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SplitSelectionConfig {
        coverage_threshold: f64::NAN,
        ..SplitSelectionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SplitSelectionConfig {
        balance_window_days: 1_000_000_000,
        ..SplitSelectionConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SplitSelectionConfig {
        balance_window_days: 3650,
        ..SplitSelectionConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_exercise_count_rules() {
    let counts = ExerciseCountConfig::default();
    assert_eq!(counts.target(ExperienceLevel::Beginner, Goal::WeightLoss), 6);
    assert_eq!(counts.target(ExperienceLevel::Intermediate, Goal::Hypertrophy), 8);
    assert_eq!(counts.target(ExperienceLevel::Advanced, Goal::Definition), 10);

    let adjusted = ExerciseCountConfig {
        goal_adjustments: GoalAdjustments {
            rehabilitation: -10,
            conditioning: 2,
            ..GoalAdjustments::default()
        },
        ..ExerciseCountConfig::default()
    };
    assert_eq!(adjusted.target(ExperienceLevel::Beginner, Goal::Rehabilitation), 1);
    assert_eq!(adjusted.target(ExperienceLevel::Advanced, Goal::Conditioning), 12);

    let decreasing = ExerciseCountConfig {
        advanced: 4,
        ..ExerciseCountConfig::default()
    };
    assert!(decreasing.validate().is_err());
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: RecommenderConfig = serde_json::from_str(
        r#"{ "genetic": { "population_size": 30 }, "split_selection": { "policy": "recency_score" } }"#,
    )
    .unwrap();

    assert_eq!(config.genetic.population_size, 30);
    assert_eq!(config.genetic.max_generations, 20);
    assert_eq!(config.split_selection.policy, SplitPolicy::RecencyScore);
    assert_eq!(config.exercise_count, ExerciseCountConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_errors_map_to_error_codes() {
    let parse: AppError = ConfigError::Parse("Invalid LIFTGEN_POPULATION_SIZE".to_owned()).into();
    assert_eq!(parse.code, ErrorCode::ConfigError);

    let range: AppError = ConfigError::InvalidRange("mutation_rate").into();
    assert_eq!(range.code, ErrorCode::ConfigInvalid);
    assert!(range.to_string().contains("mutation_rate"));
}
