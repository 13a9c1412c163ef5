// ABOUTME: Logging configuration and structured logging setup for the recommender and CLI
// ABOUTME: Configures log levels, formatters, and the stderr writer used by every binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

//! Structured logging configuration
//!
//! Logs always go to stderr so binaries can print JSON results on stdout.

use anyhow::Result;
use liftgen_core::constants::service_names;
use serde_json::json;
use std::env;
use std::io;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Format named by `LOG_FORMAT`, if it names one
    fn from_env() -> Option<Self> {
        match env::var("LOG_FORMAT").ok()?.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::LIFTGEN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let format = LogFormat::from_env().unwrap_or(LogFormat::Pretty);

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // In production, use more detailed logging
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::LIFTGEN.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Command line configuration: the environment's format and flags, warnings only
    /// unless `verbose`, compact output when `LOG_FORMAT` is unset
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "warn" }.into(),
            format: LogFormat::from_env().unwrap_or(LogFormat::Compact),
            ..Self::from_env()
        }
    }

    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new)
            // rayon's worker threads are not interesting at info
            .add_directive(
                "rayon=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            )
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events())
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events());

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(self.span_events());

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Logging initialized: {}", config_summary
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const LOGGING_VARS: [&str; 6] = [
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
        "LOG_INCLUDE_SPANS",
        "SERVICE_NAME",
        "ENVIRONMENT",
    ];

    fn clear_logging_vars() {
        for name in LOGGING_VARS {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_cli_config_is_quiet_unless_verbose() {
        clear_logging_vars();
        let quiet = LoggingConfig::for_cli(false);
        assert_eq!(quiet.level, "warn");
        assert_eq!(quiet.format, LogFormat::Compact);
        assert!(!quiet.include_location);
        assert_eq!(LoggingConfig::for_cli(true).level, "debug");
    }

    #[test]
    #[serial]
    fn test_cli_config_honours_environment() {
        clear_logging_vars();
        env::set_var("LOG_FORMAT", "json");
        env::set_var("LOG_INCLUDE_LOCATION", "1");
        env::set_var("LOG_INCLUDE_SPANS", "1");
        env::set_var("SERVICE_NAME", "liftgen-batch");

        let config = LoggingConfig::for_cli(false);
        clear_logging_vars();

        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.include_location);
        assert!(!config.include_thread);
        assert!(config.include_spans);
        assert_eq!(config.service_name, "liftgen-batch");
    }

    #[test]
    #[serial]
    fn test_production_environment_adds_detail() {
        clear_logging_vars();
        env::set_var("ENVIRONMENT", "production");
        env::set_var("LOG_FORMAT", "bogus");

        let config = LoggingConfig::from_env();
        clear_logging_vars();

        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.include_location);
        assert!(config.include_thread);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_default_names_service() {
        let config = LoggingConfig::default();
        assert_eq!(config.service_name, "liftgen");
        assert!(!config.service_version.is_empty());
    }
}
