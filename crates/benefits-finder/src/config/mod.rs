use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::screening::ScoringPolicy;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = ScoringPolicy::default();
        let max_results_ceiling = defaults.max_results;
        let confidence_floor = defaults.minimum_confidence;

        let max_results = match env::var("APP_MAX_RESULTS") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|value| (1..=max_results_ceiling).contains(value))
                .ok_or(ConfigError::InvalidMaxResults)?,
            Err(_) => defaults.max_results,
        };

        let minimum_confidence = match env::var("APP_MIN_CONFIDENCE") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| (confidence_floor..=100.0).contains(value))
                .ok_or(ConfigError::InvalidMinConfidence)?,
            Err(_) => defaults.minimum_confidence,
        };

        let fpl_table_path = non_empty_path("APP_FPL_TABLE");
        let catalog_path = non_empty_path("APP_CATALOG_PATH");

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            screening: ScreeningConfig {
                fpl_table_path,
                catalog_path,
                policy: ScoringPolicy {
                    minimum_confidence,
                    max_results,
                    ..defaults
                },
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn non_empty_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Data sources and scoring dials for the eligibility engine.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// CSV of poverty thresholds; the built-in 2024 table when unset.
    pub fpl_table_path: Option<PathBuf>,
    /// JSON program catalog; the built-in California catalog when unset.
    pub catalog_path: Option<PathBuf>,
    pub policy: ScoringPolicy,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMaxResults,
    InvalidMinConfidence,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxResults => {
                write!(f, "APP_MAX_RESULTS must be an integer between 1 and 10")
            }
            ConfigError::InvalidMinConfidence => {
                write!(f, "APP_MIN_CONFIDENCE must be a number between 30 and 100")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
