//! Top-level worker configuration with 3-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GridConfig, RunConfig, ScoringConfig, StorageConfig};
use crate::constants::{KNOWN_ADAPTERS, MAX_ALERT_WINDOW_DAYS};
use crate::errors::ConfigError;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "RESILIENCE_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "resilience.toml";

/// Environment overrides recognised by [`ResilienceConfig::load`].
pub const ENV_OVERRIDES: &[&str] = &[
    "RESILIENCE_GRID_STEP_DEG",
    "RESILIENCE_GRID_ROWS",
    "RESILIENCE_GRID_COLS",
    "RESILIENCE_VERSION",
    "RESILIENCE_ADAPTER",
    "RESILIENCE_INPUT_PATH",
    "RESILIENCE_DATABASE_URL",
    "RESILIENCE_CADENCE_MIN",
];

/// Top-level configuration aggregating all sub-configs.
///
/// Built once at process start and handed to the orchestrator; nothing
/// downstream reads the environment.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RESILIENCE_*`)
/// 2. Config file (`RESILIENCE_CONFIG`, or `resilience.toml` in the working directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResilienceConfig {
    pub grid: GridConfig,
    pub run: RunConfig,
    pub scoring: ScoringConfig,
    pub storage: StorageConfig,
}

impl ResilienceConfig {
    /// Load configuration: defaults, then `config_path` if given, then env.
    ///
    /// An explicitly named file that does not exist is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            Self::merge_toml_file(&mut config, path)?;
            ::tracing::debug!(path = %path.display(), "merged config file");
        }

        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;

        Self::validate(&config)?;

        Ok(config)
    }

    /// Config file to use: `RESILIENCE_CONFIG` if set, else `resilience.toml`
    /// in the working directory if it exists.
    pub fn discover_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ResilienceConfig) -> Result<(), ConfigError> {
        let step = config.grid.effective_step_deg();
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "grid.step_deg".to_string(),
                message: "must be a positive number of degrees".to_string(),
            });
        }
        let shape = config.grid.effective_shape();
        if shape.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "grid.rows/grid.cols".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if shape.checked_len().is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "grid.rows/grid.cols".to_string(),
                message: format!("{}x{} cells overflows the addressable grid", shape.rows, shape.cols),
            });
        }

        for (field, thresholds) in [
            ("scoring.rainfall", config.scoring.effective_rainfall()),
            ("scoring.soil", config.scoring.effective_soil()),
            ("scoring.vegetation", config.scoring.effective_vegetation()),
            ("scoring.persistence", config.scoring.effective_persistence()),
        ] {
            thresholds
                .validate(field)
                .map_err(|e| ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: e.to_string(),
                })?;
        }

        let cadence = config.scoring.effective_cadence_min();
        if !cadence.is_finite() || cadence <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.cadence_min".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        let adapter = config.run.effective_adapter();
        if !KNOWN_ADAPTERS.contains(&adapter) {
            return Err(ConfigError::ValidationFailed {
                field: "run.adapter".to_string(),
                message: format!("unknown adapter '{adapter}', expected one of {KNOWN_ADAPTERS:?}"),
            });
        }
        let window = config.run.effective_alert_window_days();
        if !(1..=MAX_ALERT_WINDOW_DAYS).contains(&window) {
            return Err(ConfigError::ValidationFailed {
                field: "run.alert_window_days".to_string(),
                message: format!("must be between 1 and {MAX_ALERT_WINDOW_DAYS}, got {window}"),
            });
        }
        if adapter == "file" && config.run.input_path.is_none() {
            return Err(ConfigError::ValidationFailed {
                field: "run.input_path".to_string(),
                message: "required when adapter is 'file'".to_string(),
            });
        }

        if config.storage.effective_max_attempts() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.max_attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.storage.effective_database_url().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.database_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ResilienceConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ResilienceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ResilienceConfig, other: &ResilienceConfig) {
        // Grid
        if other.grid.step_deg.is_some() {
            base.grid.step_deg = other.grid.step_deg;
        }
        if other.grid.rows.is_some() {
            base.grid.rows = other.grid.rows;
        }
        if other.grid.cols.is_some() {
            base.grid.cols = other.grid.cols;
        }

        // Run
        if other.run.version.is_some() {
            base.run.version = other.run.version.clone();
        }
        if other.run.adapter.is_some() {
            base.run.adapter = other.run.adapter.clone();
        }
        if other.run.notes.is_some() {
            base.run.notes = other.run.notes.clone();
        }
        if other.run.input_path.is_some() {
            base.run.input_path = other.run.input_path.clone();
        }
        if other.run.seed.is_some() {
            base.run.seed = other.run.seed;
        }
        if other.run.alert_window_days.is_some() {
            base.run.alert_window_days = other.run.alert_window_days;
        }

        // Scoring
        if other.scoring.cadence_min.is_some() {
            base.scoring.cadence_min = other.scoring.cadence_min;
        }
        if other.scoring.rainfall.is_some() {
            base.scoring.rainfall = other.scoring.rainfall;
        }
        if other.scoring.soil.is_some() {
            base.scoring.soil = other.scoring.soil;
        }
        if other.scoring.vegetation.is_some() {
            base.scoring.vegetation = other.scoring.vegetation;
        }
        if other.scoring.persistence.is_some() {
            base.scoring.persistence = other.scoring.persistence;
        }

        // Storage
        if other.storage.database_url.is_some() {
            base.storage.database_url = other.storage.database_url.clone();
        }
        if other.storage.max_attempts.is_some() {
            base.storage.max_attempts = other.storage.max_attempts;
        }
        if other.storage.initial_backoff_ms.is_some() {
            base.storage.initial_backoff_ms = other.storage.initial_backoff_ms;
        }
    }

    /// Apply `RESILIENCE_*` overrides. Values that fail to parse are rejected
    /// rather than skipped, so a typo never silently runs with defaults.
    fn apply_overrides<F>(config: &mut ResilienceConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("RESILIENCE_GRID_STEP_DEG") {
            config.grid.step_deg = Some(parse_env("RESILIENCE_GRID_STEP_DEG", &v)?);
        }
        if let Some(v) = lookup("RESILIENCE_GRID_ROWS") {
            config.grid.rows = Some(parse_env("RESILIENCE_GRID_ROWS", &v)?);
        }
        if let Some(v) = lookup("RESILIENCE_GRID_COLS") {
            config.grid.cols = Some(parse_env("RESILIENCE_GRID_COLS", &v)?);
        }
        if let Some(v) = lookup("RESILIENCE_VERSION") {
            config.run.version = Some(v);
        }
        if let Some(v) = lookup("RESILIENCE_ADAPTER") {
            config.run.adapter = Some(v);
        }
        if let Some(v) = lookup("RESILIENCE_INPUT_PATH") {
            config.run.input_path = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("RESILIENCE_DATABASE_URL") {
            config.storage.database_url = Some(v);
        }
        if let Some(v) = lookup("RESILIENCE_CADENCE_MIN") {
            config.scoring.cadence_min = Some(parse_env("RESILIENCE_CADENCE_MIN", &v)?);
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("'{raw}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = ResilienceConfig::from_toml(
            r#"
[grid]
step_deg = 0.5
rows = 10
"#,
        )
        .unwrap();
        ResilienceConfig::apply_overrides(
            &mut config,
            lookup_from(&[("RESILIENCE_GRID_STEP_DEG", "1.0"), ("RESILIENCE_ADAPTER", "file")]),
        )
        .unwrap();
        assert_eq!(config.grid.step_deg, Some(1.0));
        assert_eq!(config.grid.rows, Some(10));
        assert_eq!(config.run.adapter.as_deref(), Some("file"));
    }

    #[test]
    fn unparseable_override_is_rejected() {
        let mut config = ResilienceConfig::default();
        let err = ResilienceConfig::apply_overrides(
            &mut config,
            lookup_from(&[("RESILIENCE_GRID_ROWS", "many")]),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "RESILIENCE_GRID_ROWS"));
    }

    #[test]
    fn merge_keeps_base_where_other_is_empty() {
        let mut base = ResilienceConfig::from_toml("[storage]\nmax_attempts = 5\n").unwrap();
        let other = ResilienceConfig::from_toml("[run]\nversion = \"9.9\"\n").unwrap();
        ResilienceConfig::merge(&mut base, &other);
        assert_eq!(base.storage.max_attempts, Some(5));
        assert_eq!(base.run.version.as_deref(), Some("9.9"));
    }
}
