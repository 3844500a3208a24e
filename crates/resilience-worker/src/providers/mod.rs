//! Signal providers and adapter selection.

pub mod file;
pub mod fixed;
pub mod synthetic;

pub use file::FileProvider;
pub use fixed::FixedProvider;
pub use synthetic::SyntheticProvider;

use resilience_core::config::ResilienceConfig;
use resilience_core::constants::KNOWN_ADAPTERS;
use resilience_core::errors::ConfigError;
use resilience_core::traits::SignalProvider;

/// Build the provider named by `run.adapter`.
pub fn build_provider(config: &ResilienceConfig) -> Result<Box<dyn SignalProvider>, ConfigError> {
    match config.run.effective_adapter() {
        "synthetic" => Ok(Box::new(SyntheticProvider::new(config.run.effective_seed()))),
        "file" => {
            let path = config
                .run
                .input_path
                .clone()
                .ok_or_else(|| ConfigError::ValidationFailed {
                    field: "run.input_path".to_string(),
                    message: "required when adapter is 'file'".to_string(),
                })?;
            Ok(Box::new(FileProvider::new(path)))
        }
        other => Err(ConfigError::ValidationFailed {
            field: "run.adapter".to_string(),
            message: format!("unknown adapter '{other}', expected one of {KNOWN_ADAPTERS:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_known_adapter() {
        let config = ResilienceConfig::default();
        assert_eq!(build_provider(&config).unwrap().name(), "synthetic");

        let config = ResilienceConfig::from_toml(
            "[run]\nadapter = \"file\"\ninput_path = \"grid.json\"\n",
        )
        .unwrap();
        assert_eq!(build_provider(&config).unwrap().name(), "file");
    }

    #[test]
    fn rejects_unknown_or_incomplete_adapters() {
        let config = ResilienceConfig::from_toml("[run]\nadapter = \"satellite\"\n").unwrap();
        assert!(build_provider(&config).is_err());
        let config = ResilienceConfig::from_toml("[run]\nadapter = \"file\"\n").unwrap();
        assert!(build_provider(&config).is_err());
    }
}
