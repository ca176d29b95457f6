use crate::config::cvars;
use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringSettings {
    /// Seed value for the `awesomeness.MinAwesomeness` console variable.
    pub min_awesomeness: i32,
    /// Reason recorded for score updates that do not provide one.
    pub default_reason: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Awesomeness Scorer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            scoring: ScoringSettings {
                min_awesomeness: cvars::DEFAULT_MIN_AWESOMENESS,
                default_reason: "unknown reason".to_string(),
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("AWESOMENESS"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.scoring.min_awesomeness < 0 {
            return Err(format!(
                "min_awesomeness must not be negative, got {}",
                self.scoring.min_awesomeness
            ));
        }

        Ok(())
    }

    /// Push the scoring settings into the process-wide console variables.
    /// Call once on startup, after `validate`.
    pub fn apply(&self) {
        cvars::set_min_awesomeness(self.scoring.min_awesomeness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.scoring.min_awesomeness, 100);
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let mut settings = Settings::default();
        settings.scoring.min_awesomeness = -1;
        assert!(settings.validate().is_err());
    }
}
