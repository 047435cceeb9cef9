//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use repro_core::RuleConfig;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Biological interval constants used by the alert rules.
    #[serde(default)]
    pub rules: RuleConfig,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Rule intervals outside `0..=MAX_RULE_DAYS` are rejected.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (REPRO_RULES__GESTATION_DAYS etc.)
        figment = figment.merge(Env::prefixed("REPRO_").split("__"));

        let config: Self = figment.extract()?;
        config
            .rules
            .validate()
            .map_err(|err| figment::Error::from(err.to_string()))?;
        Ok(config)
    }
}

/// Returns the platform-specific config directory for repro.
///
/// On Linux: `~/.config/repro`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("repro"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_repro() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "repro");
    }

    #[test]
    fn test_default_config_uses_default_rules() {
        let config = Config::default();
        assert_eq!(config.rules.gestation_days, 114);
        assert_eq!(config.rules.mating_window_days, 2);
    }

    #[test]
    fn test_config_file_overrides_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]\ngestation_days = 115\noverdue_grace_days = 5").unwrap();
        file.flush().unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.rules.gestation_days, 115);
        assert_eq!(config.rules.overdue_grace_days, 5);
        assert_eq!(config.rules.reminder_days, 7);
    }

    #[test]
    fn test_missing_config_file_falls_back_to_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(Some(&temp.path().join("absent.toml"))).unwrap();
        assert_eq!(config.rules, RuleConfig::default());
    }

    #[test]
    fn test_config_file_rejects_negative_interval() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]\nreminder_days = -1").unwrap();
        file.flush().unwrap();

        let err = Config::load_from(Some(file.path())).unwrap_err();
        assert!(
            err.to_string().contains("rules.reminder_days"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_config_file_rejects_oversized_interval() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]\ngestation_days = 100000").unwrap();
        file.flush().unwrap();

        assert!(Config::load_from(Some(file.path())).is_err());
    }
}
