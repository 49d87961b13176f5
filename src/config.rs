use std::path::Path;

use crate::error::ConfigError;
use crate::learning::TransferConfig;
use crate::memory::MemoryConfig;

/// Skill levels for the demo teacher/student pair, on the engine's 1–20
/// skill scale.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub teacher_skill_level: u32,
    pub student_skill_level: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            teacher_skill_level: 15,
            student_skill_level: 1,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub memory: MemoryConfig,
    pub transfer: TransferConfig,
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.memory.min_evaluation.is_finite() || !self.memory.max_evaluation.is_finite() {
            return Err(ConfigError::Validation(
                "memory evaluation bounds must be finite".into(),
            ));
        }
        if self.memory.min_evaluation >= self.memory.max_evaluation {
            return Err(ConfigError::Validation(
                "memory.min_evaluation must be < memory.max_evaluation".into(),
            ));
        }
        for (name, level) in [
            ("demo.teacher_skill_level", self.demo.teacher_skill_level),
            ("demo.student_skill_level", self.demo.student_skill_level),
        ] {
            if level == 0 || level > 20 {
                return Err(ConfigError::Validation(format!(
                    "{} must be in [1, 20]",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::ConflictPolicy;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[memory]
max_evaluation = 10.0
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!((config.memory.max_evaluation - 10.0).abs() < 1e-9);
        // Other fields should be defaults
        assert!((config.memory.min_evaluation - (-1.0)).abs() < 1e-9);
        assert_eq!(config.demo.teacher_skill_level, 15);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.transfer.conflict_policy, ConflictPolicy::Overwrite);
        assert_eq!(config.demo.student_skill_level, 1);
    }

    #[test]
    fn test_conflict_policy_from_toml() {
        let toml_str = r#"
[transfer]
conflict_policy = "keep-best"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.transfer.conflict_policy, ConflictPolicy::KeepBest);
    }

    #[test]
    fn test_validation_rejects_inverted_bounds() {
        let mut config = AppConfig::default();
        config.memory.min_evaluation = 1.0;
        config.memory.max_evaluation = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_skill_out_of_range() {
        let mut config = AppConfig::default();
        config.demo.teacher_skill_level = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.demo.student_skill_level = 21;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_toml_round_trips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().unwrap();
    }
}
