//! Configuration types and validation for the toolkit driver
//! Author: kartik4091
//! Created: 2026-10-18

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::{logger::LOG_LEVELS, DatePattern, UtilityConfig, Zone};

/// Upper bound for the demo task delay.
pub const MAX_TASK_DELAY_MS: u64 = 60_000;

/// Settings for the demonstration run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Java-style pattern for the date section
    pub date_pattern: String,
    /// Wall clock used for formatting (`local`, `utc` or `+HH:MM`)
    pub zone: Zone,
    /// File written and read back by the file section
    pub demo_file: PathBuf,
    pub demo_file_content: String,
    /// Simulated work inside the deferred task
    pub task_delay_ms: u64,
    pub log_level: String,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            date_pattern: "yyyy-MM-dd HH:mm:ss".into(),
            zone: Zone::Local,
            demo_file: PathBuf::from("test.txt"),
            demo_file_content: "Hello, File!".into(),
            task_delay_ms: 1000,
            log_level: "info".into(),
        }
    }
}

impl ToolkitConfig {
    /// Loads a JSON or YAML file. Absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: ToolkitConfig = serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e| Error::ConfigError(format!("Config parsing error: {}", e)))?;
        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// The compiled date pattern.
    pub fn pattern(&self) -> Result<DatePattern> {
        DatePattern::compile(&self.date_pattern)
    }
}

impl UtilityConfig for ToolkitConfig {
    fn validate(&self) -> Result<()> {
        self.pattern()
            .map_err(|e| Error::ValidationError(format!("date_pattern: {}", e)))?;
        if self.demo_file.as_os_str().is_empty() {
            return Err(Error::ValidationError("demo_file must not be empty".into()));
        }
        if self.task_delay_ms > MAX_TASK_DELAY_MS {
            return Err(Error::ValidationError(format!(
                "task_delay_ms must be at most {}",
                MAX_TASK_DELAY_MS
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::ValidationError(format!("Unknown log level: {}", self.log_level)));
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        match key {
            "date_pattern" => Some(self.date_pattern.clone()),
            "zone" => Some(self.zone.to_string()),
            "demo_file" => Some(self.demo_file.display().to_string()),
            "demo_file_content" => Some(self.demo_file_content.clone()),
            "task_delay_ms" => Some(self.task_delay_ms.to_string()),
            "log_level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "date_pattern" => self.date_pattern = value,
            "zone" => self.zone = value.parse().map_err(|e| Error::ValidationError(format!("{}", e)))?,
            "demo_file" => self.demo_file = PathBuf::from(value),
            "demo_file_content" => self.demo_file_content = value,
            "task_delay_ms" => self.task_delay_ms = value.parse().map_err(|_| Error::ValidationError("Invalid u64".into()))?,
            "log_level" => self.log_level = value.to_ascii_lowercase(),
            _ => return Err(Error::ValidationError(format!("Unknown key: {}", key))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = ToolkitConfig::default();
        config.validate().unwrap();
        assert_eq!(config.get("task_delay_ms").as_deref(), Some("1000"));
        assert_eq!(config.get("zone").as_deref(), Some("local"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_and_validate() {
        let mut config = ToolkitConfig::default();
        config.set("zone", "+02:00".into()).unwrap();
        config.set("task_delay_ms", "5".into()).unwrap();
        config.set("log_level", "DEBUG".into()).unwrap();
        assert_eq!(config.get("zone").as_deref(), Some("+02:00"));
        assert_eq!(config.task_delay_ms, 5);
        config.validate().unwrap();

        assert!(config.set("task_delay_ms", "soon".into()).is_err());
        assert!(config.set("zone", "nowhere".into()).is_err());
        assert!(config.set("colour", "blue".into()).is_err());
    }

    #[test]
    fn test_validation_failures() {
        let mut config = ToolkitConfig::default();
        config.date_pattern = "yyyy-QQ".into();
        assert!(matches!(config.validate(), Err(Error::ValidationError(_))));

        let mut config = ToolkitConfig::default();
        config.task_delay_ms = MAX_TASK_DELAY_MS + 1;
        assert!(config.validate().is_err());

        let mut config = ToolkitConfig::default();
        config.log_level = "loud".into();
        assert!(config.validate().is_err());

        let mut config = ToolkitConfig::default();
        config.demo_file = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_and_yaml() {
        let dir = tempdir().unwrap();

        let json = dir.path().join("config.json");
        fs::write(&json, r#"{"zone": "utc", "task_delay_ms": 10}"#).unwrap();
        let config = ToolkitConfig::from_file(&json).unwrap();
        assert_eq!(config.zone, Zone::Utc);
        assert_eq!(config.task_delay_ms, 10);
        assert_eq!(config.demo_file, PathBuf::from("test.txt"));

        let yaml = dir.path().join("config.yaml");
        fs::write(&yaml, "date_pattern: \"dd/MM/yyyy\"\nzone: \"+05:30\"\n").unwrap();
        let config = ToolkitConfig::from_file(&yaml).unwrap();
        assert_eq!(config.date_pattern, "dd/MM/yyyy");
        assert_eq!(config.zone.to_string(), "+05:30");
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            ToolkitConfig::from_file(&dir.path().join("missing.json")),
            Err(Error::ConfigError(_))
        ));

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "task_delay_ms: [not, a, number]\n").unwrap();
        assert!(matches!(ToolkitConfig::from_file(&bad), Err(Error::ConfigError(_))));
    }
}
