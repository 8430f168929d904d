use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CompanionError, Result};

pub const ENV_MODEL_URL: &str = "COMPANION_MODEL_URL";
pub const ENV_LOG_LEVEL: &str = "COMPANION_LOG_LEVEL";
pub const ENV_DEFAULT_TIMEZONE: &str = "COMPANION_DEFAULT_TIMEZONE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub top_p: f64,
    pub top_k: u32,
    pub repeat_penalty: f64,
    pub stop: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            request_timeout_secs: 180,
            top_p: 0.95,
            top_k: 40,
            repeat_penalty: 1.1,
            stop: vec![
                "\nUser:".to_string(),
                "### USER INPUT".to_string(),
                "### END".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, logs are appended to a dated file in this directory instead of stderr.
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Tunables for prompt assembly, retrieval and cleaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessorConfig {
    pub history_window: usize,
    pub max_sentences: usize,
    pub cancellation_ttl_secs: u64,
    pub default_timezone: String,
    /// Characters that always get the calm wellness override (case-insensitive).
    pub calm_personas: Vec<String>,
    pub max_chunks: usize,
    pub chunk_token_budget: u32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub backstory_char_cap: usize,
    pub profile_char_cap: usize,
    pub interest_item_cap: usize,
    pub fallback_character: Option<String>,
    pub runtime: RuntimeConfig,
    pub logging: LoggingConfig,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            history_window: 8,
            max_sentences: 3,
            cancellation_ttl_secs: 60,
            default_timezone: "UTC".to_string(),
            calm_personas: vec!["Kairos".to_string()],
            max_chunks: 10,
            chunk_token_budget: 900,
            temperature_min: 0.6,
            temperature_max: 1.4,
            backstory_char_cap: 200,
            profile_char_cap: 800,
            interest_item_cap: 8,
            fallback_character: None,
            runtime: RuntimeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ProcessorConfig {
    /// Load from an optional JSON file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                Self::from_json_str(&raw)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_MODEL_URL) {
            if !url.trim().is_empty() {
                self.runtime.base_url = url.trim().to_string();
            }
        }
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            if !level.trim().is_empty() {
                self.logging.level = level.trim().to_string();
            }
        }
        if let Ok(tz) = std::env::var(ENV_DEFAULT_TIMEZONE) {
            if !tz.trim().is_empty() {
                self.default_timezone = tz.trim().to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.temperature_min > self.temperature_max {
            return Err(CompanionError::Config(format!(
                "temperatureMin ({}) is above temperatureMax ({})",
                self.temperature_min, self.temperature_max
            )));
        }
        if self.history_window == 0 {
            return Err(CompanionError::Config(
                "historyWindow must be at least 1".to_string(),
            ));
        }
        if self.max_sentences == 0 {
            return Err(CompanionError::Config(
                "maxSentences must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_calm_persona(&self, character_name: &str) -> bool {
        let name = character_name.trim();
        self.calm_personas
            .iter()
            .any(|p| p.trim().eq_ignore_ascii_case(name))
    }

    pub fn clamp_temperature(&self, temperature: f32) -> f32 {
        temperature.clamp(self.temperature_min, self.temperature_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            ProcessorConfig::from_json_str(r#"{"historyWindow": 4, "runtime": {"topK": 20}}"#)
                .unwrap();
        assert_eq!(config.history_window, 4);
        assert_eq!(config.max_sentences, 3);
        assert_eq!(config.runtime.top_k, 20);
        assert_eq!(config.runtime.request_timeout_secs, 180);
    }

    #[test]
    fn inverted_temperature_bounds_rejected() {
        let config = ProcessorConfig {
            temperature_min: 1.5,
            temperature_max: 0.5,
            ..ProcessorConfig::default()
        };
        assert!(matches!(config.validate(), Err(CompanionError::Config(_))));
    }

    #[test]
    fn calm_persona_match_is_case_insensitive() {
        let config = ProcessorConfig::default();
        assert!(config.is_calm_persona("kairos"));
        assert!(config.is_calm_persona(" KAIROS "));
        assert!(!config.is_calm_persona("Aria"));
    }

    #[test]
    fn clamp_keeps_temperature_in_range() {
        let config = ProcessorConfig::default();
        assert_eq!(config.clamp_temperature(2.0), 1.4);
        assert_eq!(config.clamp_temperature(0.1), 0.6);
        assert_eq!(config.clamp_temperature(1.0), 1.0);
    }
}
