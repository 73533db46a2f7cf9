use crate::locale::Locale;
use crate::provider::Strategy;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TEMPLATE_DELAY_MS: u64 = 2000;

const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub locale: Option<Locale>,
    pub strategy: Option<Strategy>,
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
    pub template_delay_ms: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            locale: Some(Locale::Portuguese),
            strategy: Some(Strategy::Template),
            ..Self::default()
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    /// Sets one field by its file key, parsing the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "locale" => {
                self.locale = Some(
                    Locale::from_str(value).ok_or_else(|| anyhow!("Unknown locale: {}", value))?,
                )
            }
            "strategy" => {
                self.strategy = Some(
                    Strategy::from_str(value)
                        .ok_or_else(|| anyhow!("Unknown strategy: {}", value))?,
                )
            }
            "model" => self.model = Some(value.to_string()),
            "openai_api_key" => self.openai_api_key = Some(value.to_string()),
            "openai_base_url" => self.openai_base_url = Some(value.to_string()),
            "temperature" => self.temperature = Some(value.parse()?),
            "max_tokens" => self.max_tokens = Some(value.parse()?),
            "timeout_secs" => self.timeout_secs = Some(value.parse()?),
            "template_delay_ms" => self.template_delay_ms = Some(value.parse()?),
            _ => return Err(anyhow!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy.unwrap_or_default()
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn openai_base_url(&self) -> &str {
        self.openai_base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn template_delay(&self) -> Duration {
        Duration::from_millis(self.template_delay_ms.unwrap_or(DEFAULT_TEMPLATE_DELAY_MS))
    }

    /// The environment variable wins over the file.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.openai_api_key.clone())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("pregacao").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.locale(), Locale::Portuguese);
        assert_eq!(config.strategy(), Strategy::Template);
        assert_eq!(config.model(), "gpt-4");
        assert_eq!(config.max_tokens(), 2000);
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.template_delay(), Duration::from_secs(2));
        assert!((config.temperature() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            locale: Some(Locale::Spanish),
            strategy: Some(Strategy::OpenAI),
            model: Some("gpt-4o-mini".to_string()),
            timeout_secs: Some(15),
            ..Config::new()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "locale": "en" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.locale(), Locale::English);
        assert_eq!(config.strategy(), Strategy::Template);
        assert_eq!(config.openai_base_url(), DEFAULT_OPENAI_BASE_URL);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_then_save_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::load_from(&path).unwrap();
        config.set("locale", "es").unwrap();
        config.set("strategy", "openai").unwrap();
        config.set("max_tokens", " 1500 ").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.locale(), Locale::Spanish);
        assert_eq!(loaded.strategy(), Strategy::OpenAI);
        assert_eq!(loaded.max_tokens(), 1500);
    }

    #[test]
    fn test_set_rejects_bad_key_and_value() {
        let mut config = Config::new();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("locale", "fr").is_err());
        assert!(config.set("timeout_secs", "soon").is_err());
        assert_eq!(config, Config::new());
    }
}
