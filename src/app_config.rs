use anyhow::{anyhow, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles loading, validating and saving the service
/// configuration. Secrets normally come from the environment rather than
/// the JSON file.
/// Environment variable holding the chat API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the chat model
pub const MODEL_ENV: &str = "ZUBAAN_LLM_MODEL";

/// Represents the service configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Chat-model settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Fallback translation endpoint settings
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Chat-completion API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LlmConfig {
    /// API key; empty disables the chat-model path
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Model name (e.g., "gpt-3.5-turbo", "gpt-4o-mini")
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// Service endpoint URL (for Azure OpenAI or OpenAI-compatible servers)
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,

    /// Set to false to force fallback-only mode even with a key
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: default_llm_endpoint(),
            timeout_secs: default_llm_timeout_secs(),
            enabled: true,
        }
    }
}

/// Fallback translation endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FallbackConfig {
    /// Endpoint base URL
    #[serde(default = "default_fallback_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_fallback_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            endpoint: default_fallback_endpoint(),
            timeout_secs: default_fallback_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_llm_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_timeout_secs() -> u64 {
    30
}

fn default_fallback_endpoint() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_fallback_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load the configuration from a JSON file, then apply the environment
    ///
    /// A missing file is not an error: defaults are used instead.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let file = File::open(path)
                .context(format!("Failed to open config file: {}", path.display()))?;

            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .context(format!("Failed to parse config file: {}", path.display()))?
        } else {
            info!("Config file not found at '{}', using defaults", path.display());
            Config::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// Apply `.env` and process environment overrides
    pub fn apply_env(&mut self) {
        // A missing .env file is the normal case in production
        let _ = dotenvy::dotenv();
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.llm.api_key = api_key.trim().to_string();
        }

        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            self.llm.model = model.trim().to_string();
        }
    }

    /// Why the chat-model path cannot be used, if it cannot
    pub fn llm_unavailable_reason(&self) -> Option<String> {
        if !self.llm.enabled {
            Some("disabled in configuration".to_string())
        } else if self.llm.api_key.trim().is_empty() {
            Some(format!("{} not set", API_KEY_ENV))
        } else {
            None
        }
    }

    /// Whether the chat-model path can be used
    pub fn llm_available(&self) -> bool {
        self.llm_unavailable_reason().is_none()
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        validate_endpoint("llm.endpoint", &self.llm.endpoint)?;
        validate_endpoint("fallback.endpoint", &self.fallback.endpoint)?;

        if self.llm.model.trim().is_empty() {
            return Err(anyhow!("llm.model cannot be empty"));
        }

        if self.llm.timeout_secs == 0 {
            return Err(anyhow!("llm.timeout_secs must be greater than zero"));
        }

        if self.fallback.timeout_secs == 0 {
            return Err(anyhow!("fallback.timeout_secs must be greater than zero"));
        }

        Ok(())
    }

    /// Save the configuration as pretty JSON, leaving the API key out
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut redacted = self.clone();
        redacted.llm.api_key = String::new();

        let config_json = serde_json::to_string_pretty(&redacted)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path.as_ref(), config_json)
            .context(format!("Failed to write config to file: {}", path.as_ref().display()))?;

        Ok(())
    }
}

fn validate_endpoint(name: &str, endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(anyhow!("{} cannot be empty", name));
    }

    let url = Url::parse(endpoint)
        .context(format!("{} is not a valid URL: {}", name, endpoint))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(anyhow!("{} must use http or https, got {}", name, scheme)),
    }
}
