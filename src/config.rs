use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub backend_config: BackendConfig,
    #[serde(default)]
    pub ui_config: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_target_lang")]
    pub default_target_lang: String,
    #[serde(default = "default_autoplay_delay_ms")]
    pub autoplay_delay_ms: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://translator-app-dsn7.onrender.com".to_string()
}

fn default_target_lang() -> String {
    "hi".to_string()
}

fn default_autoplay_delay_ms() -> u64 {
    200
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_target_lang: default_target_lang(),
            autoplay_delay_ms: default_autoplay_delay_ms(),
        }
    }
}

impl UiConfig {
    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }
}

/// Replace `${VAR_NAME}` with the environment value; unknown variables are left as-is
pub fn substitute_env_vars(content: &str) -> Result<String, ConfigError> {
    let pattern = Regex::new(r"\$\{(\w+)\}")?;
    let replaced = pattern.replace_all(content, |caps: &regex::Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });
    Ok(replaced.into_owned())
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse by extension: `.json`/`.jsonld` as JSON, anything else as YAML.
    /// A JSON-LD `@context` key is ignored.
    pub fn parse(content: &str, path: &str) -> Result<Self, ConfigError> {
        let content = substitute_env_vars(content)?;
        let path_lower = path.to_lowercase();
        let mut config: Config = if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json")
        {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.backend_config.base_url = config
            .backend_config
            .base_url
            .trim_end_matches('/')
            .to_string();
        Ok(config)
    }

    /// Candidate config files, in lookup order
    pub fn candidate_paths() -> Vec<String> {
        vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.jsonld".to_string()),
            Some("conf.json".to_string()),
            Some("conf.yaml".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// First existing candidate, or the defaults when none exists
    pub fn discover() -> Result<(Self, Option<String>), ConfigError> {
        for path in Self::candidate_paths() {
            if Path::new(&path).exists() {
                let config = Self::load(&path)?;
                return Ok((config, Some(path)));
            }
            tracing::debug!("No config at {}", path);
        }
        Ok((Self::default(), None))
    }
}
