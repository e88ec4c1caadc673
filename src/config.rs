use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::language::Language;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Shared admin secret for write endpoints. Usually referenced as
    /// `${ELAEIS_ADMIN_KEY}` in the config file.
    #[serde(default)]
    pub admin_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
}

fn default_base_url() -> String {
    "https://api.elaeisberkelana.id/api".to_string()
}

fn default_state_dir() -> String {
    ".elaeis".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            admin_key: None,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            state_dir: default_state_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON or YAML file, by extension, with
    /// `${VAR_NAME}` environment variable substitution.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let content = substitute_env_vars(&content);

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(serde_yaml::from_str(&content)?)
        }
    }

    /// Resolve the configuration by probing conventional locations, with
    /// a `CONFIG_PATH` environment override. Falls back to defaults when
    /// nothing loads.
    pub fn discover() -> Self {
        let candidates: Vec<String> = vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("elaeis.json".to_string()),
            Some("elaeis.yaml".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        for path in &candidates {
            match Self::load(path) {
                Ok(config) => {
                    tracing::info!("Loaded configuration from {}", path);
                    return config;
                }
                Err(e) => {
                    tracing::debug!("Failed to load config from {}: {}", path, e);
                }
            }
        }

        tracing::info!("No configuration file found; using defaults");
        Self::default()
    }

    /// Location of the persisted language preference.
    pub fn preference_path(&self) -> PathBuf {
        PathBuf::from(&self.content.state_dir).join("language.json")
    }
}

/// Replace `${VAR_NAME}` references with environment values; unknown
/// variables are left verbatim.
fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").unwrap();
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string()
}
