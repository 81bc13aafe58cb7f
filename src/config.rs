use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Which rewrite target `/api/*` requests resolve to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parses a `NODE_ENV` style value; anything but "development" counts as production.
    pub fn from_node_env(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Generated {
        #[serde(default = "default_generated_count")]
        count: usize,
    },
    File {
        path: PathBuf,
    },
    Http {
        url: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    pub base_url: String,
    pub poll_interval_seconds: u64,
    pub default_price_ceiling: f64,
    pub placeholder_image: String,
    pub sources: Vec<SourceConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            base_url: "http://localhost:3000".to_string(),
            poll_interval_seconds: 10,
            default_price_ceiling: 250.0,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            sources: vec![SourceConfig::File {
                path: PathBuf::from("public/response.json"),
            }],
        }
    }
}

fn default_generated_count() -> usize {
    100
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Applies the `NODE_ENV` override on top of the file setting.
pub fn apply_env(mut config: AppConfig, node_env: Option<String>) -> AppConfig {
    if let Some(value) = node_env {
        config.environment = Environment::from_node_env(&value);
    }
    config
}
