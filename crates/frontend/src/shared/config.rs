//! Runtime configuration.
//!
//! `config.toml` is served next to `index.html` and fetched once at start-up.
//! When it is missing or invalid the embedded [`DEFAULT_CONFIG`] is used.
//! Whichever source wins, a `CAFE_API_BASE_URL` set at build time replaces
//! the API base URL.

use gloo_net::http::Request;
use leptos::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "/config.toml";

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000"

[uploads]
prefix = "uploads"
fallback_image = "default.png"

[products]
image_required = false
"#;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not fetch config.toml: {0}")]
    Fetch(String),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default)]
    pub products: ProductsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UploadsConfig {
    /// Path segment under which the backend serves stored images.
    pub prefix: String,
    /// Image shown when a stored image fails to load.
    pub fallback_image: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            prefix: "uploads".to_string(),
            fallback_image: "default.png".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ProductsConfig {
    pub image_required: bool,
}

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn embedded() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_else(|e| {
            log::error!("Embedded configuration is invalid: {}", e);
            Self::default()
        })
    }

    /// Replaces the API base URL; blank overrides are ignored.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(base_url) = base_url.map(str::trim).filter(|s| !s.is_empty()) {
            self.api.base_url = base_url.trim_end_matches('/').to_string();
        }
        self
    }
}

async fn fetch_config_file() -> Result<Option<AppConfig>, ConfigError> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(ConfigError::Fetch(format!("status {}", response.status())));
    }

    let contents = response
        .text()
        .await
        .map_err(|e| ConfigError::Fetch(e.to_string()))?;
    AppConfig::parse(&contents).map(Some)
}

/// Load configuration from `config.toml`
///
/// Search order:
/// 1. `config.toml` served next to the page
/// 2. Falls back to the embedded default
/// 3. `CAFE_API_BASE_URL` at build time overrides the base URL of either
pub async fn load_config() -> AppConfig {
    let config = match fetch_config_file().await {
        Ok(Some(config)) => {
            log::info!("Loaded configuration from {}", CONFIG_PATH);
            config
        }
        Ok(None) => {
            log::info!("Using default embedded configuration");
            AppConfig::embedded()
        }
        Err(e) => {
            log::warn!("{}; using default embedded configuration", e);
            AppConfig::embedded()
        }
    };
    let build_override = option_env!("CAFE_API_BASE_URL");
    if build_override.is_some() {
        log::info!("API base URL overridden at build time");
    }
    config.with_base_url_override(build_override)
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context")
}
