use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::fs::atomic_write;
use crate::paths;

/// Sunbird AI NLLB translation task endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.sunbird.ai/tasks/nllb_translate";

/// Environment variable holding the access token unless overridden.
pub const DEFAULT_TOKEN_ENV: &str = "AUTH_TOKEN";

/// Request timeout used when neither the CLI nor the config file sets one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings in the `[sunbird]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunbirdConfig {
    /// Translation endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Access token stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Environment variable name containing the access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token_env: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Default source language name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Default target language name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl SunbirdConfig {
    /// Name of the environment variable the token is read from.
    pub fn token_env(&self) -> &str {
        self.auth_token_env
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_TOKEN_ENV)
    }

    /// Gets the access token, preferring the environment over the config file.
    pub fn get_auth_token(&self) -> Option<String> {
        if let Ok(token) = std::env::var(self.token_env())
            && !token.trim().is_empty()
        {
            return Some(token.trim().to_string());
        }
        self.auth_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/sunbird/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub sunbird: SunbirdConfig,
}

/// No access token could be found in the environment or config file.
#[derive(Debug, Error)]
#[error(
    "Access token not found in environment variables. Please set {env_var} in your .env file."
)]
pub struct MissingTokenError {
    pub env_var: String,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Translation endpoint URL.
    pub endpoint: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Preselected source language name, if any.
    pub from: Option<String>,
    /// Preselected target language name, if any.
    pub to: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// # Errors
///
/// Returns [`MissingTokenError`] if no access token is available, or an
/// error if the endpoint or timeout is unusable.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.sunbird;

    let token = file.get_auth_token().ok_or_else(|| MissingTokenError {
        env_var: file.token_env().to_string(),
    })?;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .map_or(DEFAULT_ENDPOINT, String::as_str)
        .trim()
        .to_string();

    validate_endpoint(&endpoint)?;

    let timeout_secs = options
        .timeout_secs
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    if timeout_secs == 0 {
        bail!("Timeout must be at least 1 second");
    }

    debug!(%endpoint, timeout_secs, token_env = file.token_env(), "resolved configuration");

    Ok(ResolvedConfig {
        endpoint,
        token,
        timeout: Duration::from_secs(timeout_secs),
        from: options.from.clone().or_else(|| file.from.clone()),
        to: options.to.clone().or_else(|| file.to.clone()),
    })
}

/// Checks that an endpoint is a non-empty http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        bail!("Endpoint must be an http(s) URL: '{endpoint}'");
    }
    Ok(())
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a config manager for `$XDG_CONFIG_HOME/sunbird/config.toml`
    /// or `~/.config/sunbird/config.toml`.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as empty.
    pub fn load_optional(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            debug!(path = %self.config_path.display(), "no config file, using defaults");
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }
}
