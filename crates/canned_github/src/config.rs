//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from canned.toml)
//! - ~/.config/canned/canned.toml
//! - ./canned.toml

use canned_error::{CannedError, CannedResult, ConfigError};
use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// GitHub API settings.
///
/// ```toml
/// [github]
/// base_url = "https://api.github.com"
/// accept = "application/vnd.github.v3+json"
/// user_agent = "canned"
/// token_env = "GITHUB_TOKEN"
/// search_per_page = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct GithubConfig {
    /// API base URL
    base_url: String,

    /// Accept header sent with every request
    #[serde(default = "default_accept")]
    accept: String,

    /// User-Agent header (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    user_agent: String,

    /// Name of the environment variable holding a bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token_env: Option<String>,

    /// Page size for user search
    #[serde(default = "default_search_per_page")]
    search_per_page: u32,
}

fn default_accept() -> String {
    "application/vnd.github.v3+json".to_string()
}

fn default_user_agent() -> String {
    "canned".to_string()
}

fn default_search_per_page() -> u32 {
    30
}

impl GithubConfig {
    /// Config pointing at a different base URL, e.g. a GitHub Enterprise host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read the token from the configured environment variable, if set.
    pub fn token(&self) -> Option<String> {
        let var = self.token_env.as_deref()?;
        std::env::var(var).ok().filter(|token| !token.trim().is_empty())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            accept: default_accept(),
            user_agent: default_user_agent(),
            token_env: Some("GITHUB_TOKEN".to_string()),
            search_per_page: default_search_per_page(),
        }
    }
}

/// Top-level Canned configuration.
///
/// # Example
///
/// ```no_run
/// use canned_github::CannedConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = CannedConfig::load()?;
/// println!("GitHub API at {}", config.github().base_url());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default, Getters)]
pub struct CannedConfig {
    /// GitHub API settings
    #[serde(default)]
    github: GithubConfig,
}

impl CannedConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CannedResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                CannedError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CannedError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled
    /// defaults.
    ///
    /// User config files are optional and silently skipped if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> CannedResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../canned.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/canned/canned.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("canned").required(false));

        builder
            .build()
            .map_err(|e| {
                CannedError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                CannedError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
