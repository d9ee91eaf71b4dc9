//! Demo configuration.
//!
//! Loads configuration from a TOML file with support for environment variable
//! expansion in string values. Variables use `$VAR` or `${VAR}` syntax.
//!
//! # Example Configuration
//!
//! ```toml
//! api_url = "https://api.intentpay.dev/"
//! api_key = "$INTENTPAY_KEY"
//! api_version = "v4"
//! timeout_secs = 15
//! webhook_url = "https://shop.example/hooks/intentpay"
//! ```
//!
//! # Environment Variables
//!
//! - `CONFIG` - Path to configuration file, read through `--config` (default: `intentpay.toml`)
//! - `INTENTPAY_API_URL` - Override `api_url`
//! - `INTENTPAY_API_KEY` - Override `api_key`
//! - `INTENTPAY_API_VERSION` - Override `api_version`

use std::path::Path;
use std::time::Duration;

use intentpay_http::constants::DEFAULT_API_URL;
use intentpay_http::{ApiClientError, ApiConfig, ApiVersion};
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "intentpay.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`DemoConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An override names an unknown API version.
    #[error(transparent)]
    Version(#[from] intentpay_http::version::UnknownApiVersion),
}

/// Top-level demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Payment API root (default: the public endpoint).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token. Supports `$VAR` / `${VAR}` expansion.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API version (default: `v2`).
    #[serde(default)]
    pub api_version: ApiVersion,

    /// Per-request timeout in seconds (default: `30`).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Webhook attached to created payments.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Secret used to sign webhook calls.
    #[serde(default)]
    pub webhook_secret: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            api_version: ApiVersion::default(),
            timeout_secs: default_timeout_secs(),
            webhook_url: None,
            webhook_secret: None,
        }
    }
}

impl DemoConfig {
    /// Loads configuration from a specific file path.
    ///
    /// A missing file yields the defaults. After parsing, string values with
    /// `$VAR` / `${VAR}` references are expanded, then the `INTENTPAY_API_*`
    /// variables override the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let content = if Path::new(path).exists() {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_owned(),
                source,
            })?
        } else {
            String::new()
        };

        let mut config = Self::parse(&content)?;
        config.apply_overrides(
            std::env::var("INTENTPAY_API_URL").ok(),
            std::env::var("INTENTPAY_API_KEY").ok(),
            std::env::var("INTENTPAY_API_VERSION").ok().as_deref(),
        )?;
        Ok(config)
    }

    /// Parses TOML after expanding environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on invalid TOML.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let expanded = expand_env_vars(content);
        Ok(toml::from_str(&expanded)?)
    }

    /// Applies command-line or environment overrides. `None` keeps the current value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Version`] if `api_version` is not a known version.
    pub fn apply_overrides(
        &mut self,
        api_url: Option<String>,
        api_key: Option<String>,
        api_version: Option<&str>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(version) = api_version.filter(|v| !v.is_empty()) {
            self.api_version = version.parse()?;
        }
        Ok(())
    }

    /// Builds the API client config.
    ///
    /// A key that still reads `$VAR` after expansion is treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::UrlParse`] if `api_url` is not a URL.
    pub fn api_config(&self) -> Result<ApiConfig, ApiClientError> {
        let mut config = ApiConfig::try_from(self.api_url.as_str())?
            .with_version(self.api_version)
            .with_timeout(Duration::from_secs(self.timeout_secs));
        if let Some(key) = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && !k.starts_with('$'))
        {
            config = config.with_api_key(key);
        }
        Ok(config)
    }
}

/// Expands `$VAR` and `${VAR}` patterns in a string from environment variables.
///
/// Unresolved variables are left as-is.
fn expand_env_vars(input: &str) -> String {
    expand_with(input, |name| std::env::var(name).ok())
}

fn expand_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }

        let braced = chars.peek() == Some(&'{');
        if braced {
            chars.next();
        }

        let mut var_name = String::new();
        while let Some(&c) = chars.peek() {
            if braced {
                if c == '}' {
                    chars.next();
                    break;
                }
            } else if !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            var_name.push(c);
            chars.next();
        }

        if var_name.is_empty() {
            result.push('$');
            if braced {
                result.push('{');
            }
        } else if let Some(val) = lookup(&var_name) {
            result.push_str(&val);
        } else if braced {
            result.push_str("${");
            result.push_str(&var_name);
            result.push('}');
        } else {
            result.push('$');
            result.push_str(&var_name);
        }
    }

    result
}
