//! Configuration module
//!
//! Connection settings for the Shade API: the API key, both hosts and the
//! HTTP timeout. Values come from the environment (and a `.env` file when
//! present).

use std::env;
use std::fmt;

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_FS_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::error::{ShadeError, ShadeResult};

/// Settings needed to talk to the Shade API.
#[derive(Clone)]
pub struct ShadeConfig {
    /// Sent verbatim as the `Authorization` header on the API host
    pub api_key: String,
    pub api_base_url: String,
    pub fs_base_url: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for ShadeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadeConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("fs_base_url", &self.fs_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ShadeConfig {
    /// Config pointing at the production hosts.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            fs_base_url: DEFAULT_FS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_fs_base_url(mut self, url: impl Into<String>) -> Self {
        self.fs_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Load from SHADE_API_KEY, SHADE_API_URL, SHADE_FS_URL and SHADE_HTTP_TIMEOUT_SECS.
    pub fn from_env() -> ShadeResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> ShadeResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("SHADE_API_KEY")
            .ok_or_else(|| ShadeError::Config("Missing API key. Set SHADE_API_KEY".to_string()))?;

        let api_base_url =
            lookup("SHADE_API_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let fs_base_url = lookup("SHADE_FS_URL").unwrap_or_else(|| DEFAULT_FS_BASE_URL.to_string());

        let timeout_secs = match lookup("SHADE_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ShadeError::Config(format!(
                    "SHADE_HTTP_TIMEOUT_SECS must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let config = Self::new(api_key)
            .with_api_base_url(api_base_url)
            .with_fs_base_url(fs_base_url)
            .with_timeout_secs(timeout_secs);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ShadeResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(ShadeError::Config("SHADE_API_KEY must not be empty".to_string()));
        }

        for (name, url) in [
            ("SHADE_API_URL", &self.api_base_url),
            ("SHADE_FS_URL", &self.fs_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ShadeError::Config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    name, url
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ShadeError::Config(
                "SHADE_HTTP_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
