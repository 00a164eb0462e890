//! API connection settings.
//!
//! Settings come from the environment; nothing secret has a default.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `STOCKDASH_API_BASE_URL` | `https://stocks.com.ua/api/v1` |
//! | `STOCKDASH_API_TOKEN` | unset |
//! | `STOCKDASH_TIMEOUT_MS` | `5000` |

use std::fmt::{Debug, Formatter};

use crate::http_client::DEFAULT_TIMEOUT_MS;
use crate::ValidationError;

pub const DEFAULT_BASE_URL: &str = "https://stocks.com.ua/api/v1";

pub const BASE_URL_VAR: &str = "STOCKDASH_API_BASE_URL";
pub const TOKEN_VAR: &str = "STOCKDASH_API_TOKEN";
pub const TIMEOUT_VAR: &str = "STOCKDASH_TIMEOUT_MS";

#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(base_url) = read(BASE_URL_VAR) {
            config = config.with_base_url(base_url)?;
        }
        config.token = read(TOKEN_VAR);
        if let Some(raw) = read(TIMEOUT_VAR) {
            let timeout_ms = raw
                .parse::<u64>()
                .map_err(|_| ValidationError::InvalidTimeout)?;
            config = config.with_timeout_ms(timeout_ms)?;
        }

        tracing::debug!(
            base_url = %config.base_url,
            timeout_ms = config.timeout_ms,
            has_token = config.token.is_some(),
            "loaded api config"
        );
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ValidationError> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl { value: base_url });
        }
        self.base_url = base_url.trim_end_matches('/').to_owned();
        Ok(self)
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ValidationError> {
        if timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn ticker_url(&self) -> String {
        format!("{}/ticker", self.base_url)
    }
}

impl Debug for ApiConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
