use crate::utils::error::{Result, SubscriberError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.statuspage.io/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Connection settings for the Statuspage API, built once per run.
#[derive(Clone)]
pub struct StatuspageConfig {
    pub api_base: String,
    pub page_id: String,
    pub token: String,
    pub timeout_seconds: u64,
    /// Upper bound on subscriber pages fetched before giving up.
    pub max_pages: u32,
}

// token 不可出現在日誌中
impl std::fmt::Debug for StatuspageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatuspageConfig")
            .field("api_base", &self.api_base)
            .field("page_id", &self.page_id)
            .field("token", &"***")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_pages", &self.max_pages)
            .finish()
    }
}

impl StatuspageConfig {
    pub fn new(page_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_id: page_id.into(),
            token: token.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, e.g. a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| SubscriberError::MissingConfig {
                field: key.to_string(),
            })
        };

        let token = required("STATUSPAGE_TOKEN")?;
        let page_id = required("STATUSPAGE_PAGE_ID")?;

        let mut config = Self::new(page_id, token);
        if let Some(api_base) = lookup("STATUSPAGE_API_BASE") {
            config.api_base = api_base;
        }
        if let Some(raw) = lookup("STATUSPAGE_TIMEOUT_SECONDS") {
            config.timeout_seconds = parse_number("STATUSPAGE_TIMEOUT_SECONDS", &raw)?;
        }
        if let Some(raw) = lookup("STATUSPAGE_MAX_PAGES") {
            config.max_pages = parse_number("STATUSPAGE_MAX_PAGES", &raw)?;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// `{api_base}/pages/{page_id}/{resource}` with each segment percent-encoded.
    pub fn resource_url(&self, resource: &str) -> Result<Url> {
        let mut url = Url::parse(&self.api_base)?;
        url.path_segments_mut()
            .map_err(|_| SubscriberError::Config {
                message: format!("API base '{}' cannot be used as a base URL", self.api_base),
            })?
            .pop_if_empty()
            .extend(["pages", self.page_id.as_str(), resource]);
        Ok(url)
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| SubscriberError::InvalidConfigValue {
            field: field.to_string(),
            value: raw.to_string(),
            reason: "Value must be a non-negative integer".to_string(),
        })
}

impl Validate for StatuspageConfig {
    fn validate(&self) -> Result<()> {
        validate_url("STATUSPAGE_API_BASE", &self.api_base)?;
        validate_non_empty_string("STATUSPAGE_TOKEN", &self.token)?;
        validate_non_empty_string("STATUSPAGE_PAGE_ID", &self.page_id)?;
        validate_range("STATUSPAGE_TIMEOUT_SECONDS", self.timeout_seconds, 1, 600)?;
        validate_range("STATUSPAGE_MAX_PAGES", self.max_pages, 1, u32::MAX)?;

        tracing::debug!("✅ Statuspage configuration validation passed");
        Ok(())
    }
}
