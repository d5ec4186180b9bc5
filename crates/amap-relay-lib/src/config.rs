//! Process configuration for the relay.

use std::env;
use std::fmt;

use crate::error::{Error, Result};

/// Environment variable holding the provider API key.
pub const AMAP_KEY_ENV: &str = "AMAP_KEY";

/// Environment variable overriding the provider base URL.
pub const AMAP_BASE_URL_ENV: &str = "AMAP_BASE_URL";

/// Default provider base URL.
pub const DEFAULT_BASE_URL: &str = "https://restapi.amap.com/v3";

/// Immutable provider settings, loaded once at startup and injected into the
/// upstream client.
#[derive(Clone)]
pub struct Settings {
    api_key: String,
    base_url: String,
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// `AMAP_KEY` is required; a missing or empty value fails here rather
    /// than as an upstream auth error on the first provider call.
    /// `AMAP_BASE_URL` is optional and defaults to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var(AMAP_KEY_ENV).ok(), env::var(AMAP_BASE_URL_ENV).ok())
    }

    /// Build settings from explicit values, bypassing the environment.
    ///
    /// Useful for tests or embedders that resolve configuration themselves.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn from_vars(api_key: Option<String>, base_url: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)?;

        // Trailing slashes are trimmed so request paths join cleanly.
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// The provider API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The provider base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_an_error() {
        let result = Settings::from_vars(None, None);
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_empty_key_is_an_error() {
        let result = Settings::from_vars(Some("   ".to_string()), None);
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_base_url_defaults() {
        let settings = Settings::from_vars(Some("abc123".to_string()), None).unwrap();
        assert_eq!(settings.api_key(), "abc123");
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override() {
        let settings = Settings::from_vars(
            Some("abc123".to_string()),
            Some("https://example.test/v3".to_string()),
        )
        .unwrap();
        assert_eq!(settings.base_url(), "https://example.test/v3");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let settings = Settings::from_vars(
            Some("abc123".to_string()),
            Some("https://example.test/v3/".to_string()),
        )
        .unwrap();
        assert_eq!(settings.base_url(), "https://example.test/v3");
    }

    #[test]
    fn test_empty_base_url_falls_back_to_default() {
        let settings =
            Settings::from_vars(Some("abc123".to_string()), Some("  ".to_string())).unwrap();
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = Settings::new("secret-key", DEFAULT_BASE_URL);
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
