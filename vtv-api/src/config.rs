//! Server configuration from environment variables

use std::env;

use vtv_core::{VtvError, VtvResult};

/// Runtime configuration of the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// NewsAPI key; the provider is disabled without it
    pub newsapi_key: Option<String>,
    /// GNews key; the provider is disabled without it
    pub gnews_api_key: Option<String>,
    /// LibreTranslate base URL; titles stay untranslated without it
    pub translate_api_url: Option<String>,
    pub translate_api_key: Option<String>,
    pub translate_target: String,
    /// Serve sample articles when every provider fails
    pub mock_fallback: bool,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            newsapi_key: None,
            gnews_api_key: None,
            translate_api_url: None,
            translate_api_key: None,
            translate_target: "vi".to_string(),
            mock_fallback: true,
            server_port: 3001,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// Reads NEWSAPI_KEY, GNEWS_API_KEY, TRANSLATE_API_URL, TRANSLATE_API_KEY,
    /// TRANSLATE_TARGET, MOCK_FALLBACK and SERVER_PORT. Blank values count as unset.
    pub fn from_env() -> VtvResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> VtvResult<Self> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let mock_fallback = match var("MOCK_FALLBACK") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| VtvError::config(format!("MOCK_FALLBACK must be true or false, got '{}'", raw)))?,
            None => defaults.mock_fallback,
        };

        let server_port = match var("SERVER_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| VtvError::config(format!("SERVER_PORT must be a port number, got '{}'", raw)))?,
            None => defaults.server_port,
        };

        Ok(Self {
            newsapi_key: var("NEWSAPI_KEY"),
            gnews_api_key: var("GNEWS_API_KEY"),
            translate_api_url: var("TRANSLATE_API_URL"),
            translate_api_key: var("TRANSLATE_API_KEY"),
            translate_target: var("TRANSLATE_TARGET").unwrap_or(defaults.translate_target),
            mock_fallback,
            server_port,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> VtvResult<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(load(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("NEWSAPI_KEY", "na-key"),
            ("GNEWS_API_KEY", "gn-key"),
            ("TRANSLATE_API_URL", "http://localhost:5000"),
            ("TRANSLATE_TARGET", "en"),
            ("MOCK_FALLBACK", "false"),
            ("SERVER_PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(config.newsapi_key.as_deref(), Some("na-key"));
        assert_eq!(config.gnews_api_key.as_deref(), Some("gn-key"));
        assert_eq!(config.translate_api_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(config.translate_api_key, None);
        assert_eq!(config.translate_target, "en");
        assert!(!config.mock_fallback);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = load(&[("NEWSAPI_KEY", "  "), ("TRANSLATE_TARGET", "")]).unwrap();
        assert_eq!(config.newsapi_key, None);
        assert_eq!(config.translate_target, "vi");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("MOCK_FALLBACK", "sometimes")]),
            Err(VtvError::Config(_))
        ));
        assert!(matches!(
            load(&[("SERVER_PORT", "99999")]),
            Err(VtvError::Config(_))
        ));
    }
}
