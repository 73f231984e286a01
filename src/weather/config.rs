// src/weather/config.rs

use std::{env, fmt};
use url::Url;

use crate::error::WeatherError;

pub const DEFAULT_ENDPOINT: &str = "http://api.weatherapi.com/v1/forecast.json";
pub const API_KEY_VAR: &str = "API_KEY";
/// Optional override for the forecast endpoint.
pub const ENDPOINT_VAR: &str = "WEATHER_API_URL";

/// Settings for the forecast client, resolved once at startup.
#[derive(Clone)]
pub struct WeatherConfig {
    api_key: String,
    endpoint: Url,
}

impl WeatherConfig {
    pub fn new(api_key: impl Into<String>, endpoint: &str) -> Result<Self, WeatherError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }
        let endpoint = Url::parse(endpoint).map_err(|source| WeatherError::Endpoint {
            url: endpoint.to_string(),
            source,
        })?;
        Ok(Self { api_key, endpoint })
    }

    /// Read the config from the process environment, loading `.env` first if there is one.
    pub fn from_env() -> Result<Self, WeatherError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, WeatherError> {
        let api_key = lookup(API_KEY_VAR).ok_or(WeatherError::MissingApiKey)?;
        let endpoint = lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(api_key, &endpoint)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn uses_default_endpoint() {
        let cfg = WeatherConfig::from_lookup(lookup_from(&[("API_KEY", "abc123")])).unwrap();
        assert_eq!(cfg.api_key(), "abc123");
        assert_eq!(cfg.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn endpoint_can_be_overridden() {
        let cfg = WeatherConfig::from_lookup(lookup_from(&[
            ("API_KEY", "abc123"),
            ("WEATHER_API_URL", "http://127.0.0.1:9000/v1/forecast.json"),
        ]))
        .unwrap();
        assert_eq!(cfg.endpoint().port(), Some(9000));
    }

    #[test]
    fn missing_or_blank_key_fails_fast() {
        let missing = WeatherConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(missing, WeatherError::MissingApiKey));

        let blank = WeatherConfig::from_lookup(lookup_from(&[("API_KEY", "  ")])).unwrap_err();
        assert!(matches!(blank, WeatherError::MissingApiKey));
    }

    #[test]
    fn bad_endpoint_is_rejected() {
        let err = WeatherConfig::new("k", "not a url").unwrap_err();
        assert!(matches!(err, WeatherError::Endpoint { .. }));
    }

    #[test]
    fn debug_output_hides_key() {
        let cfg = WeatherConfig::new("super-secret", DEFAULT_ENDPOINT).unwrap();
        assert!(!format!("{cfg:?}").contains("super-secret"));
    }
}
