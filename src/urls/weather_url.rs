//! Request construction for the current-weather endpoint.

use crate::types::lat_lon::LatLon;
use crate::urls::error::{CredentialError, UrlError};
use crate::utils::{parse_endpoint, read_env_secret};
use reqwest::Url;

pub const WEATHER_API_ENDPOINT: &str = "http://api.weatherapi.com/v1/current.json";
pub const WEATHER_API_KEY_VAR: &str = "WEATHER_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherUrlBuilder {
    endpoint: String,
    key_var: String,
}

impl Default for WeatherUrlBuilder {
    fn default() -> Self {
        Self {
            endpoint: WEATHER_API_ENDPOINT.to_string(),
            key_var: WEATHER_API_KEY_VAR.to_string(),
        }
    }
}

impl WeatherUrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_key_var(mut self, key_var: impl Into<String>) -> Self {
        self.key_var = key_var.into();
        self
    }

    /// Reads the API key from the environment.
    pub fn api_key(&self) -> Result<String, CredentialError> {
        read_env_secret(&self.key_var)
    }

    /// Builds `endpoint?key=<key>&q=<lat>,<lon>` for the given coordinate.
    pub fn get_url(&self, location: LatLon) -> Result<Url, UrlError> {
        let api_key = self.api_key()?;
        let mut url = parse_endpoint(&self.endpoint)?;
        url.query_pairs_mut().append_pair("key", &api_key);
        let query = format!(
            "{}&q={}",
            url.query().unwrap_or_default(),
            location.to_query()
        );
        url.set_query(Some(&query));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_url() {
        std::env::set_var("GEOSTREAM_WEATHER_TEST_WEATHER_KEY", "abc123");
        let builder = WeatherUrlBuilder::new().with_key_var("GEOSTREAM_WEATHER_TEST_WEATHER_KEY");
        let url = builder.get_url(LatLon(33.5, -118.25)).unwrap();
        assert_eq!(
            url.as_str(),
            format!("{}?key=abc123&q=33.5,-118.25", WEATHER_API_ENDPOINT)
        );
    }

    #[test]
    fn test_get_url_without_key() {
        let builder =
            WeatherUrlBuilder::new().with_key_var("GEOSTREAM_WEATHER_TEST_UNSET_WEATHER_KEY");
        assert!(matches!(
            builder.get_url(LatLon(0.0, 0.0)),
            Err(UrlError::Credential(CredentialError::MissingCredential { .. }))
        ));
        assert!(builder.api_key().is_err());
    }

    #[test]
    fn test_key_is_encoded() {
        std::env::set_var("GEOSTREAM_WEATHER_TEST_ODD_WEATHER_KEY", "a&b c");
        let builder = WeatherUrlBuilder::new()
            .with_key_var("GEOSTREAM_WEATHER_TEST_ODD_WEATHER_KEY")
            .with_endpoint("http://localhost:9000/current.json");
        let url = builder.get_url(LatLon(1.0, 2.0)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/current.json?key=a%26b+c&q=1,2"
        );
    }
}
