//! OpenWeatherMap client for current conditions at a coordinate.
//!
//! The payload is deliberately opaque: whatever JSON the API returns is
//! attached to the record unmodified, so schema drift upstream never breaks
//! collection.

use crate::weather::error::WeatherError;
use log::debug;
use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the weather API.
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    /// Creates a client against the public API endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Creates a client against a custom endpoint. Used by tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetches current weather for a coordinate as an uninterpreted payload.
    pub async fn current(&self, lat: f64, lon: f64) -> Result<Value, WeatherError> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}",
            self.base_url, lat, lon, self.api_key
        );
        debug!("Requesting {}/weather for ({}, {})", self.base_url, lat, lon);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status { url, status });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WeatherError::Decode(url, e))
    }
}
