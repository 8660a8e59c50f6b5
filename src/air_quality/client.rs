//! OpenAQ v3 client: station lookup around a coordinate and latest-measurement
//! fetches per sensor.
//!
//! The free API accepts anonymous requests at a reduced rate limit; a key from
//! <https://openaq.org> is sent as the `X-API-Key` header when configured.

use crate::air_quality::error::AirQualityError;
use crate::air_quality::models::{LocationsResponse, MeasurementsResponse};
use crate::types::station::{Measurement, Station};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

const BASE_URL: &str = "https://api.openaq.org/v3";

/// Client for the air-quality API.
pub struct AirQualityClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl AirQualityClient {
    /// Creates a client against the public API endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Creates a client against a custom endpoint. Used by tests.
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Looks up monitoring stations within `radius_m` meters of a coordinate,
    /// capped at `limit` results. An empty vector is a valid outcome, distinct
    /// from a failed request.
    pub async fn lookup_stations(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
        limit: usize,
    ) -> Result<Vec<Station>, AirQualityError> {
        let url = format!(
            "{}/locations?coordinates={},{}&radius={}&limit={}",
            self.base_url, lat, lon, radius_m, limit
        );
        let response: LocationsResponse = self.get_json(url).await?;
        Ok(response.results.into_iter().map(Into::into).collect())
    }

    /// Fetches the latest measurement list for one sensor, newest first.
    /// Returns an empty vector when the sensor has no data, and an error only
    /// for transport/status/decode failures.
    pub async fn latest_measurement(
        &self,
        sensor_id: i64,
    ) -> Result<Vec<Measurement>, AirQualityError> {
        let url = format!(
            "{}/sensors/{}/measurements?limit=1&sort=desc",
            self.base_url, sensor_id
        );
        let response: MeasurementsResponse = self.get_json(url).await?;
        Ok(response.results.into_iter().map(Into::into).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, AirQualityError> {
        debug!("Requesting {}", url);
        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }
        let response = request
            .send()
            .await
            .map_err(|e| AirQualityError::NetworkRequest(url.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AirQualityError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AirQualityError::Decode(url, e))
    }
}
