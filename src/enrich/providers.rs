//! Collaborator seams the enricher depends on.
//!
//! The concrete HTTP clients implement these traits; tests substitute
//! in-memory fakes so enrichment semantics can be pinned without network
//! access.

use crate::air_quality::client::AirQualityClient;
use crate::air_quality::error::AirQualityError;
use crate::land_use::client::LandUseClient;
use crate::land_use::error::LandUseError;
use crate::types::record::LandUseCounts;
use crate::types::station::{Measurement, Station};
use crate::weather::client::WeatherClient;
use crate::weather::error::WeatherError;
use serde_json::Value;
use std::future::Future;

/// Station lookup and per-sensor latest-measurement fetch.
pub trait StationProvider {
    /// Stations within `radius_m` of the coordinate, at most `limit` of them.
    fn lookup_stations(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Station>, AirQualityError>> + Send;

    /// Latest measurements for one sensor, newest first; empty on no data.
    fn latest_measurement(
        &self,
        sensor_id: i64,
    ) -> impl Future<Output = Result<Vec<Measurement>, AirQualityError>> + Send;
}

/// Current-weather fetch for a coordinate.
pub trait WeatherProvider {
    fn current(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl Future<Output = Result<Value, WeatherError>> + Send;
}

/// Land-use/amenity feature counting around a coordinate.
pub trait LandUseProvider {
    fn count_features(
        &self,
        lat: f64,
        lon: f64,
        distance_m: u32,
    ) -> impl Future<Output = Result<LandUseCounts, LandUseError>> + Send;
}

impl StationProvider for AirQualityClient {
    fn lookup_stations(
        &self,
        lat: f64,
        lon: f64,
        radius_m: u32,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Station>, AirQualityError>> + Send {
        AirQualityClient::lookup_stations(self, lat, lon, radius_m, limit)
    }

    fn latest_measurement(
        &self,
        sensor_id: i64,
    ) -> impl Future<Output = Result<Vec<Measurement>, AirQualityError>> + Send {
        AirQualityClient::latest_measurement(self, sensor_id)
    }
}

impl WeatherProvider for WeatherClient {
    fn current(
        &self,
        lat: f64,
        lon: f64,
    ) -> impl Future<Output = Result<Value, WeatherError>> + Send {
        WeatherClient::current(self, lat, lon)
    }
}

impl LandUseProvider for LandUseClient {
    fn count_features(
        &self,
        lat: f64,
        lon: f64,
        distance_m: u32,
    ) -> impl Future<Output = Result<LandUseCounts, LandUseError>> + Send {
        LandUseClient::count_features(self, lat, lon, distance_m)
    }
}
