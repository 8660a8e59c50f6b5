//! Run configuration for the collection client.
//!
//! API keys and search parameters travel in an explicit [`ScanConfig`] value
//! rather than process-global state, so callers can run multiple differently
//! configured clients side by side.

use crate::error::EnviroScanError;
use crate::types::parameter::Parameter;
use bon::Builder;
use std::env;

/// Default station search radius around a query coordinate, in meters.
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5000;
/// Default land-use feature search distance around a query coordinate, in meters.
pub const DEFAULT_OSM_SEARCH_DISTANCE_M: u32 = 2000;

/// Configuration for an [`EnviroScan`](crate::EnviroScan) client.
///
/// Built with the generated builder; only the weather API key is required.
///
/// # Examples
///
/// ```
/// use enviroscan::{Parameter, ScanConfig};
///
/// let config = ScanConfig::builder()
///     .weather_api_key("owm-key")
///     .search_radius_m(10_000)
///     .tracked_parameters(vec![Parameter::Pm25, Parameter::No2])
///     .build();
/// assert_eq!(config.osm_search_distance_m, 2000);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ScanConfig {
    /// API key for the air-quality provider, sent as the `X-API-Key` header.
    /// Anonymous requests are attempted when absent.
    pub api_key: Option<String>,
    /// API key for the weather provider.
    #[builder(into)]
    pub weather_api_key: String,
    /// Station search radius in meters.
    #[builder(default = DEFAULT_SEARCH_RADIUS_M)]
    pub search_radius_m: u32,
    /// Land-use feature search distance in meters.
    #[builder(default = DEFAULT_OSM_SEARCH_DISTANCE_M)]
    pub osm_search_distance_m: u32,
    /// Pollutant parameters to populate per record.
    #[builder(default = Parameter::ALL.to_vec())]
    pub tracked_parameters: Vec<Parameter>,
}

impl ScanConfig {
    /// Reads configuration from the environment: `OPENAQ_API_KEY` (optional)
    /// and `OPENWEATHER_API_KEY` (required). Search parameters take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EnviroScanError::MissingWeatherApiKey`] when
    /// `OPENWEATHER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, EnviroScanError> {
        let weather_api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| EnviroScanError::MissingWeatherApiKey)?;
        Ok(Self::builder()
            .maybe_api_key(env::var("OPENAQ_API_KEY").ok())
            .weather_api_key(weather_api_key)
            .build())
    }
}
