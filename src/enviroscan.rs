//! This module provides the main entry point for collecting enriched
//! air-quality records. It combines the nearest monitoring station's latest
//! readings, current weather, and nearby land-use feature counts into one
//! flat record per coordinate.

use crate::air_quality::client::AirQualityClient;
use crate::config::ScanConfig;
use crate::dataset::frame::Dataset;
use crate::enrich::enricher::{EnrichSettings, PointEnricher};
use crate::error::EnviroScanError;
use crate::grid::BoundingBox;
use crate::land_use::client::LandUseClient;
use crate::types::parameter::Parameter;
use crate::types::record::EnrichedRecord;
use crate::weather::client::WeatherClient;
use bon::bon;

/// Default grid step for bounding-box sampling, in degrees (roughly 10 km).
pub const DEFAULT_GRID_STEP: f64 = 0.10;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are degrees, WGS84 assumed; the crate performs no
/// range validation and passes values through to the upstream APIs as-is.
///
/// # Examples
///
/// ```
/// use enviroscan::LatLon;
///
/// let delhi = LatLon(28.6139, 77.2090);
/// assert_eq!(delhi.0, 28.6139); // Latitude
/// assert_eq!(delhi.1, 77.2090); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The main client for collecting enriched air-quality records.
///
/// Holds the three collaborator clients (air quality, weather, land use) and
/// the run configuration. Every operation is best-effort: expected upstream
/// failures degrade to null or zeroed fields, and only a failed station
/// lookup or weather fetch makes a point's record unavailable.
///
/// # Examples
///
/// ```rust
/// # use enviroscan::{EnviroScan, EnviroScanError, LatLon, ScanConfig};
/// # async fn run() -> Result<(), EnviroScanError> {
/// let config = ScanConfig::builder().weather_api_key("owm-key").build();
/// let client = EnviroScan::new(config);
///
/// let record = client.enrich().location(LatLon(28.6139, 77.2090)).call().await?;
/// println!("pm25 near Delhi: {:?}", record.pollutants.pm25);
/// # Ok(())
/// # }
/// ```
pub struct EnviroScan {
    air_quality: AirQualityClient,
    weather: WeatherClient,
    land_use: LandUseClient,
    config: ScanConfig,
}

#[bon]
impl EnviroScan {
    /// Creates a client from an explicit configuration.
    pub fn new(config: ScanConfig) -> Self {
        Self {
            air_quality: AirQualityClient::new(config.api_key.clone()),
            weather: WeatherClient::new(config.weather_api_key.clone()),
            land_use: LandUseClient::new(),
            config,
        }
    }

    /// Creates a client configured from the environment
    /// (see [`ScanConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns [`EnviroScanError::MissingWeatherApiKey`] when the weather key
    /// is not set.
    pub fn from_env() -> Result<Self, EnviroScanError> {
        Ok(Self::new(ScanConfig::from_env()?))
    }

    /// Builds one enriched record for a coordinate.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to enrich.
    /// * `.tracked_parameters(Vec<Parameter>)`: Optional. Overrides the
    ///   configured pollutant set for this call.
    /// * `.search_radius_m(u32)`: Optional. Overrides the configured station
    ///   search radius.
    /// * `.osm_search_distance_m(u32)`: Optional. Overrides the configured
    ///   land-use search distance.
    ///
    /// # Returns
    ///
    /// The assembled [`EnrichedRecord`]. A coordinate with no station in
    /// range still produces a record with null station and pollutant fields.
    ///
    /// # Errors
    ///
    /// Returns [`EnviroScanError::Enrich`] only for unexpected per-point
    /// failures: a failed station lookup or a failed weather fetch. Missing
    /// stations, sensors without data, failed measurement fetches, and failed
    /// land-use queries all degrade to defaulted fields instead.
    #[builder]
    pub async fn enrich(
        &self,
        location: LatLon,
        tracked_parameters: Option<Vec<Parameter>>,
        search_radius_m: Option<u32>,
        osm_search_distance_m: Option<u32>,
    ) -> Result<EnrichedRecord, EnviroScanError> {
        let settings = EnrichSettings {
            tracked_parameters: tracked_parameters
                .unwrap_or_else(|| self.config.tracked_parameters.clone()),
            search_radius_m: search_radius_m.unwrap_or(self.config.search_radius_m),
            osm_search_distance_m: osm_search_distance_m
                .unwrap_or(self.config.osm_search_distance_m),
        };
        let record = self.enricher(settings).enrich(location).await?;
        Ok(record)
    }

    /// Enriches a list of coordinates sequentially into a [`Dataset`].
    ///
    /// A point whose enrichment fails unexpectedly is logged and omitted;
    /// the run itself never fails. Records keep input order.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.points(Vec<LatLon>)`: **Required.** The coordinates to enrich.
    #[builder]
    pub async fn collect(&self, points: Vec<LatLon>) -> Dataset {
        let records = self
            .enricher(self.settings_from_config())
            .enrich_all(&points)
            .await;
        Dataset::new(records)
    }

    /// Samples every region at a fixed grid step and collects the resulting
    /// points (see [`Self::collect`]).
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.regions(Vec<BoundingBox>)`: **Required.** The sampling regions.
    /// * `.step(f64)`: Optional. Grid step in degrees. Defaults to
    ///   [`DEFAULT_GRID_STEP`].
    #[builder]
    pub async fn collect_grid(&self, regions: Vec<BoundingBox>, step: Option<f64>) -> Dataset {
        let step = step.unwrap_or(DEFAULT_GRID_STEP);
        let points: Vec<LatLon> = regions.iter().flat_map(|b| b.sample(step)).collect();
        let records = self
            .enricher(self.settings_from_config())
            .enrich_all(&points)
            .await;
        Dataset::new(records)
    }

    fn settings_from_config(&self) -> EnrichSettings {
        EnrichSettings {
            tracked_parameters: self.config.tracked_parameters.clone(),
            search_radius_m: self.config.search_radius_m,
            osm_search_distance_m: self.config.osm_search_distance_m,
        }
    }

    fn enricher(
        &self,
        settings: EnrichSettings,
    ) -> PointEnricher<'_, AirQualityClient, WeatherClient, LandUseClient> {
        PointEnricher::new(&self.air_quality, &self.weather, &self.land_use, settings)
    }
}
