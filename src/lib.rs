mod air_quality;
mod config;
mod dataset;
mod enrich;
mod enviroscan;
mod error;
mod grid;
mod land_use;
mod types;
mod weather;

pub use error::EnviroScanError;
pub use enviroscan::*;

pub use config::{ScanConfig, DEFAULT_OSM_SEARCH_DISTANCE_M, DEFAULT_SEARCH_RADIUS_M};
pub use grid::BoundingBox;

pub use types::parameter::Parameter;
pub use types::record::{EnrichedRecord, LandUseCounts, PollutantValues};
pub use types::station::{Measurement, Sensor, Station};

pub use enrich::enricher::{EnrichSettings, PointEnricher};
pub use enrich::providers::{LandUseProvider, StationProvider, WeatherProvider};

pub use air_quality::client::AirQualityClient;
pub use weather::client::WeatherClient;
pub use land_use::client::LandUseClient;

pub use dataset::export::{write_csv, write_ndjson};
pub use dataset::frame::{Dataset, SOURCE_AIR_QUALITY, SOURCE_WEATHER};

pub use air_quality::error::AirQualityError;
pub use dataset::error::DatasetError;
pub use enrich::error::EnrichError;
pub use land_use::error::LandUseError;
pub use weather::error::WeatherError;
