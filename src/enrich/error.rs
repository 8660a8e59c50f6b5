use crate::air_quality::error::AirQualityError;
use crate::weather::error::WeatherError;
use thiserror::Error;

/// Unexpected per-point failures: the ones `enrich` cannot degrade to a
/// defaulted field. The bulk collector catches these, logs them, and omits
/// the point's record.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error("Station lookup failed")]
    StationLookup(#[source] AirQualityError),

    #[error("Weather fetch failed")]
    Weather(#[from] WeatherError),
}
