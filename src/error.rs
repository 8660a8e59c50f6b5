use crate::dataset::error::DatasetError;
use crate::enrich::error::EnrichError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnviroScanError {
    #[error(transparent)]
    Enrich(#[from] EnrichError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("OPENWEATHER_API_KEY is not set")]
    MissingWeatherApiKey,
}
