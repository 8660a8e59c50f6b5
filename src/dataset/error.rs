use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to build data frame")]
    Frame(#[from] PolarsError),

    #[error("Failed to serialize weather payload")]
    WeatherSerialize(#[from] serde_json::Error),

    #[error("Failed to create output file '{0}'")]
    FileCreate(PathBuf, #[source] std::io::Error),

    #[error("Failed to write output file '{0}'")]
    FileWrite(PathBuf, #[source] PolarsError),
}
