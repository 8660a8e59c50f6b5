use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirQualityError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode response body from {0}")]
    Decode(String, #[source] reqwest::Error),
}
