//! Overpass API client counting land-use and amenity features around a point.
//!
//! One query fetches every tracked tag within the search distance; elements
//! are tallied locally by tag value. Geometry is never requested, only tags.

use crate::land_use::error::LandUseError;
use crate::types::record::LandUseCounts;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

const BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Client for the OpenStreetMap feature query API.
pub struct LandUseClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl Default for LandUseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LandUseClient {
    /// Creates a client against the public Overpass endpoint.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a client against a custom endpoint. Used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Counts tracked features within `distance_m` meters of a coordinate.
    ///
    /// The result distinguishes "no features found" (zero counts) from a
    /// failed query (an error); collapsing failures to zeros is the
    /// enricher's concern, not this client's.
    pub async fn count_features(
        &self,
        lat: f64,
        lon: f64,
        distance_m: u32,
    ) -> Result<LandUseCounts, LandUseError> {
        let query = build_query(lat, lon, distance_m);
        debug!("Querying Overpass around ({}, {})", lat, lon);

        let response = self
            .client
            .post(&self.base_url)
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| LandUseError::NetworkRequest(self.base_url.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LandUseError::Status {
                url: self.base_url.clone(),
                status,
            });
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| LandUseError::Decode(self.base_url.clone(), e))?;

        Ok(tally(&body.elements))
    }
}

fn build_query(lat: f64, lon: f64, distance_m: u32) -> String {
    let around = format!("(around:{},{},{})", distance_m, lat, lon);
    format!(
        "[out:json][timeout:25];(\
         nwr[\"landuse\"=\"industrial\"]{around};\
         nwr[\"landuse\"=\"farmland\"]{around};\
         nwr[\"landuse\"=\"farmyard\"]{around};\
         nwr[\"amenity\"=\"waste_disposal\"]{around};\
         nwr[\"amenity\"=\"recycling\"]{around};\
         );out tags;"
    )
}

fn tally(elements: &[OverpassElement]) -> LandUseCounts {
    let mut counts = LandUseCounts::default();
    for element in elements {
        match element.tags.get("landuse").map(String::as_str) {
            Some("industrial") => counts.industrial += 1,
            Some("farmland") | Some("farmyard") => counts.farmland += 1,
            _ => {}
        }
        match element.tags.get("amenity").map(String::as_str) {
            Some("waste_disposal") => counts.waste_disposal += 1,
            Some("recycling") => counts.recycling += 1,
            _ => {}
        }
    }
    counts
}
