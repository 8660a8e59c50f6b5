//! Domain types for air-quality monitoring stations, their sensors, and the
//! measurements they report.

use crate::types::parameter::Parameter;
use serde::{Deserialize, Serialize};

/// A fixed air-quality monitoring location near a queried coordinate.
///
/// Stations come from the station-lookup collaborator, which reports the
/// distance from the query point when it can compute one. A missing distance
/// is ranked as infinitely far when the nearest station is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    /// The upstream location identifier.
    pub id: i64,
    /// Human-readable station name, when the provider reports one.
    pub name: Option<String>,
    /// Distance from the query coordinate in meters, when reported.
    pub distance_m: Option<f64>,
    /// The station's sensors, restricted to the tracked parameter vocabulary.
    pub sensors: Vec<Sensor>,
}

/// A single-parameter measurement instrument belonging to one station.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sensor {
    /// Identifier used to fetch this sensor's latest measurement.
    pub id: i64,
    /// The pollutant this sensor reports.
    pub parameter: Parameter,
}

/// One scalar reading from a sensor, the most recent at fetch time.
///
/// Measurements are never cached; every enrichment re-fetches them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The measured value in the sensor's native unit.
    pub value: f64,
}
