//! Wire models for the OpenAQ v3 responses this crate consumes, and their
//! mapping into domain types. Fields the enrichment never reads are omitted.

use crate::types::parameter::Parameter;
use crate::types::station::{Measurement, Sensor, Station};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct LocationsResponse {
    #[serde(default)]
    pub results: Vec<LocationResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationResult {
    pub id: i64,
    pub name: Option<String>,
    /// Distance from the queried coordinate in meters. The API omits this
    /// for some providers; ranking treats it as infinite.
    pub distance: Option<f64>,
    #[serde(default)]
    pub sensors: Vec<SensorResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SensorResult {
    pub id: i64,
    pub parameter: ParameterInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParameterInfo {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeasurementsResponse {
    #[serde(default)]
    pub results: Vec<MeasurementResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeasurementResult {
    pub value: f64,
}

impl From<LocationResult> for Station {
    fn from(location: LocationResult) -> Self {
        // Sensors outside the tracked vocabulary are dropped here.
        let sensors = location
            .sensors
            .into_iter()
            .filter_map(|s| {
                Parameter::from_name(&s.parameter.name).map(|parameter| Sensor {
                    id: s.id,
                    parameter,
                })
            })
            .collect();
        Station {
            id: location.id,
            name: location.name,
            distance_m: location.distance,
            sensors,
        }
    }
}

impl From<MeasurementResult> for Measurement {
    fn from(result: MeasurementResult) -> Self {
        Measurement {
            value: result.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_maps_to_station_and_drops_unknown_parameters() {
        let json = r#"{
            "results": [{
                "id": 2178,
                "name": "Anand Vihar",
                "distance": 812.4,
                "sensors": [
                    {"id": 100, "parameter": {"name": "pm25", "units": "µg/m³"}},
                    {"id": 101, "parameter": {"name": "no2", "units": "µg/m³"}},
                    {"id": 102, "parameter": {"name": "temperature", "units": "c"}}
                ]
            }]
        }"#;
        let response: LocationsResponse = serde_json::from_str(json).unwrap();
        let station: Station = response.results.into_iter().next().unwrap().into();

        assert_eq!(station.id, 2178);
        assert_eq!(station.name.as_deref(), Some("Anand Vihar"));
        assert_eq!(station.distance_m, Some(812.4));
        assert_eq!(station.sensors.len(), 2);
        assert_eq!(station.sensors[0].parameter, Parameter::Pm25);
        assert_eq!(station.sensors[1].parameter, Parameter::No2);
    }

    #[test]
    fn location_without_distance_or_sensors_still_parses() {
        let json = r#"{"results": [{"id": 7, "name": null, "distance": null}]}"#;
        let response: LocationsResponse = serde_json::from_str(json).unwrap();
        let station: Station = response.results.into_iter().next().unwrap().into();

        assert_eq!(station.distance_m, None);
        assert!(station.sensors.is_empty());
    }

    #[test]
    fn measurements_parse_newest_first() {
        let json = r#"{"results": [{"value": 42.0, "period": {}}, {"value": 39.5}]}"#;
        let response: MeasurementsResponse = serde_json::from_str(json).unwrap();
        let values: Vec<Measurement> = response.results.into_iter().map(Into::into).collect();
        assert_eq!(values[0].value, 42.0);
    }

    #[test]
    fn empty_results_parse_as_empty() {
        let response: MeasurementsResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
