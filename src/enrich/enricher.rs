//! The per-point enrichment routine: nearest station, latest readings for the
//! tracked pollutants, current weather, and nearby land-use counts, merged
//! into one flat record.

use crate::enrich::error::EnrichError;
use crate::enrich::providers::{LandUseProvider, StationProvider, WeatherProvider};
use crate::enviroscan::LatLon;
use crate::types::parameter::Parameter;
use crate::types::record::{EnrichedRecord, LandUseCounts, PollutantValues};
use crate::types::station::Station;
use log::{info, warn};
use ordered_float::OrderedFloat;

/// Fixed cap on the station lookup result count.
pub(crate) const STATION_RESULT_LIMIT: usize = 10;

/// Per-call parameters of the enrichment routine.
#[derive(Debug, Clone)]
pub struct EnrichSettings {
    /// Pollutants to populate per record.
    pub tracked_parameters: Vec<Parameter>,
    /// Station search radius in meters.
    pub search_radius_m: u32,
    /// Land-use feature search distance in meters.
    pub osm_search_distance_m: u32,
}

impl Default for EnrichSettings {
    fn default() -> Self {
        Self {
            tracked_parameters: Parameter::ALL.to_vec(),
            search_radius_m: crate::config::DEFAULT_SEARCH_RADIUS_M,
            osm_search_distance_m: crate::config::DEFAULT_OSM_SEARCH_DISTANCE_M,
        }
    }
}

/// Produces one [`EnrichedRecord`] per coordinate from the three collaborator
/// seams.
///
/// Expected failure modes never surface to the caller: a missing station, a
/// sensor without data, a failed measurement fetch, or a failed land-use
/// query each degrade to a null or zeroed field and the record is still
/// produced. Only a failed station *lookup* or a failed weather fetch is
/// returned as an [`EnrichError`], for the outer collection loop to log and
/// skip.
pub struct PointEnricher<'a, S, W, L> {
    stations: &'a S,
    weather: &'a W,
    land_use: &'a L,
    settings: EnrichSettings,
}

impl<'a, S, W, L> PointEnricher<'a, S, W, L>
where
    S: StationProvider,
    W: WeatherProvider,
    L: LandUseProvider,
{
    pub fn new(stations: &'a S, weather: &'a W, land_use: &'a L, settings: EnrichSettings) -> Self {
        Self {
            stations,
            weather,
            land_use,
            settings,
        }
    }

    /// Builds the record for one coordinate.
    ///
    /// Issues one station lookup, up to one measurement fetch per tracked
    /// sensor of the selected station, one weather fetch, and one land-use
    /// query, strictly in sequence. Nothing is retried and nothing is cached.
    pub async fn enrich(&self, point: LatLon) -> Result<EnrichedRecord, EnrichError> {
        let LatLon(lat, lon) = point;

        let stations = self
            .stations
            .lookup_stations(lat, lon, self.settings.search_radius_m, STATION_RESULT_LIMIT)
            .await
            .map_err(EnrichError::StationLookup)?;

        let mut pollutants = PollutantValues::default();
        let (station_id, station_name) = match select_nearest(&stations) {
            None => (None, None),
            Some(station) => {
                self.fetch_readings(station, &mut pollutants).await;
                (Some(station.id), station.name.clone())
            }
        };

        let weather = self.weather.current(lat, lon).await?;

        let land_use = match self
            .land_use
            .count_features(lat, lon, self.settings.osm_search_distance_m)
            .await
        {
            Ok(counts) => counts,
            Err(e) => {
                warn!("Land-use query failed at ({}, {}): {}", lat, lon, e);
                LandUseCounts::default()
            }
        };

        Ok(EnrichedRecord {
            latitude: lat,
            longitude: lon,
            station_id,
            station_name,
            pollutants,
            weather,
            land_use,
        })
    }

    /// Enriches every point in order, logging and omitting any point whose
    /// enrichment fails unexpectedly. Surviving records keep input order.
    pub async fn enrich_all(&self, points: &[LatLon]) -> Vec<EnrichedRecord> {
        let mut records = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            info!(
                "Fetching point {}/{}: ({}, {})",
                index + 1,
                points.len(),
                point.0,
                point.1
            );
            match self.enrich(*point).await {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping point ({}, {}): {}", point.0, point.1, e),
            }
        }
        records
    }

    /// Fetches the latest value for every tracked sensor of `station`. Each
    /// fetch is independent; a failure leaves that parameter null and moves
    /// on to the next sensor.
    async fn fetch_readings(&self, station: &Station, pollutants: &mut PollutantValues) {
        for sensor in &station.sensors {
            if !self.settings.tracked_parameters.contains(&sensor.parameter) {
                continue;
            }
            match self.stations.latest_measurement(sensor.id).await {
                Ok(measurements) => {
                    if let Some(latest) = measurements.first() {
                        pollutants.set(sensor.parameter, latest.value);
                    }
                }
                Err(e) => {
                    warn!(
                        "Measurement fetch failed for sensor {} ({}) at station {}: {}",
                        sensor.id, sensor.parameter, station.id, e
                    );
                }
            }
        }
    }
}

/// Selects the station with minimum distance; an absent distance ranks as
/// infinite, and the first of several equal minima wins.
pub(crate) fn select_nearest(stations: &[Station]) -> Option<&Station> {
    let mut best: Option<(&Station, OrderedFloat<f64>)> = None;
    for station in stations {
        let distance = OrderedFloat(station.distance_m.unwrap_or(f64::INFINITY));
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((station, distance)),
        }
    }
    best.map(|(station, _)| station)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::air_quality::error::AirQualityError;
    use crate::land_use::error::LandUseError;
    use crate::types::record::EnrichedRecord;
    use crate::types::station::{Measurement, Sensor};
    use crate::weather::error::WeatherError;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    enum SensorOutcome {
        Values(Vec<f64>),
        Empty,
        Fail,
    }

    #[derive(Default)]
    struct FakeStations {
        stations: Vec<Station>,
        outcomes: HashMap<i64, SensorOutcome>,
        fail_lookup: bool,
        fail_on_lat: Option<f64>,
        fetched: Mutex<Vec<i64>>,
    }

    impl StationProvider for FakeStations {
        fn lookup_stations(
            &self,
            lat: f64,
            _lon: f64,
            _radius_m: u32,
            _limit: usize,
        ) -> impl Future<Output = Result<Vec<Station>, AirQualityError>> + Send {
            let result = if self.fail_lookup || self.fail_on_lat == Some(lat) {
                Err(AirQualityError::Status {
                    url: "http://fake/locations".into(),
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                })
            } else {
                Ok(self.stations.clone())
            };
            async move { result }
        }

        fn latest_measurement(
            &self,
            sensor_id: i64,
        ) -> impl Future<Output = Result<Vec<Measurement>, AirQualityError>> + Send {
            self.fetched.lock().unwrap().push(sensor_id);
            let result = match self.outcomes.get(&sensor_id) {
                Some(SensorOutcome::Values(values)) => {
                    Ok(values.iter().map(|v| Measurement { value: *v }).collect())
                }
                Some(SensorOutcome::Empty) | None => Ok(vec![]),
                Some(SensorOutcome::Fail) => Err(AirQualityError::Status {
                    url: format!("http://fake/sensors/{sensor_id}/measurements"),
                    status: StatusCode::TOO_MANY_REQUESTS,
                }),
            };
            async move { result }
        }
    }

    #[derive(Default)]
    struct FakeWeather {
        fail: bool,
    }

    impl WeatherProvider for FakeWeather {
        fn current(
            &self,
            lat: f64,
            lon: f64,
        ) -> impl Future<Output = Result<Value, WeatherError>> + Send {
            let result = if self.fail {
                Err(WeatherError::Status {
                    url: "http://fake/weather".into(),
                    status: StatusCode::UNAUTHORIZED,
                })
            } else {
                Ok(json!({"coord": {"lat": lat, "lon": lon}, "main": {"temp": 301.2}}))
            };
            async move { result }
        }
    }

    struct FakeLandUse {
        result: Result<LandUseCounts, ()>,
    }

    impl Default for FakeLandUse {
        fn default() -> Self {
            Self {
                result: Ok(LandUseCounts {
                    industrial: 3,
                    farmland: 1,
                    waste_disposal: 0,
                    recycling: 2,
                }),
            }
        }
    }

    impl LandUseProvider for FakeLandUse {
        fn count_features(
            &self,
            _lat: f64,
            _lon: f64,
            _distance_m: u32,
        ) -> impl Future<Output = Result<LandUseCounts, LandUseError>> + Send {
            let result = self.result.map_err(|_| LandUseError::Status {
                url: "http://fake/interpreter".into(),
                status: StatusCode::GATEWAY_TIMEOUT,
            });
            async move { result }
        }
    }

    /// Owns the three fakes so a `PointEnricher` can borrow them per call.
    #[derive(Default)]
    struct Fixture {
        stations: FakeStations,
        weather: FakeWeather,
        land_use: FakeLandUse,
        settings: Option<EnrichSettings>,
    }

    impl Fixture {
        async fn enrich(&self, point: LatLon) -> Result<EnrichedRecord, EnrichError> {
            let settings = self.settings.clone().unwrap_or_default();
            PointEnricher::new(&self.stations, &self.weather, &self.land_use, settings)
                .enrich(point)
                .await
        }
    }

    fn station(id: i64, name: &str, distance_m: Option<f64>, sensors: Vec<Sensor>) -> Station {
        Station {
            id,
            name: Some(name.to_string()),
            distance_m,
            sensors,
        }
    }

    #[tokio::test]
    async fn selects_station_with_minimum_distance() {
        let fixture = Fixture {
            stations: FakeStations {
                stations: vec![
                    station(1, "far", Some(800.0), vec![]),
                    station(2, "near", Some(300.0), vec![]),
                ],
                ..Default::default()
            },
            ..Default::default()
        };

        let record = fixture.enrich(LatLon(28.6, 77.2)).await.unwrap();
        assert_eq!(record.station_id, Some(2));
        assert_eq!(record.station_name.as_deref(), Some("near"));
    }

    #[tokio::test]
    async fn absent_distance_ranks_as_infinite() {
        let fixture = Fixture {
            stations: FakeStations {
                stations: vec![
                    station(1, "unknown-distance", None, vec![]),
                    station(2, "measured", Some(500.0), vec![]),
                ],
                ..Default::default()
            },
            ..Default::default()
        };

        let record = fixture.enrich(LatLon(28.6, 77.2)).await.unwrap();
        assert_eq!(record.station_id, Some(2));
    }

    #[test]
    fn tie_on_distance_keeps_lookup_order() {
        let stations = vec![
            station(1, "first", Some(250.0), vec![]),
            station(2, "second", Some(250.0), vec![]),
        ];
        assert_eq!(select_nearest(&stations).unwrap().id, 1);
    }

    #[test]
    fn all_distances_absent_keeps_first_station() {
        let stations = vec![station(7, "a", None, vec![]), station(8, "b", None, vec![])];
        assert_eq!(select_nearest(&stations).unwrap().id, 7);
    }

    #[tokio::test]
    async fn empty_lookup_yields_null_station_record_with_weather() {
        let fixture = Fixture::default();

        let record = fixture.enrich(LatLon(0.0, 160.0)).await.unwrap();
        assert_eq!(record.station_id, None);
        assert_eq!(record.station_name, None);
        for p in Parameter::ALL {
            assert_eq!(record.pollutants.get(p), None);
        }
        assert_eq!(record.weather["main"]["temp"], json!(301.2));
        assert_eq!(record.land_use.industrial, 3);
    }

    #[tokio::test]
    async fn sensor_failures_degrade_per_parameter() {
        let sensors = vec![
            Sensor {
                id: 10,
                parameter: Parameter::Pm25,
            },
            Sensor {
                id: 11,
                parameter: Parameter::No2,
            },
            Sensor {
                id: 12,
                parameter: Parameter::So2,
            },
        ];
        let fixture = Fixture {
            stations: FakeStations {
                stations: vec![station(1, "only", Some(100.0), sensors)],
                outcomes: HashMap::from([
                    (10, SensorOutcome::Values(vec![42.0, 39.5])),
                    (11, SensorOutcome::Empty),
                    (12, SensorOutcome::Fail),
                ]),
                ..Default::default()
            },
            ..Default::default()
        };

        let record = fixture.enrich(LatLon(28.6, 77.2)).await.unwrap();
        assert_eq!(record.pollutants.pm25, Some(42.0));
        assert_eq!(record.pollutants.no2, None);
        assert_eq!(record.pollutants.so2, None);
        // A failed sensor must not block the others.
        assert_eq!(*fixture.stations.fetched.lock().unwrap(), vec![10, 11, 12]);
    }

    #[tokio::test]
    async fn untracked_parameters_are_not_fetched() {
        let sensors = vec![
            Sensor {
                id: 20,
                parameter: Parameter::Pm25,
            },
            Sensor {
                id: 21,
                parameter: Parameter::O3,
            },
        ];
        let fixture = Fixture {
            stations: FakeStations {
                stations: vec![station(1, "only", Some(100.0), sensors)],
                outcomes: HashMap::from([
                    (20, SensorOutcome::Values(vec![12.5])),
                    (21, SensorOutcome::Values(vec![80.0])),
                ]),
                ..Default::default()
            },
            settings: Some(EnrichSettings {
                tracked_parameters: vec![Parameter::Pm25],
                ..EnrichSettings::default()
            }),
            ..Default::default()
        };

        let record = fixture.enrich(LatLon(28.6, 77.2)).await.unwrap();
        assert_eq!(record.pollutants.pm25, Some(12.5));
        assert_eq!(record.pollutants.o3, None);
        assert_eq!(*fixture.stations.fetched.lock().unwrap(), vec![20]);
    }

    #[tokio::test]
    async fn land_use_failure_zeroes_counts_only() {
        let fixture = Fixture {
            stations: FakeStations {
                stations: vec![station(
                    1,
                    "only",
                    Some(100.0),
                    vec![Sensor {
                        id: 30,
                        parameter: Parameter::Pm10,
                    }],
                )],
                outcomes: HashMap::from([(30, SensorOutcome::Values(vec![55.0]))]),
                ..Default::default()
            },
            land_use: FakeLandUse { result: Err(()) },
            ..Default::default()
        };

        let record = fixture.enrich(LatLon(28.6, 77.2)).await.unwrap();
        assert_eq!(record.land_use, LandUseCounts::default());
        // The rest of the record is unaffected.
        assert_eq!(record.station_id, Some(1));
        assert_eq!(record.pollutants.pm10, Some(55.0));
    }

    #[tokio::test]
    async fn lookup_failure_is_an_error() {
        let fixture = Fixture {
            stations: FakeStations {
                fail_lookup: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let result = fixture.enrich(LatLon(28.6, 77.2)).await;
        assert!(matches!(result, Err(EnrichError::StationLookup(_))));
    }

    #[tokio::test]
    async fn enrich_all_skips_failing_points_and_keeps_order() {
        let fixture = Fixture {
            stations: FakeStations {
                stations: vec![station(1, "only", Some(100.0), vec![])],
                fail_on_lat: Some(99.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let points = [LatLon(0.0, 0.0), LatLon(99.0, 0.0), LatLon(1.0, 1.0)];

        let settings = fixture.settings.clone().unwrap_or_default();
        let enricher = PointEnricher::new(
            &fixture.stations,
            &fixture.weather,
            &fixture.land_use,
            settings,
        );
        let records = enricher.enrich_all(&points).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].latitude, 0.0);
        assert_eq!(records[1].latitude, 1.0);
    }

    #[tokio::test]
    async fn weather_failure_is_an_error() {
        let fixture = Fixture {
            weather: FakeWeather { fail: true },
            ..Default::default()
        };

        let result = fixture.enrich(LatLon(28.6, 77.2)).await;
        assert!(matches!(result, Err(EnrichError::Weather(_))));
    }
}
