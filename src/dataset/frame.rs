//! Turns collected records into a tabular dataset with provenance columns.

use crate::dataset::error::DatasetError;
use crate::types::record::EnrichedRecord;
use chrono::{DateTime, Utc};
use polars::prelude::*;

/// Constant provenance label for the air-quality columns.
pub const SOURCE_AIR_QUALITY: &str = "OpenAQ";
/// Constant provenance label for the weather column.
pub const SOURCE_WEATHER: &str = "OpenWeatherMap";

/// A collection run's records plus the timestamp they were collected at.
///
/// Converts to a Polars [`DataFrame`] with one row per record: the coordinate,
/// station identity, pollutant readings, the weather payload serialized as a
/// JSON string, the four land-use counts, and constant provenance columns.
pub struct Dataset {
    records: Vec<EnrichedRecord>,
    collected_at: DateTime<Utc>,
}

impl Dataset {
    /// Wraps collected records, stamping the current time as the collection
    /// timestamp for the whole run.
    pub fn new(records: Vec<EnrichedRecord>) -> Self {
        Self {
            records,
            collected_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn collected_at(&self) -> DateTime<Utc> {
        self.collected_at
    }

    /// Materializes the records as a [`DataFrame`].
    pub fn to_frame(&self) -> Result<DataFrame, DatasetError> {
        let n = self.records.len();
        let mut latitude = Vec::with_capacity(n);
        let mut longitude = Vec::with_capacity(n);
        let mut station_id = Vec::with_capacity(n);
        let mut station_name = Vec::with_capacity(n);
        let mut pm25 = Vec::with_capacity(n);
        let mut pm10 = Vec::with_capacity(n);
        let mut no2 = Vec::with_capacity(n);
        let mut co = Vec::with_capacity(n);
        let mut so2 = Vec::with_capacity(n);
        let mut o3 = Vec::with_capacity(n);
        let mut weather = Vec::with_capacity(n);
        let mut num_industrial = Vec::with_capacity(n);
        let mut num_farmland = Vec::with_capacity(n);
        let mut num_dumpsites = Vec::with_capacity(n);
        let mut num_recycling = Vec::with_capacity(n);

        for record in &self.records {
            latitude.push(record.latitude);
            longitude.push(record.longitude);
            station_id.push(record.station_id);
            station_name.push(record.station_name.clone());
            pm25.push(record.pollutants.pm25);
            pm10.push(record.pollutants.pm10);
            no2.push(record.pollutants.no2);
            co.push(record.pollutants.co);
            so2.push(record.pollutants.so2);
            o3.push(record.pollutants.o3);
            weather.push(serde_json::to_string(&record.weather)?);
            num_industrial.push(record.land_use.industrial);
            num_farmland.push(record.land_use.farmland);
            num_dumpsites.push(record.land_use.waste_disposal);
            num_recycling.push(record.land_use.recycling);
        }

        let timestamp = self.collected_at.to_rfc3339();
        let frame = df! {
            "latitude" => latitude,
            "longitude" => longitude,
            "station_id" => station_id,
            "station_name" => station_name,
            "pm25" => pm25,
            "pm10" => pm10,
            "no2" => no2,
            "co" => co,
            "so2" => so2,
            "o3" => o3,
            "weather" => weather,
            "num_industrial" => num_industrial,
            "num_farmland" => num_farmland,
            "num_dumpsites" => num_dumpsites,
            "num_recycling" => num_recycling,
            "source_air_quality" => vec![SOURCE_AIR_QUALITY; n],
            "source_weather" => vec![SOURCE_WEATHER; n],
            "timestamp" => vec![timestamp; n],
        }?;
        Ok(frame)
    }
}
