//! Writes a dataset frame to disk as CSV and as newline-delimited JSON.

use crate::dataset::error::DatasetError;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Writes `frame` as row-oriented delimited text with a header row.
pub fn write_csv(frame: &mut DataFrame, path: &Path) -> Result<(), DatasetError> {
    let file =
        File::create(path).map_err(|e| DatasetError::FileCreate(path.to_path_buf(), e))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(frame)
        .map_err(|e| DatasetError::FileWrite(path.to_path_buf(), e))
}

/// Writes `frame` as newline-delimited JSON records.
pub fn write_ndjson(frame: &mut DataFrame, path: &Path) -> Result<(), DatasetError> {
    let file =
        File::create(path).map_err(|e| DatasetError::FileCreate(path.to_path_buf(), e))?;
    JsonWriter::new(file)
        .with_json_format(JsonFormat::JsonLines)
        .finish(frame)
        .map_err(|e| DatasetError::FileWrite(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::frame::Dataset;
    use crate::types::record::{EnrichedRecord, LandUseCounts, PollutantValues};
    use serde_json::json;

    fn sample_frame() -> DataFrame {
        let records = vec![
            EnrichedRecord {
                latitude: 28.61,
                longitude: 77.21,
                station_id: Some(2178),
                station_name: Some("Anand Vihar".to_string()),
                pollutants: PollutantValues {
                    pm25: Some(184.0),
                    ..Default::default()
                },
                weather: json!({"main": {"temp": 301.2}}),
                land_use: LandUseCounts {
                    industrial: 4,
                    farmland: 0,
                    waste_disposal: 1,
                    recycling: 2,
                },
            },
            EnrichedRecord {
                latitude: 19.08,
                longitude: 72.88,
                station_id: None,
                station_name: None,
                pollutants: PollutantValues::default(),
                weather: json!({}),
                land_use: LandUseCounts::default(),
            },
        ];
        Dataset::new(records).to_frame().unwrap()
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.csv");
        let mut frame = sample_frame();

        write_csv(&mut frame, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].starts_with("latitude,longitude,station_id"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn ndjson_has_one_record_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.ndjson");
        let mut frame = sample_frame();

        write_ndjson(&mut frame, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["station_id"], json!(2178));
        assert_eq!(first["source_air_quality"], json!("OpenAQ"));
    }

    #[test]
    fn create_failure_reports_path() {
        let mut frame = sample_frame();
        let path = Path::new("/nonexistent-dir/points.csv");
        let err = write_csv(&mut frame, path).unwrap_err();
        assert!(matches!(err, DatasetError::FileCreate(_, _)));
    }
}
