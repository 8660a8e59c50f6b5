//! The flat output record produced for each enriched coordinate, and its
//! pollutant/land-use component types.

use crate::types::parameter::Parameter;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One nullable value per tracked pollutant.
///
/// A field is populated only when the selected station has a sensor for that
/// parameter and its latest-measurement fetch succeeds with at least one
/// result; otherwise it stays `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PollutantValues {
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub no2: Option<f64>,
    pub co: Option<f64>,
    pub so2: Option<f64>,
    pub o3: Option<f64>,
}

impl PollutantValues {
    /// Stores a reading for `parameter`, replacing any earlier value.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::Pm25 => self.pm25 = Some(value),
            Parameter::Pm10 => self.pm10 = Some(value),
            Parameter::No2 => self.no2 = Some(value),
            Parameter::Co => self.co = Some(value),
            Parameter::So2 => self.so2 = Some(value),
            Parameter::O3 => self.o3 = Some(value),
        }
    }

    /// Returns the stored reading for `parameter`, if any.
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Pm25 => self.pm25,
            Parameter::Pm10 => self.pm10,
            Parameter::No2 => self.no2,
            Parameter::Co => self.co,
            Parameter::So2 => self.so2,
            Parameter::O3 => self.o3,
        }
    }
}

/// Counts of land-use/amenity features of interest around a coordinate.
///
/// The farmland count includes `landuse=farmyard` features. All counts
/// default to zero when the feature lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LandUseCounts {
    /// Features tagged `landuse=industrial`.
    pub industrial: u32,
    /// Features tagged `landuse=farmland` or `landuse=farmyard`.
    pub farmland: u32,
    /// Features tagged `amenity=waste_disposal`.
    pub waste_disposal: u32,
    /// Features tagged `amenity=recycling`.
    pub recycling: u32,
}

/// The output row for one coordinate: station identity and readings, the
/// opaque current-weather payload, and nearby land-use counts.
///
/// A record is always produced, even when no station lies within the search
/// radius; in that case the station and pollutant fields are all `None`.
/// Records are built once and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// Query latitude in degrees, passed through unvalidated.
    pub latitude: f64,
    /// Query longitude in degrees, passed through unvalidated.
    pub longitude: f64,
    /// Identifier of the selected (nearest) station, if any was found.
    pub station_id: Option<i64>,
    /// Name of the selected station, if any was found and named.
    pub station_name: Option<String>,
    /// Latest readings for the tracked pollutants.
    pub pollutants: PollutantValues,
    /// Whatever the weather collaborator returned, attached uninterpreted.
    pub weather: Value,
    /// Nearby land-use feature counts, zeroed on lookup failure.
    pub land_use: LandUseCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_cover_every_parameter() {
        let mut values = PollutantValues::default();
        for (i, p) in Parameter::ALL.iter().enumerate() {
            assert_eq!(values.get(*p), None);
            values.set(*p, i as f64);
            assert_eq!(values.get(*p), Some(i as f64));
        }
    }

    #[test]
    fn set_replaces_earlier_value() {
        let mut values = PollutantValues::default();
        values.set(Parameter::Pm25, 10.0);
        values.set(Parameter::Pm25, 42.0);
        assert_eq!(values.pm25, Some(42.0));
    }
}
