//! Defines the fixed vocabulary of pollutant parameters tracked per record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pollutant parameter measured by an air-quality sensor.
///
/// This is the closed vocabulary of parameters the enrichment routine attempts
/// to populate for every record. Sensors reporting anything outside this set
/// are ignored when a station's readings are collected.
///
/// # Examples
///
/// ```
/// use enviroscan::Parameter;
///
/// assert_eq!(Parameter::Pm25.as_str(), "pm25");
/// assert_eq!(Parameter::from_name("PM2.5"), Some(Parameter::Pm25));
/// assert_eq!(Parameter::from_name("benzene"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    /// Particulate matter below 2.5 µm.
    Pm25,
    /// Particulate matter below 10 µm.
    Pm10,
    /// Nitrogen dioxide.
    No2,
    /// Carbon monoxide.
    Co,
    /// Sulfur dioxide.
    So2,
    /// Ozone.
    O3,
}

impl Parameter {
    /// Every tracked parameter, in the order their columns appear in exports.
    pub const ALL: [Parameter; 6] = [
        Parameter::Pm25,
        Parameter::Pm10,
        Parameter::No2,
        Parameter::Co,
        Parameter::So2,
        Parameter::O3,
    ];

    /// The canonical lowercase name used by the air-quality API and as the
    /// export column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Pm25 => "pm25",
            Parameter::Pm10 => "pm10",
            Parameter::No2 => "no2",
            Parameter::Co => "co",
            Parameter::So2 => "so2",
            Parameter::O3 => "o3",
        }
    }

    /// Parses an upstream parameter name, tolerating the dotted PM aliases
    /// some providers report. Returns `None` for anything outside the
    /// tracked vocabulary.
    pub fn from_name(name: &str) -> Option<Parameter> {
        match name.to_ascii_lowercase().as_str() {
            "pm25" | "pm2.5" => Some(Parameter::Pm25),
            "pm10" => Some(Parameter::Pm10),
            "no2" => Some(Parameter::No2),
            "co" => Some(Parameter::Co),
            "so2" => Some(Parameter::So2),
            "o3" | "ozone" => Some(Parameter::O3),
            _ => None,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
