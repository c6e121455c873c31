use jiff::Timestamp;
use serde::Serialize;

/// A single timestamped reading. Never modified after it is built.
///
/// Float readings that could not be parsed are NaN and serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub date: Timestamp,
    #[serde(rename = "hubID")]
    pub hub_id: String,
    #[serde(rename = "sensorID")]
    pub sensor_id: String,
    pub barometric: f64,
    #[serde(flatten)]
    pub readings: Readings,
}

/// Readings specific to the kind of sensor that produced a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum Readings {
    /// Sensors of unknown type only report barometric pressure.
    Base {},
    Tower {
        temperature: f64,
        humidity: f64,
    },
    ProIn {
        temperature: f64,
        humidity: f64,
        water_is_present: bool,
    },
    /// `5N1x38` frames.
    FiveInOneClimate {
        temperature: f64,
        humidity: f64,
        wind_speed: Option<i64>,
    },
    /// `5N1x31` frames.
    FiveInOneWind {
        wind_speed: Option<i64>,
        wind_direction: f64,
        rain: f64,
        daily_rain: f64,
    },
}

impl Readings {
    pub fn temperature(&self) -> Option<f64> {
        match self {
            Readings::Tower { temperature, .. }
            | Readings::ProIn { temperature, .. }
            | Readings::FiveInOneClimate { temperature, .. } => Some(*temperature),
            Readings::Base {} | Readings::FiveInOneWind { .. } => None,
        }
    }

    pub fn humidity(&self) -> Option<f64> {
        match self {
            Readings::Tower { humidity, .. }
            | Readings::ProIn { humidity, .. }
            | Readings::FiveInOneClimate { humidity, .. } => Some(*humidity),
            Readings::Base {} | Readings::FiveInOneWind { .. } => None,
        }
    }
}
