use std::fmt;

use serde::{Deserialize, Serialize};

/// Exact hardware model as reported by a hub in the `mt` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpecificType {
    Tower,
    /// Five-in-one frame carrying temperature, humidity and wind speed.
    FiveInOne38,
    /// Five-in-one frame carrying wind and rain.
    FiveInOne31,
    ProIn,
    /// Anything the registry does not know, kept verbatim.
    Unknown(Box<str>),
}

impl SpecificType {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "tower" => SpecificType::Tower,
            "5N1x38" => SpecificType::FiveInOne38,
            "5N1x31" => SpecificType::FiveInOne31,
            "ProIn" => SpecificType::ProIn,
            other => SpecificType::Unknown(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SpecificType::Tower => "tower",
            SpecificType::FiveInOne38 => "5N1x38",
            SpecificType::FiveInOne31 => "5N1x31",
            SpecificType::ProIn => "ProIn",
            SpecificType::Unknown(raw) => raw,
        }
    }

    pub fn general(&self) -> GeneralType {
        match self {
            SpecificType::Tower => GeneralType::Tower,
            SpecificType::FiveInOne38 | SpecificType::FiveInOne31 => GeneralType::FiveInOne,
            SpecificType::ProIn => GeneralType::ProIn,
            SpecificType::Unknown(_) => GeneralType::Unknown,
        }
    }
}

/// Coarse sensor category. Decides which readings a sensor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralType {
    #[serde(rename = "tower")]
    Tower,
    #[serde(rename = "fiveInOne")]
    FiveInOne,
    #[serde(rename = "ProIn")]
    ProIn,
    #[serde(rename = "unknown")]
    Unknown,
}

impl GeneralType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneralType::Tower => "tower",
            GeneralType::FiveInOne => "fiveInOne",
            GeneralType::ProIn => "ProIn",
            GeneralType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GeneralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a raw `mt` string to its general type. Unrecognized strings map to
/// [`GeneralType::Unknown`].
pub fn general_type_of(raw: &str) -> GeneralType {
    SpecificType::from_raw(raw).general()
}
