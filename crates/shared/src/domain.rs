use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_VENUE_NAME: &str = "Restaurante a definir";
pub const DEFAULT_VENUE_ADDRESS: &str = "Endereço a definir";
pub const DEFAULT_VENUE_CITY: &str = "Cidade, Estado";
pub const DEFAULT_VENUE_LAT: f64 = -23.5505;
pub const DEFAULT_VENUE_LNG: f64 = -46.6333;
pub const DEFAULT_DISPLAY_DATE: &str = "14 de fevereiro de 2026";
pub const DEFAULT_DISPLAY_TIME: &str = "19h";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Confirmed,
    Declined,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown decision '{0}'")]
pub struct UnknownDecision(pub String);

impl FromStr for Decision {
    type Err = UnknownDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "declined" => Ok(Self::Declined),
            other => Err(UnknownDecision(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// The fixed details of the date being proposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub venue: Venue,
    pub coordinates: Coordinates,
    pub date: String,
    pub time: String,
}

impl Invitation {
    pub fn maps_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.coordinates.lat, self.coordinates.lng
        )
    }
}

impl Default for Invitation {
    fn default() -> Self {
        Self {
            venue: Venue {
                name: DEFAULT_VENUE_NAME.into(),
                address: DEFAULT_VENUE_ADDRESS.into(),
                city: DEFAULT_VENUE_CITY.into(),
            },
            coordinates: Coordinates {
                lat: DEFAULT_VENUE_LAT,
                lng: DEFAULT_VENUE_LNG,
            },
            date: DEFAULT_DISPLAY_DATE.into(),
            time: DEFAULT_DISPLAY_TIME.into(),
        }
    }
}
