use crate::utils::error::{Result, TravelError};
use serde::Serialize;
use std::fmt;

/// A point on the Earth's surface in decimal degrees.
///
/// Both components are range-checked on construction, so every
/// `Coordinate` in the crate is a valid position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(TravelError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Free-text place name typed by the user. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationQuery(String);

impl DestinationQuery {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a geocoding answer, in the order the service ranked it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeCandidate {
    pub coordinate: Coordinate,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDestination {
    pub query: String,
    pub coordinate: Coordinate,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Eta {
    pub hours: u64,
    pub minutes: u32,
}

impl fmt::Display for Eta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {:02}m", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceEstimate {
    pub kilometers: f64,
    pub eta: Eta,
}

/// Everything the map collaborator needs to draw the current view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapView {
    pub observer: Option<Coordinate>,
    pub destination: Option<ResolvedDestination>,
    pub estimate: Option<DistanceEstimate>,
}
