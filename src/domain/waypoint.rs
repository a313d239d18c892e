use crate::domain::GeoLocation;
use crate::radius_deserializer::deserialize_optional_radius;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Waypoint {
    #[serde(flatten)]
    pub location: GeoLocation,
    pub message: String,
}

#[cfg(test)]
impl Waypoint {
    pub fn new(latitude: f64, longitude: f64, message: impl Into<String>) -> Self {
        Waypoint {
            location: GeoLocation::new(latitude, longitude),
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    General,
    Hazard,
}

impl WaypointKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            WaypointKind::General => "🧭",
            WaypointKind::Hazard => "⚠️",
        }
    }
}

impl Display for WaypointKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WaypointKind::General => write!(f, "general"),
            WaypointKind::Hazard => write!(f, "hazard"),
        }
    }
}

/// An ordered collection of waypoints sharing a kind and a trigger radius.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WaypointSet {
    pub name: String,
    pub kind: WaypointKind,
    /// Overrides the configured radius for this kind.
    #[serde(default, deserialize_with = "deserialize_optional_radius")]
    pub radius_m: Option<f64>,
    pub waypoints: Vec<Waypoint>,
}

#[cfg(test)]
impl WaypointSet {
    pub fn new(name: impl Into<String>, kind: WaypointKind, waypoints: Vec<Waypoint>) -> Self {
        WaypointSet {
            name: name.into(),
            kind,
            radius_m: None,
            waypoints,
        }
    }

    pub fn with_radius_m(mut self, radius_m: f64) -> Self {
        self.radius_m = Some(radius_m);
        self
    }
}
