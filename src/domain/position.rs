use crate::domain::GeoLocation;
use crate::domain::distance::distance;
use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// A fix reported by the position feed. Coordinates are taken as-is, a
/// malformed fix (NaN) never comes within range of anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Position {
    pub fn distance_to(&self, location: &GeoLocation) -> f64 {
        distance(self.latitude, self.longitude, location.latitude, location.longitude)
    }
}

#[cfg(test)]
impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Position {
            latitude,
            longitude,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn displays_six_decimals() {
        assert_eq!(Position::new(37.5665, 126.97801234).to_string(), "37.566500, 126.978012");
    }

    #[test]
    fn distance_to_a_location_matches_the_location_itself() {
        let location = GeoLocation::new(37.5667, 126.9784);

        assert_eq!(Position::new(37.5667, 126.9784).distance_to(&location), 0.0);
    }
}
