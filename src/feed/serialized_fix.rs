use crate::domain::Position;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One line of a fix stream. Coordinates are not range checked.
#[derive(Debug, Deserialize)]
pub struct SerializedFix {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

impl From<SerializedFix> for Position {
    fn from(fix: SerializedFix) -> Self {
        Position {
            latitude: fix.latitude,
            longitude: fix.longitude,
            timestamp: fix.timestamp,
        }
    }
}

pub fn parse_fix(line: &str) -> Result<Position, serde_json::Error> {
    serde_json::from_str::<SerializedFix>(line).map(Position::from)
}
