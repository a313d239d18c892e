mod distance;
pub mod events;
mod geo_location;
mod position;
mod waypoint;

#[cfg(test)]
pub use distance::EARTH_RADIUS_M;
pub use geo_location::GeoLocation;
pub use position::Position;
#[cfg(test)]
pub use waypoint::Waypoint;
pub use waypoint::{WaypointKind, WaypointSet};
