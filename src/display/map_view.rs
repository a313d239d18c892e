use crate::display::MapDisplay;
use crate::domain::{GeoLocation, Position};
use tracing::debug;

/// Viewport state of the map: where it is centered, how far it is zoomed in and where the marker sits.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: GeoLocation,
    zoom: u8,
    marker: Option<GeoLocation>,
}

impl MapView {
    pub fn new(center: GeoLocation, zoom: u8) -> Self {
        debug!(zoom, "🗺️ Map centered at {:.6}, {:.6}", center.latitude, center.longitude);
        MapView { center, zoom, marker: None }
    }
}

#[cfg(test)]
impl MapView {
    pub fn center(&self) -> &GeoLocation {
        &self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn marker(&self) -> Option<&GeoLocation> {
        self.marker.as_ref()
    }
}

impl MapDisplay for MapView {
    fn set_view(&mut self, position: &Position, zoom: u8) {
        self.center = GeoLocation::new(position.latitude, position.longitude);
        self.zoom = zoom;
        debug!(zoom, "🗺️ Map centered at {}", position);
    }

    fn move_marker(&mut self, position: &Position) {
        self.marker = Some(GeoLocation::new(position.latitude, position.longitude));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_without_a_marker() {
        let view = MapView::new(GeoLocation::new(37.5665, 126.978), 17);

        assert_eq!(view.zoom(), 17);
        assert_eq!(view.marker(), None);
    }

    #[test]
    fn follows_the_position() {
        let mut view = MapView::new(GeoLocation::new(37.5665, 126.978), 17);
        let position = Position::new(37.5667, 126.9784);

        view.set_view(&position, 18);
        view.move_marker(&position);

        assert_eq!(view.center(), &GeoLocation::new(37.5667, 126.9784));
        assert_eq!(view.zoom(), 18);
        assert_eq!(view.marker(), Some(&GeoLocation::new(37.5667, 126.9784)));
    }
}
