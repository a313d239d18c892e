use crate::app_config::AppConfig;
use crate::display::{MapDisplay, StatusDisplay, UNSUPPORTED_MESSAGE, failure_text, position_text};
use crate::domain::{Position, WaypointKind, WaypointSet};
use crate::feed::FeedError;
use crate::speech::SpeechNotifier;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub const DEFAULT_RADIUS_M: f64 = 5.0;
pub const DEFAULT_TRACKING_ZOOM: u8 = 18;

#[derive(Debug)]
struct TrackedSet {
    set: WaypointSet,
    radius_m: f64,
    /// Messages already announced for this set. Only ever grows.
    spoken: HashSet<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Announcement {
    pub set: String,
    pub kind: WaypointKind,
    pub message: String,
    pub distance_m: f64,
}

/// Announces every waypoint once, the first time the user comes within its set's radius.
#[derive(Debug)]
pub struct ProximityTracker {
    sets: Vec<TrackedSet>,
    notifier: Arc<dyn SpeechNotifier>,
    map: Box<dyn MapDisplay>,
    status: Box<dyn StatusDisplay>,
    tracking_zoom: u8,
}

impl ProximityTracker {
    pub fn builder(notifier: Arc<dyn SpeechNotifier>, map: Box<dyn MapDisplay>, status: Box<dyn StatusDisplay>) -> ProximityTrackerBuilder {
        ProximityTrackerBuilder {
            notifier,
            map,
            status,
            sets: Vec::new(),
            general_radius_m: DEFAULT_RADIUS_M,
            hazard_radius_m: DEFAULT_RADIUS_M,
            tracking_zoom: DEFAULT_TRACKING_ZOOM,
        }
    }

    #[instrument(skip_all, fields(position = %position))]
    pub fn on_position_update(&mut self, position: &Position) -> Vec<Announcement> {
        self.map.set_view(position, self.tracking_zoom);
        self.map.move_marker(position);
        self.status.show(&position_text(position));

        let mut announcements = Vec::new();
        for tracked in self.sets.iter_mut() {
            for waypoint in &tracked.set.waypoints {
                let distance_m = position.distance_to(&waypoint.location);
                // NaN distances compare false and never trigger
                if !(distance_m < tracked.radius_m) || tracked.spoken.contains(&waypoint.message) {
                    continue;
                }

                info!(set = tracked.set.name, kind = %tracked.set.kind, distance_m, "{} Announcing '{}'", tracked.set.kind.emoji(), waypoint.message);
                self.notifier.speak(&waypoint.message);
                tracked.spoken.insert(waypoint.message.clone());

                announcements.push(Announcement {
                    set: tracked.set.name.clone(),
                    kind: tracked.set.kind,
                    message: waypoint.message.clone(),
                    distance_m,
                });
            }
        }

        debug!("📍 Position handled, {} announcement(s)", announcements.len());
        announcements
    }

    pub fn on_position_unavailable(&mut self, error: &FeedError) {
        warn!("⚠️ Position unavailable: {}", error);
        self.status.show(&failure_text(error.to_string()));
    }

    pub fn alert_unsupported(&mut self) {
        self.status.alert(UNSUPPORTED_MESSAGE);
    }

    pub fn spoken_count(&self) -> usize {
        self.sets.iter().map(|tracked| tracked.spoken.len()).sum()
    }

    pub fn waypoint_count(&self) -> usize {
        self.sets.iter().map(|tracked| tracked.set.waypoints.len()).sum()
    }
}

pub struct ProximityTrackerBuilder {
    notifier: Arc<dyn SpeechNotifier>,
    map: Box<dyn MapDisplay>,
    status: Box<dyn StatusDisplay>,
    sets: Vec<WaypointSet>,
    general_radius_m: f64,
    hazard_radius_m: f64,
    tracking_zoom: u8,
}

impl ProximityTrackerBuilder {
    pub fn sets(mut self, sets: Vec<WaypointSet>) -> Self {
        self.sets.extend(sets);
        self
    }

    /// Applies the configured radii and tracking zoom.
    pub fn configure(self, config: &AppConfig) -> Self {
        self.general_radius_m(config.tracker().general_radius_m())
            .hazard_radius_m(config.tracker().hazard_radius_m())
            .tracking_zoom(config.map().tracking_zoom())
    }

    pub fn general_radius_m(mut self, radius_m: f64) -> Self {
        self.general_radius_m = radius_m;
        self
    }

    pub fn hazard_radius_m(mut self, radius_m: f64) -> Self {
        self.hazard_radius_m = radius_m;
        self
    }

    pub fn tracking_zoom(mut self, zoom: u8) -> Self {
        self.tracking_zoom = zoom;
        self
    }

    /// General sets are checked before hazard sets, otherwise the given order is kept.
    pub fn build(mut self) -> ProximityTracker {
        self.sets.sort_by_key(|set| set.kind);

        let sets = self
            .sets
            .into_iter()
            .map(|set| {
                let radius_m = set.radius_m.unwrap_or(match set.kind {
                    WaypointKind::General => self.general_radius_m,
                    WaypointKind::Hazard => self.hazard_radius_m,
                });
                TrackedSet {
                    set,
                    radius_m,
                    spoken: HashSet::new(),
                }
            })
            .collect();

        ProximityTracker {
            sets,
            notifier: self.notifier,
            map: self.map,
            status: self.status,
            tracking_zoom: self.tracking_zoom,
        }
    }
}
