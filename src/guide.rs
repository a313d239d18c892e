use crate::domain::events::FeedEvent;
use crate::tracker::ProximityTracker;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument};

/// Feeds position events to the tracker one at a time, each handled to completion before the next.
#[derive(Debug)]
pub struct Guide {
    tracker: ProximityTracker,
    rx: Receiver<FeedEvent>,
}

impl Guide {
    pub fn new(tracker: ProximityTracker, rx: Receiver<FeedEvent>) -> Self {
        Guide { tracker, rx }
    }

    #[cfg(test)]
    pub fn tracker(&self) -> &ProximityTracker {
        &self.tracker
    }

    #[instrument(skip(self))]
    pub async fn listen(&mut self) {
        info!("🚶 Guiding along {} waypoint(s)...", self.tracker.waypoint_count());
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                FeedEvent::PositionUpdated(position) => {
                    self.tracker.on_position_update(&position);
                }
                FeedEvent::PositionUnavailable(error) => {
                    self.tracker.on_position_unavailable(&error);
                }
            }
        }
        info!(
            "🚶 Guiding along {} waypoint(s)... done, {} announced",
            self.tracker.waypoint_count(),
            self.tracker.spoken_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Waypoint, WaypointKind, WaypointSet};
    use crate::feed::{FeedError, FeedOptions, PositionFeed, SubscriptionHandle};
    use crate::tracker::tests::{north_of, tracker_with};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::time::Duration;
    use test_log::test;
    use tokio::sync::mpsc::{self, Sender};

    /// Replays a fixed list of events, then ends the subscription.
    #[derive(Debug)]
    struct ScriptedFeed {
        events: Mutex<Option<Vec<FeedEvent>>>,
    }

    impl ScriptedFeed {
        fn new(events: Vec<FeedEvent>) -> Self {
            ScriptedFeed {
                events: Mutex::new(Some(events)),
            }
        }
    }

    impl PositionFeed for ScriptedFeed {
        fn subscribe(&self, _options: FeedOptions, tx: Sender<FeedEvent>) -> Result<SubscriptionHandle, FeedError> {
            let events = self.events.lock().unwrap().take().unwrap_or_default();
            Ok(SubscriptionHandle::new(tokio::spawn(async move {
                for event in events {
                    if tx.send(event).await.is_err() {
                        return;
                    }
                }
            })))
        }
    }

    fn walk_past_the_stairs() -> Vec<FeedEvent> {
        vec![
            FeedEvent::PositionUpdated(north_of(37.597212, 126.704624, 30.0)),
            FeedEvent::PositionUnavailable(FeedError::Timeout(Duration::from_millis(5000))),
            FeedEvent::PositionUpdated(north_of(37.597212, 126.704624, 4.0)),
            FeedEvent::PositionUpdated(north_of(37.597212, 126.704624, 1.0)),
            FeedEvent::PositionUpdated(north_of(37.597212, 126.704624, 4.0)),
            FeedEvent::PositionUpdated(north_of(37.597212, 126.704624, 30.0)),
            FeedEvent::PositionUpdated(north_of(37.597212, 126.704624, 1.0)),
        ]
    }

    #[test(tokio::test)]
    async fn announces_each_waypoint_once_along_a_scripted_walk() -> Result<(), FeedError> {
        let sets = vec![
            WaypointSet::new("stairs", WaypointKind::Hazard, vec![Waypoint::new(37.597212, 126.704624, "Stairs ahead")]),
            WaypointSet::new("entrance", WaypointKind::General, vec![Waypoint::new(37.597038, 126.704834, "Main entrance")]),
        ];
        let (builder, notifier, display) = tracker_with(sets);
        let (tx, rx) = mpsc::channel(4);

        let _subscription = ScriptedFeed::new(walk_past_the_stairs()).subscribe(FeedOptions::default(), tx)?;
        let mut guide = Guide::new(builder.build(), rx);
        guide.listen().await;

        assert_eq!(notifier.spoken(), vec!["Stairs ahead"]);
        assert_eq!(guide.tracker().spoken_count(), 1);
        assert_eq!(display.status.lock().unwrap().len(), 7);
        assert!(display.last_status().is_some_and(|status| status.starts_with("현재 위치: ")));
        Ok(())
    }

    #[test(tokio::test)]
    async fn stays_silent_for_a_walk_that_never_comes_close() -> Result<(), FeedError> {
        let sets = vec![WaypointSet::new("stairs", WaypointKind::Hazard, vec![Waypoint::new(37.597212, 126.704624, "Stairs ahead")])];
        let (builder, notifier, _) = tracker_with(sets);
        let (tx, rx) = mpsc::channel(4);
        let events = (0..10)
            .map(|step| FeedEvent::PositionUpdated(north_of(37.597212, 126.704624, 100.0 - step as f64 * 5.0)))
            .collect();

        let _subscription = ScriptedFeed::new(events).subscribe(FeedOptions::default(), tx)?;
        let mut guide = Guide::new(builder.build(), rx);
        guide.listen().await;

        assert!(notifier.spoken().is_empty());
        Ok(())
    }

    #[test(tokio::test)]
    async fn ends_when_the_feed_ends() {
        let (builder, _, display) = tracker_with(vec![]);
        let (tx, rx) = mpsc::channel(1);
        drop(tx);

        let mut guide = Guide::new(builder.build(), rx);
        guide.listen().await;

        assert_eq!(display.last_status(), None);
        assert_eq!(guide.tracker().spoken_count(), 0);
    }
}
