use crate::app_config::{AppConfig, SpeechEngine};
use crate::display::{ConsoleStatus, MapView};
use crate::domain::events::FeedEvent;
use crate::feed::{FeedOptions, LineFeed, PositionFeed};
use crate::guide::Guide;
use crate::speech::{CommandSynthesizer, LogSynthesizer, SpeechQueue, Synthesizer};
use crate::tracker::ProximityTracker;
use crate::waypoint_loader::load_waypoint_sets_from;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

mod app_config;
mod display;
mod domain;
mod extensions;
mod feed;
mod geo_location_deserializer;
mod guide;
mod radius_deserializer;
mod speech;
mod tracker;
mod waypoint_loader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let sets = load_waypoint_sets_from(config.waypoints().directory(), config.waypoints().extension()).await?;

    let synthesizer: Arc<dyn Synthesizer> = match config.speech().engine() {
        SpeechEngine::Log => Arc::new(LogSynthesizer),
        SpeechEngine::Command => Arc::new(CommandSynthesizer::from_command_line(config.speech().command())?),
    };
    info!("✅  Initialized speech using '{}'", synthesizer.id());
    let (speech_queue, speech_worker) = SpeechQueue::start(synthesizer, config.speech().locale());

    let map = MapView::new(*config.map().initial_center(), config.map().initial_zoom());
    let mut tracker = ProximityTracker::builder(Arc::new(speech_queue), Box::new(map), Box::new(ConsoleStatus::default()))
        .sets(sets)
        .configure(&config)
        .build();

    let options = FeedOptions {
        high_accuracy: config.feed().high_accuracy(),
        maximum_age: config.feed().maximum_age(),
        timeout: config.feed().timeout(),
    };
    let (tx, rx) = mpsc::channel::<FeedEvent>(config.core().event_buffer_size());
    let subscription = match LineFeed::new(config.feed().source()).subscribe(options, tx) {
        Ok(subscription) => subscription,
        Err(e) => {
            error!("❌ Could not subscribe to the position feed: {}", e);
            tracker.alert_unsupported();
            return Ok(());
        }
    };
    info!("✅  Subscribed to position feed");
    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));

    let mut guide = Guide::new(tracker, rx);
    guide.listen().await;
    subscription.cancel();

    // Dropping the guide releases the speech queue, letting the worker drain and stop
    drop(guide);
    speech_worker.await?;

    Ok(())
}
