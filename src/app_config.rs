use crate::domain::GeoLocation;
use crate::radius_deserializer::deserialize_radius;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    waypoints: Waypoints,
    tracker: Tracker,
    feed: Feed,
    speech: Speech,
    map: Map,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("WAYFINDER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn speech(&self) -> &Speech {
        &self.speech
    }

    pub fn map(&self) -> &Map {
        &self.map
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Waypoints {
    directory: String,
    extension: String,
}

impl Waypoints {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracker {
    #[serde(deserialize_with = "deserialize_radius")]
    general_radius_m: f64,
    #[serde(deserialize_with = "deserialize_radius")]
    hazard_radius_m: f64,
}

impl Tracker {
    pub fn general_radius_m(&self) -> f64 {
        self.general_radius_m
    }

    pub fn hazard_radius_m(&self) -> f64 {
        self.hazard_radius_m
    }
}

#[derive(Debug, Deserialize)]
pub struct Feed {
    source: String,
    high_accuracy: bool,
    #[serde(with = "humantime_serde")]
    maximum_age: Duration,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Feed {
    /// Path of a newline-delimited JSON fix stream, `-` reads from stdin.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn high_accuracy(&self) -> bool {
        self.high_accuracy
    }

    pub fn maximum_age(&self) -> Duration {
        self.maximum_age
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SpeechEngine {
    Log,
    Command,
}

#[derive(Debug, Deserialize)]
pub struct Speech {
    locale: String,
    engine: SpeechEngine,
    #[serde(default)]
    command: Vec<String>,
}

impl Speech {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn engine(&self) -> SpeechEngine {
        self.engine
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }
}

#[derive(Debug, Deserialize)]
pub struct Map {
    initial_zoom: u8,
    tracking_zoom: u8,
    initial_center: GeoLocation,
}

impl Map {
    pub fn initial_zoom(&self) -> u8 {
        self.initial_zoom
    }

    pub fn tracking_zoom(&self) -> u8 {
        self.tracking_zoom
    }

    pub fn initial_center(&self) -> &GeoLocation {
        &self.initial_center
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core { event_buffer_size: 1 },
                waypoints: Waypoints {
                    directory: "waypoints".to_string(),
                    extension: "json".to_string(),
                },
                tracker: Tracker {
                    general_radius_m: 5.0,
                    hazard_radius_m: 5.0,
                },
                feed: Feed {
                    source: "-".to_string(),
                    high_accuracy: true,
                    maximum_age: Duration::from_millis(1000),
                    timeout: Duration::from_millis(5000),
                },
                speech: Speech {
                    locale: "ko-KR".to_string(),
                    engine: SpeechEngine::Log,
                    command: vec![],
                },
                map: Map {
                    initial_zoom: 17,
                    tracking_zoom: 18,
                    initial_center: GeoLocation {
                        latitude: 37.5665,
                        longitude: 126.9780,
                    },
                },
            },
        }
    }

    pub fn general_radius_m(mut self, radius_m: f64) -> Self {
        self.config.tracker.general_radius_m = radius_m;
        self
    }

    pub fn hazard_radius_m(mut self, radius_m: f64) -> Self {
        self.config.tracker.hazard_radius_m = radius_m;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
