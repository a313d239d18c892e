mod line_feed;
mod serialized_fix;

use crate::domain::events::FeedEvent;
use std::fmt::Debug;
use std::io;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

pub use line_feed::LineFeed;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedOptions {
    pub high_accuracy: bool,
    /// Oldest cached fix that is still accepted.
    pub maximum_age: Duration,
    /// Longest wait for a fresh fix before reporting a timeout.
    pub timeout: Duration,
}

impl Default for FeedOptions {
    fn default() -> Self {
        FeedOptions {
            high_accuracy: true,
            maximum_age: Duration::from_millis(1000),
            timeout: Duration::from_millis(5000),
        }
    }
}

/// A continuous source of position fixes.
pub trait PositionFeed: Debug + Send + Sync {
    /// Starts pushing events into `tx` until the source is exhausted.
    fn subscribe(&self, options: FeedOptions, tx: Sender<FeedEvent>) -> Result<SubscriptionHandle, FeedError>;
}

#[derive(Debug)]
pub struct SubscriptionHandle {
    task: JoinHandle<()>,
}

impl SubscriptionHandle {
    pub fn new(task: JoinHandle<()>) -> Self {
        SubscriptionHandle { task }
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("positioning is not supported: {source}")]
    Unsupported { source: io::Error },
    #[error("timeout expired, no position within {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("malformed position: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
