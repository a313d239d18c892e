use crate::domain::events::FeedEvent;
use crate::extensions::date_time_ext::Age;
use crate::feed::serialized_fix::parse_fix;
use crate::feed::{FeedError, FeedOptions, PositionFeed, SubscriptionHandle};
use chrono::Utc;
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::Sender;
use tokio::time::timeout;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

const STDIN: &str = "-";

/// Reads newline-delimited JSON fixes from a file or from stdin.
#[derive(Debug, Clone)]
pub struct LineFeed {
    source: String,
}

impl LineFeed {
    pub fn new(source: impl Into<String>) -> Self {
        LineFeed { source: source.into() }
    }
}

impl PositionFeed for LineFeed {
    fn subscribe(&self, options: FeedOptions, tx: Sender<FeedEvent>) -> Result<SubscriptionHandle, FeedError> {
        if self.source == STDIN {
            info!(high_accuracy = options.high_accuracy, "📡 Subscribing to fixes from stdin...");
            let task = tokio::spawn(async move {
                pump(BufReader::new(io::stdin()), options, tx).await;
            });
            return Ok(SubscriptionHandle::new(task));
        }

        let path = PathBuf::from(&self.source);
        std::fs::metadata(&path).map_err(|e| FeedError::Unsupported { source: e })?;

        info!(high_accuracy = options.high_accuracy, "📡 Subscribing to fixes from '{}'...", path.display());
        let task = tokio::spawn(async move {
            match File::open(&path).await {
                Ok(file) => pump(BufReader::new(file), options, tx).await,
                Err(e) => {
                    warn!("⚠️ Unable to open '{}': {}", path.display(), e);
                    forward(&tx, FeedEvent::PositionUnavailable(FeedError::Io(e))).await;
                }
            }
        });
        Ok(SubscriptionHandle::new(task))
    }
}

/// Forwards every line of `reader` as a feed event until the input ends or nobody listens anymore.
#[instrument(skip_all)]
pub async fn pump<R>(reader: R, options: FeedOptions, tx: Sender<FeedEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = LinesStream::new(reader.lines());

    loop {
        let event = match timeout(options.timeout, lines.next()).await {
            Ok(Some(Ok(line))) if line.trim().is_empty() => continue,
            Ok(Some(Ok(line))) => match parse_fix(&line) {
                Ok(position) => {
                    if let Some(age) = position.timestamp.map(|timestamp| timestamp.age_at(&Utc::now())) {
                        if age > options.maximum_age {
                            debug!(age_ms = age.as_millis(), "📡 Dropping stale fix {}", position);
                            continue;
                        }
                    }
                    FeedEvent::PositionUpdated(position)
                }
                Err(e) => FeedEvent::PositionUnavailable(FeedError::Malformed(e)),
            },
            Ok(Some(Err(e))) => FeedEvent::PositionUnavailable(FeedError::Io(e)),
            Ok(None) => {
                info!("📡 Fix stream ended");
                return;
            }
            Err(_) => FeedEvent::PositionUnavailable(FeedError::Timeout(options.timeout)),
        };

        if !forward(&tx, event).await {
            return;
        }
    }
}

/// Returns false once nobody listens anymore.
async fn forward(tx: &Sender<FeedEvent>, event: FeedEvent) -> bool {
    match tx.send(event).await {
        Ok(()) => true,
        Err(e) => {
            debug!(event = ?e.0, "📡 No listener left, dropping event");
            false
        }
    }
}
