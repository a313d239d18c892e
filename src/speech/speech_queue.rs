use crate::speech::{SpeechNotifier, Synthesizer, Utterance};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Queues announcements for a single background worker, so they are spoken in call order.
#[derive(Debug, Clone)]
pub struct SpeechQueue {
    tx: UnboundedSender<Utterance>,
    locale: String,
}

impl SpeechQueue {
    /// Spawns the worker. It stops once every clone of the queue has been dropped.
    pub fn start(synthesizer: Arc<dyn Synthesizer>, locale: impl Into<String>) -> (Self, JoinHandle<()>) {
        let (tx, rx) = unbounded_channel::<Utterance>();
        let worker = tokio::spawn(async move {
            speak_all(rx, synthesizer).await;
        });

        (SpeechQueue { tx, locale: locale.into() }, worker)
    }
}

impl SpeechNotifier for SpeechQueue {
    fn speak(&self, text: &str) {
        let utterance = Utterance {
            text: text.to_string(),
            locale: self.locale.clone(),
        };

        if self.tx.send(utterance).is_err() {
            warn!("⚠️ Speech worker is gone, dropping '{}'", text);
        }
    }
}

#[instrument(skip_all, fields(synthesizer = synthesizer.id()))]
async fn speak_all(mut rx: UnboundedReceiver<Utterance>, synthesizer: Arc<dyn Synthesizer>) {
    info!("🗣️ Speech worker started");
    while let Some(utterance) = rx.recv().await {
        debug!(locale = utterance.locale, "🗣️ Speaking '{}'...", utterance.text);
        match synthesizer.synthesize(&utterance).await {
            Ok(()) => debug!("🗣️ Speaking '{}'... OK", utterance.text),
            Err(e) => warn!("⚠️ Unable to speak '{}': {}", utterance.text, e),
        }
    }
    info!("🗣️ Speech worker stopped");
}
