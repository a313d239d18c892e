use crate::speech::{SpeechError, Synthesizer, Utterance};
use async_trait::async_trait;
use tracing::info;

/// Speaks through the log, for headless runs.
#[derive(Debug, Default)]
pub struct LogSynthesizer;

#[async_trait]
impl Synthesizer for LogSynthesizer {
    fn id(&self) -> &'static str {
        "log"
    }

    async fn synthesize(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        info!(locale = utterance.locale, "🗣️ {}", utterance.text);
        Ok(())
    }
}
