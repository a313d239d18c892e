mod command_synthesizer;
mod log_synthesizer;
mod speech_queue;

use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
use thiserror::Error;

pub use command_synthesizer::CommandSynthesizer;
pub use log_synthesizer::LogSynthesizer;
pub use speech_queue::SpeechQueue;

/// Announces a message. Returns immediately, synthesis happens in the background.
pub trait SpeechNotifier: Debug + Send + Sync {
    fn speak(&self, text: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
}

/// A text-to-speech engine. Implementations complete once the utterance has been spoken.
#[async_trait]
pub trait Synthesizer: Debug + Send + Sync {
    fn id(&self) -> &'static str;

    async fn synthesize(&self, utterance: &Utterance) -> Result<(), SpeechError>;
}

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("no speech command configured")]
    MissingCommand,
    #[error("unable to run '{program}': {source}")]
    Spawn { program: String, source: io::Error },
    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: std::process::ExitStatus },
}
