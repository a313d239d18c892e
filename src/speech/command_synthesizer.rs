use crate::speech::{SpeechError, Synthesizer, Utterance};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

const LOCALE_PLACEHOLDER: &str = "{locale}";

/// Runs an external text-to-speech program, e.g. `espeak-ng -v {locale}`.
/// The text is passed as the last argument.
#[derive(Debug)]
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
}

impl CommandSynthesizer {
    pub fn from_command_line(command_line: &[String]) -> Result<Self, SpeechError> {
        let (program, args) = command_line.split_first().ok_or(SpeechError::MissingCommand)?;
        Ok(CommandSynthesizer {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    fn args_for(&self, utterance: &Utterance) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(LOCALE_PLACEHOLDER, &utterance.locale))
            .chain(std::iter::once(utterance.text.clone()))
            .collect()
    }
}

#[async_trait]
impl Synthesizer for CommandSynthesizer {
    fn id(&self) -> &'static str {
        "command"
    }

    #[instrument(skip_all, fields(program = %self.program))]
    async fn synthesize(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let args = self.args_for(utterance);
        debug!(?args, "🗣️ Running speech command...");

        let status = Command::new(&self.program).args(&args).status().await.map_err(|e| SpeechError::Spawn {
            program: self.program.clone(),
            source: e,
        })?;

        if !status.success() {
            return Err(SpeechError::Failed {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utterance(text: &str) -> Utterance {
        Utterance {
            text: text.to_string(),
            locale: "ko-KR".to_string(),
        }
    }

    fn command_line(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn from_command_line_requires_a_program() {
        let result = CommandSynthesizer::from_command_line(&[]);

        assert!(matches!(result, Err(SpeechError::MissingCommand)));
    }

    #[test]
    fn substitutes_the_locale_and_appends_the_text() -> Result<(), SpeechError> {
        let synthesizer = CommandSynthesizer::from_command_line(&command_line(&["espeak-ng", "-v", "{locale}"]))?;

        assert_eq!(synthesizer.args_for(&utterance("계단 주의")), vec!["-v", "ko-KR", "계단 주의"]);
        Ok(())
    }

    #[tokio::test]
    async fn synthesize_succeeds_when_the_program_succeeds() -> Result<(), SpeechError> {
        let synthesizer = CommandSynthesizer::from_command_line(&command_line(&["true"]))?;

        synthesizer.synthesize(&utterance("hello")).await
    }

    #[tokio::test]
    async fn synthesize_fails_when_the_program_fails() -> Result<(), SpeechError> {
        let synthesizer = CommandSynthesizer::from_command_line(&command_line(&["false"]))?;

        let result = synthesizer.synthesize(&utterance("hello")).await;

        assert!(matches!(result, Err(SpeechError::Failed { .. })));
        Ok(())
    }

    #[tokio::test]
    async fn synthesize_fails_for_an_unknown_program() -> Result<(), SpeechError> {
        let synthesizer = CommandSynthesizer::from_command_line(&command_line(&["definitely-not-a-speech-engine"]))?;

        let result = synthesizer.synthesize(&utterance("hello")).await;

        assert!(matches!(result, Err(SpeechError::Spawn { .. })));
        Ok(())
    }
}
