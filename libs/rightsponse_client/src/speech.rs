use async_trait::async_trait;
use thiserror::Error;

/// Recognition always runs in this locale.
pub const SPEECH_LOCALE: &str = "id-ID";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("Speech recognition is not supported on this platform.")]
    Unsupported,

    #[error("Speech recognition error: {0}")]
    Recognition(String),
}

/// Opaque speech-to-text source. Yields one final transcript per call.
#[async_trait]
pub trait SpeechRecognizer {
    async fn recognize(&self, locale: &str) -> Result<String, SpeechError>;
}
