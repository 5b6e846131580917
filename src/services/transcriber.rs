//! Speech recognition seam.

use crate::defaults::UNRECOGNIZED_SPEECH;
use crate::error::{Result, VoxlateError};
use std::sync::Arc;

/// Outcome of a recognition call.
///
/// Ambiguous or garbled audio is a soft failure: the pipeline continues with
/// [`Transcript::Unrecognized`] instead of aborting the request. Network and
/// service failures are hard errors ([`VoxlateError::Transcription`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    /// The service recognized speech.
    Recognized(String),
    /// The service could not understand the audio.
    Unrecognized,
}

impl Transcript {
    /// The text to present to the user: recognized speech, or the fixed
    /// "could not understand" sentinel.
    pub fn text(&self) -> &str {
        match self {
            Transcript::Recognized(text) => text,
            Transcript::Unrecognized => UNRECOGNIZED_SPEECH,
        }
    }

    /// Whether real speech was recognized.
    pub fn is_recognized(&self) -> bool {
        matches!(self, Transcript::Recognized(_))
    }
}

/// Trait for speech-to-text transcription.
///
/// This trait allows swapping implementations (real HTTP service vs mock).
pub trait Transcriber: Send + Sync {
    /// Transcribe an encoded WAV file (16kHz mono s16) to text.
    fn transcribe(&self, wav: &[u8]) -> Result<Transcript>;
}

/// Implement Transcriber for Arc<T> to allow sharing across requests.
impl<T: Transcriber> Transcriber for Arc<T> {
    fn transcribe(&self, wav: &[u8]) -> Result<Transcript> {
        (**self).transcribe(wav)
    }
}

/// Mock transcriber for testing
#[derive(Debug, Clone)]
pub struct MockTranscriber {
    response: Transcript,
    should_fail: bool,
}

impl MockTranscriber {
    /// Create a mock that recognizes the given text
    pub fn new(response: &str) -> Self {
        Self {
            response: Transcript::Recognized(response.to_string()),
            should_fail: false,
        }
    }

    /// Configure the mock to report ambiguous audio
    pub fn unrecognized(mut self) -> Self {
        self.response = Transcript::Unrecognized;
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&self, _wav: &[u8]) -> Result<Transcript> {
        if self.should_fail {
            Err(VoxlateError::Transcription {
                message: "mock transcription failure".to_string(),
            })
        } else {
            Ok(self.response.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_recognized_text() {
        let transcriber = MockTranscriber::new("hello world");

        let result = transcriber.transcribe(&[0u8; 64]).unwrap();
        assert_eq!(result, Transcript::Recognized("hello world".to_string()));
        assert_eq!(result.text(), "hello world");
        assert!(result.is_recognized());
    }

    #[test]
    fn mock_unrecognized_yields_sentinel_not_error() {
        let transcriber = MockTranscriber::new("ignored").unrecognized();

        let result = transcriber.transcribe(&[0u8; 64]).unwrap();
        assert_eq!(result, Transcript::Unrecognized);
        assert!(!result.is_recognized());
        assert_eq!(result.text(), UNRECOGNIZED_SPEECH);
    }

    #[test]
    fn mock_failure_is_transcription_error() {
        let transcriber = MockTranscriber::new("ignored").with_failure();

        match transcriber.transcribe(&[0u8; 64]) {
            Err(VoxlateError::Transcription { message }) => {
                assert_eq!(message, "mock transcription failure");
            }
            _ => panic!("Expected Transcription error"),
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let transcriber: Box<dyn Transcriber> = Box::new(MockTranscriber::new("boxed"));
        let result = transcriber.transcribe(&[]).unwrap();
        assert_eq!(result.text(), "boxed");
    }

    #[test]
    fn arc_blanket_impl_delegates() {
        let transcriber = Arc::new(MockTranscriber::new("shared"));
        let result = transcriber.transcribe(&[]).unwrap();
        assert_eq!(result.text(), "shared");
    }

    #[test]
    fn sentinel_text_carries_understanding_phrase() {
        assert!(Transcript::Unrecognized.text().contains("could not understand"));
    }
}
