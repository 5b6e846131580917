//! Speech synthesis seam.

use crate::error::{Result, VoxlateError};
use crate::langs::LanguageCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for text-to-speech synthesis.
///
/// Returns encoded audio bytes (MP3); the orchestrator owns persisting them
/// to a scoped temporary artifact so cleanup stays in one place.
pub trait Synthesizer: Send + Sync {
    /// Synthesize spoken audio from `text` in the given language.
    fn synthesize(&self, text: &str, lang: &LanguageCode) -> Result<Vec<u8>>;
}

impl<T: Synthesizer> Synthesizer for Arc<T> {
    fn synthesize(&self, text: &str, lang: &LanguageCode) -> Result<Vec<u8>> {
        (**self).synthesize(text, lang)
    }
}

/// Mock synthesizer for testing.
#[derive(Debug)]
pub struct MockSynthesizer {
    audio: Vec<u8>,
    should_fail: bool,
    calls: AtomicUsize,
}

impl MockSynthesizer {
    /// Create a mock returning a small fixed payload
    pub fn new() -> Self {
        Self {
            audio: b"mock-mp3-bytes".to_vec(),
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Configure the audio bytes the mock returns
    pub fn with_audio(mut self, audio: &[u8]) -> Self {
        self.audio = audio.to_vec();
        self
    }

    /// Configure the mock to fail on synthesize
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of synthesize calls observed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer for MockSynthesizer {
    fn synthesize(&self, _text: &str, _lang: &LanguageCode) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(VoxlateError::Synthesis {
                message: "mock synthesis failure".to_string(),
            });
        }
        Ok(self.audio.clone())
    }
}
