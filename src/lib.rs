//! voxlate - speech transcription, translation, and text-to-speech pipeline
//!
//! A media-translation library: uploaded audio becomes a transcript plus a
//! translation, and text or PDF documents become translated, spoken-aloud
//! audio. Recognition, translation, synthesis, and document extraction are
//! delegated to external collaborators behind trait seams; this crate owns
//! format conversion, call orchestration, error mapping, and guaranteed
//! temporary-file cleanup.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod audio;
pub mod config;
pub mod defaults;
pub mod document;
pub mod error;
pub mod langs;
pub mod pipeline;
pub mod services;
pub mod temp;

// Core seams (recognition → translation → synthesis)
pub use services::{
    HttpSynthesizer, HttpTranscriber, HttpTranslator, MockSynthesizer, MockTranscriber,
    MockTranslator, Synthesizer, Transcriber, Transcript, Translator,
};

// Pipeline
pub use pipeline::{
    Pipeline, SpeechInput, SpeechToTextOutcome, TextToSpeechOutcome, UploadedArtifact,
};

// Error handling
pub use error::{Result, VoxlateError};

// Config
pub use config::Config;

// Languages
pub use langs::{LanguageCode, display_names};

// Scoped temp files
pub use temp::TempArtifact;

/// Build version string from the crate metadata.
pub fn version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
