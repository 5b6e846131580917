//! Media-translation pipeline orchestration.

pub mod orchestrator;
pub mod types;

pub use orchestrator::Pipeline;
pub use types::{SpeechInput, SpeechToTextOutcome, TextToSpeechOutcome, UploadedArtifact};
