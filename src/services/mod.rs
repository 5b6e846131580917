//! External service collaborators behind trait seams.
//!
//! Recognition, translation, and synthesis are delegated to black-box
//! services. Each seam has a mock implementation so the pipeline stays
//! testable without network access.

pub mod http;
pub mod synthesizer;
pub mod transcriber;
pub mod translator;

pub use http::{HttpSynthesizer, HttpTranscriber, HttpTranslator};
pub use synthesizer::{MockSynthesizer, Synthesizer};
pub use transcriber::{MockTranscriber, Transcriber, Transcript};
pub use translator::{MockTranslator, Translator};
