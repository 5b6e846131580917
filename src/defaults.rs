//! Default constants for voxlate.
//!
//! This module provides shared constants used across configuration types
//! and pipeline stages to ensure consistency and eliminate duplication.

/// Target audio sample rate in Hz.
///
/// 16kHz mono is the standard input format for speech recognition and
/// provides a good balance between quality and upload size.
pub const SAMPLE_RATE: u32 = 16_000;

/// Fixed text returned when recognition cannot understand the audio.
///
/// Recognition ambiguity is a soft failure: the pipeline reports this
/// sentinel as the transcript instead of failing the whole request.
pub const UNRECOGNIZED_SPEECH: &str = "Speech recognition could not understand the audio.";

/// Default target language code for translation.
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Default base URL for the speech recognition service.
///
/// Any Whisper-compatible `/audio/transcriptions` endpoint works here.
pub const TRANSCRIBE_BASE_URL: &str = "https://api.openai.com/v1";

/// Default recognition model name.
pub const TRANSCRIBE_MODEL: &str = "whisper-1";

/// Default endpoint for the translation service.
pub const TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Default endpoint for the speech synthesis service.
pub const SYNTHESIS_URL: &str = "https://translate.google.com/translate_tts";

/// Default HTTP timeout for external service calls, in seconds.
///
/// The orchestrator itself enforces no deadline; this is the client-level
/// default each adapter hands to reqwest.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Filename prefix for temporary artifacts, used to keep this crate's
/// files identifiable in the shared platform temp directory.
pub const TEMP_PREFIX: &str = "voxlate-";
