//! Data types crossing the pipeline boundary.

/// An uploaded file: raw bytes plus the metadata the browser declared.
///
/// Ephemeral; owned by the orchestrator for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedArtifact {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub filename: String,
}

impl UploadedArtifact {
    pub fn new(bytes: Vec<u8>, mime_type: &str, filename: &str) -> Self {
        Self {
            bytes,
            mime_type: mime_type.to_string(),
            filename: filename.to_string(),
        }
    }

    /// The lowercase filename extension, if any (e.g. "mp3").
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    /// Upload details for presentation: filename, type, and size.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {} bytes)",
            self.filename,
            self.mime_type,
            self.bytes.len()
        )
    }
}

/// Input to the text-to-speech flow: direct text or an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechInput {
    Text(String),
    Document(UploadedArtifact),
}

/// Result of the audio → translated text flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechToTextOutcome {
    /// Recognized speech, or the fixed "could not understand" sentinel.
    pub transcript: String,
    /// Translation of the transcript; absent when recognition was ambiguous.
    pub translation: Option<String>,
}

/// Result of the text → translated speech flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToSpeechOutcome {
    /// The input text, possibly extracted from an uploaded document.
    pub source_text: String,
    /// The translated text that was spoken.
    pub translated_text: String,
    /// Encoded audio (MP3) ready for playback.
    pub audio: Vec<u8>,
}
