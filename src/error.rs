//! Error types for voxlate.

use thiserror::Error;

/// Errors produced by the media-translation pipeline.
///
/// Every variant is terminal for the current request; `Display` is the
/// single user-facing message. The historical `"Translation error:"` and
/// `"Text to Speech error:"` marker texts survive as display prefixes so
/// presentation layers keep showing the same messages, but failure never
/// shares a channel with successful text.
#[derive(Error, Debug)]
pub enum VoxlateError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Format and decoding errors
    #[error("Unsupported audio format: {message}")]
    UnsupportedFormat { message: String },

    #[error("Document extraction failed: {message}")]
    DocumentExtraction { message: String },

    #[error("No text found in document {filename}")]
    EmptyDocument { filename: String },

    // Validation errors, caught before any external call
    #[error("Missing input: {message}")]
    MissingInput { message: String },

    // External service failures
    #[error("Transcription error: {message}")]
    Transcription { message: String },

    #[error("Translation error: {message}")]
    Translation { message: String },

    #[error("Text to Speech error: {message}")]
    Synthesis { message: String },

    // Language table lookups
    #[error("Unknown language: {name}")]
    UnknownLanguage { name: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, VoxlateError>;
