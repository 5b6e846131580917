//! Machine translation seam.

use crate::error::{Result, VoxlateError};
use crate::langs::LanguageCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for text translation.
///
/// The source language is auto-detected by the external service; only the
/// destination is supplied.
pub trait Translator: Send + Sync {
    /// Translate `text` into the destination language.
    fn translate(&self, text: &str, dest: &LanguageCode) -> Result<String>;
}

impl<T: Translator> Translator for Arc<T> {
    fn translate(&self, text: &str, dest: &LanguageCode) -> Result<String> {
        (**self).translate(text, dest)
    }
}

/// Mock translator for testing.
///
/// Counts calls so tests can assert that validation short-circuits before
/// any external call is made.
#[derive(Debug)]
pub struct MockTranslator {
    response: Option<String>,
    should_fail: bool,
    calls: AtomicUsize,
}

impl MockTranslator {
    /// Create a mock that echoes the input prefixed with the target code
    pub fn new() -> Self {
        Self {
            response: None,
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Configure the mock to return a fixed translation
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }

    /// Configure the mock to fail on translate
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of translate calls observed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for MockTranslator {
    fn translate(&self, text: &str, dest: &LanguageCode) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(VoxlateError::Translation {
                message: "mock translation failure".to_string(),
            });
        }
        Ok(self
            .response
            .clone()
            .unwrap_or_else(|| format!("[{}] {}", dest.as_str(), text)))
    }
}
