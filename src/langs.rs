//! Static language table mapping display names to service language codes.
//!
//! The table is compiled in, loaded once, and immutable. Presentation layers
//! offer `display_names()` in a selection widget and resolve the chosen name
//! back to a [`LanguageCode`] before triggering a flow.

use crate::error::{Result, VoxlateError};

/// (display name, service code) pairs, sorted by display name.
const LANGUAGES: &[(&str, &str)] = &[
    ("Afrikaans", "af"),
    ("Arabic", "ar"),
    ("Chinese (Simplified)", "zh-cn"),
    ("Chinese (Traditional)", "zh-tw"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("French", "fr"),
    ("German", "de"),
    ("Hindi", "hi"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Spanish", "es"),
    ("Swedish", "sv"),
];

/// A validated handle into the language table.
///
/// Can only be constructed through table lookups, so holding one proves the
/// language is supported by the external services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageCode {
    code: &'static str,
    display_name: &'static str,
}

impl LanguageCode {
    /// Resolve a human-readable display name (e.g. "French") to a code.
    pub fn from_display_name(name: &str) -> Result<Self> {
        LANGUAGES
            .iter()
            .find(|(display, _)| display.eq_ignore_ascii_case(name))
            .map(|&(display_name, code)| Self { code, display_name })
            .ok_or_else(|| VoxlateError::UnknownLanguage {
                name: name.to_string(),
            })
    }

    /// Resolve a service code (e.g. "fr") to a table entry.
    pub fn from_code(code: &str) -> Result<Self> {
        LANGUAGES
            .iter()
            .find(|(_, c)| c.eq_ignore_ascii_case(code))
            .map(|&(display_name, code)| Self { code, display_name })
            .ok_or_else(|| VoxlateError::UnknownLanguage {
                name: code.to_string(),
            })
    }

    /// The short code passed to external services.
    pub fn as_str(&self) -> &'static str {
        self.code
    }

    /// The human-readable name shown in a selection UI.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

/// All supported display names, in table (alphabetical) order.
pub fn display_names() -> impl Iterator<Item = &'static str> {
    LANGUAGES.iter().map(|(display, _)| *display)
}
