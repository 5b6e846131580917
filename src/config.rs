use crate::defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub services: ServicesConfig,
    pub translation: TranslationConfig,
}

/// External service endpoints and credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    /// Base URL of the Whisper-compatible recognition service
    pub transcribe_url: String,
    /// Recognition model name
    pub transcribe_model: String,
    /// API key for the recognition service, if it requires one
    pub api_key: Option<String>,
    /// Translation service endpoint
    pub translate_url: String,
    /// Speech synthesis service endpoint
    pub synthesis_url: String,
    /// Client-level HTTP timeout in seconds
    pub timeout_secs: u64,
}

/// Translation defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslationConfig {
    /// Target language code used when the caller does not pick one
    pub default_target_language: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            transcribe_url: defaults::TRANSCRIBE_BASE_URL.to_string(),
            transcribe_model: defaults::TRANSCRIBE_MODEL.to_string(),
            api_key: None,
            translate_url: defaults::TRANSLATE_URL.to_string(),
            synthesis_url: defaults::SYNTHESIS_URL.to_string(),
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            default_target_language: defaults::DEFAULT_TARGET_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Invalid TOML is still an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - VOXLATE_API_KEY → services.api_key
    /// - VOXLATE_TRANSCRIBE_URL → services.transcribe_url
    /// - VOXLATE_TARGET_LANGUAGE → translation.default_target_language
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("VOXLATE_API_KEY")
            && !key.is_empty()
        {
            self.services.api_key = Some(key);
        }

        if let Ok(url) = std::env::var("VOXLATE_TRANSCRIBE_URL")
            && !url.is_empty()
        {
            self.services.transcribe_url = url;
        }

        if let Ok(lang) = std::env::var("VOXLATE_TARGET_LANGUAGE")
            && !lang.is_empty()
        {
            self.translation.default_target_language = lang;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/voxlate/config.toml on Linux
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("voxlate").join("config.toml"))
    }
}
