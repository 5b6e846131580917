//! Blocking HTTP implementations of the service seams.
//!
//! All calls are synchronous and single-shot: no retry, no backoff, no
//! orchestrator-side deadline beyond the client-level timeout. A failed call
//! fails the current request.

use crate::config::ServicesConfig;
use crate::error::{Result, VoxlateError};
use crate::langs::LanguageCode;
use crate::services::synthesizer::Synthesizer;
use crate::services::transcriber::{Transcriber, Transcript};
use crate::services::translator::Translator;
use reqwest::blocking::Client;
use std::time::Duration;

fn build_client(timeout_secs: u64) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Whisper-style recognition service adapter.
///
/// POSTs a multipart WAV upload to `{base_url}/audio/transcriptions` and
/// reads the `text` field of the JSON response. An empty transcript is the
/// service's way of saying it understood nothing, which maps to the
/// [`Transcript::Unrecognized`] soft failure.
pub struct HttpTranscriber {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl HttpTranscriber {
    pub fn new(config: &ServicesConfig) -> Result<Self> {
        let client = build_client(config.timeout_secs).map_err(|e| {
            VoxlateError::Transcription {
                message: format!("client init: {}", e),
            }
        })?;
        Ok(Self {
            client,
            base_url: config.transcribe_url.trim_end_matches('/').to_string(),
            model: config.transcribe_model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl Transcriber for HttpTranscriber {
    fn transcribe(&self, wav: &[u8]) -> Result<Transcript> {
        let part = reqwest::blocking::multipart::Part::bytes(wav.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| VoxlateError::Transcription {
                message: format!("multipart: {}", e),
            })?;

        let form = reqwest::blocking::multipart::Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let url = format!("{}/audio/transcriptions", self.base_url);

        let mut req = self.client.post(&url);
        if let Some(key) = &self.api_key {
            req = req.header("Authorization", format!("Bearer {}", key));
        }

        let res = req
            .multipart(form)
            .send()
            .map_err(|e| VoxlateError::Transcription {
                message: format!("request failed: {}", e),
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(VoxlateError::Transcription {
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let json: serde_json::Value = res.json().map_err(|e| VoxlateError::Transcription {
            message: format!("invalid response: {}", e),
        })?;

        tracing::debug!(url = %url, "transcription response received");
        Ok(parse_transcription(&json))
    }
}

/// Map a recognition response onto the transcript type.
///
/// A missing or blank `text` field is the ambiguous-audio soft failure.
fn parse_transcription(json: &serde_json::Value) -> Transcript {
    match json["text"].as_str().map(str::trim) {
        Some(text) if !text.is_empty() => Transcript::Recognized(text.to_string()),
        _ => Transcript::Unrecognized,
    }
}

/// Translation service adapter.
///
/// Speaks the `translate_a/single` wire format: a GET with the text in the
/// query string, auto-detected source language, and a nested JSON array
/// response whose first element lists translated segments.
pub struct HttpTranslator {
    client: Client,
    url: String,
}

impl HttpTranslator {
    pub fn new(config: &ServicesConfig) -> Result<Self> {
        let client =
            build_client(config.timeout_secs).map_err(|e| VoxlateError::Translation {
                message: format!("client init: {}", e),
            })?;
        Ok(Self {
            client,
            url: config.translate_url.clone(),
        })
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str, dest: &LanguageCode) -> Result<String> {
        let res = self
            .client
            .get(&self.url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", dest.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .map_err(|e| VoxlateError::Translation {
                message: format!("request failed: {}", e),
            })?;

        if !res.status().is_success() {
            return Err(VoxlateError::Translation {
                message: format!("HTTP {}", res.status()),
            });
        }

        let json: serde_json::Value = res.json().map_err(|e| VoxlateError::Translation {
            message: format!("invalid response: {}", e),
        })?;

        parse_translation(&json)
    }
}

/// Concatenate the translated segments of a `translate_a/single` response.
fn parse_translation(json: &serde_json::Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| VoxlateError::Translation {
            message: "unexpected response shape".to_string(),
        })?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect();

    if translated.is_empty() {
        return Err(VoxlateError::Translation {
            message: "empty response".to_string(),
        });
    }

    Ok(translated)
}

/// Speech synthesis service adapter.
///
/// GETs an MP3 rendition of the text in the requested language.
pub struct HttpSynthesizer {
    client: Client,
    url: String,
}

impl HttpSynthesizer {
    pub fn new(config: &ServicesConfig) -> Result<Self> {
        let client =
            build_client(config.timeout_secs).map_err(|e| VoxlateError::Synthesis {
                message: format!("client init: {}", e),
            })?;
        Ok(Self {
            client,
            url: config.synthesis_url.clone(),
        })
    }
}

impl Synthesizer for HttpSynthesizer {
    fn synthesize(&self, text: &str, lang: &LanguageCode) -> Result<Vec<u8>> {
        let res = self
            .client
            .get(&self.url)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", lang.as_str()),
                ("q", text),
            ])
            .send()
            .map_err(|e| VoxlateError::Synthesis {
                message: format!("request failed: {}", e),
            })?;

        if !res.status().is_success() {
            return Err(VoxlateError::Synthesis {
                message: format!("HTTP {}", res.status()),
            });
        }

        let audio = res
            .bytes()
            .map_err(|e| VoxlateError::Synthesis {
                message: format!("body read failed: {}", e),
            })?
            .to_vec();

        if audio.is_empty() {
            return Err(VoxlateError::Synthesis {
                message: "empty audio response".to_string(),
            });
        }

        tracing::debug!(bytes = audio.len(), lang = %lang, "synthesized audio received");
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_transcription_reads_text_field() {
        let json = json!({"text": "hello world"});
        assert_eq!(
            parse_transcription(&json),
            Transcript::Recognized("hello world".to_string())
        );
    }

    #[test]
    fn parse_transcription_trims_whitespace() {
        let json = json!({"text": "  bonjour  "});
        assert_eq!(
            parse_transcription(&json),
            Transcript::Recognized("bonjour".to_string())
        );
    }

    #[test]
    fn parse_transcription_blank_text_is_unrecognized() {
        assert_eq!(parse_transcription(&json!({"text": "   "})), Transcript::Unrecognized);
        assert_eq!(parse_transcription(&json!({"text": ""})), Transcript::Unrecognized);
    }

    #[test]
    fn parse_transcription_missing_text_is_unrecognized() {
        assert_eq!(parse_transcription(&json!({})), Transcript::Unrecognized);
        assert_eq!(parse_transcription(&json!(null)), Transcript::Unrecognized);
    }

    #[test]
    fn parse_translation_concatenates_segments() {
        // Shape of a real translate_a/single response, abbreviated
        let json = json!([
            [
                ["Bonjour le ", "Hello ", null, null],
                ["monde", "world", null, null]
            ],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&json).unwrap(), "Bonjour le monde");
    }

    #[test]
    fn parse_translation_rejects_unexpected_shape() {
        let err = parse_translation(&json!({"error": 404})).unwrap_err();
        assert!(err.to_string().starts_with("Translation error:"));
    }

    #[test]
    fn parse_translation_rejects_empty_segments() {
        let err = parse_translation(&json!([[]])).unwrap_err();
        assert!(err.to_string().contains("empty response"));
    }

    #[test]
    fn adapters_build_from_default_config() {
        let config = ServicesConfig::default();
        assert!(HttpTranscriber::new(&config).is_ok());
        assert!(HttpTranslator::new(&config).is_ok());
        assert!(HttpSynthesizer::new(&config).is_ok());
    }

    #[test]
    fn transcriber_trims_trailing_slash_from_base_url() {
        let config = ServicesConfig {
            transcribe_url: "http://localhost:9000/v1/".to_string(),
            ..ServicesConfig::default()
        };
        let transcriber = HttpTranscriber::new(&config).unwrap();
        assert_eq!(transcriber.base_url, "http://localhost:9000/v1");
    }
}
