//! Pipeline orchestrator: sequences format conversion and external calls
//! for the two user-triggerable flows, and owns temporary-artifact
//! lifecycle for the duration of each request.
//!
//! Both flows are synchronous and single-shot per trigger: no queuing, no
//! cancellation, no parallelism. Every temporary file created during a
//! request is a scope-owned [`TempArtifact`], so it is deleted before the
//! flow returns regardless of which branch executed.

use crate::audio;
use crate::config::Config;
use crate::document;
use crate::error::{Result, VoxlateError};
use crate::langs::LanguageCode;
use crate::pipeline::types::{
    SpeechInput, SpeechToTextOutcome, TextToSpeechOutcome, UploadedArtifact,
};
use crate::services::{
    HttpSynthesizer, HttpTranscriber, HttpTranslator, Synthesizer, Transcriber, Transcript,
    Translator,
};
use crate::temp::TempArtifact;

/// The media-translation pipeline.
///
/// Collaborators are injected at construction, never process-wide statics,
/// so every flow is testable against mocks.
pub struct Pipeline {
    transcriber: Box<dyn Transcriber>,
    translator: Box<dyn Translator>,
    synthesizer: Box<dyn Synthesizer>,
}

impl Pipeline {
    /// Build a pipeline from explicit collaborators.
    pub fn new(
        transcriber: Box<dyn Transcriber>,
        translator: Box<dyn Translator>,
        synthesizer: Box<dyn Synthesizer>,
    ) -> Self {
        Self {
            transcriber,
            translator,
            synthesizer,
        }
    }

    /// Build a pipeline backed by the configured HTTP services.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            Box::new(HttpTranscriber::new(&config.services)?),
            Box::new(HttpTranslator::new(&config.services)?),
            Box::new(HttpSynthesizer::new(&config.services)?),
        ))
    }

    /// Flow A: uploaded audio → transcript + translation.
    ///
    /// Persists the upload and its converted waveform as scoped temporary
    /// files, transcribes, and translates recognized speech into `target`.
    /// When recognition is ambiguous the fixed sentinel becomes the
    /// transcript and translation is skipped — the sentinel is not speech
    /// and translating it would only launder a failure into output.
    pub fn transcribe_and_translate(
        &self,
        upload: &UploadedArtifact,
        target: &LanguageCode,
    ) -> Result<SpeechToTextOutcome> {
        tracing::info!(upload = %upload.summary(), target = %target, "starting speech-to-text flow");

        // Staged copy of the upload in its original container. Held for the
        // whole request so presentation can replay it; deleted on drop.
        let _staged_upload = TempArtifact::from_bytes(
            &upload.bytes,
            &upload
                .extension()
                .map(|ext| format!(".{}", ext))
                .unwrap_or_else(|| ".bin".to_string()),
        )?;

        let samples = audio::convert(&upload.bytes, upload.extension().as_deref())?;

        let waveform = TempArtifact::create(".wav")?;
        audio::write_wav(&samples, waveform.path())?;
        let wav = waveform.read()?;

        let transcript = self.transcriber.transcribe(&wav)?;

        let translation = match &transcript {
            Transcript::Recognized(text) => Some(self.translator.translate(text, target)?),
            Transcript::Unrecognized => {
                tracing::warn!("recognition ambiguous; skipping translation of the sentinel");
                None
            }
        };

        Ok(SpeechToTextOutcome {
            transcript: transcript.text().to_string(),
            translation,
        })
    }

    /// Flow B: text or document → translated, spoken-aloud rendering.
    ///
    /// Validates input before any external call, translates into `target`,
    /// and synthesizes speech from the translated text. The synthesized
    /// audio is staged in a scoped temporary file and read back into the
    /// outcome before the file is deleted.
    pub fn translate_and_speak(
        &self,
        input: &SpeechInput,
        target: &LanguageCode,
    ) -> Result<TextToSpeechOutcome> {
        let source_text = match input {
            SpeechInput::Text(text) => {
                if text.trim().is_empty() {
                    return Err(VoxlateError::MissingInput {
                        message: "Please enter some text.".to_string(),
                    });
                }
                text.clone()
            }
            SpeechInput::Document(doc) => {
                if doc.bytes.is_empty() {
                    return Err(VoxlateError::MissingInput {
                        message: "Please upload a PDF file.".to_string(),
                    });
                }
                document::extract_text(&doc.bytes, &doc.filename)?
            }
        };

        tracing::info!(chars = source_text.len(), target = %target, "starting text-to-speech flow");

        let translated_text = self.translator.translate(&source_text, target)?;

        let audio_bytes = self.synthesizer.synthesize(&translated_text, target)?;
        let spoken = TempArtifact::from_bytes(&audio_bytes, ".mp3")?;
        let audio = spoken.read()?;

        Ok(TextToSpeechOutcome {
            source_text,
            translated_text,
            audio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::UNRECOGNIZED_SPEECH;
    use crate::services::{MockSynthesizer, MockTranscriber, MockTranslator};
    use std::sync::Arc;

    fn french() -> LanguageCode {
        LanguageCode::from_display_name("French").unwrap()
    }

    fn wav_upload(samples: &[i16]) -> UploadedArtifact {
        use std::io::Cursor;
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
        UploadedArtifact::new(cursor.into_inner(), "audio/wav", "clip.wav")
    }

    fn pipeline_with(
        transcriber: MockTranscriber,
        translator: Arc<MockTranslator>,
        synthesizer: Arc<MockSynthesizer>,
    ) -> Pipeline {
        Pipeline::new(
            Box::new(transcriber),
            Box::new(translator),
            Box::new(synthesizer),
        )
    }

    #[test]
    fn flow_a_returns_transcript_and_translation() {
        let translator = Arc::new(MockTranslator::new().with_response("bonjour le monde"));
        let pipeline = pipeline_with(
            MockTranscriber::new("hello world"),
            Arc::clone(&translator),
            Arc::new(MockSynthesizer::new()),
        );

        let outcome = pipeline
            .transcribe_and_translate(&wav_upload(&[100i16; 16000]), &french())
            .unwrap();

        assert_eq!(outcome.transcript, "hello world");
        assert_eq!(outcome.translation.as_deref(), Some("bonjour le monde"));
        assert_eq!(translator.call_count(), 1);
    }

    #[test]
    fn flow_a_unrecognized_skips_translation() {
        let translator = Arc::new(MockTranslator::new());
        let pipeline = pipeline_with(
            MockTranscriber::new("ignored").unrecognized(),
            Arc::clone(&translator),
            Arc::new(MockSynthesizer::new()),
        );

        let outcome = pipeline
            .transcribe_and_translate(&wav_upload(&[0i16; 1600]), &french())
            .unwrap();

        assert_eq!(outcome.transcript, UNRECOGNIZED_SPEECH);
        assert_eq!(outcome.translation, None);
        assert_eq!(translator.call_count(), 0);
    }

    #[test]
    fn flow_a_rejects_undecodable_upload() {
        let pipeline = pipeline_with(
            MockTranscriber::new("unused"),
            Arc::new(MockTranslator::new()),
            Arc::new(MockSynthesizer::new()),
        );

        let upload = UploadedArtifact::new(b"not audio at all".to_vec(), "audio/mpeg", "x.mp3");
        match pipeline.transcribe_and_translate(&upload, &french()) {
            Err(VoxlateError::UnsupportedFormat { .. }) => {}
            other => panic!("Expected UnsupportedFormat, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn flow_a_propagates_transcription_failure() {
        let pipeline = pipeline_with(
            MockTranscriber::new("unused").with_failure(),
            Arc::new(MockTranslator::new()),
            Arc::new(MockSynthesizer::new()),
        );

        let err = pipeline
            .transcribe_and_translate(&wav_upload(&[1i16; 1600]), &french())
            .unwrap_err();
        assert!(err.to_string().starts_with("Transcription error:"));
    }

    #[test]
    fn flow_b_text_mode_translates_and_speaks() {
        let translator = Arc::new(MockTranslator::new().with_response("hola mundo"));
        let synthesizer = Arc::new(MockSynthesizer::new().with_audio(b"fake-mp3"));
        let pipeline = pipeline_with(
            MockTranscriber::new("unused"),
            Arc::clone(&translator),
            Arc::clone(&synthesizer),
        );

        let input = SpeechInput::Text("hello world".to_string());
        let target = LanguageCode::from_display_name("Spanish").unwrap();
        let outcome = pipeline.translate_and_speak(&input, &target).unwrap();

        assert_eq!(outcome.source_text, "hello world");
        assert_eq!(outcome.translated_text, "hola mundo");
        assert_eq!(outcome.audio, b"fake-mp3");
        assert_eq!(synthesizer.call_count(), 1);
    }

    #[test]
    fn flow_b_empty_text_makes_no_external_calls() {
        let translator = Arc::new(MockTranslator::new());
        let synthesizer = Arc::new(MockSynthesizer::new());
        let pipeline = pipeline_with(
            MockTranscriber::new("unused"),
            Arc::clone(&translator),
            Arc::clone(&synthesizer),
        );

        let input = SpeechInput::Text("   ".to_string());
        match pipeline.translate_and_speak(&input, &french()) {
            Err(VoxlateError::MissingInput { message }) => {
                assert_eq!(message, "Please enter some text.");
            }
            other => panic!("Expected MissingInput, got {:?}", other.is_ok()),
        }
        assert_eq!(translator.call_count(), 0);
        assert_eq!(synthesizer.call_count(), 0);
    }

    #[test]
    fn flow_b_missing_document_makes_no_external_calls() {
        let translator = Arc::new(MockTranslator::new());
        let synthesizer = Arc::new(MockSynthesizer::new());
        let pipeline = pipeline_with(
            MockTranscriber::new("unused"),
            Arc::clone(&translator),
            Arc::clone(&synthesizer),
        );

        let input = SpeechInput::Document(UploadedArtifact::new(
            Vec::new(),
            "application/pdf",
            "empty.pdf",
        ));
        match pipeline.translate_and_speak(&input, &french()) {
            Err(VoxlateError::MissingInput { message }) => {
                assert_eq!(message, "Please upload a PDF file.");
            }
            other => panic!("Expected MissingInput, got {:?}", other.is_ok()),
        }
        assert_eq!(translator.call_count(), 0);
        assert_eq!(synthesizer.call_count(), 0);
    }

    #[test]
    fn flow_b_translation_failure_skips_synthesis() {
        let synthesizer = Arc::new(MockSynthesizer::new());
        let pipeline = pipeline_with(
            MockTranscriber::new("unused"),
            Arc::new(MockTranslator::new().with_failure()),
            Arc::clone(&synthesizer),
        );

        let input = SpeechInput::Text("hello".to_string());
        let err = pipeline.translate_and_speak(&input, &french()).unwrap_err();
        assert!(err.to_string().starts_with("Translation error:"));
        assert_eq!(synthesizer.call_count(), 0);
    }

    #[test]
    fn flow_b_synthesis_failure_surfaces_tts_marker() {
        let pipeline = pipeline_with(
            MockTranscriber::new("unused"),
            Arc::new(MockTranslator::new()),
            Arc::new(MockSynthesizer::new().with_failure()),
        );

        let input = SpeechInput::Text("hello".to_string());
        let err = pipeline.translate_and_speak(&input, &french()).unwrap_err();
        assert!(err.to_string().starts_with("Text to Speech error:"));
    }

    #[test]
    fn pipeline_builds_from_default_config() {
        let config = Config::default();
        assert!(Pipeline::from_config(&config).is_ok());
    }
}
