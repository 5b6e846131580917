//! Audio format conversion: compressed containers in, 16kHz mono PCM out.

pub mod decoder;
pub mod wav;

pub use decoder::convert;
pub use wav::{wav_bytes, write_wav};
