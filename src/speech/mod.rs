// Text-to-speech: engine trait, Google Translate TTS client and rendering.

pub mod gtts;
pub mod render;
pub mod traits;
