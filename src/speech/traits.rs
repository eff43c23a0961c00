// Speech synthesizer trait: turns text into encoded audio.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Language;

/// Trait for text-to-speech engines. Async because the default engine is
/// an HTTP service.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `text` in `language`, returning MP3 bytes.
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>>;
}
