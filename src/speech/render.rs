// Speech rendering — synthesize text and write it to a fixed audio file.
//
// Rendering failures never reach the caller: the result is simply no audio.
// Files use fixed names, so concurrent requests overwrite each other and the
// last writer wins.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::traits::SpeechSynthesizer;
use crate::models::Language;

/// File holding the spoken verdict of the latest analysis.
pub const VERDICT_AUDIO_FILE: &str = "output.mp3";
/// File holding the "read aloud" rendering of article summaries.
pub const SUMMARY_AUDIO_FILE: &str = "summary_output.mp3";
/// File holding the "read screen" rendering of everything displayed.
pub const SCREEN_AUDIO_FILE: &str = "screen_output.mp3";

/// Render `text` to speech at `path`.
///
/// `language_code` resolves to Hindi only for "hi"; anything else is
/// English. Returns the written path, or None if synthesis or the write failed.
pub async fn render_speech(
    synth: &dyn SpeechSynthesizer,
    text: &str,
    language_code: &str,
    path: &Path,
) -> Option<PathBuf> {
    let language = Language::from_code(language_code);
    match try_render(synth, text, language, path).await {
        Ok(()) => {
            info!(path = %path.display(), language = language.code(), "Rendered speech");
            Some(path.to_path_buf())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %format!("{e:#}"), "Speech rendering failed");
            None
        }
    }
}

async fn try_render(
    synth: &dyn SpeechSynthesizer,
    text: &str,
    language: Language,
    path: &Path,
) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("No text to speak");
    }

    let audio = synth.synthesize(text, language).await?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create audio directory {}", parent.display()))?;
    }
    tokio::fs::write(path, &audio)
        .await
        .with_context(|| format!("Failed to write audio to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recording(Mutex<Vec<Language>>);

    #[async_trait]
    impl SpeechSynthesizer for Recording {
        async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>> {
            self.0.lock().unwrap().push(language);
            Ok(text.as_bytes().to_vec())
        }
    }

    struct Offline;

    #[async_trait]
    impl SpeechSynthesizer for Offline {
        async fn synthesize(&self, _text: &str, _language: Language) -> Result<Vec<u8>> {
            anyhow::bail!("network unreachable")
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("newscast-render-{}", std::process::id()))
            .join(name)
    }

    #[tokio::test]
    async fn test_writes_audio_and_returns_path() {
        let synth = Recording(Mutex::new(Vec::new()));
        let path = temp_path("ok.mp3");
        let result = render_speech(&synth, "mixed", "hi", &path).await;

        assert_eq!(result.as_deref(), Some(path.as_path()));
        assert_eq!(std::fs::read(&path).unwrap(), b"mixed");
        assert_eq!(synth.0.lock().unwrap().as_slice(), &[Language::Hindi]);
    }

    #[tokio::test]
    async fn test_unknown_language_maps_to_english() {
        let synth = Recording(Mutex::new(Vec::new()));
        render_speech(&synth, "mixed", "fr", &temp_path("fr.mp3")).await;
        assert_eq!(synth.0.lock().unwrap().as_slice(), &[Language::English]);
    }

    #[tokio::test]
    async fn test_failure_yields_none() {
        let result = render_speech(&Offline, "mixed", "en", &temp_path("fail.mp3")).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_empty_text_yields_none_without_synthesis() {
        let synth = Recording(Mutex::new(Vec::new()));
        let result = render_speech(&synth, "  ", "en", &temp_path("empty.mp3")).await;
        assert!(result.is_none());
        assert!(synth.0.lock().unwrap().is_empty());
    }
}
