use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::news::gnews::DEFAULT_GNEWS_API_URL;
use crate::speech::gtts::DEFAULT_TTS_URL;

/// Default address of the analysis endpoint, used by the terminal client.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// GNews API key. Empty means every analysis reports the missing key.
    pub gnews_api_key: String,
    /// GNews API base URL (defaults to https://gnews.io/api/v4)
    pub gnews_api_url: String,
    /// Language filter for news search results
    pub news_language: String,
    /// Base URL of the text-to-speech endpoint
    pub tts_url: String,
    /// Directory where rendered audio files are written
    pub audio_dir: PathBuf,
    /// Attach polarity scores to each article's sentiment
    pub detailed_sentiment: bool,
    /// Where the terminal client sends /analyze requests
    pub api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; a missing API key is reported per request
    /// rather than refusing to start.
    pub fn load() -> Result<Self> {
        let audio_dir = env::var("NEWSCAST_AUDIO_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_audio_dir());

        let detailed_sentiment = env::var("NEWSCAST_DETAILED_SENTIMENT")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            gnews_api_key: env::var("GNEWS_API_KEY").unwrap_or_default(),
            gnews_api_url: env::var("GNEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_GNEWS_API_URL.to_string()),
            news_language: env::var("NEWS_LANG").unwrap_or_else(|_| "en".to_string()),
            tts_url: env::var("TTS_URL").unwrap_or_else(|_| DEFAULT_TTS_URL.to_string()),
            audio_dir,
            detailed_sentiment,
            api_url: env::var("NEWSCAST_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        })
    }

    /// Check that the news API key is configured.
    pub fn require_news_api_key(&self) -> Result<()> {
        if self.gnews_api_key.trim().is_empty() {
            anyhow::bail!(
                "GNEWS_API_KEY not set. Add it to your .env file.\n\
                 Every analysis will report a missing key until it is set."
            );
        }
        Ok(())
    }
}

/// Platform data directory for audio: ~/.local/share/newscast/audio on Linux.
pub fn default_audio_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newscast")
        .join("audio")
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_default_audio_dir_is_namespaced() {
        let dir = default_audio_dir();
        assert!(dir.ends_with("newscast/audio"));
    }

    #[test]
    fn test_require_news_api_key() {
        let mut config = Config {
            gnews_api_key: String::new(),
            gnews_api_url: DEFAULT_GNEWS_API_URL.to_string(),
            news_language: "en".to_string(),
            tts_url: DEFAULT_TTS_URL.to_string(),
            audio_dir: default_audio_dir(),
            detailed_sentiment: false,
            api_url: DEFAULT_API_URL.to_string(),
        };
        assert!(config.require_news_api_key().is_err());
        config.gnews_api_key = "abc".to_string();
        assert!(config.require_news_api_key().is_ok());
    }
}
