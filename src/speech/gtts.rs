// Google Translate text-to-speech client.
//
// The translate_tts endpoint only accepts short inputs (about 100
// characters), so longer text is split on punctuation and whitespace and
// the MP3 fragments are concatenated. MP3 frames are self-delimiting, so
// the joined stream plays back as one file.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex_lite::Regex;
use tracing::debug;

use super::traits::SpeechSynthesizer;
use crate::models::Language;

/// Default base URL of the translate TTS endpoint.
pub const DEFAULT_TTS_URL: &str = "https://translate.google.com";

/// Maximum characters per TTS request.
const MAX_CHUNK_CHARS: usize = 100;

/// One clause: text up to and including its closing punctuation, with the
/// Devanagari danda counted as a sentence end.
const CLAUSE_PATTERN: &str = r"[^.!?;:,।\n]+[.!?;:,।\n]*";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

pub struct GoogleTts {
    client: reqwest::Client,
    base_url: String,
    clause_end: Regex,
}

impl GoogleTts {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("newscast/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            clause_end: Regex::new(CLAUSE_PATTERN).context("Invalid clause pattern")?,
        })
    }

    /// Split text into pieces the endpoint accepts.
    ///
    /// Splits after sentence and clause punctuation first, then packs words
    /// into pieces of at most MAX_CHUNK_CHARS characters. A single word
    /// longer than that is cut.
    pub fn split_for_speech(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        for clause in self.clause_end.find_iter(text) {
            let clause = clause.as_str().trim();
            if clause.is_empty() || clause.chars().all(|c| !c.is_alphanumeric()) {
                continue;
            }
            if clause.chars().count() <= MAX_CHUNK_CHARS {
                pieces.push(clause.to_string());
            } else {
                pack_words(clause, &mut pieces);
            }
        }
        pieces
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: Language,
        idx: usize,
        total: usize,
    ) -> Result<Vec<u8>> {
        let url = format!("{}/translate_tts", self.base_url);
        let total = total.to_string();
        let idx = idx.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language.code()),
                ("client", "tw-ob"),
                ("total", total.as_str()),
                ("idx", idx.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .context("TTS request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("TTS endpoint returned {status}");
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read TTS audio")?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>> {
        let chunks = self.split_for_speech(text);
        if chunks.is_empty() {
            anyhow::bail!("No text to speak");
        }

        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let bytes = self
                .fetch_chunk(chunk, language, idx, chunks.len())
                .await
                .with_context(|| format!("Chunk {} of {} failed", idx + 1, chunks.len()))?;
            audio.extend_from_slice(&bytes);
        }

        debug!(
            chunks = chunks.len(),
            bytes = audio.len(),
            language = language.code(),
            "Synthesized speech"
        );

        Ok(audio)
    }
}

fn pack_words(clause: &str, pieces: &mut Vec<String>) {
    let mut current = String::new();
    for word in clause.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current_len > 0 && current_len + 1 + word_len > MAX_CHUNK_CHARS {
            pieces.push(std::mem::take(&mut current));
        }

        if word_len > MAX_CHUNK_CHARS {
            let chars: Vec<char> = word.chars().collect();
            for part in chars.chunks(MAX_CHUNK_CHARS) {
                pieces.push(part.iter().collect());
            }
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        pieces.push(current);
    }
}
