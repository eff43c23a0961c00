// YAKE keyword extraction.
//
// Uses the `keyword_extraction` crate's YAKE implementation over a single
// article summary. YAKE scores terms from casing, position, frequency and
// context spread within the text itself, so it still ranks meaningfully
// when the summary is one sentence and there is no corpus to compare with.

use anyhow::Result;
use keyword_extraction::yake::{Yake, YakeParams};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::traits::KeywordModel;

/// Candidates whose similarity to a higher-ranked keyword reaches this ratio
/// are dropped as duplicates.
const DEDUP_THRESHOLD: f32 = 0.85;

/// Keywords are single words.
const NGRAM: usize = 1;

/// Co-occurrence window used for the context features.
const WINDOW_SIZE: usize = 2;

/// YAKE based keyword model. Zero API calls, runs locally.
pub struct YakeKeywords {
    stop_words: Vec<String>,
}

impl YakeKeywords {
    pub fn new() -> Self {
        Self {
            stop_words: get(LANGUAGE::English),
        }
    }
}

impl Default for YakeKeywords {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordModel for YakeKeywords {
    fn keywords(&self, text: &str, count: usize) -> Result<Vec<String>> {
        if !text.chars().any(char::is_alphanumeric) {
            anyhow::bail!("No text to extract keywords from");
        }

        let params = YakeParams::All(
            text,
            &self.stop_words,
            None,
            DEDUP_THRESHOLD,
            NGRAM,
            WINDOW_SIZE,
        );
        let ranked = Yake::new(params).get_ranked_keywords(count);

        debug!(keywords = ?ranked, "Extracted YAKE keywords");

        Ok(ranked)
    }
}
