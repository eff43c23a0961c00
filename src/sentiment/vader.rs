// VADER lexicon sentiment model.
//
// VADER is tuned for short news and social text and produces a compound
// polarity plus positive/negative/neutral proportions, which map directly
// onto PolarityScores.

use std::panic::{catch_unwind, AssertUnwindSafe};

use anyhow::Result;
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::traits::SentimentModel;
use crate::models::PolarityScores;
use crate::output::truncate_chars;

/// Stateless handle over the VADER lexicon. The lexicon itself is a
/// process-wide static inside the vader_sentiment crate, so constructing an
/// analyzer per call is cheap.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaderModel;

impl VaderModel {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentModel for VaderModel {
    fn polarity(&self, text: &str) -> Result<PolarityScores> {
        // The lexicon code indexes into token windows; treat a panic there as
        // a scoring failure rather than taking down the request.
        let scores = catch_unwind(AssertUnwindSafe(|| {
            let analyzer = SentimentIntensityAnalyzer::new();
            let raw = analyzer.polarity_scores(text);
            PolarityScores {
                positive: raw.get("pos").copied().unwrap_or(0.0),
                negative: raw.get("neg").copied().unwrap_or(0.0),
                neutral: raw.get("neu").copied().unwrap_or(0.0),
                compound: raw.get("compound").copied().unwrap_or(0.0),
            }
        }))
        .map_err(|_| anyhow::anyhow!("VADER analyzer panicked while scoring text"))?;

        debug!(
            compound = scores.compound,
            text_preview = %truncate_chars(text, 50),
            "Scored sentiment"
        );

        Ok(scores)
    }
}
