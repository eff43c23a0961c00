// Sentiment model trait: the seam between the pipeline and the lexicon model.
//
// The default implementation wraps VADER. Tests substitute scripted models
// so classification and aggregation can be checked without the lexicon.

use anyhow::Result;

use crate::models::PolarityScores;

/// Trait for scoring the polarity of a span of text.
///
/// Implementations are shared across concurrent requests, so they must be
/// read-only after construction.
pub trait SentimentModel: Send + Sync {
    /// Score a text span. `compound` must lie in [-1, 1].
    fn polarity(&self, text: &str) -> Result<PolarityScores>;
}
