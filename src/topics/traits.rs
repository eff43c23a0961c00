// Keyword model trait: swap-ready abstraction.
//
// Like SentimentModel, this lets the pipeline stay unchanged when the
// keyword approach changes. The default implementation uses YAKE.

use anyhow::Result;

/// Trait for pulling ranked single-word keywords out of a text span.
pub trait KeywordModel: Send + Sync {
    /// Return up to `count` keywords, best first.
    fn keywords(&self, text: &str, count: usize) -> Result<Vec<String>>;
}
