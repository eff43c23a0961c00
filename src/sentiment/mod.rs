// Sentiment scoring: compound polarity mapped onto three labels.

pub mod traits;
pub mod vader;

use crate::models::{Sentiment, SentimentDetail, SentimentResult};
use crate::outcome::Outcome;

use traits::SentimentModel;

/// Compound score at or above which text is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which text is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Map a compound polarity onto a label.
pub fn classify(compound: f64) -> Sentiment {
    if compound >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Classify a text span. Model failures default to Neutral.
pub fn analyze_sentiment(model: &dyn SentimentModel, text: &str) -> Outcome<Sentiment> {
    match model.polarity(text) {
        Ok(scores) => Outcome::Computed(classify(scores.compound)),
        Err(e) => Outcome::defaulted(Sentiment::Neutral, "sentiment", e.to_string()),
    }
}

/// Score a text span into the shape attached to an article.
///
/// With `detailed` the underlying scores travel along with the label. A
/// failed model call always yields the bare Neutral label.
pub fn score_sentiment(
    model: &dyn SentimentModel,
    text: &str,
    detailed: bool,
) -> Outcome<SentimentResult> {
    match model.polarity(text) {
        Ok(scores) if detailed => Outcome::Computed(SentimentResult::Detailed(SentimentDetail {
            label: classify(scores.compound),
            scores,
            secondary_polarity: None,
        })),
        Ok(scores) => Outcome::Computed(SentimentResult::Label(classify(scores.compound))),
        Err(e) => Outcome::defaulted(
            SentimentResult::Label(Sentiment::Neutral),
            "sentiment",
            e.to_string(),
        ),
    }
}
