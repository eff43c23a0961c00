// Comparative analysis across an enriched article batch.
//
// Three independent computations, none of which can fail:
// 1. Sentiment distribution over every article's current summary
// 2. A coverage-difference remark naming the first two articles
// 3. Topic overlap between the first two articles

use tracing::debug;

use crate::models::{Article, ComparativeReport, CoverageDifference, SentimentDistribution};
use crate::sentiment::analyze_sentiment;
use crate::sentiment::traits::SentimentModel;
use crate::topics::overlap::leading_pair_overlap;

/// Fixed impact sentence of the coverage-difference entry.
pub const COVERAGE_IMPACT: &str = "Positive news boosts confidence; negative news raises concerns.";

/// Build the comparative report for a batch.
///
/// The distribution re-scores each article's summary as it is now, which
/// after enrichment is the shortened summary, so its counts can differ from
/// the per-article labels.
pub fn comparative_analysis(model: &dyn SentimentModel, articles: &[Article]) -> ComparativeReport {
    let sentiment_distribution = sentiment_distribution(model, articles);
    let coverage_differences = coverage_differences(articles);
    let topic_overlap = leading_pair_overlap(articles);

    debug!(
        positive = sentiment_distribution.positive,
        negative = sentiment_distribution.negative,
        neutral = sentiment_distribution.neutral,
        common_topics = topic_overlap.common.len(),
        "Comparative analysis complete"
    );

    ComparativeReport {
        sentiment_distribution,
        coverage_differences,
        topic_overlap,
    }
}

/// Count articles per label, re-scoring each summary.
pub fn sentiment_distribution(
    model: &dyn SentimentModel,
    articles: &[Article],
) -> SentimentDistribution {
    let mut distribution = SentimentDistribution::default();
    for article in articles {
        distribution.increment(analyze_sentiment(model, &article.summary).into_value());
    }
    distribution
}

/// The coverage remark for the first two articles, or nothing for fewer.
///
/// The wording is a fixed template: it always calls the first article
/// positive and the second negative, whatever their actual labels.
pub fn coverage_differences(articles: &[Article]) -> Vec<CoverageDifference> {
    match articles {
        [first, second, ..] => vec![CoverageDifference {
            comparison: format!(
                "{} highlights positives, while {} focuses on negatives.",
                first.title, second.title
            ),
            impact: COVERAGE_IMPACT.to_string(),
        }],
        _ => Vec::new(),
    }
}
