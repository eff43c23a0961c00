// Topic extraction with placeholder fallback.

use tracing::debug;

use super::traits::KeywordModel;
use crate::outcome::Outcome;

/// Number of topics attached to each article.
pub const TOPIC_COUNT: usize = 3;

/// Topics used when the keyword model produces nothing usable.
pub fn fallback_topics() -> Vec<String> {
    (1..=TOPIC_COUNT).map(|i| format!("Topic {i}")).collect()
}

/// Extract up to three ranked topics from `text`.
///
/// An empty result or a model error yields the placeholder topics.
pub fn extract_topics(model: &dyn KeywordModel, text: &str) -> Outcome<Vec<String>> {
    match model.keywords(text, TOPIC_COUNT) {
        Ok(mut keywords) if !keywords.is_empty() => {
            keywords.truncate(TOPIC_COUNT);
            debug!(topics = ?keywords, "Extracted topics");
            Outcome::Computed(keywords)
        }
        Ok(_) => Outcome::defaulted(fallback_topics(), "topics", "keyword model returned no keywords"),
        Err(e) => Outcome::defaulted(fallback_topics(), "topics", e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Vec<&'static str>);

    impl KeywordModel for Canned {
        fn keywords(&self, _text: &str, _count: usize) -> anyhow::Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct Failing;

    impl KeywordModel for Failing {
        fn keywords(&self, _text: &str, _count: usize) -> anyhow::Result<Vec<String>> {
            anyhow::bail!("tokenizer exploded")
        }
    }

    #[test]
    fn test_keywords_pass_through_in_rank_order() {
        let outcome = extract_topics(&Canned(vec!["battery", "tesla", "deliveries"]), "text");
        assert!(!outcome.is_defaulted());
        assert_eq!(outcome.into_value(), vec!["battery", "tesla", "deliveries"]);
    }

    #[test]
    fn test_extra_keywords_are_truncated() {
        let outcome = extract_topics(&Canned(vec!["a", "b", "c", "d"]), "text");
        assert_eq!(outcome.into_value().len(), TOPIC_COUNT);
    }

    #[test]
    fn test_empty_result_falls_back() {
        let outcome = extract_topics(&Canned(vec![]), "text");
        assert!(outcome.is_defaulted());
        assert_eq!(outcome.into_value(), vec!["Topic 1", "Topic 2", "Topic 3"]);
    }

    #[test]
    fn test_error_falls_back() {
        let outcome = extract_topics(&Failing, "text");
        assert!(outcome.is_defaulted());
        assert_eq!(outcome.into_value(), fallback_topics());
    }
}
