// Set overlap between two articles' topics.
//
// Unlike a similarity score, the comparison keeps the actual words: what
// both articles talk about, and what each covers alone.

use std::collections::BTreeSet;

use crate::models::{Article, TopicOverlap};

/// Compare two topic lists as sets.
pub fn topic_overlap(first: &[String], second: &[String]) -> TopicOverlap {
    let a: BTreeSet<String> = first.iter().cloned().collect();
    let b: BTreeSet<String> = second.iter().cloned().collect();

    TopicOverlap {
        common: a.intersection(&b).cloned().collect(),
        unique_to_first: a.difference(&b).cloned().collect(),
        unique_to_second: b.difference(&a).cloned().collect(),
    }
}

/// Overlap of the first two articles in a batch.
///
/// Empty sets when there are fewer than two articles or either of the two
/// has no topics attached.
pub fn leading_pair_overlap(articles: &[Article]) -> TopicOverlap {
    match articles {
        [first, second, ..] => match (&first.topics, &second.topics) {
            (Some(a), Some(b)) => topic_overlap(a, b),
            _ => TopicOverlap::default(),
        },
        _ => TopicOverlap::default(),
    }
}
