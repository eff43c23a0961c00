// Article fetcher — turns one search into a fixed-size article batch.
//
// The rest of the pipeline assumes exactly BATCH_SIZE articles. Short result
// lists are padded with placeholders; a failed search becomes a single
// sentinel article carrying the diagnostic. This function never fails.

use tracing::{info, warn};

use super::traits::{NewsItem, NewsSource};
use crate::models::Article;

/// Articles per batch.
pub const BATCH_SIZE: usize = 10;

/// Maximum characters kept from an item's description.
const SUMMARY_MAX_CHARS: usize = 200;

const NO_TITLE: &str = "No title available";
const NO_SUMMARY: &str = "No summary available";
const NO_LINK: &str = "#";

/// Summary text of padding articles.
pub const PLACEHOLDER_SUMMARY: &str = "N/A";

/// Fetch a batch of articles about `company`.
pub async fn fetch_articles(source: &dyn NewsSource, company: &str) -> Vec<Article> {
    let items = match source.search(company, BATCH_SIZE).await {
        Ok(items) => items,
        Err(e) => {
            warn!(company = company, error = %e, "News search failed");
            return vec![Article::error_sentinel(e.to_string())];
        }
    };

    let mut articles: Vec<Article> = items.iter().take(BATCH_SIZE).map(to_article).collect();
    let real = articles.len();

    for i in 0..BATCH_SIZE.saturating_sub(real) {
        articles.push(placeholder(i));
    }

    info!(
        company = company,
        real = real,
        placeholders = BATCH_SIZE - real,
        "Fetched article batch"
    );

    articles
}

/// Padding article number `index` (counted from 0).
pub fn placeholder(index: usize) -> Article {
    Article::stub(format!("Dummy {index}"), PLACEHOLDER_SUMMARY, NO_LINK)
}

fn to_article(item: &NewsItem) -> Article {
    let title = non_empty(&item.title).unwrap_or(NO_TITLE);
    let link = non_empty(&item.url).unwrap_or(NO_LINK);
    let summary = match non_empty(&item.description) {
        Some(description) => description.chars().take(SUMMARY_MAX_CHARS).collect(),
        None => NO_SUMMARY.to_string(),
    };
    Article::stub(title, summary, link)
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_get_defaults() {
        let article = to_article(&NewsItem {
            title: None,
            description: Some(String::new()),
            url: None,
        });
        assert_eq!(article.title, NO_TITLE);
        assert_eq!(article.summary, NO_SUMMARY);
        assert_eq!(article.link, "#");
    }

    #[test]
    fn test_summary_truncated_to_200_chars() {
        let article = to_article(&NewsItem {
            title: Some("t".to_string()),
            description: Some("é".repeat(500)),
            url: Some("https://example.com".to_string()),
        });
        assert_eq!(article.summary.chars().count(), 200);
        assert_eq!(article.link, "https://example.com");
    }

    #[test]
    fn test_placeholder_shape() {
        let p = placeholder(3);
        assert_eq!(p.title, "Dummy 3");
        assert_eq!(p.summary, "N/A");
        assert_eq!(p.link, "#");
        assert!(p.sentiment.is_none());
    }
}
