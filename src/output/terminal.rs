// Terminal display of an analysis, plus the plain-text renderings used by
// the "read aloud" and "read screen" actions.
//
// `screen_lines` is the single source of what the user sees; `display_analysis`
// prints it with color, and "read screen" speaks the same lines.

use colored::Colorize;

use crate::models::{AnalysisResponse, Article, SentimentResult};

/// Every line of the analysis as displayed, uncolored, in display order.
pub fn screen_lines(response: &AnalysisResponse) -> Vec<String> {
    let mut lines = vec![format!("Analysis for {}", response.company)];

    for (i, article) in response.articles.iter().enumerate() {
        lines.extend(article_lines(i, article));
    }

    lines.push("Comparative Analysis".to_string());
    lines.push(serde_json::to_string(&response.comparative).unwrap_or_default());
    lines.push(format!("Final Sentiment: {}", response.final_sentiment_text));
    lines
}

fn article_lines(index: usize, article: &Article) -> Vec<String> {
    let mut lines = vec![
        format!("Article {}: {}", index + 1, article.title),
        format!("Summary: {}", article.summary),
    ];

    if let Some(sentiment) = &article.sentiment {
        lines.push(format!("Sentiment: {}", sentiment.label()));
        if let SentimentResult::Detailed(detail) = sentiment {
            lines.push(format!(
                "Sentiment Scores: Positive: {:.2}, Negative: {:.2}, Neutral: {:.2}, Compound: {:.2}",
                detail.scores.positive,
                detail.scores.negative,
                detail.scores.neutral,
                detail.scores.compound
            ));
            if let Some(polarity) = detail.secondary_polarity {
                lines.push(format!("Sentiment Polarity: {polarity:.2}"));
            }
        }
    }

    if let Some(topics) = &article.topics {
        lines.push(format!("Topics: {}", topics.join(", ")));
    }
    lines.push(format!("Link: {}", article.link));
    lines
}

/// Text for "read aloud": each article's summary, then the verdict.
pub fn read_aloud_text(response: &AnalysisResponse) -> String {
    let summaries: Vec<String> = response
        .articles
        .iter()
        .enumerate()
        .map(|(i, a)| format!("Article {}: {}", i + 1, a.summary))
        .collect();
    format!(
        "{}\nFinal Sentiment: {}",
        summaries.join("\n"),
        response.final_sentiment_text
    )
}

/// Print the analysis to the terminal.
pub fn display_analysis(response: &AnalysisResponse) {
    println!(
        "\n{}",
        format!("=== Analysis for {} ===", response.company).bold()
    );

    for (i, article) in response.articles.iter().enumerate() {
        println!();
        println!("  {}", format!("Article {}: {}", i + 1, article.title).bold());
        println!("    Summary: {}", article.summary);
        if let Some(sentiment) = &article.sentiment {
            println!("    Sentiment: {}", colorize_sentiment(sentiment));
            if let Some(scores) = sentiment.scores() {
                println!(
                    "    {}",
                    format!(
                        "pos {:.2}  neg {:.2}  neu {:.2}  compound {:.2}",
                        scores.positive, scores.negative, scores.neutral, scores.compound
                    )
                    .dimmed()
                );
            }
        }
        if let Some(topics) = &article.topics {
            println!("    Topics: {}", topics.join(", "));
        }
        println!("    Link: {}", article.link.dimmed());
    }

    let report = &response.comparative;
    println!("\n{}", "=== Comparative Analysis ===".bold());
    let dist = &report.sentiment_distribution;
    println!(
        "  Distribution: {} positive, {} negative, {} neutral",
        dist.positive.to_string().green(),
        dist.negative.to_string().red(),
        dist.neutral.to_string().yellow()
    );
    for diff in &report.coverage_differences {
        println!("  {}", diff.comparison);
        println!("    {}", diff.impact.dimmed());
    }
    let overlap = &report.topic_overlap;
    println!("  Common topics: {}", join_set(&overlap.common));
    println!("  Only in article 1: {}", join_set(&overlap.unique_to_first));
    println!("  Only in article 2: {}", join_set(&overlap.unique_to_second));

    println!(
        "\n{} {}",
        "Final sentiment:".bold(),
        response.final_sentiment_text
    );
    match &response.audio {
        Some(path) => println!("  Audio: {}", path.display()),
        None => println!("  {}", "Audio generation failed for final sentiment.".yellow()),
    }
}

fn join_set(set: &std::collections::BTreeSet<String>) -> String {
    if set.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn colorize_sentiment(sentiment: &SentimentResult) -> colored::ColoredString {
    let label = sentiment.label().as_str();
    match label {
        "Positive" => label.green(),
        "Negative" => label.red(),
        _ => label.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComparativeReport, PolarityScores, Sentiment, SentimentDetail};

    fn response() -> AnalysisResponse {
        let mut first = Article::stub("Earnings beat", "Profits rose sharply.", "https://a.example");
        first.sentiment = Some(SentimentResult::Detailed(SentimentDetail {
            label: Sentiment::Positive,
            scores: PolarityScores {
                positive: 0.5,
                negative: 0.0,
                neutral: 0.5,
                compound: 0.64,
            },
            secondary_polarity: None,
        }));
        first.topics = Some(vec!["profits".to_string(), "earnings".to_string()]);

        let mut second = Article::stub("Dummy 0", "N/A...", "#");
        second.sentiment = Some(SentimentResult::Label(Sentiment::Neutral));

        AnalysisResponse {
            company: "Acme".to_string(),
            articles: vec![first, second],
            comparative: ComparativeReport::default(),
            final_sentiment_text: "Acme’s news coverage is mixed.".to_string(),
            audio: None,
        }
    }

    #[test]
    fn test_screen_lines_in_display_order() {
        let lines = screen_lines(&response());
        assert_eq!(lines[0], "Analysis for Acme");
        assert_eq!(lines[1], "Article 1: Earnings beat");
        assert!(lines.contains(&"Sentiment: Positive".to_string()));
        assert!(lines.contains(&"Topics: profits, earnings".to_string()));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("Sentiment Scores: Positive: 0.50")));
        assert_eq!(lines.last().unwrap(), "Final Sentiment: Acme’s news coverage is mixed.");
    }

    #[test]
    fn test_read_aloud_is_summaries_then_verdict() {
        assert_eq!(
            read_aloud_text(&response()),
            "Article 1: Profits rose sharply.\nArticle 2: N/A...\nFinal Sentiment: Acme’s news coverage is mixed."
        );
    }
}
