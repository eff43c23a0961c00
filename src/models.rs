// Data models: the types that flow through the analysis pipeline.
//
// These are also the wire types of the /analyze endpoint, so the terminal
// client and the server share one definition.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Title carried by the sentinel article that signals a failed fetch.
pub const ERROR_TITLE: &str = "Error";

/// A single news article. Created by the fetcher with only
/// title/summary/link, then enriched in place by the report builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

impl Article {
    /// A bare stub with no enrichment attached.
    pub fn stub(title: impl Into<String>, summary: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            link: link.into(),
            sentiment: None,
            topics: None,
        }
    }

    /// The sentinel returned when the news source could not be used.
    pub fn error_sentinel(diagnostic: impl Into<String>) -> Self {
        Self::stub(ERROR_TITLE, diagnostic, "#")
    }

    pub fn is_error_sentinel(&self) -> bool {
        self.title == ERROR_TITLE
    }
}

/// Sentiment label for a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Component weights reported by the sentiment model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    /// Normalized polarity in [-1, 1]
    pub compound: f64,
}

/// Sentiment attached to an article: either the bare label or the label
/// with the scores it was derived from. Consumers must accept both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentimentResult {
    Label(Sentiment),
    Detailed(SentimentDetail),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentDetail {
    pub label: Sentiment,
    pub scores: PolarityScores,
    /// A second, independent polarity estimate when the model provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_polarity: Option<f64>,
}

impl SentimentResult {
    pub fn label(&self) -> Sentiment {
        match self {
            SentimentResult::Label(label) => *label,
            SentimentResult::Detailed(detail) => detail.label,
        }
    }

    pub fn scores(&self) -> Option<&PolarityScores> {
        match self {
            SentimentResult::Label(_) => None,
            SentimentResult::Detailed(detail) => Some(&detail.scores),
        }
    }
}

/// Count of articles per sentiment label. All three labels are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentDistribution {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl SentimentDistribution {
    pub fn increment(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: Sentiment) -> u32 {
        match label {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDifference {
    pub comparison: String,
    pub impact: String,
}

/// Set comparison of the first two articles' topics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicOverlap {
    pub common: BTreeSet<String>,
    pub unique_to_first: BTreeSet<String>,
    pub unique_to_second: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparativeReport {
    pub sentiment_distribution: SentimentDistribution,
    pub coverage_differences: Vec<CoverageDifference>,
    pub topic_overlap: TopicOverlap,
}

/// The assembled result of one /analyze request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub company: String,
    pub articles: Vec<Article>,
    pub comparative: ComparativeReport,
    pub final_sentiment_text: String,
    pub audio: Option<PathBuf>,
}

/// Language code used when a request names none.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Request body of POST /analyze.
///
/// Both fields tolerate being absent or null, so a blank form still gets the
/// user-facing "Company name is required." reply instead of a rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(company: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            company: Some(company.into()),
            language: Some(language.into()),
        }
    }

    /// The company name, empty when missing.
    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

/// Reply of POST /analyze: a user-facing error or the full analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeReply {
    Error { error: String },
    Report(Box<AnalysisResponse>),
}

/// Output language for spoken and written verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Resolve a language code. Only "hi" selects Hindi; anything else is English.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("hi") {
            Language::Hindi
        } else {
            Language::English
        }
    }

    /// Two-letter code understood by the speech engine.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }
}
