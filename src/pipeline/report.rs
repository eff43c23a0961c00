// Report builder — the per-request orchestration.
//
// For one company name:
// 1. Validate the name (no network call on failure)
// 2. Fetch the article batch
// 3. Enrich each article: sentiment, shortened summary, topics
// 4. Aggregate across the batch
// 5. Derive the verdict and its sentence
// 6. Render the sentence to speech
//
// Only steps 1 and 2 can end the request with an error. Everything after
// degrades to defaults.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use super::comparative::comparative_analysis;
use crate::config::Config;
use crate::models::{AnalysisResponse, Article, Language, SentimentDistribution};
use crate::news::fetcher::fetch_articles;
use crate::news::gnews::GNewsClient;
use crate::news::traits::NewsSource;
use crate::sentiment::score_sentiment;
use crate::sentiment::traits::SentimentModel;
use crate::sentiment::vader::VaderModel;
use crate::speech::gtts::GoogleTts;
use crate::speech::render::{render_speech, VERDICT_AUDIO_FILE};
use crate::speech::traits::SpeechSynthesizer;
use crate::summary::summarize_text;
use crate::topics::extract::extract_topics;
use crate::topics::traits::KeywordModel;
use crate::topics::yake::YakeKeywords;

/// Positive-article count the batch must exceed to be called mostly positive.
///
/// Fixed regardless of batch size; it assumes the standard batch of ten.
pub const MOSTLY_POSITIVE_THRESHOLD: u32 = 5;

/// Errors that end a request before any analysis happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("Company name is required.")]
    MissingCompany,
    #[error("No articles found or API key issue.")]
    NoArticles,
}

/// Handles to the external collaborators. Constructed once at startup and
/// shared by every request.
#[derive(Clone)]
pub struct Services {
    pub news: Arc<dyn NewsSource>,
    pub sentiment: Arc<dyn SentimentModel>,
    pub keywords: Arc<dyn KeywordModel>,
    pub speech: Arc<dyn SpeechSynthesizer>,
}

impl Services {
    /// The production collaborators: GNews, VADER, YAKE and Google TTS.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            news: Arc::new(GNewsClient::new(
                &config.gnews_api_url,
                &config.gnews_api_key,
                &config.news_language,
            )?),
            sentiment: Arc::new(VaderModel::new()),
            keywords: Arc::new(YakeKeywords::new()),
            speech: Arc::new(GoogleTts::new(&config.tts_url)?),
        })
    }
}

/// Overall verdict on a company's coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    MostlyPositive,
    Mixed,
}

impl Verdict {
    /// Only the Positive count matters; Negative and Neutral are ignored.
    pub fn from_distribution(distribution: &SentimentDistribution) -> Self {
        if distribution.positive > MOSTLY_POSITIVE_THRESHOLD {
            Verdict::MostlyPositive
        } else {
            Verdict::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::MostlyPositive => "mostly positive",
            Verdict::Mixed => "mixed",
        }
    }
}

/// The one-sentence verdict shown to the user and spoken aloud.
pub fn verdict_sentence(company: &str, verdict: Verdict, language: Language) -> String {
    match language {
        Language::Hindi => format!("{company} के समाचार {} हैं।", verdict.as_str()),
        Language::English => format!("{company}’s news coverage is {}.", verdict.as_str()),
    }
}

pub struct ReportBuilder {
    services: Services,
    audio_dir: PathBuf,
    detailed_sentiment: bool,
}

impl ReportBuilder {
    pub fn new(services: Services, audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            services,
            audio_dir: audio_dir.into(),
            detailed_sentiment: false,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let services = Services::from_config(config)?;
        Ok(Self::new(services, config.audio_dir.clone())
            .with_detailed_sentiment(config.detailed_sentiment))
    }

    /// Attach the underlying polarity scores to each article's sentiment.
    pub fn with_detailed_sentiment(mut self, detailed: bool) -> Self {
        self.detailed_sentiment = detailed;
        self
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn audio_dir(&self) -> &Path {
        &self.audio_dir
    }

    /// Run the full analysis for `company`.
    ///
    /// `language` is a language code; only "hi" selects Hindi output.
    pub async fn build(
        &self,
        company: &str,
        language: &str,
    ) -> Result<AnalysisResponse, ReportError> {
        let company = company.trim();
        if company.is_empty() {
            warn!("Rejected analysis request without a company name");
            return Err(ReportError::MissingCompany);
        }
        let language = Language::from_code(language);

        let mut articles = fetch_articles(self.services.news.as_ref(), company).await;
        if articles.is_empty() || articles.iter().all(Article::is_error_sentinel) {
            warn!(
                company = company,
                reason = articles.first().map(|a| a.summary.as_str()).unwrap_or("empty batch"),
                "No usable articles"
            );
            return Err(ReportError::NoArticles);
        }

        for article in &mut articles {
            self.enrich_article(article);
        }

        let comparative = comparative_analysis(self.services.sentiment.as_ref(), &articles);
        let verdict = Verdict::from_distribution(&comparative.sentiment_distribution);
        let final_sentiment_text = verdict_sentence(company, verdict, language);

        let audio = render_speech(
            self.services.speech.as_ref(),
            &final_sentiment_text,
            language.code(),
            &self.audio_dir.join(VERDICT_AUDIO_FILE),
        )
        .await;

        info!(
            company = company,
            articles = articles.len(),
            verdict = verdict.as_str(),
            audio = audio.is_some(),
            "Analysis complete"
        );

        Ok(AnalysisResponse {
            company: company.to_string(),
            articles,
            comparative,
            final_sentiment_text,
            audio,
        })
    }

    /// Attach sentiment and topics to one article and shorten its summary.
    ///
    /// Sentiment is scored on the summary as fetched; topics are extracted
    /// from the shortened summary. The two stages read separate bindings so
    /// the order cannot be swapped by accident.
    pub fn enrich_article(&self, article: &mut Article) {
        let fetched_summary = std::mem::take(&mut article.summary);
        let sentiment = score_sentiment(
            self.services.sentiment.as_ref(),
            &fetched_summary,
            self.detailed_sentiment,
        );
        article.sentiment = Some(sentiment.into_value());

        let shortened_summary = summarize_text(&fetched_summary);
        let topics = extract_topics(self.services.keywords.as_ref(), &shortened_summary);
        article.topics = Some(topics.into_value());
        article.summary = shortened_summary;
    }
}
