// Test doubles for the external collaborators.
//
// Every double counts its calls so tests can assert which stages ran.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use newscast::models::{Language, PolarityScores};
use newscast::news::traits::{NewsError, NewsItem, NewsSource};
use newscast::pipeline::report::{ReportBuilder, Services};
use newscast::sentiment::traits::SentimentModel;
use newscast::speech::traits::SpeechSynthesizer;
use newscast::topics::traits::KeywordModel;

/// What the scripted news source answers.
#[derive(Clone)]
pub enum NewsScript {
    Items(Vec<NewsItem>),
    MissingKey,
    ApiError(String),
    Transport(String),
}

pub struct ScriptedNews {
    script: NewsScript,
    pub calls: AtomicUsize,
}

impl ScriptedNews {
    pub fn new(script: NewsScript) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsSource for ScriptedNews {
    async fn search(&self, _query: &str, max: usize) -> Result<Vec<NewsItem>, NewsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            NewsScript::Items(items) => Ok(items.iter().take(max).cloned().collect()),
            NewsScript::MissingKey => Err(NewsError::MissingApiKey),
            NewsScript::ApiError(msg) => Err(NewsError::Api(msg.clone())),
            NewsScript::Transport(msg) => Err(NewsError::Transport(anyhow::anyhow!(msg.clone()))),
        }
    }
}

/// Scores "good" as clearly positive, "bad" as clearly negative, anything
/// else as neutral.
#[derive(Default)]
pub struct KeywordSentiment {
    pub calls: AtomicUsize,
}

impl KeywordSentiment {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SentimentModel for KeywordSentiment {
    fn polarity(&self, text: &str) -> anyhow::Result<PolarityScores> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let compound: f64 = if text.contains("good") {
            0.7
        } else if text.contains("bad") {
            -0.7
        } else {
            0.0
        };
        Ok(PolarityScores {
            positive: compound.max(0.0),
            negative: (-compound).max(0.0),
            neutral: 1.0 - compound.abs(),
            compound,
        })
    }
}

/// Uses the first three words of the text, lowercased, as its keywords.
#[derive(Default)]
pub struct LeadingWords {
    pub calls: AtomicUsize,
}

impl LeadingWords {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl KeywordModel for LeadingWords {
    fn keywords(&self, text: &str, count: usize) -> anyhow::Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(text
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .take(count)
            .collect())
    }
}

/// Records every synthesis request; optionally fails all of them.
#[derive(Default)]
pub struct MemorySpeech {
    pub fail: bool,
    pub requests: Mutex<Vec<(String, Language)>>,
}

impl MemorySpeech {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<(String, Language)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MemorySpeech {
    async fn synthesize(&self, text: &str, language: Language) -> anyhow::Result<Vec<u8>> {
        self.requests
            .lock()
            .unwrap()
            .push((text.to_string(), language));
        if self.fail {
            anyhow::bail!("speech quota exceeded");
        }
        Ok(format!("MP3:{text}").into_bytes())
    }
}

/// Handles to every double wired into one builder.
pub struct Harness {
    pub news: Arc<ScriptedNews>,
    pub sentiment: Arc<KeywordSentiment>,
    pub keywords: Arc<LeadingWords>,
    pub speech: Arc<MemorySpeech>,
    pub audio_dir: PathBuf,
    pub builder: ReportBuilder,
}

impl Harness {
    pub fn new(script: NewsScript, test_name: &str) -> Self {
        Self::with_speech(script, MemorySpeech::default(), test_name)
    }

    pub fn with_speech(script: NewsScript, speech: MemorySpeech, test_name: &str) -> Self {
        let news = ScriptedNews::new(script);
        let sentiment = Arc::new(KeywordSentiment::default());
        let keywords = Arc::new(LeadingWords::default());
        let speech = Arc::new(speech);
        let audio_dir = temp_dir(test_name);

        let services = Services {
            news: news.clone(),
            sentiment: sentiment.clone(),
            keywords: keywords.clone(),
            speech: speech.clone(),
        };
        let builder = ReportBuilder::new(services, audio_dir.clone());

        Self {
            news,
            sentiment,
            keywords,
            speech,
            audio_dir,
            builder,
        }
    }
}

/// A per-test scratch directory under the system temp dir.
pub fn temp_dir(test_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("newscast-{}-{}", std::process::id(), test_name))
}

pub fn item(title: &str, description: &str) -> NewsItem {
    NewsItem {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        url: Some(format!("https://news.example.com/{}", title.replace(' ', "-"))),
    }
}

/// `positive` items saying "good", `negative` saying "bad", the rest neutral.
pub fn mixed_items(positive: usize, negative: usize, neutral: usize) -> Vec<NewsItem> {
    let mut items = Vec::new();
    for i in 0..positive {
        items.push(item(
            &format!("Upbeat {i}"),
            "Analysts report really good quarterly results. More details inside.",
        ));
    }
    for i in 0..negative {
        items.push(item(
            &format!("Downbeat {i}"),
            "Analysts report really bad quarterly results. More details inside.",
        ));
    }
    for i in 0..neutral {
        items.push(item(
            &format!("Flat {i}"),
            "The company held its scheduled annual meeting. More details inside.",
        ));
    }
    items
}
