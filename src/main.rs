use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use newscast::client::AnalysisClient;
use newscast::config::Config;
use newscast::models::{AnalyzeReply, Language};
use newscast::output::terminal;
use newscast::pipeline::report::ReportBuilder;
use newscast::speech::gtts::GoogleTts;
use newscast::speech::render::{render_speech, SCREEN_AUDIO_FILE, SUMMARY_AUDIO_FILE};

/// newscast: company news sentiment with spoken summaries.
///
/// Fetches recent articles about a company, scores their sentiment,
/// extracts topics, compares coverage and reads the verdict aloud.
#[derive(Parser)]
#[command(name = "newscast", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analysis endpoint and browser page
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },

    /// Analyze news coverage of a company
    Analyze {
        /// Company name (e.g. Tesla)
        company: String,

        /// Output language for the verdict and audio
        #[arg(long, value_enum, default_value = "english")]
        language: LanguageArg,

        /// Analysis endpoint (defaults to NEWSCAST_API_URL or http://localhost:8000)
        #[arg(long)]
        api_url: Option<String>,

        /// Run the pipeline in this process instead of calling the endpoint
        #[arg(long)]
        local: bool,

        /// Also render every article summary plus the verdict to audio
        #[arg(long)]
        read_aloud: bool,

        /// Also render everything displayed to audio
        #[arg(long)]
        read_screen: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    #[value(alias = "en")]
    English,
    #[value(alias = "hi")]
    Hindi,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::English => Language::English,
            LanguageArg::Hindi => Language::Hindi,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newscast=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            if let Err(e) = config.require_news_api_key() {
                warn!(error = %e, "Starting without a news API key");
            }
            info!(audio_dir = %config.audio_dir.display(), "Audio output directory");

            let builder = ReportBuilder::from_config(&config)?;
            newscast::web::run_server(builder, port, &bind).await?;
        }

        Commands::Analyze {
            company,
            language,
            api_url,
            local,
            read_aloud,
            read_screen,
        } => {
            let config = Config::load()?;
            let language = Language::from(language);

            if company.trim().is_empty() {
                println!("{}", "Please enter a company name.".yellow());
                return Ok(());
            }

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner} {msg}")
                    .unwrap(),
            );
            spinner.set_message("Fetching and analyzing news...");
            spinner.enable_steady_tick(Duration::from_millis(120));

            let reply = if local {
                let builder = ReportBuilder::from_config(&config)?;
                match builder.build(&company, language.code()).await {
                    Ok(response) => AnalyzeReply::Report(Box::new(response)),
                    Err(e) => AnalyzeReply::Error {
                        error: e.to_string(),
                    },
                }
            } else {
                let url = api_url.as_deref().unwrap_or(&config.api_url);
                let client = AnalysisClient::new(url)?;
                match client.analyze(&company, language.code()).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        spinner.finish_and_clear();
                        println!("{} {e:#}", "Error:".red().bold());
                        return Ok(());
                    }
                }
            };
            spinner.finish_and_clear();

            let (screen, summary_text) = match &reply {
                AnalyzeReply::Error { error } => {
                    println!("{}", error.red());
                    (vec![error.clone()], None)
                }
                AnalyzeReply::Report(response) => {
                    terminal::display_analysis(response);
                    (
                        terminal::screen_lines(response),
                        Some(terminal::read_aloud_text(response)),
                    )
                }
            };

            if !(read_aloud || read_screen) {
                return Ok(());
            }

            let tts = GoogleTts::new(&config.tts_url)?;

            if read_aloud {
                match summary_text {
                    Some(text) => {
                        let path = config.audio_dir.join(SUMMARY_AUDIO_FILE);
                        match render_speech(&tts, &text, language.code(), &path).await {
                            Some(path) => println!("\nSummary audio: {}", path.display()),
                            None => println!(
                                "\n{}",
                                "Audio generation failed for summaries.".yellow()
                            ),
                        }
                    }
                    None => println!(
                        "\n{}",
                        "Nothing to read aloud: the analysis returned an error.".yellow()
                    ),
                }
            }

            if read_screen {
                let path = config.audio_dir.join(SCREEN_AUDIO_FILE);
                match render_speech(&tts, &screen.join("\n"), language.code(), &path).await {
                    Some(path) => println!("Screen audio: {}", path.display()),
                    None => println!("{}", "Audio generation failed for screen text.".yellow()),
                }
            }
        }
    }

    Ok(())
}
