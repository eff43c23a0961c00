// POST /api/speak — render arbitrary text for the page's read-back buttons.
//
// "summary" backs Read Aloud (article summaries plus verdict) and "screen"
// backs Read Screen (everything displayed). The page assembles the text;
// this handler only picks the output file and renders it.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::speech::render::{render_speech, SCREEN_AUDIO_FILE, SUMMARY_AUDIO_FILE};
use crate::web::AppState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakTarget {
    #[default]
    Summary,
    Screen,
}

impl SpeakTarget {
    pub fn file_name(&self) -> &'static str {
        match self {
            SpeakTarget::Summary => SUMMARY_AUDIO_FILE,
            SpeakTarget::Screen => SCREEN_AUDIO_FILE,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub target: SpeakTarget,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakResponse {
    pub audio: Option<std::path::PathBuf>,
}

pub async fn speak(
    State(state): State<AppState>,
    Json(request): Json<SpeakRequest>,
) -> Json<SpeakResponse> {
    let path = state.builder.audio_dir().join(request.target.file_name());
    let audio = render_speech(
        state.builder.services().speech.as_ref(),
        &request.text,
        &request.language,
        &path,
    )
    .await;
    Json(SpeakResponse { audio })
}
