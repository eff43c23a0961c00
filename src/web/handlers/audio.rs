// GET /audio/{file} — stream a rendered MP3 from the audio directory.
//
// Only bare file names are accepted; anything that could walk out of the
// audio directory is rejected.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::web::{api_error, AppState};

pub async fn get_audio(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    if !is_bare_file_name(&file) {
        return api_error(StatusCode::BAD_REQUEST, "Invalid audio file name");
    }

    let path = state.builder.audio_dir().join(&file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/mpeg"),
                (header::CACHE_CONTROL, "no-store"),
            ],
            bytes,
        )
            .into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            api_error(StatusCode::NOT_FOUND, "Audio not found")
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read audio file");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read audio")
        }
    }
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}
