// POST /analyze — run the full analysis for one company.
//
// Always answers 200: either the AnalysisResponse or {"error": "..."} for a
// missing or null company name or an unusable news fetch. A body that is
// not JSON gets axum's own rejection.

use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::models::{AnalyzeReply, AnalyzeRequest};
use crate::web::AppState;

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeReply> {
    info!(
        company = %request.company(),
        language = %request.language(),
        "Received analysis request"
    );

    match state.builder.build(request.company(), request.language()).await {
        Ok(response) => Json(AnalyzeReply::Report(Box::new(response))),
        Err(e) => Json(AnalyzeReply::Error {
            error: e.to_string(),
        }),
    }
}
