// Web server — Axum backend for the analysis endpoint and browser page.
//
// The page is embedded at compile time via include_dir!. JSON routes live at
// /analyze and /api/*; rendered audio is served from /audio/{file}; every
// other path serves the page.

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use include_dir::{include_dir, Dir};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::pipeline::report::ReportBuilder;

pub mod handlers;

// Browser front end, embedded from web/ at the crate root.
static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/web");

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<ReportBuilder>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(builder: ReportBuilder, port: u16, bind: &str) -> Result<()> {
    let state = AppState {
        builder: Arc::new(builder),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("newscast listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(handlers::analyze::analyze))
        .route("/api/speak", post(handlers::speak::speak))
        .route("/audio/{file}", get(handlers::audio::get_audio))
        .fallback(serve_page)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check. Always 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Serve an embedded asset, or the page itself for unknown paths.
async fn serve_page(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = ASSETS.get_file(path) {
        return asset_response(file.contents(), path);
    }

    match ASSETS.get_file("index.html") {
        Some(index) => asset_response(index.contents(), "index.html"),
        None => api_error(StatusCode::SERVICE_UNAVAILABLE, "Web page not bundled"),
    }
}

fn asset_response(contents: &'static [u8], path: &str) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, HeaderValue::from_static(mime_type(path)))
        .body(Body::from(contents))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn mime_type(path: &str) -> &'static str {
    match path.rsplit('.').next().unwrap_or("") {
        "html" => "text/html; charset=utf-8",
        "js" => "application/javascript",
        "css" => "text/css",
        "mp3" => "audio/mpeg",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
