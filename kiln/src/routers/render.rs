use crate::AppState;
use crate::error::ApiError;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use glaze::RenderRequest;

pub const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";

pub fn scope() -> Router<AppState> {
    Router::new().route("/", post(render))
}

/// `POST /` with `{ "html": ..., "theme": { "extend": ... } }`.
async fn render(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: RenderRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let engine = state.engine.clone();
    let css = tokio::task::spawn_blocking(move || {
        let fragment = request.theme_fragment()?;
        glaze::render_stylesheet(engine.as_ref(), &request.html, &fragment)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))??;

    tracing::debug!(bytes = css.len(), "stylesheet rendered");
    Ok(([(header::CONTENT_TYPE, CSS_CONTENT_TYPE)], css).into_response())
}
