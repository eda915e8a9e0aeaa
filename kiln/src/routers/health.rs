use crate::AppState;
use axum::Router;
use axum::routing::get;

pub fn scope() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> &'static str {
    "OK"
}
