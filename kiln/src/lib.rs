use axum::Router;
use axum::extract::DefaultBodyLimit;
use glaze::StylesheetEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routers;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn StylesheetEngine>,
}

impl AppState {
    pub fn new(engine: Arc<dyn StylesheetEngine>) -> Self {
        Self { engine }
    }
}

pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    // The editor is served from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routers::render::scope())
        .merge(routers::health::scope())
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(axum::middleware::from_fn(middleware::logger::filtered_logger))
        .layer(cors)
        .with_state(state)
}

/// Binds `addr` and serves in the background, returning the bound address.
pub async fn spawn(
    addr: SocketAddr,
    state: AppState,
    max_body_bytes: usize,
) -> std::io::Result<(SocketAddr, JoinHandle<std::io::Result<()>>)> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    let router = app(state, max_body_bytes);
    let handle = tokio::spawn(async move { axum::serve(listener, router).await });
    Ok((local, handle))
}
