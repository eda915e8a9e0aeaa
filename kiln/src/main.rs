use anyhow::Result;
use kiln::AppState;
use kiln::config::ServiceConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let engine = glaze::build_engine(config.engine, config.tailwind_bin.clone())?;

    let state = AppState::new(engine.clone());
    let (addr, server) = kiln::spawn(config.addr, state, config.max_body_bytes).await?;
    tracing::info!(engine = engine.name(), "rendering service listening on http://{addr}");

    server.await??;
    Ok(())
}
