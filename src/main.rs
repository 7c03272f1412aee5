use anyhow::Context;
use lifedash::config::Config;
use lifedash::{AppState, build_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let bind_addr = config.bind_addr;
    let router = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "lifedash listening");

    axum::serve(listener, router)
        .await
        .context("serve lifedash")?;
    Ok(())
}
