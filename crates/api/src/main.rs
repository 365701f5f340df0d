use std::sync::Arc;

use anyhow::Context;

use talentpitch_api::config::{self, ApiConfig};
use talentpitch_engine::Dispatcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    talentpitch_observability::init(config::log_format_from_env());
    let config = ApiConfig::from_env();

    let dispatcher = Arc::new(Dispatcher::default());
    tracing::info!(
        command_types = dispatcher.registry().len(),
        "command registry loaded"
    );

    let app = talentpitch_api::app::build_app(dispatcher);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
