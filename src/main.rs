use optionswiz::config::ServerConfig;
use optionswiz::provider::YahooProvider;
use optionswiz::server;
use optionswiz::state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "optionswiz=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting OptionsWiz backend...");

    let config = ServerConfig::from_env()?;
    let provider = Arc::new(YahooProvider::new(
        &config.provider_base_url,
        config.request_timeout_secs,
    ));
    let state = Arc::new(AppState::new(provider));

    server::serve(&config, state).await?;

    Ok(())
}
