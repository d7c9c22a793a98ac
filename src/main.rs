use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use class_builder::config::AppConfig;
use class_builder::server;
use class_builder::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::new_from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::in_memory();
    server::run(config, state).await?;

    Ok(())
}
