//! Router assembly and the HTTP listener.

use axum::Router;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api;
use crate::config::AppConfig;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// API routes plus CORS, request tracing and the static frontend fallback.
pub fn build_router(config: &AppConfig, state: AppState) -> Router {
    let mut router = api::router(state);

    match &config.static_dir {
        Some(dir) if dir.is_dir() => {
            info!("serving static files from {}", dir.display());
            router = router.fallback_service(ServeDir::new(dir));
        }
        Some(dir) => {
            warn!("static directory {} not found, serving API only", dir.display());
        }
        None => {}
    }

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router.layer(TraceLayer::new_for_http())
}

pub async fn run(config: AppConfig, state: AppState) -> Result<(), ServerError> {
    let app = build_router(&config, state);
    let addr = config.bind_address;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
