mod api;
mod config;
mod core;
mod logging;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::process::ExitCode;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::CONFIG;
use crate::state::AppState;

fn cors_layer() -> CorsLayer {
    if CONFIG.cors == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = CONFIG
            .cors
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = logging::init(&CONFIG);
    tracing::info!("Dashboard initialized");

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutting down");
    };

    let app = api::router(AppState::from_config(&CONFIG))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = match CONFIG.web_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid WEB_ADDRESS {}: {}", CONFIG.web_addr, e);
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Dashboard listening on http://{}", addr);
    tracing::info!("Catalog file: {}", CONFIG.catalog_file);
    tracing::info!("Log file: {}", CONFIG.log_file);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        tracing::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
