mod board;
mod config;
mod routes;
mod services;
mod state;
mod users;

use std::process::ExitCode;
use std::sync::Arc;

use config::BoardConfig;
use services::reload::{Trigger, start_reload};
use users::HttpUserSource;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let source = match HttpUserSource::new(config.api_url.clone(), config.request_timeout, config.connect_timeout) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "user source init failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(url = source.url(), "user source configured");

    let state = state::AppState::new(Arc::new(source), config.loading_delay);

    // Initial load, started exactly once before serving.
    let _initial = start_reload(state.clone(), Trigger::Startup).await;

    let app = routes::app(state, &config.assets_dir, config.test_routes);
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, port = config.port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(port = config.port, "userboard listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
