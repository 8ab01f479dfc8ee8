use std::sync::Arc;

use anyhow::Context;
use imgonna::GoalProcessor;
use tokio::net::TcpListener;

mod adapters;
mod application;
mod config;
mod logging;
mod routes;
#[cfg(test)]
mod test_support;

use application::GoalService;
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub goal_service: Arc<GoalService>,
}

impl AppState {
    pub fn new(processor: Arc<dyn GoalProcessor>) -> Self {
        Self {
            goal_service: Arc::new(GoalService::new(processor)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    logging::init(&config);

    tracing::info!(
        environment = config.environment.as_deref().unwrap_or("development"),
        log_level = config.log_level(),
        "🎯 imgonna API initializing..."
    );

    let processor = adapters::build_processor(&config);
    let state = AppState::new(processor);
    tracing::info!("🧭 Goal processor mode: {}", state.goal_service.mode());

    let router = routes::app(state, &config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ imgonna API ready on port {}", config.port);

    axum::serve(listener, router)
        .await
        .context("Server failed")?;

    Ok(())
}
