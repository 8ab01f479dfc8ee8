//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(config: &AppConfig) -> String {
    format!("{},hyper=info", config.log_level())
}

/// Install the global tracing subscriber
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
