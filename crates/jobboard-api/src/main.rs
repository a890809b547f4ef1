//! JobBoard API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p jobboard-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use jobboard_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so tracing starts after it
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        address = %config.api.address(),
        "Starting JobBoard API Server..."
    );

    if let Err(e) = jobboard_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
