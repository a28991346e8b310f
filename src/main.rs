//! Bilink server: personal homepage backend.
//!
//! Main entry point that loads configuration, sets up logging, and starts
//! the server.

use bilink_core::config::AppConfig;
use bilink_core::error::AppError;

#[tokio::main]
async fn main() {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    bilink_api::init_logging(&config.logging);
    tracing::info!("Starting Bilink v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = bilink_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` and the environment
fn load_configuration() -> Result<AppConfig, AppError> {
    match std::env::var("BILINK_CONFIG") {
        Ok(path) => AppConfig::load_file(&path),
        Err(_) => {
            let env = std::env::var("BILINK_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}
