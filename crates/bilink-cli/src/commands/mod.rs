//! CLI command definitions and dispatch.

pub mod admin;
pub mod profile;
pub mod serve;

use clap::{Parser, Subcommand};

use bilink_core::config::AppConfig;
use bilink_core::error::AppError;
use bilink_database::StoreManager;
use bilink_service::Services;

use crate::output::OutputFormat;

/// Bilink: personal homepage backend
#[derive(Debug, Parser)]
#[command(name = "bilink", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/default.toml plus
    /// the BILINK_ENV overlay)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Bilink server
    Serve(serve::ServeArgs),
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Profile document import and export
    Profile(profile::ProfileArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Admin(args) => admin::execute(args, &config, self.format).await,
            Commands::Profile(args) => profile::execute(args, &config).await,
        }
    }
}

/// Helper: load configuration from an explicit file or the environment layout
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => AppConfig::load_file(path),
        None => {
            let env = std::env::var("BILINK_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Helper: open the configured store and wire services over it
pub async fn open_services(config: &AppConfig) -> Result<Services, AppError> {
    let stores = StoreManager::new(&config.store).await?;
    Services::new(&stores, config)
}
