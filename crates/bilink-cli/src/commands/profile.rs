//! Profile document import and export.

use std::path::Path;

use clap::{Args, Subcommand};

use bilink_core::config::AppConfig;
use bilink_core::error::AppError;
use bilink_entity::profile::ProfileDocument;
use bilink_service::ProfileService;

use crate::output;

/// Arguments for profile commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Profile subcommand
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Write the current profile as JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Replace the profile with a JSON document
    Import {
        /// Input file
        file: String,
    },
}

/// Execute profile commands
pub async fn execute(args: &ProfileArgs, config: &AppConfig) -> Result<(), AppError> {
    let services = super::open_services(config).await?;

    match &args.command {
        ProfileCommand::Export { output: path } => {
            let json = export_profile(&services.profile).await?;
            match path {
                Some(path) => {
                    tokio::fs::write(path, json).await?;
                    output::print_success(&format!("Profile exported to {}", path));
                }
                None => println!("{}", json),
            }
        }
        ProfileCommand::Import { file } => {
            let profile = import_profile(&services.profile, Path::new(file)).await?;
            output::print_success(&format!("Profile '{}' imported", profile.name));
        }
    }

    Ok(())
}

async fn export_profile(service: &ProfileService) -> Result<String, AppError> {
    let profile = service.get_profile().await;
    Ok(serde_json::to_string_pretty(&profile)?)
}

async fn import_profile(service: &ProfileService, path: &Path) -> Result<ProfileDocument, AppError> {
    let raw = tokio::fs::read(path).await?;
    let profile: ProfileDocument = serde_json::from_slice(&raw).map_err(|e| {
        AppError::validation(format!("{} is not a valid profile: {e}", path.display()))
    })?;
    service.replace_profile(profile).await
}
