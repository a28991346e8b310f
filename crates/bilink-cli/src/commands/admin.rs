//! Admin account management commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use bilink_core::config::AppConfig;
use bilink_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Show the admin account
    Show,
    /// Reset the admin password
    ResetPassword {
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Account summary without the password hash.
#[derive(Debug, Serialize)]
struct AccountSummary {
    username: String,
    role: String,
    created_at: String,
    updated_at: String,
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::open_services(config).await?;

    match &args.command {
        AdminCommand::Show => {
            let account = services.auth.account().await.map_err(|e| {
                AppError::new(
                    e.kind,
                    format!("{}; start the server once to create it", e.message),
                )
            })?;

            let summary = AccountSummary {
                username: account.username,
                role: account.role.to_string(),
                created_at: account.created_at.to_rfc3339(),
                updated_at: account.updated_at.to_rfc3339(),
            };

            match format {
                OutputFormat::Json => output::print_json(&summary),
                OutputFormat::Text => {
                    println!("Admin account");
                    output::print_kv("Username", &summary.username);
                    output::print_kv("Role", &summary.role);
                    output::print_kv("Created", &summary.created_at);
                    output::print_kv("Updated", &summary.updated_at);
                }
            }
        }
        AdminCommand::ResetPassword { password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("New password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            services.auth.reset_password(&password).await?;

            output::print_success("Admin password reset");
        }
    }

    Ok(())
}
