//! Console subcommands.

pub mod auth;
pub mod detect;
pub mod nav;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use sentinel_auth::{SessionManager, digest};
use sentinel_core::config::AppConfig;
use sentinel_core::error::AppError;
use sentinel_store::FileStore;

/// Sentinel — network-traffic anomaly detection console.
#[derive(Debug, Parser)]
#[command(name = "sentinel", version, about)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Console subcommands
#[derive(Debug, Subcommand)]
enum Command {
    /// Register a new account
    Signup(auth::SignupArgs),
    /// Sign in and open a session
    Login(auth::LoginArgs),
    /// Sign out and clear the session
    Logout,
    /// Show the current session
    Status,
    /// Show the navigation rail with reachability
    Nav,
    /// Submit a traffic sample for detection
    Detect(detect::DetectArgs),
    /// Clear the detection flag
    ResetDetection,
}

impl Cli {
    /// Execute the selected subcommand.
    pub async fn execute(self, config: AppConfig) -> Result<(), AppError> {
        let session = open_session(&config).await?;

        match self.command {
            Command::Signup(args) => auth::signup(&session, args).await,
            Command::Login(args) => auth::login(&session, args).await,
            Command::Logout => auth::logout(&session).await,
            Command::Status => auth::status(&session),
            Command::Nav => nav::show(&session),
            Command::Detect(args) => detect::run(&session, &config, args).await,
            Command::ResetDetection => detect::reset(&session).await,
        }
    }
}

/// Open the device store and restore any persisted session.
async fn open_session(config: &AppConfig) -> Result<SessionManager, AppError> {
    let store = Arc::new(FileStore::open(&config.storage.data_dir).await?);
    let digest = digest::from_config(&config.auth);
    let manager = SessionManager::new(store, digest, &config.auth);

    if let Err(e) = manager.restore().await {
        tracing::warn!(error = %e, "Could not restore persisted session; starting anonymous");
    }
    Ok(manager)
}
