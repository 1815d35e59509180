//! Detection subcommands.

use std::path::PathBuf;

use clap::Args;

use sentinel_auth::SessionManager;
use sentinel_core::config::AppConfig;
use sentinel_core::error::{AppError, ErrorKind};
use sentinel_detect::DetectionClient;
use sentinel_entity::navigation::{Destination, entry_for};
use sentinel_gate::{GateDecision, gate};

/// Arguments for detect
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Path to a JSON traffic sample
    pub sample: PathBuf,
}

/// Submit a traffic sample, the console analogue of the upload page.
///
/// Gated exactly like that page: an anonymous session is refused before
/// anything is read or sent.
pub async fn run(
    session: &SessionManager,
    config: &AppConfig,
    args: DetectArgs,
) -> Result<(), AppError> {
    match gate::evaluate(&entry_for(Destination::Upload), &session.current()) {
        GateDecision::Grant => {}
        GateDecision::RedirectToLogin => {
            return Err(AppError::authentication(
                "Sign in to upload traffic samples.",
            ));
        }
        GateDecision::RedirectToUpload(notice) => {
            return Err(AppError::authentication(notice.message));
        }
    }

    let raw = tokio::fs::read_to_string(&args.sample).await?;
    let sample: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
        AppError::with_source(ErrorKind::Validation, "Sample is not valid JSON", e)
    })?;

    let client = DetectionClient::new(&config.detection)?;
    let verdict = client.predict(&sample).await?;

    println!(
        "Prediction: {} ({:.2}% confidence)",
        verdict.prediction, verdict.confidence
    );
    if verdict.is_attack {
        println!("Anomalous traffic detected.");
    }

    session.mark_detection_complete().await?;
    println!("Detection complete. Results pages are now unlocked.");
    Ok(())
}

/// Clear the detection flag.
pub async fn reset(session: &SessionManager) -> Result<(), AppError> {
    session.reset_detection().await?;
    println!("Detection flag cleared.");
    Ok(())
}
