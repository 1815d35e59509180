//! HTTP client for the model service's predict endpoint.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sentinel_core::config::detection::DetectionConfig;
use sentinel_core::error::{AppError, ErrorKind};
use sentinel_core::result::AppResult;

/// The model service's answer for one traffic sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Human-readable prediction label, e.g. `"Attack"` or `"Normal"`.
    pub prediction: String,
    /// Model confidence in percent.
    pub confidence: f64,
    /// Whether the sample was classified as an attack.
    pub is_attack: bool,
}

/// Client for the anomaly-detection model service.
///
/// One outbound call, no retries: a request either completes within the
/// configured timeout or surfaces as a processing failure.
#[derive(Debug, Clone)]
pub struct DetectionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DetectionClient {
    /// Build a client from the detection configuration.
    pub fn new(config: &DetectionConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Submit a parsed traffic sample and return the verdict.
    ///
    /// A transport failure, non-success status, or undecodable body all
    /// surface as the same generic processing failure.
    pub async fn predict(&self, sample: &serde_json::Value) -> AppResult<Verdict> {
        let url = format!("{}/api/predict", self.endpoint);
        debug!(%url, "Submitting sample for prediction");

        let response = self
            .http
            .post(&url)
            .json(sample)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Failed to process file", e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service("Failed to process file"));
        }

        let verdict: Verdict = response.json().await.map_err(|e| {
            AppError::with_source(
                sentinel_core::error::ErrorKind::ExternalService,
                "Failed to process file",
                e,
            )
        })?;

        info!(
            prediction = %verdict.prediction,
            is_attack = verdict.is_attack,
            "Received verdict"
        );
        Ok(verdict)
    }
}
