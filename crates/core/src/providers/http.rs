use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::traits::{HealthStatus, SummarySource};
use crate::errors::CoreError;
use crate::models::dataset::Dataset;
use crate::models::settings::SourceSettings;

const SUMMARY_PATH: &str = "/api/summary";
const HEALTH_PATH: &str = "/api/health";

/// HTTP implementation of [`SummarySource`].
///
/// Speaks the summary API's envelope protocol: every response wraps the
/// payload in `{ success, data, error }`, and `success: false` is
/// treated exactly like a transport failure — the caller keeps its
/// prior snapshot either way.
pub struct HttpSummarySource {
    client: Client,
    base_url: String,
}

impl HttpSummarySource {
    pub fn new(settings: &SourceSettings) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(settings.timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base URL requests are built against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Decode a summary response body, applying the envelope rules.
    ///
    /// Exposed separately from the transport so the protocol handling is
    /// testable without a live server.
    pub fn parse_summary(body: &str) -> Result<Dataset, CoreError> {
        let envelope: SummaryEnvelope = serde_json::from_str(body)?;
        if !envelope.success {
            return Err(CoreError::LoadFailed(
                envelope
                    .error
                    .unwrap_or_else(|| "summary endpoint reported failure".to_string()),
            ));
        }
        envelope
            .data
            .ok_or_else(|| CoreError::LoadFailed("summary envelope carried no data".to_string()))
    }

    /// Decode a health response body. Anything other than an explicit
    /// healthy status counts as unreachable.
    pub fn parse_health(body: &str) -> HealthStatus {
        match serde_json::from_str::<HealthResponse>(body) {
            Ok(health) if health.status == "healthy" => HealthStatus::Connected,
            _ => HealthStatus::Unreachable,
        }
    }
}

// ── Summary API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct SummaryEnvelope {
    #[serde(default)]
    success: bool,

    #[serde(default)]
    data: Option<Dataset>,

    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct HealthResponse {
    #[serde(default)]
    status: String,
}

#[async_trait]
impl SummarySource for HttpSummarySource {
    fn name(&self) -> &str {
        "summary API"
    }

    async fn fetch_summary(&self) -> Result<Dataset, CoreError> {
        let url = format!("{}{SUMMARY_PATH}", self.base_url);
        let body = self.client.get(&url).send().await?.text().await?;
        Self::parse_summary(&body)
    }

    async fn check_health(&self) -> HealthStatus {
        let url = format!("{}{HEALTH_PATH}", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => Self::parse_health(&body),
                Err(_) => HealthStatus::Unreachable,
            },
            _ => HealthStatus::Unreachable,
        }
    }
}
