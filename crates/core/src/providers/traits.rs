use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::dataset::Dataset;

/// Reachability of the dashboard data source, as reported by its health
/// probe. Drives the status indicator only — derivation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Connected,
    Unreachable,
}

impl HealthStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, HealthStatus::Connected)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Connected => write!(f, "connected"),
            HealthStatus::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Trait abstraction for the summary data source.
///
/// The core receives a completed [`Dataset`] or an explicit failure,
/// never a partial document. Swapping the transport (HTTP today, a file
/// or a mock in tests) touches only the implementation of this trait.
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch and parse one complete dataset snapshot.
    async fn fetch_summary(&self) -> Result<Dataset, CoreError>;

    /// Probe connectivity. Infallible by design: any failure is simply
    /// [`HealthStatus::Unreachable`].
    async fn check_health(&self) -> HealthStatus;
}
