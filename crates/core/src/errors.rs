use thiserror::Error;

/// Unified error type for the entire finance-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Only the load boundary can fail. Derivation (selection, KPIs, series,
/// tables) is total over a well-typed dataset: missing comparison periods,
/// missing fields and empty result sets are values, never errors.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Network / API ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Load failed: {0}")]
    LoadFailed(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so that
        // tokens embedded in a source URL never end up in logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
