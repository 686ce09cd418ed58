use thiserror::Error;

/// Errors building the sync client.
///
/// Request-time network failure is deliberately NOT an error here: a call
/// that produced no response classifies as
/// [`ordex_core::SyncOutcome::Unreachable`] so it stays distinct from the
/// status-table outcomes and never aborts the batch.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid store base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
