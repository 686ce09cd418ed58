use thiserror::Error;

/// Errors scoped to extracting one order. None of these abort a batch; the
/// driver records the failure against its order and keeps going.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("required document anchor missing: {anchor}")]
    MissingAnchor { anchor: &'static str },

    #[error("monetary text does not parse: {text:?}")]
    Money { text: String },

    #[error("charge text split into {segments} segment(s), expected 3: {text:?}")]
    ChargeFormat { text: String, segments: usize },

    #[error("page at {url} did not finish loading within {budget_secs}s")]
    LoadTimeout { url: String, budget_secs: u64 },

    #[error("navigation error: {0}")]
    Navigate(#[from] reqwest::Error),

    #[error("invalid page URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
