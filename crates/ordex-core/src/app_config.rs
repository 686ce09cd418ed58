use std::path::PathBuf;

/// Runtime configuration for the exporter.
///
/// Every field has a default, so an empty environment produces a working
/// config pointed at the local purchases store.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the purchases store, e.g. `http://localhost:8080/api/purchases`.
    pub store_base_url: String,
    /// Timeout applied to every HTTP request (navigation and sync).
    pub request_timeout_secs: u64,
    /// Budget for opening one invoice and extracting it. Expiry is treated
    /// as that order's extraction failure, not a run failure.
    pub invoice_load_timeout_secs: u64,
    /// Fan-out width for concurrent invoice expansions and sync calls.
    pub max_concurrent_invoices: usize,
    pub user_agent: String,
    pub log_level: String,
    /// Where to write the rendered HTML order summary, if anywhere.
    pub summary_path: Option<PathBuf>,
}
