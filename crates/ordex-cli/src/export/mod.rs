//! The `export` command: reconcile listing pages, sync each order, report.
//!
//! Per-order failures are logged and carried into the report rather than
//! propagated, so a single malformed invoice does not abort the run.

mod runner;

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// URL of the first order-history listing page
    pub url: String,

    /// Maximum number of listing pages to walk
    #[arg(long, default_value_t = 1)]
    pub pages: usize,

    /// Use the non-idempotent create endpoint instead of the upsert;
    /// resubmitted orders then report as conflicts
    #[arg(long)]
    pub post: bool,

    /// Write the HTML order summary here (overrides ORDEX_SUMMARY_PATH)
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

pub use runner::run;
