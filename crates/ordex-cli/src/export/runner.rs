//! Orchestration for the export run.
//!
//! Per listing page: reconcile every order, then sync the successfully
//! reconciled ones concurrently, then — and only then — follow pagination.
//! Sync completions land in arbitrary order; report rows are reassembled
//! in input order so the glyph summary is deterministic.

use std::time::Duration;

use anyhow::Context;
use futures::stream::{self, StreamExt};

use ordex_core::{load_app_config, Order, SyncOutcome};
use ordex_scraper::{reconcile_listing, HttpBrowser};
use ordex_sync::SyncClient;

use super::ExportArgs;
use crate::report::{self, ReportRow};

pub async fn run(args: ExportArgs) -> anyhow::Result<()> {
    let config = load_app_config().context("loading configuration")?;
    let browser = HttpBrowser::new(config.request_timeout_secs, &config.user_agent)
        .context("building page browser")?;
    let client = SyncClient::new(
        &config.store_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("building sync client")?;

    let load_budget = Duration::from_secs(config.invoice_load_timeout_secs);
    let fan_out = config.max_concurrent_invoices.max(1);

    let mut rows: Vec<ReportRow> = Vec::new();
    let mut failed_orders: usize = 0;
    let mut next_url = Some(args.url.clone());

    for _ in 0..args.pages {
        let Some(url) = next_url.take() else { break };

        let listing = reconcile_listing(&browser, &url, load_budget, fan_out)
            .await
            .with_context(|| format!("reconciling listing page {url}"))?;

        let mut orders: Vec<Order> = Vec::new();
        for outcome in listing.outcomes {
            match outcome.result {
                Ok(order) => orders.push(order),
                // Already logged by the driver; count it for the run total.
                Err(_) => failed_orders += 1,
            }
        }

        rows.extend(sync_orders(&client, orders, args.post, fan_out).await);

        // The driver only surfaces next_page once every expansion has
        // settled, so following it here can never race extraction.
        next_url = listing.next_page;
    }

    let outcomes: Vec<SyncOutcome> = rows.iter().map(|r| r.outcome).collect();
    println!("{}", report::glyph_summary(&outcomes));

    if failed_orders > 0 {
        tracing::warn!(
            failed_orders,
            synced_orders = rows.len(),
            "some orders failed to reconcile and were not synced"
        );
    }

    if let Some(path) = args.summary.or(config.summary_path) {
        std::fs::write(&path, report::render_summary(&rows))
            .with_context(|| format!("writing order summary to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote order summary");
    }

    Ok(())
}

/// Syncs the collected orders with bounded concurrency, returning report
/// rows in the same order the orders came in.
async fn sync_orders(
    client: &SyncClient,
    orders: Vec<Order>,
    use_create: bool,
    fan_out: usize,
) -> Vec<ReportRow> {
    let mut indexed: Vec<(usize, ReportRow)> = stream::iter(orders.into_iter().enumerate())
        .map(|(idx, order)| async move {
            let outcome = if use_create {
                client.create(&order).await
            } else {
                client.upsert(&order).await
            };
            tracing::debug!(order = %order.id, %outcome, "synced order");
            (idx, ReportRow { order, outcome })
        })
        .buffer_unordered(fan_out)
        .collect()
        .await;

    indexed.sort_by_key(|(idx, _)| *idx);
    indexed.into_iter().map(|(_, row)| row).collect()
}
