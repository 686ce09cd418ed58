//! The reconciliation driver: one listing page end to end.
//!
//! State machine per page: **scan** the listing into stubs, **expand**
//! every stub concurrently (open invoice → classify → extract →
//! assemble), **collect** all outcomes, and only then surface the
//! **pagination** target. The next-page URL is withheld until every
//! expansion has settled, so navigating onward can never race an in-flight
//! extraction against a listing that is being replaced.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::Url;
use scraper::Html;

use ordex_core::{Order, OrderStub};

use crate::charge::extract_charge;
use crate::error::ExtractError;
use crate::invoice::extract_invoice;
use crate::layout::classify;
use crate::listing::{find_next_page, scan_listing};
use crate::page::Browser;

/// The result of expanding one stub. Failures are isolated: a malformed
/// invoice never aborts its siblings.
#[derive(Debug)]
pub struct StubOutcome {
    pub stub: OrderStub,
    pub result: Result<Order, ExtractError>,
}

/// Everything one listing page reconciled to.
#[derive(Debug)]
pub struct ListingReconciliation {
    /// Per-stub outcomes, in listing order.
    pub outcomes: Vec<StubOutcome>,
    /// Absolute URL of the next listing page, if pagination offers one.
    /// Only meaningful once all `outcomes` are settled — which this
    /// function guarantees before returning.
    pub next_page: Option<String>,
}

/// Reconciles every order on one listing page.
///
/// All invoice expansions are launched together and awaited jointly, with
/// at most `max_concurrent` in flight. Completion order is unspecified;
/// `outcomes` is reassembled in listing order so reporting stays
/// deterministic. `load_budget` bounds each invoice's open-and-load wait;
/// expiry becomes that order's [`ExtractError::LoadTimeout`] failure.
///
/// # Errors
///
/// Returns an error only when the listing page itself cannot be opened or
/// its URL is invalid. Per-order failures are carried in the outcome list.
pub async fn reconcile_listing<B: Browser>(
    browser: &B,
    listing_url: &str,
    load_budget: Duration,
    max_concurrent: usize,
) -> Result<ListingReconciliation, ExtractError> {
    let page = browser.open(listing_url).await?;
    let base = match Url::parse(&page.url) {
        Ok(base) => base,
        // Release the listing before bailing; open/close stay paired on
        // every exit path.
        Err(e) => {
            let url = page.url.clone();
            browser.close(page);
            return Err(ExtractError::InvalidUrl {
                url,
                reason: e.to_string(),
            });
        }
    };
    let (stubs, next_page) = {
        let doc = Html::parse_document(&page.body);
        (scan_listing(&doc, &base), find_next_page(&doc, &base))
    };
    browser.close(page);

    tracing::debug!(url = listing_url, stubs = stubs.len(), "scanned listing page");

    let mut indexed: Vec<(usize, StubOutcome)> = stream::iter(stubs.into_iter().enumerate())
        .map(|(idx, stub)| async move {
            let result = expand_stub(browser, &stub, load_budget).await;
            if let Err(error) = &result {
                tracing::warn!(order = %stub.id, %error, "order expansion failed");
            }
            (idx, StubOutcome { stub, result })
        })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    indexed.sort_by_key(|(idx, _)| *idx);
    let outcomes = indexed.into_iter().map(|(_, outcome)| outcome).collect();

    Ok(ListingReconciliation {
        outcomes,
        next_page,
    })
}

/// Opens one stub's invoice, extracts it, and assembles the order.
///
/// `load_budget` bounds the open-and-load wait. Extraction itself is
/// synchronous, so there is no exit path between a successful open and the
/// matching close: the page is released on extraction success and failure
/// alike, and a fired budget can only interrupt the open itself.
async fn expand_stub<B: Browser>(
    browser: &B,
    stub: &OrderStub,
    load_budget: Duration,
) -> Result<Order, ExtractError> {
    let opened = tokio::time::timeout(load_budget, browser.open(&stub.href))
        .await
        .map_err(|_| ExtractError::LoadTimeout {
            url: stub.href.clone(),
            budget_secs: load_budget.as_secs(),
        })??;

    let extracted = {
        let doc = Html::parse_document(&opened.body);
        let layout = classify(&stub.id, &doc);
        extract_invoice(&doc, layout).and_then(|details| match stub.charge {
            // The listing already supplied a charge; the invoice cannot
            // override it.
            Some(_) => Ok((details, None)),
            None => extract_charge(&doc).map(|charge| (details, charge)),
        })
    };
    browser.close(opened);

    let (details, invoice_charge) = extracted?;
    let mut stub = stub.clone();
    if stub.charge.is_none() {
        stub.charge = invoice_charge;
    }
    Ok(Order::assemble(stub, details))
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
