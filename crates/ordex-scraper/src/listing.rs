//! Listing-page scan: transaction rows → order stubs, plus discovery of
//! the next-page target.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use ordex_core::{Charge, OrderStub};

use crate::charge::find_transaction_date;
use crate::dom::{element_text, selector};
use crate::error::ExtractError;
use crate::layout::DIGITAL_ORDER_PREFIX;
use crate::money::parse_money;

const ORDER_ID_LABEL: &str = "Order #";

static TRANSACTION_ROW: LazyLock<Selector> =
    LazyLock::new(|| selector(".apx-transactions-line-item-component-container"));
static ROW_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static CARD_NODE: LazyLock<Selector> = LazyLock::new(|| selector(".a-text-bold"));
static AMOUNT_NODE: LazyLock<Selector> = LazyLock::new(|| selector(".a-span-last"));
static NEXT_PAGE_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"li.a-last a[href^="/your-orders"]"#));

/// Enumerates the order stubs on a loaded listing page.
///
/// Rows with zero child elements are skipped (stray separator rows), and a
/// row that cannot produce a stub is logged and skipped rather than
/// aborting the scan. Invoice hrefs are resolved absolute against
/// `base_url` and rewritten to the printable variant: digital orders get
/// `&print=1` appended, everything else has `edit.html` replaced with
/// `print.html`.
#[must_use]
pub fn scan_listing(doc: &Html, base_url: &Url) -> Vec<OrderStub> {
    let mut stubs = Vec::new();
    for row in doc.select(&TRANSACTION_ROW) {
        if row.children().filter_map(ElementRef::wrap).next().is_none() {
            continue;
        }
        match scan_row(row, base_url) {
            Ok(stub) => stubs.push(stub),
            Err(error) => {
                tracing::warn!(%error, "skipping malformed order row");
            }
        }
    }
    stubs
}

fn scan_row(row: ElementRef<'_>, base_url: &Url) -> Result<OrderStub, ExtractError> {
    let link = row
        .select(&ROW_LINK)
        .next()
        .ok_or(ExtractError::MissingAnchor {
            anchor: "order link",
        })?;

    let id = element_text(link).replace(ORDER_ID_LABEL, "").trim().to_owned();

    let raw_href = link
        .value()
        .attr("href")
        .ok_or(ExtractError::MissingAnchor {
            anchor: "order link href",
        })?;
    let absolute = base_url
        .join(raw_href)
        .map_err(|e| ExtractError::InvalidUrl {
            url: raw_href.to_owned(),
            reason: e.to_string(),
        })?;
    let href = if id.starts_with(DIGITAL_ORDER_PREFIX) {
        format!("{absolute}&print=1")
    } else {
        absolute.as_str().replace("edit.html", "print.html")
    };

    Ok(OrderStub {
        id,
        href,
        charge: scan_row_charge(row),
    })
}

/// The charge co-located with a transaction row. Absent card or amount
/// nodes mean no charge has posted for the row.
fn scan_row_charge(row: ElementRef<'_>) -> Option<Charge> {
    let card = row.select(&CARD_NODE).next().map(element_text)?;
    let amount_text = row.select(&AMOUNT_NODE).next().map(element_text)?;
    match parse_money(&amount_text) {
        Ok(amount) => Some(Charge {
            card,
            amount,
            // No preceding date container: posted but undated.
            date: find_transaction_date(row).unwrap_or_default(),
        }),
        Err(error) => {
            tracing::warn!(%error, "transaction row amount does not parse; treating as uncharged");
            None
        }
    }
}

/// Finds the next listing page's absolute URL, if pagination offers one.
#[must_use]
pub fn find_next_page(doc: &Html, base_url: &Url) -> Option<String> {
    let link = doc.select(&NEXT_PAGE_LINK).next()?;
    let href = link.value().attr("href")?;
    base_url.join(href).ok().map(|u| u.to_string())
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod tests;
