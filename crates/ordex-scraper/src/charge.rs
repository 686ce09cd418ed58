//! Billing-charge extraction.
//!
//! Two page generations carry charge data in different places: older
//! invoices embed a "Credit Card transactions" row, newer transaction
//! listings co-locate card, amount, and a shared date container with each
//! order row. Both shapes produce the same [`Charge`].

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use ordex_core::Charge;

use crate::dom::{closest, element_text, selector};
use crate::error::ExtractError;
use crate::money::parse_money;

const CARD_TRANSACTIONS_MARKER: &str = "Credit Card transactions";
const DATE_CONTAINER_CLASS: &str = "apx-transaction-date-container";

static CELL_HEADING: LazyLock<Selector> = LazyLock::new(|| selector("td b"));
static CELL: LazyLock<Selector> = LazyLock::new(|| selector("td"));

/// Extracts the billing charge from an invoice document, if one has posted.
///
/// Returns `Ok(None)` when the document has no credit-card transaction
/// marker — many orders have no charge yet (billed later, cancelled,
/// pending) and that is not an error.
///
/// # Errors
///
/// - [`ExtractError::MissingAnchor`] — the marker exists but its row or
///   detail cell is gone.
/// - [`ExtractError::ChargeFormat`] / [`ExtractError::Money`] — the detail
///   cell text does not have the `card : date : $amount` shape.
pub fn extract_charge(doc: &Html) -> Result<Option<Charge>, ExtractError> {
    let marker = doc
        .select(&CELL_HEADING)
        .find(|h| element_text(*h).starts_with(CARD_TRANSACTIONS_MARKER));
    let Some(marker) = marker else {
        return Ok(None);
    };

    let row = closest(marker, "tr").ok_or(ExtractError::MissingAnchor {
        anchor: "credit-card transaction row",
    })?;
    let detail_cell = row
        .select(&CELL)
        .nth(1)
        .ok_or(ExtractError::MissingAnchor {
            anchor: "credit-card transaction detail cell",
        })?;

    parse_charge_text(&element_text(detail_cell)).map(Some)
}

/// Parses charge text of the form `"Visa ...1234 : Jan 5, 2024 : $19.99"`
/// into its three trimmed segments.
///
/// # Errors
///
/// - [`ExtractError::ChargeFormat`] — fewer than three `:`-separated
///   segments.
/// - [`ExtractError::Money`] — the amount segment is not currency text.
pub fn parse_charge_text(text: &str) -> Result<Charge, ExtractError> {
    let segments: Vec<&str> = text.splitn(3, ':').map(str::trim).collect();
    let [card, date, amount] = segments[..] else {
        return Err(ExtractError::ChargeFormat {
            text: text.to_owned(),
            segments: segments.len(),
        });
    };

    Ok(Charge {
        card: card.to_owned(),
        date: date.to_owned(),
        amount: parse_money(amount)?,
    })
}

/// Walks backward from a transaction row to the date container that heads
/// its group on the listing page.
///
/// The scan is bounded by the start of the list: preceding siblings are
/// visited nearest-first and iterator exhaustion is the sentinel. Returns
/// `None` when no date container precedes the row — the charge is then
/// treated as posted but undated.
#[must_use]
pub fn find_transaction_date(row: ElementRef<'_>) -> Option<String> {
    let group = ElementRef::wrap(row.parent()?)?;
    group
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().classes().any(|c| c == DATE_CONTAINER_CLASS))
        .map(element_text)
}

#[cfg(test)]
#[path = "charge_test.rs"]
mod tests;
