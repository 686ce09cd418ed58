//! Invoice extraction: one function per layout behind a single dispatch
//! point.
//!
//! Every extractor fails with [`ExtractError::MissingAnchor`] when a
//! required element is absent. A missing anchor means the retailer changed
//! the page shape; the order must surface as a failure, never be silently
//! skipped.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use ordex_core::InvoiceDetails;

use crate::dom::{closest, element_text, selector};
use crate::error::ExtractError;
use crate::layout::InvoiceLayout;
use crate::money::parse_money;

const ORDER_TOTAL_PREFIX: &str = "Order Total: $";
const ITEMS_ORDERED_HEADING: &str = "Items Ordered";

static LINE_ITEM_ROW: LazyLock<Selector> = LazyLock::new(|| selector(".od-line-item-row"));
static TRAILING_CELL: LazyLock<Selector> = LazyLock::new(|| selector(".a-span-last"));
static ITEM_TITLE: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"[data-component="itemTitle"]"#));
static CELL_HEADING: LazyLock<Selector> = LazyLock::new(|| selector("td b"));
static CELL_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("td i"));
static PRICE_NODE: LazyLock<Selector> = LazyLock::new(|| selector(".a-color-price"));
static DESCRIPTION_CELL: LazyLock<Selector> = LazyLock::new(|| selector(r#"td[valign="top"]"#));

/// Extracts normalized invoice details from a loaded invoice document.
///
/// # Errors
///
/// - [`ExtractError::MissingAnchor`] — a required anchor element (order
///   total, items heading, price node, description cell) is absent.
/// - [`ExtractError::Money`] — a located price cell holds non-numeric text.
pub fn extract_invoice(doc: &Html, layout: InvoiceLayout) -> Result<InvoiceDetails, ExtractError> {
    match layout {
        InvoiceLayout::Standard => extract_standard(doc),
        InvoiceLayout::SubscribeAndSave => extract_subscribe_and_save(doc),
        InvoiceLayout::Digital => extract_digital(doc),
    }
}

/// Standard multi-item invoice: the total is the trailing monetary cell of
/// the last line-item row; items are the item-title nodes in document order.
fn extract_standard(doc: &Html) -> Result<InvoiceDetails, ExtractError> {
    let last_row = doc
        .select(&LINE_ITEM_ROW)
        .last()
        .ok_or(ExtractError::MissingAnchor {
            anchor: "line-item row (.od-line-item-row)",
        })?;
    let price_cell =
        last_row
            .select(&TRAILING_CELL)
            .next()
            .ok_or(ExtractError::MissingAnchor {
                anchor: "trailing price cell (.a-span-last)",
            })?;
    let price = parse_money(&element_text(price_cell))?;

    let items: Vec<String> = doc.select(&ITEM_TITLE).map(element_text).collect();
    if items.is_empty() {
        return Err(ExtractError::MissingAnchor {
            anchor: "item titles (data-component=itemTitle)",
        });
    }

    Ok(InvoiceDetails { items, price })
}

/// Subscribe & Save invoice: everything hangs off the emphasized `td b`
/// headings. The total is the numeric suffix of the first heading matching
/// `"Order Total: $"`; items are the emphasized cells under the table body
/// of every heading equal to `"Items Ordered"`, flattened in document
/// order. Other price-like emphasized text is ignored.
fn extract_subscribe_and_save(doc: &Html) -> Result<InvoiceDetails, ExtractError> {
    let headings: Vec<_> = doc.select(&CELL_HEADING).collect();

    let price = headings
        .iter()
        .find_map(|h| {
            element_text(*h)
                .strip_prefix(ORDER_TOTAL_PREFIX)
                .map(str::to_owned)
        })
        .ok_or(ExtractError::MissingAnchor {
            anchor: "order-total heading (Order Total: $)",
        })
        .and_then(|suffix| parse_money(&suffix))?;

    let mut items = Vec::new();
    let mut saw_items_heading = false;
    for heading in &headings {
        if element_text(*heading) != ITEMS_ORDERED_HEADING {
            continue;
        }
        saw_items_heading = true;
        if let Some(tbody) = closest(*heading, "tbody") {
            items.extend(tbody.select(&CELL_ITEM).map(element_text));
        }
    }
    if !saw_items_heading {
        return Err(ExtractError::MissingAnchor {
            anchor: "items-ordered heading (Items Ordered)",
        });
    }
    if items.is_empty() {
        return Err(ExtractError::MissingAnchor {
            anchor: "ordered item cells (td i)",
        });
    }

    Ok(InvoiceDetails { items, price })
}

/// Digital-goods receipt: exactly one product, named by the designated
/// description cell, priced by the price-styled node.
fn extract_digital(doc: &Html) -> Result<InvoiceDetails, ExtractError> {
    let price_node = doc
        .select(&PRICE_NODE)
        .next()
        .ok_or(ExtractError::MissingAnchor {
            anchor: "price node (.a-color-price)",
        })?;
    let price = parse_money(&element_text(price_node))?;

    let cell = doc
        .select(&DESCRIPTION_CELL)
        .next()
        .ok_or(ExtractError::MissingAnchor {
            anchor: "description cell (td[valign=top])",
        })?;

    Ok(InvoiceDetails {
        items: vec![element_text(cell)],
        price,
    })
}

#[cfg(test)]
#[path = "invoice_test.rs"]
mod tests;
