//! The reconciled-order data model.
//!
//! Field names on the wire match what the purchases store expects:
//! `id`, `href`, `items`, `price`, and an optional `charge` object with
//! `card`, `amount`, and `date`. `charge` is omitted entirely from the JSON
//! body when the order has no posted billing event, mirroring how an absent
//! field (rather than `null`) reaches the store.

use serde::{Deserialize, Serialize};

/// A billing event tied to an order row.
///
/// `date` travels as the verbatim page text (e.g. `"January 5, 2024"`);
/// the remote store owns date parsing. An empty `date` means the charge was
/// posted but no date container preceded its row on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Card descriptor as printed, e.g. `"Visa ...1234"`.
    pub card: String,
    /// Non-negative currency value parsed from `$`-prefixed text.
    pub amount: f64,
    pub date: String,
}

/// The minimal order reference discovered on a listing page before its
/// invoice is opened.
///
/// `href` is the absolute URL of the printable invoice. Stubs are immutable
/// once scanned and consumed exactly once by the reconciliation driver.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderStub {
    /// Retailer order identifier, unique within one listing page.
    pub id: String,
    pub href: String,
    /// Billing event co-located with the order row, when one has posted.
    pub charge: Option<Charge>,
}

/// What an opened invoice contributes to an order: line items in document
/// order (duplicates retained) and the authoritative total price.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDetails {
    pub items: Vec<String>,
    pub price: f64,
}

/// One reconciled purchase-order record: the listing-page stub merged with
/// its opened invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub href: String,
    pub items: Vec<String>,
    /// Invoice total. Authoritative over any price implied by the charge;
    /// `charge.amount` may legitimately differ (partial shipment, tax
    /// adjustment) and both values are preserved.
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<Charge>,
}

impl Order {
    /// Merges a listing-page stub with its invoice details.
    ///
    /// Pure shallow merge: invoice fields win for `items`/`price`, stub
    /// fields pass through unchanged.
    #[must_use]
    pub fn assemble(stub: OrderStub, details: InvoiceDetails) -> Self {
        Self {
            id: stub.id,
            href: stub.href,
            items: details.items,
            price: details.price,
            charge: stub.charge,
        }
    }
}
