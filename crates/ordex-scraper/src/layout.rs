//! Invoice layout detection.
//!
//! The retailer serves three structurally different printable invoices:
//! the standard multi-item invoice, the "Subscribe and Save" subscription
//! invoice, and the digital-goods receipt. Extraction is dispatched over a
//! closed variant set rather than per-call-site duck checks, so every
//! layout has exactly one extraction path.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::dom::{element_text, selector};

/// Digital orders live in their own identifier namespace: ids beginning
/// with this prefix always route to the digital receipt extractor and never
/// reach the HTML-structure checks, which are unreliable for that layout.
pub const DIGITAL_ORDER_PREFIX: &str = "D";

const SUBSCRIBE_AND_SAVE_MARKER: &str = "Subscribe and Save";

static EMPHASIZED: LazyLock<Selector> = LazyLock::new(|| selector("b"));

/// The three supported invoice document shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceLayout {
    Standard,
    SubscribeAndSave,
    Digital,
}

/// Decides which extraction strategy applies to a loaded invoice.
///
/// Priority order, first match wins:
/// 1. order id carries the digital-goods prefix → [`InvoiceLayout::Digital`];
/// 2. any emphasized node whose text starts with `"Subscribe and Save"` →
///    [`InvoiceLayout::SubscribeAndSave`];
/// 3. otherwise [`InvoiceLayout::Standard`].
#[must_use]
pub fn classify(order_id: &str, doc: &Html) -> InvoiceLayout {
    if order_id.starts_with(DIGITAL_ORDER_PREFIX) {
        return InvoiceLayout::Digital;
    }
    let subscription = doc
        .select(&EMPHASIZED)
        .any(|b| element_text(b).starts_with(SUBSCRIBE_AND_SAVE_MARKER));
    if subscription {
        InvoiceLayout::SubscribeAndSave
    } else {
        InvoiceLayout::Standard
    }
}
