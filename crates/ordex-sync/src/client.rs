//! HTTP client for the purchases store.
//!
//! Serializes reconciled orders and drives the store's upsert protocol,
//! classifying every response through the fixed status table. The two call
//! shapes mirror the store's API: `PUT /purchases/{id}` is an idempotent
//! create-or-replace, `POST /purchases` is a plain create that reports
//! duplicates as conflicts.

use std::time::Duration;

use reqwest::{Client, Url};

use ordex_core::{Order, SyncOutcome};

use crate::error::SyncError;

/// Client for the purchases store.
///
/// Use [`SyncClient::new`] with the configured base URL; point it at a mock
/// server in tests.
pub struct SyncClient {
    client: Client,
    base_url: Url,
}

impl SyncClient {
    /// Creates a client for the store rooted at `base_url`
    /// (e.g. `http://localhost:8080/api/purchases`).
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SyncError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SyncError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| SyncError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Create-or-replace one order, addressed by its id. Idempotent: safe
    /// to repeat, and repeating a 200 keeps yielding `Updated`.
    ///
    /// Never fails: a call that produced no response classifies as
    /// [`SyncOutcome::Unreachable`]. No outcome is retried automatically.
    pub async fn upsert(&self, order: &Order) -> SyncOutcome {
        let order = self.addressable(order);
        let url = self.purchase_url(&order.id);
        let result = self.client.put(url).json(&order).send().await;
        Self::classify(&order.id, result)
    }

    /// Create one order against the collection endpoint. Not idempotent:
    /// repeating an identical create yields a `Conflict`.
    pub async fn create(&self, order: &Order) -> SyncOutcome {
        let order = self.addressable(order);
        let result = self
            .client
            .post(self.base_url.clone())
            .json(&order)
            .send()
            .await;
        Self::classify(&order.id, result)
    }

    fn classify(order_id: &str, result: reqwest::Result<reqwest::Response>) -> SyncOutcome {
        match result {
            Ok(response) => SyncOutcome::from_status(response.status().as_u16()),
            Err(error) => {
                tracing::error!(order = %order_id, %error, "purchases store unreachable");
                SyncOutcome::Unreachable
            }
        }
    }

    /// The order with its retailer id in place: orders from the older
    /// invoice-links listing carry an empty id field, recoverable from the
    /// invoice link's query string.
    fn addressable(&self, order: &Order) -> Order {
        let mut order = order.clone();
        if order.id.is_empty() {
            match order_id_from_href(&order.href) {
                Some(id) => order.id = id,
                None => {
                    tracing::warn!(href = %order.href, "order has no id and none in its link");
                }
            }
        }
        order
    }

    fn purchase_url(&self, id: &str) -> String {
        format!("{}/{id}", self.base_url.as_str().trim_end_matches('/'))
    }
}

/// Extracts the retailer order identifier from an invoice link's `orderID`
/// query parameter.
#[must_use]
pub fn order_id_from_href(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find_map(|(key, value)| (key == "orderID").then_some(value.into_owned()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
