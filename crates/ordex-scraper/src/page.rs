//! The navigation collaborator: opening pages and releasing them.
//!
//! The reconciliation driver only ever sees this interface, so tests can
//! serve canned documents and a future script-running browser can slot in
//! without touching extraction or driver logic.

use std::time::Duration;

use crate::error::ExtractError;

/// One opened page, exclusively owned by its expansion task from open to
/// release.
#[derive(Debug)]
pub struct OpenedPage {
    /// Final URL of the page (after redirects, for the HTTP navigator).
    pub url: String,
    /// The fully loaded document markup.
    pub body: String,
}

/// Opens pages and releases them when their task is done.
///
/// `open` resolves once the page has finished loading. Callers must pair
/// every successful `open` with exactly one `close`, on success and
/// failure paths alike.
pub trait Browser {
    /// Opens `url` and waits for the document to finish loading.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Navigate`] when the page cannot be fetched.
    fn open(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<OpenedPage, ExtractError>>;

    /// Releases an opened page. The default implementation drops the
    /// buffer; a windowed implementation would close the window here.
    fn close(&self, page: OpenedPage) {
        drop(page);
    }
}

/// HTTP-backed [`Browser`]: a page is "loaded" once its response body has
/// been received in full.
pub struct HttpBrowser {
    client: reqwest::Client,
}

impl HttpBrowser {
    /// Creates an `HttpBrowser` with the given per-request timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Navigate`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Browser for HttpBrowser {
    async fn open(&self, url: &str) -> Result<OpenedPage, ExtractError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let url = response.url().to_string();
        let body = response.text().await?;
        Ok(OpenedPage { url, body })
    }
}
