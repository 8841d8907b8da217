//! HTTP client for the storefront REST backend.
//!
//! The catalog pipeline itself performs no I/O; this client is the external
//! boundary that fetches the two raw feeds and hands plain data to the
//! pipeline. Fetch failures stay here as typed errors — they are never
//! passed into the pipeline functions.

use std::time::Duration;

use glasswood_core::{RawManualProduct, RawMarketplaceItem};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Client for `GET /api/items` and `GET /api/manual-products`.
pub struct StorefrontClient {
    client: Client,
    base_url: String,
}

impl StorefrontClient {
    /// Creates a `StorefrontClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the marketplace item feed.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NotFound`] — HTTP 404.
    /// - [`ClientError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ClientError::Http`] — network or TLS failure.
    /// - [`ClientError::Deserialize`] — response body is not the expected JSON.
    pub async fn fetch_items(&self) -> Result<Vec<RawMarketplaceItem>, ClientError> {
        self.get_json("/api/items").await
    }

    /// Fetches the manually entered product feed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::fetch_items`].
    pub async fn fetch_manual_products(&self) -> Result<Vec<RawManualProduct>, ClientError> {
        self.get_json("/api/manual-products").await
    }

    /// Fetches both feeds concurrently. The caller feeds the result straight
    /// into `glasswood_catalog::normalize`.
    ///
    /// # Errors
    ///
    /// Propagates the first error from either feed.
    pub async fn fetch_catalog(
        &self,
    ) -> Result<(Vec<RawManualProduct>, Vec<RawMarketplaceItem>), ClientError> {
        let (manual, items) = tokio::try_join!(self.fetch_manual_products(), self.fetch_items())?;
        tracing::debug!(
            manual = manual.len(),
            marketplace = items.len(),
            "fetched catalog snapshot"
        );
        Ok((manual, items))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { url });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        // Read the full body first so deserialization errors can carry the
        // endpoint as context.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| ClientError::Deserialize {
            context: url,
            source,
        })
    }
}
