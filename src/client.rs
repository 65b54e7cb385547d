//! High-level client — `ClobClient` with nested sub-client accessors.
//!
//! Each domain that talks to the network has its own sub-client in
//! `domain/<name>/client.rs`. This module keeps the builder, shared cache
//! state, and accessor methods.

use crate::domain::orderbook::client::Orderbooks;
use crate::error::SdkError;
use crate::http::retry::RetryPolicy;
use crate::http::ClobHttp;
use crate::shared::TokenId;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;

/// The primary entry point for fetching books from a CLOB.
#[derive(Clone)]
pub struct ClobClient {
    pub(crate) http: ClobHttp,
    /// Tick size cache: token id → minimum tick size
    pub(crate) tick_size_cache: Arc<RwLock<HashMap<TokenId, f64>>>,
}

impl ClobClient {
    pub fn builder() -> ClobClientBuilder {
        ClobClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orderbooks(&self) -> Orderbooks<'_> {
        Orderbooks { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear every sub-client cache.
    pub async fn clear_all_caches(&self) {
        self.orderbooks().clear_cache().await;
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ClobClientBuilder {
    base_url: String,
    retry: RetryPolicy,
}

impl Default for ClobClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_CLOB_URL.to_string(),
            retry: RetryPolicy::Idempotent,
        }
    }
}

impl ClobClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<ClobClient, SdkError> {
        Ok(ClobClient {
            http: ClobHttp::new(&self.base_url, self.retry)?,
            tick_size_cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Side;

    #[test]
    fn test_builder_defaults() {
        let client = ClobClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_CLOB_URL);
    }

    #[tokio::test]
    async fn test_cached_tick_size_skips_network() {
        let client = ClobClient::builder()
            .base_url("http://127.0.0.1:1")
            .retry_policy(RetryPolicy::None)
            .build()
            .unwrap();
        let token = TokenId::from("tok");
        client
            .tick_size_cache
            .write()
            .await
            .insert(token.clone(), 0.01);

        assert_eq!(client.orderbooks().tick_size(&token).await.unwrap(), 0.01);

        client.clear_all_caches().await;
        assert!(client.orderbooks().tick_size(&token).await.is_err());
    }

    #[tokio::test]
    async fn test_clear_all_caches_empties_orderbook_cache() {
        let client = ClobClient::builder().build().unwrap();
        for id in ["a", "b"] {
            client
                .tick_size_cache
                .write()
                .await
                .insert(TokenId::from(id), 0.01);
        }

        client.orderbooks().clear_cache().await;
        assert!(client.tick_size_cache.read().await.is_empty());

        client
            .tick_size_cache
            .write()
            .await
            .insert(TokenId::from("c"), 0.001);
        client.clear_all_caches().await;
        assert!(client.tick_size_cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_estimate_surfaces_http_error() {
        let client = ClobClient::builder()
            .base_url("http://127.0.0.1:1")
            .retry_policy(RetryPolicy::None)
            .build()
            .unwrap();
        let result = client
            .orderbooks()
            .estimate(&TokenId::from("tok"), Side::Buy, 10.0)
            .await;
        assert!(matches!(result, Err(SdkError::Http(_))));
    }
}
