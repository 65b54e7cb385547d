//! Orderbooks sub-client — snapshots, tick sizes, fill estimates, order drafts.

use crate::client::ClobClient;
use crate::domain::fill::FillResult;
use crate::domain::order::MarketOrderDraft;
use crate::domain::orderbook::state::OrderBookSnapshot;
use crate::error::SdkError;
use crate::shared::{Side, TokenId};

/// Sub-client for orderbook operations.
pub struct Orderbooks<'a> {
    pub(crate) client: &'a ClobClient,
}

impl<'a> Orderbooks<'a> {
    /// Fetch and normalize the live book (never cached — always fresh).
    pub async fn snapshot(&self, token_id: &TokenId) -> Result<OrderBookSnapshot, SdkError> {
        let summary = self.client.http.get_book(token_id.as_str()).await?;
        let mut snapshot = OrderBookSnapshot::from(summary);
        if snapshot.token_id.as_str().is_empty() {
            snapshot.token_id = token_id.clone();
        }
        if let Some(tick) = snapshot.tick_size {
            self.client
                .tick_size_cache
                .write()
                .await
                .insert(token_id.clone(), tick);
        }
        Ok(snapshot)
    }

    /// Minimum tick size for a token (persistently cached — rarely changes).
    pub async fn tick_size(&self, token_id: &TokenId) -> Result<f64, SdkError> {
        {
            let cache = self.client.tick_size_cache.read().await;
            if let Some(tick) = cache.get(token_id) {
                return Ok(*tick);
            }
        }

        let resp = self.client.http.get_tick_size(token_id.as_str()).await?;
        let tick = resp
            .minimum_tick_size
            .filter(|t| *t > 0.0 && *t < 1.0)
            .ok_or_else(|| {
                SdkError::Validation(format!("missing or invalid tick size for {token_id}"))
            })?;

        self.client
            .tick_size_cache
            .write()
            .await
            .insert(token_id.clone(), tick);
        Ok(tick)
    }

    /// Estimate a market order against a freshly fetched book.
    pub async fn estimate(
        &self,
        token_id: &TokenId,
        side: Side,
        shares: f64,
    ) -> Result<FillResult, SdkError> {
        let snapshot = self.snapshot(token_id).await?;
        Ok(snapshot.estimate(side, shares))
    }

    /// Fetch a fresh book, estimate, and draft an unsigned order for what fills.
    pub async fn draft_market_order(
        &self,
        token_id: &TokenId,
        side: Side,
        shares: f64,
    ) -> Result<(FillResult, MarketOrderDraft), SdkError> {
        let snapshot = self.snapshot(token_id).await?;
        let fill = snapshot.estimate(side, shares);
        let tick = match snapshot.tick_size {
            Some(tick) => tick,
            None => self.tick_size(token_id).await?,
        };
        let draft = MarketOrderDraft::from_fill(token_id.clone(), side, &fill, tick)?;
        Ok((fill, draft))
    }

    pub async fn clear_cache(&self) {
        self.client.tick_size_cache.write().await.clear();
    }
}
