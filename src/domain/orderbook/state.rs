//! Order-book snapshot state — one fetched book, normalized and ready to estimate against.

use crate::domain::fill::{calculate_market_fill, FillResult};
use crate::domain::orderbook::OrderBookSide;
use crate::shared::{BookSide, Side, TokenId};
use chrono::{DateTime, Utc};

/// A normalized point-in-time book for one outcome token.
///
/// Snapshots are never updated in place. To re-estimate against fresher
/// liquidity, fetch a new snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBookSnapshot {
    pub token_id: TokenId,
    pub market: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub tick_size: Option<f64>,
    pub min_order_size: Option<f64>,
    pub(crate) bids: OrderBookSide,
    pub(crate) asks: OrderBookSide,
}

impl OrderBookSnapshot {
    pub fn new(token_id: TokenId) -> Self {
        Self {
            token_id,
            market: None,
            timestamp: None,
            tick_size: None,
            min_order_size: None,
            bids: OrderBookSide::empty(BookSide::Bid),
            asks: OrderBookSide::empty(BookSide::Ask),
        }
    }

    /// Build a snapshot from already-typed sides.
    pub fn from_sides(token_id: TokenId, bids: OrderBookSide, asks: OrderBookSide) -> Self {
        Self {
            bids,
            asks,
            ..Self::new(token_id)
        }
    }

    /// Bids sorted by price descending.
    pub fn bids(&self) -> &OrderBookSide {
        &self.bids
    }

    /// Asks sorted by price ascending.
    pub fn asks(&self) -> &OrderBookSide {
        &self.asks
    }

    /// Highest bid price.
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.best().map(|l| l.price())
    }

    /// Lowest ask price.
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.best().map(|l| l.price())
    }

    /// Mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        }
    }

    /// Spread between best ask and best bid.
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Estimate a market order of `shares` against this book.
    pub fn estimate(&self, side: Side, shares: f64) -> FillResult {
        calculate_market_fill(side, shares, &self.bids, &self.asks)
    }

    /// Estimate selling an entire position into the bids.
    pub fn estimate_cash_out(&self, position_shares: f64) -> FillResult {
        self.estimate(Side::Sell, position_shares)
    }
}
