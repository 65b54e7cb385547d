//! Fill domain — market-order fill estimation against a book snapshot.
//!
//! A market order is simulated by walking the opposite side of the book from
//! the best level outward, taking `min(remaining, level.size)` at each level.
//! The walk stops when the order is filled or the book runs out; running out
//! is a partial fill, not an error.

mod summary;

pub use summary::FillSummary;

use crate::domain::orderbook::OrderBookSide;
use crate::shared::fmt::decimal::usd_from_f64;
use crate::shared::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share remainders at or below this are treated as filled.
pub const FILL_EPSILON: f64 = 1e-9;

// ─── FillResult ──────────────────────────────────────────────────────────────

/// Outcome of walking the book for a market order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillResult {
    /// Shares that the book can absorb, `<= desired`.
    pub filled_shares: f64,
    /// Volume-weighted average price in whole cents; `None` when nothing fills.
    pub avg_price_cents: Option<u32>,
    /// `Σ price × consumed` over every level touched, in dollars, unrounded.
    pub total_cost: f64,
}

impl FillResult {
    /// The no-liquidity result.
    pub const EMPTY: FillResult = FillResult {
        filled_shares: 0.0,
        avg_price_cents: None,
        total_cost: 0.0,
    };

    pub fn is_empty(&self) -> bool {
        self.filled_shares <= 0.0
    }

    /// Whether the whole `desired` quantity was filled.
    pub fn is_complete(&self, desired: f64) -> bool {
        !self.is_empty() && desired - self.filled_shares <= FILL_EPSILON
    }

    /// Shares the book could not absorb.
    pub fn shortfall(&self, desired: f64) -> f64 {
        (desired - self.filled_shares).max(0.0)
    }

    /// Unrounded average price as a probability in dollars per share.
    pub fn avg_price(&self) -> Option<f64> {
        (self.filled_shares > 0.0).then(|| self.total_cost / self.filled_shares)
    }

    /// Total cost (buy) or proceeds (sell) rounded to cents for display.
    pub fn total_cost_usd(&self) -> Decimal {
        usd_from_f64(self.total_cost)
    }
}

// ─── Estimator ───────────────────────────────────────────────────────────────

/// Simulate a market order of `desired_shares` against the book.
///
/// Buys consume `asks`, sells consume `bids`, each in the side's own order
/// (best price first). A non-positive or non-finite `desired_shares` returns
/// [`FillResult::EMPTY`] without reading either side.
pub fn calculate_market_fill(
    side: Side,
    desired_shares: f64,
    bids: &OrderBookSide,
    asks: &OrderBookSide,
) -> FillResult {
    if !desired_shares.is_finite() || desired_shares <= 0.0 {
        return FillResult::EMPTY;
    }

    let levels = match side {
        Side::Buy => asks,
        Side::Sell => bids,
    };

    if levels.side() != side.consumes() {
        tracing::warn!(
            %side,
            book_side = %levels.side(),
            "market fill walking a {} side for a {} order",
            levels.side(),
            side
        );
    }

    let mut remaining = desired_shares;
    let mut filled = 0.0;
    let mut cost = 0.0;

    for level in levels {
        let consumed = remaining.min(level.size());
        cost += consumed * level.price();
        filled += consumed;
        remaining -= consumed;
        if remaining <= FILL_EPSILON {
            break;
        }
    }

    // Float accumulation can land one ulp above the request.
    let filled = f64::min(filled, desired_shares);

    if filled <= 0.0 {
        return FillResult::EMPTY;
    }

    if remaining > FILL_EPSILON {
        tracing::debug!(
            %side,
            desired = desired_shares,
            filled,
            "market fill limited by book depth"
        );
    }

    FillResult {
        filled_shares: filled,
        avg_price_cents: Some(round_to_cents(cost / filled)),
        total_cost: cost,
    }
}

/// Dollars-per-share → whole cents, rounding half up.
fn round_to_cents(price: f64) -> u32 {
    (price * 100.0).round() as u32
}
