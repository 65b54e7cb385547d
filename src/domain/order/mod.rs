//! Order domain — drafting an unsigned market order from a fill estimate.
//!
//! The draft fixes the reference price and base-unit amounts. Signing the
//! payload (EIP-712) and submitting it belong to the wallet and the exchange.

pub mod wire;

pub use wire::OrderPayload;

use crate::domain::fill::FillResult;
use crate::shared::scaling::{scale_fill, ScalingError};
use crate::shared::{Side, TokenId};
use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Decimal places order sizes are quoted in.
pub const SHARE_DECIMALS: u32 = 2;

/// Decimal places the average price is trimmed to before tick rounding,
/// absorbing float noise from `cost / filled`.
const PRICE_NOISE_DECIMALS: u32 = 6;

// ─── OrderError ──────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Nothing to fill at current book depth")]
    NoLiquidity,

    #[error("Invalid tick size: {0}")]
    InvalidTickSize(f64),

    #[error("Invalid reference price: {0}")]
    InvalidPrice(f64),

    #[error("{0}")]
    Scaling(#[from] ScalingError),
}

// ─── MarketOrderDraft ────────────────────────────────────────────────────────

/// An unsigned market order derived from a [`FillResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOrderDraft {
    pub token_id: TokenId,
    pub side: Side,
    /// Average fill price rounded onto the tick grid, away from the trader's favour.
    pub price: Decimal,
    /// Filled shares truncated to [`SHARE_DECIMALS`].
    pub shares: Decimal,
    pub maker_amount: u64,
    pub taker_amount: u64,
}

impl MarketOrderDraft {
    /// Draft an order for exactly the shares the estimate says will fill.
    ///
    /// Buys round the reference price up to the next tick and sells round it
    /// down, so the resulting limit is never tighter than the estimated
    /// average. The price is clamped to `[tick, 1 - tick]`.
    pub fn from_fill(
        token_id: TokenId,
        side: Side,
        fill: &FillResult,
        tick_size: f64,
    ) -> Result<Self, OrderError> {
        let avg = fill.avg_price().ok_or(OrderError::NoLiquidity)?;

        if !tick_size.is_finite() || tick_size <= 0.0 || tick_size >= 1.0 {
            return Err(OrderError::InvalidTickSize(tick_size));
        }
        let tick = Decimal::from_f64(tick_size).ok_or(OrderError::InvalidTickSize(tick_size))?;

        let avg_dec = Decimal::from_f64(avg)
            .ok_or(OrderError::InvalidPrice(avg))?
            .round_dp(PRICE_NOISE_DECIMALS);
        let price = round_to_tick(avg_dec, tick, side);

        let shares = Decimal::from_f64(fill.filled_shares)
            .ok_or(OrderError::NoLiquidity)?
            .round_dp_with_strategy(SHARE_DECIMALS, RoundingStrategy::ToZero);

        let amounts = scale_fill(price, shares, side)?;

        Ok(Self {
            token_id,
            side,
            price,
            shares,
            maker_amount: amounts.maker_amount,
            taker_amount: amounts.taker_amount,
        })
    }

    /// Build the unsigned wire payload for `maker` with a random salt.
    pub fn to_payload(&self, maker: impl Into<String>) -> OrderPayload {
        OrderPayload {
            // Salt stays inside the JS safe-integer range for browser signers.
            salt: rand::random::<u32>() as u64,
            maker: maker.into(),
            token_id: self.token_id.clone(),
            maker_amount: self.maker_amount.to_string(),
            taker_amount: self.taker_amount.to_string(),
            side: self.side,
            expiration: "0".to_string(),
            nonce: "0".to_string(),
            fee_rate_bps: "0".to_string(),
            signature: None,
        }
    }
}

fn round_to_tick(price: Decimal, tick: Decimal, side: Side) -> Decimal {
    let steps = price / tick;
    let steps = match side {
        Side::Buy => steps.ceil(),
        Side::Sell => steps.floor(),
    };
    let min = tick;
    let max = Decimal::ONE - tick;
    (steps * tick).max(min).min(max).normalize()
}
