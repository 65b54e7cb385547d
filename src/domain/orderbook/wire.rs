//! Wire types for CLOB order-book responses.
//!
//! Level arrays are kept as raw `serde_json::Value`: the CLOB sends prices and
//! sizes as strings, proxies sometimes re-encode them as numbers, and a single
//! malformed entry must not fail the whole response. Validation happens in
//! [`normalize_book_levels`](super::normalize_book_levels).

use crate::shared::serde_util::{f64_str_opt, timestamp_ms_opt};
use crate::shared::TokenId;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// REST response of `GET /book?token_id=…`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderBookSummary {
    /// Condition id of the market the token belongs to.
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub asset_id: Option<TokenId>,
    #[serde(default, deserialize_with = "timestamp_ms_opt::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub bids: Value,
    #[serde(default)]
    pub asks: Value,
    #[serde(default, deserialize_with = "f64_str_opt::deserialize")]
    pub tick_size: Option<f64>,
    #[serde(default, deserialize_with = "f64_str_opt::deserialize")]
    pub min_order_size: Option<f64>,
    #[serde(default)]
    pub neg_risk: Option<bool>,
}

/// REST response of `GET /tick-size?token_id=…`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TickSizeResponse {
    #[serde(default, deserialize_with = "f64_str_opt::deserialize")]
    pub minimum_tick_size: Option<f64>,
}
