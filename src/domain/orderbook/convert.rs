//! Conversion: raw CLOB levels → `OrderBookSide`, `OrderBookSummary` → `OrderBookSnapshot`.

use super::state::OrderBookSnapshot;
use super::wire;
use super::{BookLevel, OrderBookSide};
use crate::shared::BookSide;
use serde_json::Value;

/// Parse raw order-book levels into a correctly ordered book side.
///
/// Accepts any JSON value. Each array entry must be an object whose `price`
/// and `size` are JSON numbers or numeric strings; entries that fail to parse,
/// or have a non-finite or non-positive price or size, are dropped. Anything
/// that is not an array yields an empty side. Never panics.
pub fn normalize_book_levels(raw: &Value, side: BookSide) -> OrderBookSide {
    let Some(entries) = raw.as_array() else {
        if !raw.is_null() {
            tracing::debug!(%side, "order book levels are not an array, treating as empty");
        }
        return OrderBookSide::empty(side);
    };

    let levels: Vec<BookLevel> = entries.iter().filter_map(parse_level).collect();

    let dropped = entries.len() - levels.len();
    if dropped > 0 {
        tracing::debug!(%side, dropped, kept = levels.len(), "dropped invalid order book levels");
    }

    OrderBookSide::new(side, levels)
}

fn parse_level(entry: &Value) -> Option<BookLevel> {
    let price = parse_number(entry.get("price")?)?;
    let size = parse_number(entry.get("size")?)?;
    BookLevel::new(price, size)
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

impl From<wire::OrderBookSummary> for OrderBookSnapshot {
    fn from(source: wire::OrderBookSummary) -> Self {
        OrderBookSnapshot {
            token_id: source.asset_id.unwrap_or_default(),
            market: source.market,
            timestamp: source.timestamp,
            tick_size: source.tick_size.filter(|t| *t > 0.0),
            min_order_size: source.min_order_size,
            bids: normalize_book_levels(&source.bids, BookSide::Bid),
            asks: normalize_book_levels(&source.asks, BookSide::Ask),
        }
    }
}
