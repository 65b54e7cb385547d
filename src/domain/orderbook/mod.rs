//! Orderbook domain — validated price levels and correctly ordered book sides.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use convert::normalize_book_levels;
pub use state::OrderBookSnapshot;

use crate::shared::BookSide;
use serde::Serialize;
use std::cmp::Ordering;

// ─── BookLevel ───────────────────────────────────────────────────────────────

/// One resting order-book entry.
///
/// Only constructible through [`BookLevel::new`], so every instance has a
/// finite positive price and a finite positive size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookLevel {
    price: f64,
    size: f64,
}

impl BookLevel {
    /// Returns `None` unless both price and size are finite and positive.
    pub fn new(price: f64, size: f64) -> Option<Self> {
        let valid = price.is_finite() && price > 0.0 && size.is_finite() && size > 0.0;
        valid.then_some(Self { price, size })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// `price * size` — the cost of taking the whole level.
    pub fn notional(&self) -> f64 {
        self.price * self.size
    }
}

// ─── OrderBookSide ───────────────────────────────────────────────────────────

/// An ordered sequence of levels for one side of the book.
///
/// Asks are ascending by price (cheapest first), bids descending (highest
/// first). The ordering is established on construction; the order the source
/// sent levels in is never trusted. Levels at the same price keep their
/// arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBookSide {
    side: BookSide,
    levels: Vec<BookLevel>,
}

impl OrderBookSide {
    pub fn new(side: BookSide, levels: impl IntoIterator<Item = BookLevel>) -> Self {
        let mut levels: Vec<BookLevel> = levels.into_iter().collect();
        // `sort_by` is stable, which keeps duplicate prices in arrival order.
        levels.sort_by(|a, b| best_first(side, a.price, b.price));
        Self { side, levels }
    }

    pub fn empty(side: BookSide) -> Self {
        Self {
            side,
            levels: Vec::new(),
        }
    }

    /// Ask side, sorted ascending by price.
    pub fn asks(levels: impl IntoIterator<Item = BookLevel>) -> Self {
        Self::new(BookSide::Ask, levels)
    }

    /// Bid side, sorted descending by price.
    pub fn bids(levels: impl IntoIterator<Item = BookLevel>) -> Self {
        Self::new(BookSide::Bid, levels)
    }

    pub fn side(&self) -> BookSide {
        self.side
    }

    pub fn levels(&self) -> &[BookLevel] {
        &self.levels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BookLevel> {
        self.levels.iter()
    }

    /// The best level: lowest ask or highest bid.
    pub fn best(&self) -> Option<&BookLevel> {
        self.levels.first()
    }

    /// Total resting size across all levels.
    pub fn depth(&self) -> f64 {
        self.levels.iter().map(BookLevel::size).sum()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderBookSide {
    type Item = &'a BookLevel;
    type IntoIter = std::slice::Iter<'a, BookLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

fn best_first(side: BookSide, a: f64, b: f64) -> Ordering {
    match side {
        BookSide::Ask => a.total_cmp(&b),
        BookSide::Bid => b.total_cmp(&a),
    }
}
