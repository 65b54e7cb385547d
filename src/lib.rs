//! # market-fill
//!
//! Order-book fill estimation for prediction-market CLOB clients.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Book levels, normalization, fill estimation, order drafting
//!    (always available, pure, WASM-safe)
//! 2. **HTTP API** — `ClobHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `ClobClient` with sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use market_fill::prelude::*;
//!
//! let bids = normalize_book_levels(&raw["bids"], BookSide::Bid);
//! let asks = normalize_book_levels(&raw["asks"], BookSide::Ask);
//! let fill = calculate_market_fill(Side::Buy, 15.0, &bids, &asks);
//!
//! println!("{}", FillSummary::new(Side::Buy, 15.0, &fill));
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ClobClient` — the primary entry point for fetching books.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{BookSide, Side, TokenId};

    // Domain types — orderbook
    pub use crate::domain::orderbook::state::OrderBookSnapshot;
    pub use crate::domain::orderbook::{normalize_book_levels, BookLevel, OrderBookSide};

    // Domain types — fill
    pub use crate::domain::fill::{calculate_market_fill, FillResult, FillSummary};

    // Domain types — order
    pub use crate::domain::order::{MarketOrderDraft, OrderError, OrderPayload};

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::DEFAULT_CLOB_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{ClobClient, ClobClientBuilder, OrderbooksClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
