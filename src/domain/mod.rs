//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching CLOB responses / requests
//! - `convert.rs` — Conversions from wire types with validation
//! - `state.rs` — State containers built from snapshots
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod fill;
pub mod order;
pub mod orderbook;
