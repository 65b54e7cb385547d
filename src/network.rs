//! Network URL constants.

/// Default CLOB REST API base URL.
pub const DEFAULT_CLOB_URL: &str = "https://clob.polymarket.com";
