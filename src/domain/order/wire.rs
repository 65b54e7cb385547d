//! Wire types for order submission.

use crate::shared::{Side, TokenId};
use serde::{Deserialize, Serialize};

/// Unsigned (or wallet-signed) order body for the exchange's order endpoint.
///
/// Amounts are base-unit integers encoded as strings, as the exchange expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub salt: u64,
    pub maker: String,
    pub token_id: TokenId,
    pub maker_amount: String,
    pub taker_amount: String,
    pub side: Side,
    pub expiration: String,
    pub nonce: String,
    pub fee_rate_bps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl OrderPayload {
    /// Attach the signature produced by the external wallet.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}
