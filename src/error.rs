//! Unified SDK error types.
//!
//! The pure core (normalizer, fill estimator) never errors: malformed levels
//! are dropped and thin books are reported as partial fills. These types cover
//! the HTTP layer and order drafting.

use thiserror::Error;

use crate::domain::order::OrderError;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_converts_into_sdk_error() {
        let err: SdkError = OrderError::NoLiquidity.into();
        assert!(matches!(err, SdkError::Order(OrderError::NoLiquidity)));
        assert_eq!(err.to_string(), "Order error: Nothing to fill at current book depth");
    }

    #[test]
    fn test_validation_error_display() {
        let err = SdkError::Validation("missing or invalid tick size for tok".to_string());
        match &err {
            SdkError::Http(_) | SdkError::Order(_) => unreachable!(),
            SdkError::Validation(msg) => assert!(msg.ends_with("tok")),
        }
        assert_eq!(
            err.to_string(),
            "Validation error: missing or invalid tick size for tok"
        );
    }

    #[test]
    fn test_http_error_display() {
        let err = HttpError::ServerError {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Server error 503: unavailable");

        let err: SdkError = HttpError::MaxRetriesExceeded {
            attempts: 4,
            last_error: "Timeout".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "HTTP error: Max retries exceeded after 4 attempts: Timeout"
        );
    }
}
