//! HTTP client layer — `ClobHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::ClobHttp;
pub use retry::{RetryConfig, RetryPolicy};
