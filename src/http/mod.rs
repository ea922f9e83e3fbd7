//! HTTP fetch layer — `MarketHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::MarketHttp;
pub use retry::{RetryConfig, RetryPolicy};
