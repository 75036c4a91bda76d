//! HTTP client layer — `ApiHttp` with per-request retry policies.

#[cfg(feature = "http")]
pub mod client;
pub mod retry;

#[cfg(feature = "http")]
pub use client::ApiHttp;
pub use retry::{RetryConfig, RetryPolicy};
