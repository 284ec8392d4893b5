//! HTTP transport layer: `GraphHttp` with opt-in retry policies.

pub mod client;
pub mod retry;

pub use client::GraphHttp;
pub use retry::{RetryConfig, RetryPolicy};
