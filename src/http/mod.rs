//! Transport layer
//!
//! Defines the [`Transport`] contract the fetch service delegates to, and a
//! reqwest-backed implementation of it. The transport performs the HTTP call,
//! hands the raw body to the resource's parser and maps every failure into
//! the crate's error type. No retries, rate limiting or caching live here;
//! one call is one request.

mod client;
mod types;

pub use client::HttpTransport;
pub use types::{HttpConfig, HttpConfigBuilder, Transport};

#[cfg(test)]
mod tests;
