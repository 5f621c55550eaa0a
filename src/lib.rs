//! # Medium Client
//!
//! A minimal async client for Medium's undocumented JSON endpoints.
//! Medium has no public API; it does serve JSON to anyone who appends
//! `format=json` to a handful of URLs, wrapped in an anti-hijacking guard
//! prefix. This crate knows those URLs, strips the guard, and maps the
//! payloads to typed post models.
//!
//! ## Features
//!
//! - **Typed resources**: `Resource` describes each endpoint (URL, method,
//!   expected model) as data, with proper percent-encoding throughout
//! - **Envelope decoding**: strips the `"])}while(1);</x>"` guard prefix and
//!   decodes the JSON object behind it
//! - **Injectable transport**: the HTTP layer is a trait; swap it out in
//!   tests or bring your own backend
//! - **Typed models**: posts come back as structs with chrono timestamps,
//!   not raw JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medium_client::{HttpTransport, MediumService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> medium_client::Result<()> {
//!     let service = MediumService::new(Arc::new(HttpTransport::new()));
//!
//!     let posts = service.list_posts("rust").await?;
//!     for post in &posts {
//!         println!("{} ({})", post.title, post.id);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! MediumService ── send_request(Resource) ──▶ Transport (HttpTransport)
//!                                                  │ GET, raw bytes
//!                                                  ▼
//!                        Model ◀── CollectionParser ◀── decode_envelope
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Guard-aware response envelope decoding
pub mod decode;

/// Post models and the collection parser
pub mod model;

/// Resource descriptors for Medium's endpoints
pub mod resource;

/// HTTP transport
pub mod http;

/// The caller-facing fetch service
pub mod service;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use decode::{decode_envelope, Envelope, GUARD_PREFIX};
pub use http::{HttpConfig, HttpConfigBuilder, HttpTransport, Transport};
pub use model::{CollectionParser, Model, ModelKind, PayloadCollectionParser, Post, PostList};
pub use resource::Resource;
pub use service::MediumService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
