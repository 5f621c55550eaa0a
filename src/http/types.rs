//! Transport contract and configuration

use crate::error::Result;
use crate::model::Model;
use crate::resource::Resource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

// ============================================================================
// Transport Trait
// ============================================================================

/// The networking collaborator the fetch service delegates to.
///
/// Contract: perform the HTTP call described by the resource's URL and
/// method; on a 2xx response hand the raw body bytes to the resource's
/// parser and return the model, or [`Error::EmptyModel`] when the parser
/// yields nothing; map connection-level failures and non-2xx statuses into
/// errors. Each call resolves exactly once.
///
/// [`Error::EmptyModel`]: crate::error::Error::EmptyModel
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request and parse its response.
    async fn load(&self, resource: &Resource) -> Result<Model>;
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Origin override applied to every resource URL. The resource's path
    /// and query are kept and everything before them comes from this value,
    /// the way a mirror or a test server stands in for medium.com. `None`
    /// sends requests to the URL as built.
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("medium-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpConfig {
    /// Create a new config builder
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

/// Builder for transport config
#[derive(Default)]
pub struct HttpConfigBuilder {
    config: HttpConfig,
}

impl HttpConfigBuilder {
    /// Set the origin override
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpConfig {
        self.config
    }
}
