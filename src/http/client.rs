//! Reqwest-backed transport
//!
//! The production [`Transport`] implementation. One call is one request:
//! retries, backoff and rate limiting are deliberately absent from this
//! client, and there is no session state between calls.

use super::types::{HttpConfig, Transport};
use crate::error::{Error, Result};
use crate::model::{CollectionParser, Model, PayloadCollectionParser};
use crate::resource::Resource;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// HTTP transport for Medium's JSON endpoints
pub struct HttpTransport {
    client: Client,
    config: HttpConfig,
    parser: Arc<dyn CollectionParser>,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: HttpConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            parser: Arc::new(PayloadCollectionParser::new()),
        }
    }

    /// Replace the collection parser handed to listing resources.
    ///
    /// The default is [`PayloadCollectionParser`]; substituting it here keeps
    /// the field mapping swappable at the composition boundary.
    #[must_use]
    pub fn with_collection_parser(mut self, parser: Arc<dyn CollectionParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Resolve the final request URL, applying the configured origin
    /// override.
    fn request_url(&self, resource: &Resource) -> Result<Url> {
        let url = resource.url();

        match &self.config.base_url {
            Some(base) => {
                let mut full = format!("{}{}", base.trim_end_matches('/'), url.path());
                if let Some(query) = url.query() {
                    full.push('?');
                    full.push_str(query);
                }
                Ok(Url::parse(&full)?)
            }
            None => Ok(url),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn load(&self, resource: &Resource) -> Result<Model> {
        let url = self.request_url(resource)?;
        let method: reqwest::Method = resource.method().into();

        let mut req = self.client.request(method.clone(), url.clone());
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: {} {}", method, url);

        let body = response.bytes().await.map_err(Error::Http)?;
        resource
            .parse_with(&body, self.parser.as_ref())
            .ok_or_else(|| Error::empty_model(resource.to_string()))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
