//! Resource descriptors for Medium's JSON endpoints
//!
//! A [`Resource`] is one member of a closed set of request intents. Each
//! variant fully determines the request URL, the HTTP method, the kind of
//! model a successful response carries, and the parser that turns raw bytes
//! into that model. Dispatch is an exhaustive `match` per contract, so adding
//! a variant forces every contract to handle it.

use crate::decode::decode_envelope;
use crate::model::{CollectionParser, Model, ModelKind, PayloadCollectionParser};
use crate::types::Method;
use tracing::warn;
use url::Url;

/// Base URL for all Medium endpoints.
const BASE_URL: &str = "https://medium.com/";

/// A request descriptor for one of Medium's undocumented JSON endpoints.
///
/// Variants are immutable once constructed: they carry only their input
/// parameters and derive everything else from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Search for posts carrying a tag.
    ListPosts {
        /// Tag to search for; lowercased when the URL is built
        tag: String,
    },

    /// Fetch a single article by author and slug.
    ///
    /// Response parsing for this variant is not implemented: [`Resource::parse`]
    /// always yields `None`, so callers must treat the outcome as "no data"
    /// rather than expect a post.
    FetchPost {
        /// Author username, without the leading `@`
        username: String,
        /// URL slug of the post
        slug: String,
    },
}

impl Resource {
    /// Descriptor for a tag-filtered post search.
    pub fn list_posts(tag: impl Into<String>) -> Self {
        Self::ListPosts { tag: tag.into() }
    }

    /// Descriptor for fetching a single article.
    pub fn fetch_post(username: impl Into<String>, slug: impl Into<String>) -> Self {
        Self::FetchPost {
            username: username.into(),
            slug: slug.into(),
        }
    }

    /// The fully-formed request URL for this resource.
    ///
    /// Pure, no I/O. Tag, username and slug are percent-encoded with the
    /// standard query/path-segment rules, and the tag is lowercased the way
    /// the search endpoint expects.
    pub fn url(&self) -> Url {
        let mut url = Url::parse(BASE_URL).expect("base URL is valid");

        match self {
            Resource::ListPosts { tag } => {
                url.set_path("search");
                url.query_pairs_mut()
                    .append_pair("q", &tag.to_lowercase())
                    .append_pair("format", "json");
            }
            Resource::FetchPost { username, slug } => {
                url.path_segments_mut()
                    .expect("base URL can be a base")
                    .pop_if_empty()
                    .push(&format!("@{username}"))
                    .push(slug);
                url.query_pairs_mut().append_pair("format", "json");
            }
        }

        url
    }

    /// The HTTP method for this resource.
    pub fn method(&self) -> Method {
        match self {
            Resource::ListPosts { .. } | Resource::FetchPost { .. } => Method::Get,
        }
    }

    /// The kind of model a successful parse of this resource produces.
    pub fn model_kind(&self) -> ModelKind {
        match self {
            Resource::ListPosts { .. } => ModelKind::Posts,
            Resource::FetchPost { .. } => ModelKind::Post,
        }
    }

    /// Parse a raw response body into this resource's model.
    ///
    /// Uses the production [`PayloadCollectionParser`] field mapping; see
    /// [`Resource::parse_with`] for the substitution seam. Failures degrade
    /// to `None` after the diagnostic is logged, mirroring the best-effort
    /// nature of the undocumented endpoints.
    pub fn parse(&self, body: &[u8]) -> Option<Model> {
        self.parse_with(body, &PayloadCollectionParser::new())
    }

    /// Parse a raw response body with a caller-supplied collection parser.
    pub fn parse_with(&self, body: &[u8], parser: &dyn CollectionParser) -> Option<Model> {
        match self {
            Resource::ListPosts { .. } => {
                let envelope = match decode_envelope(body) {
                    Ok(envelope) => envelope,
                    Err(err) => {
                        warn!("failed to decode response for {self}: {err}");
                        return None;
                    }
                };
                parser.parse(&envelope).map(Model::Posts)
            }
            // Single-post parsing is not implemented; the variant exists so
            // the request side of the contract is already in place.
            Resource::FetchPost { .. } => None,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::ListPosts { tag } => write!(f, "list_posts({tag})"),
            Resource::FetchPost { username, slug } => {
                write!(f, "fetch_post(@{username}/{slug})")
            }
        }
    }
}
