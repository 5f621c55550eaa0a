//! Medium fetch service
//!
//! The caller-facing facade. A `MediumService` owns a shared transport and
//! turns resource descriptors into typed models, either through the generic
//! `send_request` entry point or the typed conveniences built on top of it.

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::model::{Model, ModelKind, Post, PostList};
use crate::resource::Resource;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// MediumService
// ============================================================================

/// High-level client for Medium's JSON endpoints.
///
/// The transport is injected at construction; there is no implicit default,
/// so tests and alternative backends plug in the same way production code
/// does. Cloning is cheap and clones share the transport.
///
/// ```no_run
/// use medium_client::{HttpTransport, MediumService};
/// use std::sync::Arc;
///
/// # async fn run() -> medium_client::Result<()> {
/// let service = MediumService::new(Arc::new(HttpTransport::new()));
/// let posts = service.list_posts("rust").await?;
/// for post in &posts {
///     println!("{}", post.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MediumService {
    /// Transport used for every request
    transport: Arc<dyn Transport>,
}

impl MediumService {
    /// Create a service around the given transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send a request for the given resource and return its model.
    ///
    /// Each call resolves exactly once; concurrent calls are independent and
    /// may complete in any order.
    pub async fn send_request(&self, resource: Resource) -> Result<Model> {
        debug!("Sending request: {resource}");
        self.transport.load(&resource).await
    }

    /// List posts tagged with `tag`.
    ///
    /// The tag is lowercased before it is sent, matching how Medium indexes
    /// tags. An envelope the parser does not recognize surfaces as
    /// [`Error::EmptyModel`].
    pub async fn list_posts(&self, tag: impl Into<String>) -> Result<PostList> {
        let resource = Resource::list_posts(tag);
        let description = resource.to_string();
        match self.send_request(resource).await? {
            Model::Posts(posts) => Ok(posts),
            other => Err(Error::model_mismatch(
                description,
                ModelKind::Posts,
                other.kind(),
            )),
        }
    }

    /// Fetch a single post by author username and slug.
    ///
    /// Single-post parsing is not implemented, so with the bundled transport
    /// this currently always yields [`Error::EmptyModel`]; treat that as
    /// "no data", not a fault. A custom transport that produces
    /// [`Model::Post`] flows through unchanged.
    pub async fn fetch_post(
        &self,
        username: impl Into<String>,
        slug: impl Into<String>,
    ) -> Result<Post> {
        let resource = Resource::fetch_post(username, slug);
        let description = resource.to_string();
        match self.send_request(resource).await? {
            Model::Post(post) => Ok(*post),
            other => Err(Error::model_mismatch(
                description,
                ModelKind::Post,
                other.kind(),
            )),
        }
    }
}

impl std::fmt::Debug for MediumService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediumService").finish_non_exhaustive()
    }
}
