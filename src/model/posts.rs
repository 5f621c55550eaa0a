//! Post model types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Post
// ============================================================================

/// A single Medium post as surfaced by the listing endpoints.
///
/// Only `id` and `title` are guaranteed; everything else is best-effort,
/// Medium's payloads omit or zero fields freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Medium's opaque post id
    pub id: String,

    /// Post title
    pub title: String,

    /// URL slug (`uniqueSlug` in the payload)
    pub slug: Option<String>,

    /// Id of the authoring user
    pub creator_id: Option<String>,

    /// Subtitle, when the post has one
    pub subtitle: Option<String>,

    /// Estimated reading time in minutes
    pub reading_time: Option<f64>,

    /// Word count of the latest version
    pub word_count: Option<u64>,

    /// When the post was created
    pub created_at: Option<DateTime<Utc>>,

    /// When the post was first published
    pub first_published_at: Option<DateTime<Utc>>,
}

// ============================================================================
// PostList
// ============================================================================

/// An ordered collection of posts extracted from one listing response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostList {
    /// Posts in the order the payload listed them
    pub posts: Vec<Post>,
}

impl PostList {
    /// Create a post list from already-parsed posts
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Number of posts in the collection
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the collection holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Iterate over the posts in order
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }
}

impl IntoIterator for PostList {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

impl<'a> IntoIterator for &'a PostList {
    type Item = &'a Post;
    type IntoIter = std::slice::Iter<'a, Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.iter()
    }
}

// ============================================================================
// Model
// ============================================================================

/// The kind of model a resource's parser is declared to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// A single post
    Post,
    /// A collection of posts
    Posts,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelKind::Post => write!(f, "post"),
            ModelKind::Posts => write!(f, "post collection"),
        }
    }
}

/// A successfully parsed response model.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    /// A collection of posts, produced by tag search
    Posts(PostList),
    /// A single post; no parser produces this under current scope
    Post(Box<Post>),
}

impl Model {
    /// The kind of this model
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Posts(_) => ModelKind::Posts,
            Model::Post(_) => ModelKind::Post,
        }
    }

    /// Unwrap the post collection, if that is what this model holds
    pub fn into_posts(self) -> Option<PostList> {
        match self {
            Model::Posts(posts) => Some(posts),
            Model::Post(_) => None,
        }
    }

    /// Unwrap the single post, if that is what this model holds
    pub fn into_post(self) -> Option<Post> {
        match self {
            Model::Post(post) => Some(*post),
            Model::Posts(_) => None,
        }
    }
}
