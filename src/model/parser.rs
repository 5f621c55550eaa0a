//! Collection parsing
//!
//! Turns a decoded envelope into typed post models. The field mapping lives
//! behind the [`CollectionParser`] trait so callers can substitute their own
//! mapping if Medium moves fields around.

use super::{Post, PostList};
use crate::decode::Envelope;
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Trait for turning a decoded envelope into a post collection.
///
/// Implementations return `None` when the envelope's shape does not match
/// expectations; to callers this looks the same as a decode failure.
pub trait CollectionParser: Send + Sync {
    /// Extract an ordered post collection from the envelope, or `None` on a
    /// structural mismatch.
    fn parse(&self, envelope: &Envelope) -> Option<PostList>;
}

/// Parser for Medium's `payload` envelope shape.
///
/// Search listings put posts in an array at `payload.value`; some listing
/// endpoints key them by post id under `payload.references.Post` instead.
/// Entries missing their id or title are skipped, they do not fail the whole
/// collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadCollectionParser;

impl PayloadCollectionParser {
    /// Create a new payload parser
    pub fn new() -> Self {
        Self
    }

    /// Locate the post entries inside the envelope. The `payload.value` array
    /// wins; `payload.references.Post` values (in post-id order) are the
    /// fallback.
    fn entries<'a>(&self, envelope: &'a Envelope) -> Option<Vec<&'a JsonValue>> {
        let payload = envelope.get("payload")?.as_object()?;

        if let Some(values) = payload.get("value").and_then(JsonValue::as_array) {
            return Some(values.iter().collect());
        }

        let posts = payload
            .get("references")?
            .as_object()?
            .get("Post")?
            .as_object()?;
        Some(posts.values().collect())
    }
}

impl CollectionParser for PayloadCollectionParser {
    fn parse(&self, envelope: &Envelope) -> Option<PostList> {
        let entries = self.entries(envelope)?;

        let mut posts = Vec::with_capacity(entries.len());
        for entry in entries {
            match parse_post(entry) {
                Some(post) => posts.push(post),
                None => debug!("skipping post entry without id or title"),
            }
        }

        Some(PostList::new(posts))
    }
}

/// Map one payload entry onto a typed post. `id` and `title` are required,
/// every other field is best-effort.
fn parse_post(entry: &JsonValue) -> Option<Post> {
    let id = string_field(entry, "id")?;
    let title = string_field(entry, "title")?;

    let virtuals = entry.get("virtuals").and_then(JsonValue::as_object);

    Some(Post {
        id,
        title,
        slug: string_field(entry, "uniqueSlug").or_else(|| string_field(entry, "slug")),
        creator_id: string_field(entry, "creatorId"),
        subtitle: virtuals
            .and_then(|v| v.get("subtitle"))
            .or_else(|| entry.get("content").and_then(|c| c.get("subtitle")))
            .and_then(JsonValue::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from),
        reading_time: virtuals
            .and_then(|v| v.get("readingTime"))
            .and_then(JsonValue::as_f64),
        word_count: virtuals
            .and_then(|v| v.get("wordCount"))
            .and_then(JsonValue::as_u64),
        created_at: millis_field(entry, "createdAt"),
        first_published_at: millis_field(entry, "firstPublishedAt"),
    })
}

/// Read a non-empty string field off an entry.
fn string_field(entry: &JsonValue, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Read a millisecond-epoch field as a UTC timestamp. Medium uses `0` for
/// "unset", which maps to `None`.
fn millis_field(entry: &JsonValue, key: &str) -> Option<DateTime<Utc>> {
    let millis = entry.get(key)?.as_i64()?;
    if millis == 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}
