//! Envelope decoder implementation
//!
//! Medium prefixes its JSON bodies with the literal `])}while(1);</x>` so that
//! a response inlined into a script tag loops forever instead of leaking data
//! to a naive consumer. The decoder removes that guard and enforces the
//! envelope's top-level object shape.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Guard literal Medium prepends to every JSON body.
pub const GUARD_PREFIX: &str = "])}while(1);</x>";

/// A decoded response envelope: the top-level JSON object, keyed by strings
/// with arbitrary nested values.
pub type Envelope = JsonObject;

/// Decode raw response bytes into a JSON envelope.
///
/// The bytes are interpreted as UTF-8, the guard literal is stripped off the
/// front if present, and the remainder is parsed as JSON. The top-level value
/// must be an object; anything else is a decode failure. Every failure path
/// returns [`Error::Decode`] with a diagnostic message, never a panic.
///
/// The guard is stripped as a prefix only. Medium emits it exactly once at
/// the start of the body, and removing every occurrence would corrupt posts
/// whose content happens to contain the literal.
pub fn decode_envelope(body: &[u8]) -> Result<Envelope> {
    let text = std::str::from_utf8(body)
        .map_err(|e| Error::decode(format!("response is not valid UTF-8: {e}")))?;

    let cleaned = text.strip_prefix(GUARD_PREFIX).unwrap_or(text);

    let value: JsonValue = serde_json::from_str(cleaned)
        .map_err(|e| Error::decode(format!("response is not valid JSON: {e}")))?;

    match value {
        JsonValue::Object(envelope) => Ok(envelope),
        other => Err(Error::decode(format!(
            "expected a JSON object at the top level, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Human-readable name of a JSON value's type, for diagnostics.
fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
