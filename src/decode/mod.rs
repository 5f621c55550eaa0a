//! Response envelope decoding
//!
//! Medium ships its JSON wrapped behind an anti-scraping guard literal. This
//! module strips the guard and decodes the remainder into a generic envelope
//! object that the model parsers consume.

mod envelope;

pub use envelope::{decode_envelope, Envelope, GUARD_PREFIX};
