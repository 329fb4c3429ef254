//! JSON decoder.
//!
//! Accepts the nested shape `{ "movie": { "title", "director", "producer",
//! "musicComposer" } }`. Without a `movie` object, a top-level string `text`
//! member falls back to plain-text field extraction. Only a syntactic parse
//! failure is a fault; missing or non-string members individually default
//! downstream.

use crate::{DecodeError, DecodedPayload};
use cine_fields::PartialRecord;
use serde_json::Value;

pub fn decode(bytes: &[u8]) -> Result<DecodedPayload, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;

    if let Some(movie) = value.get("movie").filter(|m| m.is_object()) {
        return Ok(DecodedPayload::Record(PartialRecord {
            title: string_member(movie, "title"),
            director: string_member(movie, "director"),
            producer: string_member(movie, "producer"),
            music_composer: string_member(movie, "musicComposer"),
        }));
    }

    if let Some(text) = value.get("text").and_then(Value::as_str) {
        return Ok(DecodedPayload::Text(text.to_string()));
    }

    // Parsed fine but carries neither shape; every field defaults downstream.
    Ok(DecodedPayload::Record(PartialRecord::default()))
}

fn string_member(movie: &Value, key: &str) -> Option<String> {
    movie
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
