//! Answer normalization for upstream replies.
//!
//! The upstream service is not held to a schema. Its body may be JSON carrying
//! the answer under one of several names, or plain text. The rules here decide
//! which value the proxy hands back to the browser, and their order is part of
//! the public contract:
//!
//! 1. a JSON body (by `Content-Type`) is parsed; a parse failure keeps the raw text
//! 2. an object yields its first truthy field out of [`ANSWER_FIELDS`]
//! 3. a string yields itself
//! 4. anything else yields the raw text

use log::debug;
use serde_json::Value;

use crate::value::truthy_field;

/// Candidate answer fields, highest precedence first.
pub const ANSWER_FIELDS: [&str; 4] = ["answer", "response", "result", "output"];

/// Parse the upstream body as JSON when the content type says so, otherwise
/// keep it as a string value.
pub fn parse_body(content_type: &str, raw: &str) -> Value {
    if !content_type.contains("application/json") {
        return Value::String(raw.to_string());
    }

    match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Upstream declared JSON but body did not parse ({}), using raw text", e);
            Value::String(raw.to_string())
        }
    }
}

/// Pick the answer value for an upstream reply.
pub fn resolve_answer(content_type: &str, raw: &str) -> Value {
    let data = parse_body(content_type, raw);

    if data.is_object() {
        if let Some(found) = ANSWER_FIELDS
            .iter()
            .find_map(|field| truthy_field(&data, field))
        {
            return found.clone();
        }
    }

    match data {
        Value::String(s) => Value::String(s),
        _ => Value::String(raw.to_string()),
    }
}
