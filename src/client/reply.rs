//! Turning a settled `/api/chat` call into the assistant's transcript line.

use serde_json::Value;
use thiserror::Error;

use crate::value::{display, truthy_field};

pub const CONTACT_ERROR_PREFIX: &str = "There was an error contacting the assistant.";

/// Status and body of a completed proxy call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The proxy call did not produce a usable reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),
    #[error("Error: Bad JSON from /api/chat (status {status})")]
    BadJson { status: u16 },
}

pub fn assistant_content(outcome: Result<HttpReply, ClientError>) -> String {
    match outcome.and_then(interpret) {
        Ok(content) => content,
        Err(err) => format!("{} {}", CONTACT_ERROR_PREFIX, err),
    }
}

fn interpret(reply: HttpReply) -> Result<String, ClientError> {
    let data: Value = serde_json::from_str(&reply.body)
        .map_err(|_| ClientError::BadJson { status: reply.status })?;

    if !reply.is_success() || truthy_field(&data, "error").is_some() {
        return Ok(error_message(&reply, &data));
    }

    Ok(match data.get("answer") {
        None | Some(Value::Null) => String::new(),
        Some(answer) => display(answer),
    })
}

// The status falls back to the HTTP status only when the call itself failed.
fn error_message(reply: &HttpReply, data: &Value) -> String {
    let mut message = format!(
        "Error: {}",
        truthy_field(data, "error")
            .map(display)
            .unwrap_or_else(|| "Request failed".to_string())
    );

    let status = truthy_field(data, "status")
        .map(display)
        .or_else(|| (!reply.is_success()).then(|| reply.status.to_string()));
    if let Some(status) = status {
        message.push_str(&format!(" ({})", status));
    }

    if let Some(detail) = truthy_field(data, "body").or_else(|| truthy_field(data, "details")) {
        message.push_str(" — ");
        message.push_str(&display(detail));
    }

    message
}
