//! Board API Client
//!
//! Frontend bindings to the board's HTTP endpoints, organized by domain.

mod board;
mod card;
mod connection;
mod file;
mod tag;

use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::error::ApiError;

// Re-export all public items
pub use board::*;
pub use card::*;
pub use connection::*;
pub use file::*;
pub use tag::*;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request body variants
pub(crate) enum Body {
    Empty,
    Json(serde_json::Value),
    /// Already url-encoded `key=value&...` text
    Form(String),
    /// Sent untouched so the browser writes the multipart boundary
    Multipart(web_sys::FormData),
}

impl Body {
    pub(crate) fn json<T: Serialize>(value: &T) -> Result<Self, ApiError> {
        serde_json::to_value(value)
            .map(Body::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }
}

/// Plain `{"ok": true}` acknowledgement
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub ok: bool,
}

/// Any endpoint may answer `{"error": "..."}` instead of its payload
#[derive(Deserialize)]
#[serde(untagged)]
enum Reply<T> {
    Failure { error: String },
    Success(T),
}

pub(crate) fn decode_reply<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<Reply<T>>(text) {
        Ok(Reply::Success(value)) => Ok(value),
        Ok(Reply::Failure { error }) => Err(ApiError::Rejected(error)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Issue a request and decode its JSON reply
pub(crate) async fn request<T: DeserializeOwned>(
    config: &BoardConfig,
    method: Method,
    path: &str,
    body: Body,
) -> Result<T, ApiError> {
    log::debug!("[API] {:?} {}", method, path);
    let builder = RequestBuilder::new(&config.url(path)).method(method);
    let request = match body {
        Body::Empty => builder.build()?,
        Body::Json(value) => builder.json(&value)?,
        Body::Form(text) => builder.header("Content-Type", FORM_CONTENT_TYPE).body(text)?,
        Body::Multipart(form) => builder.body(form)?,
    };
    let response = request.send().await?;
    let text = response.text().await?;
    decode_reply(&text)
}

/// Percent-encode a query or form value
pub(crate) fn encode_component(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    #[test]
    fn test_decode_success() {
        let tag: Tag = decode_reply(r#"{"id": "t9", "name": "urgent"}"#).unwrap();
        assert_eq!(tag.id, "t9");
    }

    #[test]
    fn test_decode_error_field() {
        let result: Result<Tag, _> = decode_reply(r#"{"error": "Tag name required"}"#);
        assert_eq!(result, Err(ApiError::Rejected("Tag name required".into())));
    }

    #[test]
    fn test_decode_garbage() {
        let result: Result<Ack, _> = decode_reply("<html>502</html>");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_ack_defaults_to_not_ok() {
        let ack: Ack = decode_reply("{}").unwrap();
        assert!(!ack.ok);
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
        assert_eq!(encode_component("urgent"), "urgent");
    }
}
