//! Tag Endpoints

use gloo_net::http::Method;
use serde::Serialize;

use super::{request, Ack, Body};
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::models::Tag;

#[derive(Serialize)]
struct AddTagArgs<'a> {
    name: &'a str,
}

/// Attach a tag by name; the server reuses an existing tag of that name
pub async fn add_tag(config: &BoardConfig, card_id: &str, name: &str) -> Result<Tag, ApiError> {
    let body = Body::json(&AddTagArgs { name })?;
    request(config, Method::POST, &format!("/api/cards/{}/tags", card_id), body).await
}

pub async fn remove_tag(config: &BoardConfig, card_id: &str, tag_id: &str) -> Result<Ack, ApiError> {
    let path = format!("/api/cards/{}/tags/{}", card_id, tag_id);
    request(config, Method::DELETE, &path, Body::Empty).await
}
