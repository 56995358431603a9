//! Board-level Endpoints
//!
//! View mode setting, search, sharing, email and export.

use gloo_net::http::Method;
use serde::{Deserialize, Serialize};

use super::{encode_component, request, Ack, Body};
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::models::ViewMode;

#[derive(Debug, Deserialize)]
struct SearchReply {
    #[serde(default)]
    card_ids: Vec<String>,
}

/// Share link issued by the server
#[derive(Debug, Clone, Deserialize)]
pub struct ShareLink {
    #[serde(default)]
    pub share_id: Option<String>,
    /// Origin-relative path of the public board view
    pub url: String,
}

#[derive(Serialize)]
struct SendArgs<'a> {
    to: &'a str,
}

/// Form body of the settings endpoint; an empty title keeps the current one
pub(crate) fn view_mode_form(mode: ViewMode) -> String {
    format!("title=&view_mode={}", encode_component(mode.as_str()))
}

pub(crate) fn search_path(board_id: &str, query: &str) -> String {
    format!("/api/boards/{}/search?q={}", board_id, encode_component(query))
}

pub async fn set_view_mode(config: &BoardConfig, mode: ViewMode) -> Result<Ack, ApiError> {
    let path = format!("/boards/{}/settings", config.board_id);
    request(config, Method::POST, &path, Body::Form(view_mode_form(mode))).await
}

/// Ids of the cards whose title or tags match `query`
pub async fn search_cards(config: &BoardConfig, query: &str) -> Result<Vec<String>, ApiError> {
    let reply: SearchReply = request(config, Method::GET, &search_path(&config.board_id, query), Body::Empty).await?;
    Ok(reply.card_ids)
}

pub async fn generate_share_link(config: &BoardConfig) -> Result<ShareLink, ApiError> {
    let path = format!("/boards/{}/share", config.board_id);
    request(config, Method::POST, &path, Body::Empty).await
}

pub async fn send_board_email(config: &BoardConfig, to: &str) -> Result<Ack, ApiError> {
    let path = format!("/boards/{}/send", config.board_id);
    request(config, Method::POST, &path, Body::json(&SendArgs { to })?).await
}

/// Export is a page of its own, opened rather than fetched
pub fn export_url(config: &BoardConfig) -> String {
    config.url(&format!("/boards/{}/export", config.board_id))
}
