//! Connection Endpoints

use gloo_net::http::Method;
use serde::Serialize;

use super::{request, Ack, Body};
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::models::Connection;

#[derive(Serialize)]
struct CreateConnectionArgs<'a> {
    from_card_id: &'a str,
    to_card_id: &'a str,
}

pub async fn create_connection(config: &BoardConfig, from_card_id: &str, to_card_id: &str) -> Result<Connection, ApiError> {
    let path = format!("/api/boards/{}/connections", config.board_id);
    let body = Body::json(&CreateConnectionArgs { from_card_id, to_card_id })?;
    request(config, Method::POST, &path, body).await
}

pub async fn delete_connection(config: &BoardConfig, connection_id: &str) -> Result<Ack, ApiError> {
    request(config, Method::DELETE, &format!("/api/connections/{}", connection_id), Body::Empty).await
}
