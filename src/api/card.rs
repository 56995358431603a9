//! Card Endpoints

use gloo_net::http::Method;
use serde::Serialize;

use super::{request, Ack, Body};
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::models::{BoardSnapshot, Card};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateCardArgs<'a> {
    title: &'a str,
    pos_x: f64,
    pos_y: f64,
}

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct PositionArgs {
    pos_x: f64,
    pos_y: f64,
}

// ========================
// Commands
// ========================

/// Cards, connections and view mode of the configured board
pub async fn fetch_board(config: &BoardConfig) -> Result<BoardSnapshot, ApiError> {
    let path = format!("/api/boards/{}/cards", config.board_id);
    request(config, Method::GET, &path, Body::Empty).await
}

pub async fn create_card(config: &BoardConfig, title: &str, pos_x: f64, pos_y: f64) -> Result<Card, ApiError> {
    let path = format!("/api/boards/{}/cards", config.board_id);
    let body = Body::json(&CreateCardArgs { title, pos_x, pos_y })?;
    request(config, Method::POST, &path, body).await
}

pub async fn update_card_title(config: &BoardConfig, card_id: &str, title: &str) -> Result<Ack, ApiError> {
    let body = Body::json(&TitleArgs { title })?;
    request(config, Method::PATCH, &format!("/api/cards/{}", card_id), body).await
}

pub async fn update_card_position(config: &BoardConfig, card_id: &str, pos_x: f64, pos_y: f64) -> Result<Ack, ApiError> {
    let body = Body::json(&PositionArgs { pos_x, pos_y })?;
    request(config, Method::PATCH, &format!("/api/cards/{}", card_id), body).await
}

pub async fn delete_card(config: &BoardConfig, card_id: &str) -> Result<Ack, ApiError> {
    request(config, Method::DELETE, &format!("/api/cards/{}", card_id), Body::Empty).await
}
