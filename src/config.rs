//! Board Configuration
//!
//! Page-provided settings plus layout and timing constants.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::models::ViewMode;

/// Top margin of the first stacked card
pub const LAYOUT_MARGIN: f64 = 40.0;
/// Vertical gap between stacked cards
pub const LAYOUT_GAP: f64 = 40.0;
/// Horizontal position of stacked cards
pub const STACK_X: f64 = 400.0;
/// Height assumed for a card that has not been measured yet
pub const DEFAULT_CARD_HEIGHT: f64 = 120.0;
/// Search input debounce
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
/// New cards land this far from the visible top-left corner
pub const NEW_CARD_OFFSET: (f64, f64) = (200.0, 100.0);
/// Title given to cards created from the toolbar
pub const NEW_CARD_TITLE: &str = "New Card";

/// Settings injected by the hosting page as `window.BOARD_CONFIG`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
    pub board_id: String,
    /// Prefix for every request path (empty = same origin)
    #[serde(default)]
    pub api_base: String,
    /// Mode to render with until the board snapshot arrives
    #[serde(default)]
    pub view_mode: ViewMode,
}

impl BoardConfig {
    /// Read `window.BOARD_CONFIG`
    pub fn from_window() -> Result<Self, String> {
        let window = web_sys::window().ok_or("No window")?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str("BOARD_CONFIG"))
            .map_err(|e| format!("{:?}", e))?;
        if value.is_undefined() || value.is_null() {
            return Err("window.BOARD_CONFIG is not set".to_string());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Absolute-or-relative URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}

/// Initial search query from the page's `?tag=` parameter
pub fn initial_search_query() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("tag").filter(|tag| !tag.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: BoardConfig = serde_json::from_str(r#"{"board_id": "b1"}"#).unwrap();
        assert_eq!(config.api_base, "");
        assert_eq!(config.view_mode, ViewMode::Freeform);
        assert_eq!(config.url("/api/boards/b1/cards"), "/api/boards/b1/cards");
    }

    #[test]
    fn test_url_joins_base_without_double_slash() {
        let config = BoardConfig {
            board_id: "b1".into(),
            api_base: "https://boards.example.com/".into(),
            view_mode: ViewMode::Flowchart,
        };
        assert_eq!(config.url("/api/cards/c1"), "https://boards.example.com/api/cards/c1");
    }
}
