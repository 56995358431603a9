//! LeaderLine Backend
//!
//! [`ConnectorBackend`] over the page's LeaderLine library.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::connectors::{ConnectorBackend, PlannedLink};
use crate::models::card_element_id;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = LeaderLine)]
    pub type JsLeaderLine;

    #[wasm_bindgen(constructor, js_class = "LeaderLine", catch)]
    fn new(start: &web_sys::Element, end: &web_sys::Element, options: &JsValue) -> Result<JsLeaderLine, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn position(this: &JsLeaderLine) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn remove(this: &JsLeaderLine) -> Result<(), JsValue>;
}

/// Options object passed to the LeaderLine constructor
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LineOptions {
    color: &'static str,
    size: u32,
    path: &'static str,
    start_plug: &'static str,
    end_plug: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_socket: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_socket: Option<&'static str>,
    drop_shadow: bool,
    gradient: bool,
}

impl LineOptions {
    fn for_link(link: &PlannedLink) -> Self {
        // sequence links leave the bottom of a card and enter the top of the next
        let (start_socket, end_socket) = if link.is_sequence() {
            (Some("bottom"), Some("top"))
        } else {
            (None, None)
        };
        Self {
            color: "#000",
            size: 2,
            path: "fluid",
            start_plug: "disc",
            end_plug: "arrow1",
            start_socket,
            end_socket,
            drop_shadow: false,
            gradient: false,
        }
    }
}

#[derive(Default)]
pub struct LeaderLineBackend;

impl ConnectorBackend for LeaderLineBackend {
    type Handle = JsLeaderLine;

    fn attach(&mut self, link: &PlannedLink) -> Result<JsLeaderLine, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document")?;
        let from = document
            .get_element_by_id(&card_element_id(&link.from_card_id))
            .ok_or_else(|| format!("card {} not rendered", link.from_card_id))?;
        let to = document
            .get_element_by_id(&card_element_id(&link.to_card_id))
            .ok_or_else(|| format!("card {} not rendered", link.to_card_id))?;
        let options = serde_wasm_bindgen::to_value(&LineOptions::for_link(link)).map_err(|e| e.to_string())?;
        JsLeaderLine::new(&from, &to, &options).map_err(|e| format!("{:?}", e))
    }

    fn reposition(&self, handle: &JsLeaderLine) {
        if let Err(e) = handle.position() {
            log::debug!("[LINES] reposition failed: {:?}", e);
        }
    }

    fn release(&mut self, handle: JsLeaderLine) {
        if let Err(e) = handle.remove() {
            log::debug!("[LINES] remove failed: {:?}", e);
        }
    }
}
