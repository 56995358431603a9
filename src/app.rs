//! Board Frontend App
//!
//! Reads the page configuration, provides the store and board context,
//! loads the snapshot and lays out toolbar, canvas and overlays.

use leptos::ev;
use leptos::html;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{upload_card_files, BoardCanvas, ContextMenu, ShareModal, Toolbar};
use crate::config::BoardConfig;
use crate::connect::ConnectMode;
use crate::context::BoardContext;
use crate::store::{store_load, BoardState};

#[component]
pub fn App() -> impl IntoView {
    match BoardConfig::from_window() {
        Ok(config) => view! { <Board config=config /> }.into_any(),
        Err(e) => {
            log::error!("[APP] Board configuration unavailable: {}", e);
            view! {
                <div class="board-error">
                    <h2>"Board unavailable"</h2>
                    <p>{e}</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Board(config: BoardConfig) -> impl IntoView {
    log::info!("[APP] Opening board {}", config.board_id);

    let store = Store::new(BoardState {
        view_mode: config.view_mode,
        ..Default::default()
    });
    let ctx = BoardContext::new(config);
    provide_context(store);
    provide_context(ctx);

    let show_share = RwSignal::new(false);

    // Load the board once on mount
    spawn_local(async move {
        let config = ctx.config();
        match api::fetch_board(&config).await {
            Ok(snapshot) => {
                log::info!(
                    "[APP] Loaded {} cards, {} connections ({})",
                    snapshot.cards.len(),
                    snapshot.connections.len(),
                    snapshot.view_mode.as_str()
                );
                store_load(&store, snapshot);
            }
            Err(e) => log::error!("[APP] Loading board {} failed: {}", config.board_id, e),
        }
    });

    // The "..." button prevents default so its own click does not close the menu again
    let _close_menu = window_event_listener(ev::click, move |ev: web_sys::MouseEvent| {
        if !ev.default_prevented() {
            ctx.close_menu();
        }
    });
    let _cancel_connect = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && ctx.connect_mode.with_untracked(|m| m.is_active()) {
            ctx.connect_mode.set(ConnectMode::Idle);
        }
    });

    let file_input: NodeRef<html::Input> = ctx.file_input;
    let on_files_chosen = move |_: web_sys::Event| {
        let Some(input) = file_input.get_untracked() else { return };
        let files = input.files().map(|list| api::files_from_list(&list)).unwrap_or_default();
        if let Some(card_id) = ctx.upload_target.get_untracked() {
            upload_card_files(ctx.config(), store, card_id, files);
        }
        ctx.upload_target.set(None);
        input.set_value("");
    };

    view! {
        <div class="board-app">
            <Toolbar show_share=show_share />
            <BoardCanvas />
            <ContextMenu />
            <ShareModal show=show_share />
            <input
                type="file"
                multiple=true
                style="display: none"
                node_ref=file_input
                on:change=on_files_chosen
            />
        </div>
    }
}
