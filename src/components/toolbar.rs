//! Toolbar Component
//!
//! Board-level actions: add card, view mode, connect, search, share, export.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::SearchBox;
use crate::config::{NEW_CARD_OFFSET, NEW_CARD_TITLE};
use crate::context::use_board_context;
use crate::models::ViewMode;
use crate::store::{store_apply, use_board_store, BoardStateStoreFields};

#[component]
pub fn Toolbar(show_share: RwSignal<bool>) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    // New cards land near the top-left of the visible area
    let on_add_card = move |_: web_sys::MouseEvent| {
        let (scroll_x, scroll_y) = ctx
            .container
            .get_untracked()
            .map(|c| (c.scroll_left() as f64, c.scroll_top() as f64))
            .unwrap_or_default();
        let (x, y) = (scroll_x + NEW_CARD_OFFSET.0, scroll_y + NEW_CARD_OFFSET.1);
        let config = ctx.config();
        spawn_local(async move {
            match api::create_card(&config, NEW_CARD_TITLE, x, y).await {
                Ok(card) => {
                    log::info!("[BOARD] Created card {}", card.id);
                    store_apply(&store, |state| state.push_card(card));
                }
                Err(e) => log::warn!("[BOARD] Creating card failed: {}", e),
            }
        });
    };

    let set_mode = move |mode: ViewMode| {
        if store.view_mode().get_untracked() == mode {
            return;
        }
        store_apply(&store, |state| state.view_mode = mode);
        let config = ctx.config();
        spawn_local(async move {
            if let Err(e) = api::set_view_mode(&config, mode).await {
                log::warn!("[BOARD] Saving view mode {} failed: {}", mode.as_str(), e);
            }
        });
    };

    let mode_class = move |mode: ViewMode| {
        move || if store.view_mode().get() == mode { "btn active" } else { "btn" }
    };

    let on_export = move |_: web_sys::MouseEvent| {
        let url = api::export_url(&ctx.config());
        if let Some(win) = web_sys::window() {
            let _ = win.open_with_url_and_target(&url, "_blank");
        }
    };

    view! {
        <div class="toolbar">
            <button class="btn" on:click=on_add_card>"+ Add Card"</button>
            <div class="btn-group">
                <button class=mode_class(ViewMode::Flowchart) on:click=move |_| set_mode(ViewMode::Flowchart)>
                    "Flowchart"
                </button>
                <button class=mode_class(ViewMode::Freeform) on:click=move |_| set_mode(ViewMode::Freeform)>
                    "Freeform"
                </button>
            </div>
            <button
                class=move || if ctx.connect_mode.with(|m| m.is_active()) { "btn active" } else { "btn" }
                on:click=move |_| ctx.connect_mode.update(|m| *m = m.toggle())
            >
                "Connect"
            </button>
            <span class="connect-hint">{move || ctx.connect_mode.with(|m| m.hint())}</span>
            <SearchBox />
            <button class="btn" on:click=move |_| show_share.set(true)>"Share"</button>
            <button class="btn" on:click=on_export>"Export"</button>
        </div>
    }
}
