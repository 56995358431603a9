//! File Drop Zone Component
//!
//! Per-card target for dropping files from the desktop.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::DragEvent;

use crate::api;
use crate::config::BoardConfig;
use crate::store::{store_apply, BoardStore};

/// Upload files into a card and append the returned descriptors
///
/// Shared by drag-and-drop and the menu-triggered file picker.
pub fn upload_card_files(config: BoardConfig, store: BoardStore, card_id: String, files: Vec<web_sys::File>) {
    if files.is_empty() {
        return;
    }
    spawn_local(async move {
        log::info!("[BOARD] Uploading {} file(s) to card {}", files.len(), card_id);
        match api::upload_files(&config, &card_id, &files).await {
            Ok(uploaded) if !uploaded.is_empty() => {
                store_apply(&store, |state| state.append_files(&card_id, uploaded));
            }
            Ok(_) => log::warn!("[BOARD] Upload to card {} returned no files", card_id),
            Err(e) => log::error!("[BOARD] Upload to card {} failed: {}", card_id, e),
        }
    });
}

/// Drop zone shown at the bottom of every card
#[component]
pub fn FileDropZone(
    /// Card receiving the files
    card_id: String,
) -> impl IntoView {
    let ctx = crate::context::use_board_context();
    let store = crate::store::use_board_store();
    let (is_over, set_is_over) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| api::files_from_list(&list))
            .unwrap_or_default();
        upload_card_files(ctx.config(), store, card_id.clone(), files);
    };

    view! {
        <div
            class=move || if is_over.get() { "card-drop-zone drag-over" } else { "card-drop-zone" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
        >
            "Drop files here"
        </div>
    }
}
