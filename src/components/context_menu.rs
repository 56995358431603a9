//! Context Menu Component
//!
//! Per-card actions opened from the "..." button. Any click outside closes it.
//!
//! The window click listener closes the menu before the item handlers run,
//! so every action receives the card id captured when the menu rendered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::connect::ConnectMode;
use crate::context::{use_board_context, BoardContext};
use crate::store::{store_apply, use_board_store, BoardStore};

fn edit_title(ctx: BoardContext, card_id: String) {
    ctx.editing_title.set(Some(card_id));
}

fn upload_file(ctx: BoardContext, card_id: String) {
    ctx.upload_target.set(Some(card_id));
    if let Some(input) = ctx.file_input.get_untracked() {
        input.click();
    }
}

fn remove_connections(ctx: BoardContext, store: BoardStore, card_id: String) {
    let ids = store.with_untracked(|state| state.connection_ids_of(&card_id));
    if ids.is_empty() {
        return;
    }
    let config = ctx.config();
    spawn_local(async move {
        for id in ids {
            match api::delete_connection(&config, &id).await {
                Ok(_) => store_apply(&store, |state| state.remove_connection(&id)),
                Err(e) => log::warn!("[BOARD] Removing connection {} failed: {}", id, e),
            }
        }
    });
}

fn delete_card(ctx: BoardContext, store: BoardStore, card_id: String) {
    let config = ctx.config();
    spawn_local(async move {
        match api::delete_card(&config, &card_id).await {
            Ok(_) => {
                let dropped = store_apply(&store, |state| state.remove_card(&card_id));
                ctx.forget_height(&card_id);
                log::info!("[BOARD] Deleted card {} ({} connection(s))", card_id, dropped);
                if ctx.connect_mode.with_untracked(|m| m.is_source(&card_id)) {
                    ctx.connect_mode.set(ConnectMode::Idle);
                }
            }
            Err(e) => log::warn!("[BOARD] Deleting card {} failed: {}", card_id, e),
        }
    });
}

#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    view! {
        {move || ctx.context_menu.get().map(move |anchor| {
            let id = anchor.card_id;
            let (edit_id, upload_id, unlink_id, delete_id) = (id.clone(), id.clone(), id.clone(), id);
            view! {
                <div
                    id="card-context-menu"
                    class="context-menu"
                    style:left=format!("{}px", anchor.x)
                    style:top=format!("{}px", anchor.y)
                >
                    <button on:click=move |_| edit_title(ctx, edit_id.clone())>"Edit title"</button>
                    <button on:click=move |_| upload_file(ctx, upload_id.clone())>"Upload file"</button>
                    <button on:click=move |_| remove_connections(ctx, store, unlink_id.clone())>
                        "Remove connections"
                    </button>
                    <button class="danger" on:click=move |_| delete_card(ctx, store, delete_id.clone())>
                        "Delete card"
                    </button>
                </div>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::models::ViewMode;

    fn make_ctx() -> BoardContext {
        BoardContext::new(BoardConfig {
            board_id: "b1".into(),
            api_base: String::new(),
            view_mode: ViewMode::Freeform,
        })
    }

    /// Mirror the click order: the window listener closes the menu first
    fn open_then_close(ctx: BoardContext, card_id: &str) -> String {
        ctx.open_menu(card_id.to_string(), 10, 20);
        let anchor = ctx.context_menu.get_untracked().unwrap();
        ctx.close_menu();
        assert_eq!(ctx.context_menu.get_untracked(), None);
        anchor.card_id
    }

    #[test]
    fn test_edit_title_after_menu_closed() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_ctx();
        let card_id = open_then_close(ctx, "c1");
        edit_title(ctx, card_id);
        assert_eq!(ctx.editing_title.get_untracked(), Some("c1".to_string()));
    }

    #[test]
    fn test_upload_target_after_menu_closed() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_ctx();
        let card_id = open_then_close(ctx, "c2");
        upload_file(ctx, card_id);
        assert_eq!(ctx.upload_target.get_untracked(), Some("c2".to_string()));
    }
}
