//! Card Tags Component
//!
//! Tag chips with remove buttons and an Enter-to-add input.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_board_context;
use crate::models::Tag;
use crate::store::{store_apply, tag_name_to_submit, use_board_store};

#[component]
pub fn CardTags(card_id: String, #[prop(into)] tags: Signal<Vec<Tag>>) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();
    let (new_tag, set_new_tag) = signal(String::new());

    let submit_id = card_id.clone();
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let Some(name) = tag_name_to_submit(&new_tag.get_untracked()) else { return };
        ev.prevent_default();
        set_new_tag.set(String::new());

        let config = ctx.config();
        let card_id = submit_id.clone();
        spawn_local(async move {
            match api::add_tag(&config, &card_id, &name).await {
                Ok(tag) => {
                    store_apply(&store, |state| state.push_tag(&card_id, tag));
                }
                Err(e) => log::warn!("[BOARD] Adding tag '{}' to {} failed: {}", name, card_id, e),
            }
        });
    };

    view! {
        <div class="card-tags">
            <For
                each=move || tags.get()
                key=|tag| tag.id.clone()
                children=move |tag| {
                    let card_id = card_id.clone();
                    let tag_id = tag.id.clone();
                    let name = tag.name.clone();

                    let highlight_id = card_id.clone();
                    let background = move || {
                        ctx.search.with(|s| s.tag_background(&highlight_id, &name)).unwrap_or("")
                    };

                    let remove = move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        let config = ctx.config();
                        let card_id = card_id.clone();
                        let tag_id = tag_id.clone();
                        spawn_local(async move {
                            match api::remove_tag(&config, &card_id, &tag_id).await {
                                Ok(_) => store_apply(&store, |state| state.remove_tag(&card_id, &tag_id)),
                                Err(e) => log::warn!("[BOARD] Removing tag {} failed: {}", tag_id, e),
                            }
                        });
                    };

                    view! {
                        <span class="tag" style:background=background>
                            {tag.name}
                            <span class="tag-remove" on:click=remove>"x"</span>
                        </span>
                    }
                }
            />
            <input
                class="tag-input"
                placeholder="+ tag"
                prop:value=move || new_tag.get()
                on:input=move |ev| set_new_tag.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
        </div>
    }
}
