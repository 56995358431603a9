//! Card Title Component
//!
//! Title text that becomes editable from the context menu.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_board_context;
use crate::store::{store_apply, title_commit, use_board_store, TitleCommit};

/// Select the whole text of `el`
fn select_contents(el: &web_sys::HtmlElement) -> Option<()> {
    let document = el.owner_document()?;
    let range = document.create_range().ok()?;
    range.select_node_contents(el).ok()?;
    let selection = web_sys::window()?.get_selection().ok()??;
    selection.remove_all_ranges().ok()?;
    selection.add_range(&range).ok()
}

#[component]
pub fn CardTitle(card_id: String, #[prop(into)] title: Signal<String>) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();
    let title_ref = NodeRef::<html::Span>::new();

    let id = card_id.clone();
    let is_editing = move || ctx.editing_title.get().as_deref() == Some(id.as_str());

    // Focus and select everything when editing starts
    let editing = is_editing.clone();
    Effect::new(move |_| {
        if editing() {
            if let Some(el) = title_ref.get() {
                let _ = el.focus();
                select_contents(&el);
            }
        }
    });

    let commit = move || {
        let Some(el) = title_ref.get_untracked() else { return };
        ctx.editing_title.set(None);

        let edited = el.text_content().unwrap_or_default();
        let text = match title_commit(&title.get_untracked(), &edited) {
            TitleCommit::Save(text) => text,
            TitleCommit::Restore | TitleCommit::Unchanged => {
                el.set_text_content(Some(&title.get_untracked()));
                return;
            }
        };
        store_apply(&store, |state| state.set_title(&card_id, &text));
        let config = ctx.config();
        let card_id = card_id.clone();
        spawn_local(async move {
            if let Err(e) = api::update_card_title(&config, &card_id, &text).await {
                log::warn!("[BOARD] Title update for {} failed: {}", card_id, e);
            }
        });
    };

    view! {
        <span
            class="card-title"
            node_ref=title_ref
            contenteditable=move || if is_editing() { "true" } else { "false" }
            prop:textContent=move || title.get()
            on:blur=move |_| commit()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    if let Some(el) = title_ref.get_untracked() {
                        let _ = el.blur();
                    }
                }
            }
        />
    }
}
