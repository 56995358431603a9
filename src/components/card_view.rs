//! Card View Component
//!
//! One absolutely positioned card: title, email info, files, tags and a
//! drop zone. Handles drag start and connect-mode clicks.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::make_on_mousedown;

use crate::api;
use crate::components::{CardFiles, CardTags, CardTitle, FileDropZone};
use crate::context::use_board_context;
use crate::layout::CardPositions;
use crate::models::card_element_id;
use crate::store::{store_apply, use_board_store, BoardStateStoreFields};

#[component]
pub fn CardView(card_id: String, positions: Memo<CardPositions>) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();
    let card_ref = NodeRef::<html::Div>::new();

    let lookup_id = card_id.clone();
    let card = Memo::new(move |_| {
        store
            .cards()
            .with(|cards| cards.iter().find(|c| c.id == lookup_id).cloned())
    });
    let title = Signal::derive(move || card.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default()));
    let tags = Signal::derive(move || card.with(|c| c.as_ref().map(|c| c.tags.clone()).unwrap_or_default()));
    let files = Signal::derive(move || card.with(|c| c.as_ref().map(|c| c.files.clone()).unwrap_or_default()));

    // Live drag position wins over the laid-out one
    let pos_id = card_id.clone();
    let position = move || {
        ctx.drag
            .live_position_of(&pos_id)
            .or_else(|| positions.with(|p| p.get(&pos_id).copied()))
            .unwrap_or_default()
    };
    let left = {
        let position = position.clone();
        move || format!("{}px", position().x)
    };
    let top = move || format!("{}px", position().y);

    let class_id = card_id.clone();
    let class = move || {
        let mut class = String::from("card");
        if !store.view_mode().get().allows_drag() {
            class.push_str(" no-drag");
        }
        if ctx.drag.dragging_id_read.get().as_deref() == Some(class_id.as_str()) {
            class.push_str(" dragging");
        }
        if ctx.connect_mode.with(|m| m.is_source(&class_id)) {
            class.push_str(" connect-source");
        }
        class
    };

    let search_id = card_id.clone();
    let opacity = move || ctx.search.with(|s| s.card_opacity(&search_id)).to_string();
    let search_id = card_id.clone();
    let border = move || ctx.search.with(|s| s.card_border(&search_id)).unwrap_or("");

    // Dragging only in freeform and outside the connect gesture
    let origin_id = card_id.clone();
    let on_mousedown = make_on_mousedown(ctx.drag, card_id.clone(), move || {
        if !store.view_mode().get_untracked().allows_drag() || ctx.connect_mode.with_untracked(|m| m.is_active()) {
            return None;
        }
        positions.with_untracked(|p| p.get(&origin_id).copied())
    });

    let click_id = card_id.clone();
    let on_click = move |_: web_sys::MouseEvent| {
        if ctx.drag.suppress_click() {
            return;
        }
        let (next, pair) = ctx.connect_mode.get_untracked().on_card_click(&click_id);
        ctx.connect_mode.set(next);
        let Some((from, to)) = pair else { return };

        let config = ctx.config();
        spawn_local(async move {
            match api::create_connection(&config, &from, &to).await {
                Ok(connection) => {
                    if !store_apply(&store, |state| state.push_connection(connection)) {
                        log::debug!("[BOARD] Connection {} -> {} not added locally", from, to);
                    }
                }
                Err(e) => log::warn!("[BOARD] Connecting {} -> {} failed: {}", from, to, e),
            }
        });
    };

    let measure_id = card_id.clone();
    let measure = move || {
        if let Some(el) = card_ref.get_untracked() {
            ctx.record_height(&measure_id, el.offset_height() as f64);
            ctx.reposition_lines();
        }
    };
    let measure_on_change = measure.clone();
    Effect::new(move |_| {
        card.track();
        measure_on_change();
    });
    let on_resize = Callback::new(move |_: ()| measure());

    let menu_id = card_id.clone();
    let on_menu = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ev.prevent_default();
        ctx.open_menu(menu_id.clone(), ev.page_x(), ev.page_y());
    };

    let email = move || {
        card.with(|c| c.as_ref().and_then(|c| c.email.clone())).map(|email| {
            let link = email.link();
            let subject = email.subject.clone().unwrap_or_default();
            view! {
                <div class="card-email">
                    <div class="email-badge">"📧 Email"</div>
                    <div class="email-from">{format!("From: {}", email.from_addr)}</div>
                    <div class="email-subject">{subject}</div>
                    <div class="email-preview">{email.preview()}</div>
                    <a
                        class="email-link"
                        href=link
                        target="_blank"
                        on:mousedown=|ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        "Read full email →"
                    </a>
                </div>
            }
        })
    };

    view! {
        <div
            id=card_element_id(&card_id)
            data-card-id=card_id.clone()
            class=class
            node_ref=card_ref
            style:left=left
            style:top=top
            style:opacity=opacity
            style:border=border
            on:mousedown=on_mousedown
            on:click=on_click
        >
            <div class="card-header">
                <CardTitle card_id=card_id.clone() title=title />
                <button class="card-menu-btn" on:click=on_menu>"..."</button>
            </div>
            {email}
            <CardFiles files=files on_resize=on_resize />
            <CardTags card_id=card_id.clone() tags=tags />
            <FileDropZone card_id=card_id.clone() />
        </div>
    }
}
