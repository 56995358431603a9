//! Board Canvas Component
//!
//! Scrollable surface holding every card. Lays cards out, pans on
//! background drag and persists card drops.

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, element_canvas_position, pan_scroll, Point};
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{CardView, ConnectorLayer};
use crate::context::use_board_context;
use crate::layout::compute_layout;
use crate::models::card_element_id;
use crate::store::{store_apply, use_board_store, BoardStateStoreFields};

/// Pointer and scroll offset when a background pan started
#[derive(Clone, Copy, Debug)]
struct PanStart {
    pointer: Point,
    scroll: Point,
}

/// Element ids that count as empty background
const BACKGROUND_IDS: [&str; 2] = ["canvas", "canvas-container"];

/// Whether a drop at `to` is worth saving over the laid-out position
fn moved(from: Option<Point>, to: Point) -> bool {
    match from {
        Some(from) => (from.x - to.x).abs() >= 0.5 || (from.y - to.y).abs() >= 0.5,
        None => true,
    }
}

fn is_background(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| BACKGROUND_IDS.contains(&el.id().as_str()))
        .unwrap_or(false)
}

#[component]
pub fn BoardCanvas() -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    let positions = Memo::new(move |_| {
        let mode = store.view_mode().get();
        store
            .cards()
            .with(|cards| ctx.heights.with(|heights| compute_layout(mode, cards, heights)))
    });

    let card_ids = move || {
        store
            .cards()
            .with(|cards| cards.iter().map(|c| c.id.clone()).collect::<Vec<_>>())
    };

    // Drop: read where the card actually ended up, then save it
    bind_global_mouseup(
        ctx.drag,
        move |_: &String, _| ctx.reposition_lines(),
        move |card_id: String, live: Point| {
            let measured = ctx.container.get_untracked().and_then(|container| {
                let el = container.owner_document()?.get_element_by_id(&card_element_id(&card_id))?;
                Some(element_canvas_position(&el, &container))
            });
            let position = measured.unwrap_or(live);
            let previous = positions.with_untracked(|p| p.get(&card_id).copied());
            ctx.reposition_lines();
            if !moved(previous, position) {
                return;
            }

            store_apply(&store, |state| state.set_position(&card_id, position.x, position.y));
            let config = ctx.config();
            spawn_local(async move {
                if let Err(e) = api::update_card_position(&config, &card_id, position.x, position.y).await {
                    log::warn!("[BOARD] Saving position of {} failed: {}", card_id, e);
                }
            });
        },
    );

    let pan = StoredValue::new(None::<PanStart>);
    let (panning, set_panning) = signal(false);

    let on_mousedown = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || !is_background(ev.target()) {
            return;
        }
        let Some(container) = ctx.container.get_untracked() else { return };
        ev.prevent_default();
        pan.set_value(Some(PanStart {
            pointer: Point::new(ev.client_x() as f64, ev.client_y() as f64),
            scroll: Point::new(container.scroll_left() as f64, container.scroll_top() as f64),
        }));
        set_panning.set(true);
    };

    let _pan_move = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let Some(start) = pan.get_value() else { return };
        let Some(container) = ctx.container.get_untracked() else { return };
        let scroll = pan_scroll(
            start.scroll,
            start.pointer,
            Point::new(ev.client_x() as f64, ev.client_y() as f64),
        );
        container.set_scroll_left(scroll.x as i32);
        container.set_scroll_top(scroll.y as i32);
    });

    let _pan_end = window_event_listener(ev::mouseup, move |_| {
        if pan.get_value().is_some() {
            pan.set_value(None);
            set_panning.set(false);
        }
    });

    view! {
        <div
            id="canvas-container"
            class=move || if panning.get() { "canvas-container panning" } else { "canvas-container" }
            node_ref=ctx.container
            on:mousedown=on_mousedown
            on:scroll=move |_| ctx.reposition_lines()
        >
            <div id="canvas" class="canvas">
                <Show
                    when=move || store.loaded().get()
                    fallback=|| view! { <div class="board-loading">"Loading board..."</div> }
                >
                    <For
                        each=card_ids
                        key=|id| id.clone()
                        children=move |id| view! { <CardView card_id=id positions=positions /> }
                    />
                </Show>
            </div>
            <ConnectorLayer positions=positions />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moved_ignores_subpixel_jitter() {
        let origin = Point::new(400.0, 40.0);
        assert!(!moved(Some(origin), Point::new(400.2, 40.3)));
        assert!(moved(Some(origin), Point::new(410.0, 40.0)));
        assert!(moved(None, origin));
    }
}
