//! Connector Layer Component
//!
//! Keeps the drawn connector lines in step with the board. Lines are diffed
//! against the planned set, never torn down wholesale.

use leptos::ev;
use leptos::leptos_dom::helpers::{request_animation_frame, window_event_listener};
use leptos::prelude::*;

use crate::connectors::{plan_links, LinkRegistry, PlannedLink};
use crate::context::use_board_context;
use crate::layout::CardPositions;
use crate::leader_line::LeaderLineBackend;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn ConnectorLayer(positions: Memo<CardPositions>) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    let registry = StoredValue::new_local(LinkRegistry::new(LeaderLineBackend));
    let last_plan = StoredValue::new(Vec::<PlannedLink>::new());
    // Set when a line could not be attached; the next reposition retries
    let retry = StoredValue::new(false);

    Effect::new(move |_| {
        let mode = store.view_mode().get();
        let plan = store
            .cards()
            .with(|cards| store.connections().with(|conns| plan_links(mode, cards, conns)));
        last_plan.set_value(plan.clone());

        // Cards added in this tick must be in the DOM before lines attach
        request_animation_frame(move || {
            registry.update_value(|r| {
                let report = r.sync(&plan);
                log::debug!("[LINES] sync {:?}", report);
                retry.set_value(report.failed > 0);
                r.reposition_all();
            });
        });
    });

    Effect::new(move |_| {
        positions.track();
        ctx.lines_tick.track();
        ctx.drag.live_position_read.track();

        request_animation_frame(move || {
            registry.update_value(|r| {
                if retry.get_value() {
                    let report = last_plan.with_value(|plan| r.sync(plan));
                    retry.set_value(report.failed > 0);
                }
                r.reposition_all();
            });
        });
    });

    let _resize = window_event_listener(ev::resize, move |_| ctx.reposition_lines());

    on_cleanup(move || {
        registry.update_value(|r| r.clear());
    });
}
