//! Search Box Component
//!
//! Debounced server-side card search. Results only change highlighting.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::{initial_search_query, SEARCH_DEBOUNCE_MS};
use crate::context::{use_board_context, BoardContext};
use crate::search::SearchHighlight;

/// Clear highlighting and claim a generation; `None` when there is nothing to query
fn begin_search(ctx: BoardContext, query: &str) -> Option<u64> {
    let generation = ctx.next_search_generation();
    ctx.search.set(SearchHighlight::Inactive);
    (!query.is_empty()).then_some(generation)
}

/// Run one search; a reply arriving after a newer search started is dropped
fn run_search(ctx: BoardContext, query: String) {
    let Some(generation) = begin_search(ctx, &query) else { return };

    let config = ctx.config();
    spawn_local(async move {
        let result = api::search_cards(&config, &query).await;
        if !ctx.is_current_search(generation) {
            log::debug!("[SEARCH] Dropping stale reply for '{}'", query);
            return;
        }
        match result {
            Ok(card_ids) => {
                log::debug!("[SEARCH] '{}' matched {} card(s)", query, card_ids.len());
                ctx.search.set(SearchHighlight::active(&query, card_ids));
            }
            Err(e) => log::warn!("[SEARCH] '{}' failed: {}", query, e),
        }
    });
}

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_board_context();
    let initial = initial_search_query();
    let (query, set_query) = signal(initial.clone().unwrap_or_default());
    let pending = StoredValue::new_local(None::<Timeout>);

    // A `?tag=` parameter searches right away
    if let Some(initial) = initial {
        run_search(ctx, initial.trim().to_string());
    }

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || run_search(ctx, value.trim().to_string()));
        // Replacing the handle cancels the previous timer
        pending.set_value(Some(timeout));
    };

    view! {
        <input
            id="search-input"
            class="search-input"
            type="search"
            placeholder="Search cards and tags..."
            prop:value=move || query.get()
            on:input=on_input
        />
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

    #[test]
    fn test_new_query_clears_previous_highlight() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_ctx();
        ctx.search.set(SearchHighlight::active("old", vec!["a".into()]));

        let generation = begin_search(ctx, "new");
        assert_eq!(ctx.search.get_untracked(), SearchHighlight::Inactive);
        assert!(generation.is_some_and(|g| ctx.is_current_search(g)));
    }

    #[test]
    fn test_empty_query_clears_and_invalidates_pending() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_ctx();
        let pending = begin_search(ctx, "report").unwrap();
        ctx.search.set(SearchHighlight::active("report", vec!["a".into()]));

        assert_eq!(begin_search(ctx, ""), None);
        assert_eq!(ctx.search.get_untracked(), SearchHighlight::Inactive);
        assert!(!ctx.is_current_search(pending));
    }
}
