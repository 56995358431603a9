//! Card Files Component
//!
//! Thumbnails for images, extension badges for everything else.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_board_context;
use crate::models::CardFile;
use crate::store::{store_apply, use_board_store};

fn open_in_new_tab(url: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.open_with_url_and_target(url, "_blank");
    }
}

#[component]
pub fn CardFiles(
    #[prop(into)] files: Signal<Vec<CardFile>>,
    /// Called when an image finishes loading and the card grows
    on_resize: Callback<()>,
) -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    view! {
        <Show when=move || !files.get().is_empty()>
            <div class="card-files">
                <For
                    each=move || files.get()
                    key=|file| file.id.clone()
                    children=move |file| {
                        let url = file.url.clone();
                        let file_id = file.id.clone();

                        let remove = move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            let config = ctx.config();
                            let file_id = file_id.clone();
                            spawn_local(async move {
                                match api::delete_file(&config, &file_id).await {
                                    Ok(_) => store_apply(&store, |state| state.remove_file(&file_id)),
                                    Err(e) => log::warn!("[BOARD] Removing file {} failed: {}", file_id, e),
                                }
                            });
                        };

                        let preview = if file.is_image {
                            view! {
                                <img
                                    src=file.thumb_url.clone()
                                    alt=file.original_name.clone()
                                    title=file.original_name.clone()
                                    on:click=move |_| open_in_new_tab(&url)
                                    on:load=move |_| on_resize.run(())
                                />
                            }.into_any()
                        } else {
                            view! {
                                <div
                                    class="file-icon"
                                    title=file.original_name.clone()
                                    on:click=move |_| open_in_new_tab(&url)
                                >
                                    {file.badge()}
                                </div>
                            }.into_any()
                        };

                        view! {
                            <div class="card-file">
                                {preview}
                                <button class="file-remove" on:click=remove>"×"</button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
