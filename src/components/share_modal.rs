//! Share Modal Component
//!
//! Public link generation, copy-to-clipboard and send-by-email.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

use crate::api;
use crate::context::use_board_context;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[component]
pub fn ShareModal(show: RwSignal<bool>) -> impl IntoView {
    let ctx = use_board_context();
    let (link, set_link) = signal(None::<String>);
    let (recipient, set_recipient) = signal(String::new());

    let on_generate = move |_: web_sys::MouseEvent| {
        let config = ctx.config();
        spawn_local(async move {
            match api::generate_share_link(&config).await {
                Ok(share) => {
                    log::info!("[SHARE] Link {} issued: {}", share.share_id.as_deref().unwrap_or("-"), share.url);
                    set_link.set(Some(format!("{}{}", page_origin(), share.url)));
                }
                Err(e) => log::warn!("[SHARE] Generating link failed: {}", e),
            }
        });
    };

    let on_copy = move |_: web_sys::MouseEvent| {
        let Some(url) = link.get_untracked() else { return };
        spawn_local(async move {
            if let Err(e) = clipboard_write_text(&url).await {
                log::warn!("[SHARE] Clipboard write failed: {:?}", e);
            }
        });
    };

    let on_send = move |_: web_sys::MouseEvent| {
        let to = recipient.get_untracked().trim().to_string();
        if to.is_empty() {
            alert("Enter a recipient email.");
            return;
        }
        let config = ctx.config();
        spawn_local(async move {
            match api::send_board_email(&config, &to).await {
                Ok(ack) if ack.ok => alert("Email sent!"),
                Ok(_) => alert("Error: Unknown"),
                Err(e) => alert(&format!("Error: {}", e)),
            }
        });
    };

    view! {
        <Show when=move || show.get()>
            <div id="share-modal" class="modal-overlay">
                <div class="modal">
                    <h3>"Share board"</h3>
                    <button class="btn" on:click=on_generate>"Generate public link"</button>
                    <Show when=move || link.get().is_some()>
                        <div class="share-link-section">
                            <input
                                class="share-link-input"
                                readonly=true
                                prop:value=move || link.get().unwrap_or_default()
                            />
                            <button class="btn" on:click=on_copy>"Copy"</button>
                        </div>
                    </Show>
                    <div class="share-email-section">
                        <input
                            type="email"
                            placeholder="recipient@example.com"
                            prop:value=move || recipient.get()
                            on:input=move |ev| set_recipient.set(event_target_value(&ev))
                        />
                        <button class="btn" on:click=on_send>"Send by email"</button>
                    </div>
                    <button class="btn btn-secondary" on:click=move |_| show.set(false)>"Close"</button>
                </div>
            </div>
        </Show>
    }
}
