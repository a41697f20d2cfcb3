//! Upload trigger.
//!
//! Disabled with an in-progress label while a dispatch cycle runs, which
//! also keeps a second cycle from starting.

use leptos::*;
use web_sys::MouseEvent;

use crate::dispatch::run_dispatch_cycle;
use crate::services::{BrowserPage, FetchTransport};
use crate::state::UploaderState;
use crate::{ids, UPLOADING_LABEL, UPLOAD_LABEL};

#[component]
pub fn UploadButton(state: UploaderState) -> impl IntoView {
    let on_upload_click = move |_: MouseEvent| {
        if state.uploading.get_untracked() {
            log::debug!("Upload already in progress, ignoring click");
            return;
        }

        let files = state.pending.with_untracked(|pending| pending.entries().to_vec());
        let page = BrowserPage::new(state);

        wasm_bindgen_futures::spawn_local(async move {
            let transport = FetchTransport::default();
            run_dispatch_cycle(files, &transport, &page).await;
        });
    };

    view! {
        <button
            type="button"
            id=ids::UPLOAD_BUTTON
            class="upload-btn"
            disabled=move || state.uploading.get()
            on:click=on_upload_click
        >
            {move || if state.uploading.get() { UPLOADING_LABEL } else { UPLOAD_LABEL }}
        </button>
    }
}
