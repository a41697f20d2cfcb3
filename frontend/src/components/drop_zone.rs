//! Drop zone and hidden file picker.
//!
//! Picker selection and drops both end up in the intake filter through
//! [`UploaderState`].

use leptos::*;
use wasm_bindgen::JsValue;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement, MouseEvent};

use crate::state::{file_list_to_vec, UploaderState};
use crate::{ids, PICKER_ACCEPT};

/// Best-effort copy of dropped files into the picker's own `files`.
///
/// Some browsers refuse the assignment; that only costs consistency with the
/// input element, so it is logged and otherwise ignored.
fn mirror_into_picker(input: &HtmlInputElement, files: &FileList) {
    match js_sys::Reflect::set(input, &JsValue::from_str("files"), files) {
        Ok(true) => {}
        Ok(false) => log::warn!("Could not assign dropped files to the file input"),
        Err(e) => log::warn!("Could not assign dropped files to the file input: {:?}", e),
    }
}

#[component]
pub fn DropZone(state: UploaderState) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let open_picker = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_zone_click = move |_: MouseEvent| open_picker();

    // the zone would open the picker a second time
    let on_browse_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        open_picker();
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selected = input
            .files()
            .map(|files| file_list_to_vec(&files))
            .unwrap_or_default();
        // allows picking the same file again
        state.stage_selection(selected, || input.set_value(""));
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        state.drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        state.drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.drag_active.set(false);

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        let picker = input_ref.get_untracked();
        state.stage_drop(file_list_to_vec(&files), || {
            if let Some(input) = &picker {
                mirror_into_picker(input, &files);
            }
        });
    };

    view! {
        <div
            id=ids::DROP_ZONE
            class="drop-zone"
            class:dragover=move || state.drag_active.get()
            on:click=on_zone_click
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="drop-icon">"🖼️"</div>
            <div class="drop-text">"Drag & drop images here"</div>
            <div class="drop-hint">"or"</div>
            <button
                type="button"
                id=ids::BROWSE_BUTTON
                class="browse-btn"
                on:click=on_browse_click
            >
                "Browse Files"
            </button>
        </div>

        <input
            type="file"
            id=ids::FILE_INPUT
            accept=PICKER_ACCEPT
            multiple=true
            style="display:none"
            node_ref=input_ref
            on:change=on_file_change
        />
    }
}
