//! Pending file list.

use leptos::*;

use crate::intake::PendingList;
use crate::state::UploaderState;
use crate::types::FileRow;
use crate::ids;

/// One `<li>` per staged file, keyed by name and size so the rows always
/// follow the pending list. There is no per-row removal.
#[component]
pub fn PendingFileList(state: UploaderState) -> impl IntoView {
    view! {
        <ul id=ids::FILE_LIST class="file-list">
            <For
                each=move || state.pending.with(PendingList::rows)
                key=|row: &FileRow| row.key.clone()
                children=move |row: FileRow| {
                    view! {
                        <li class="file-item">
                            <span class="file-name" title=row.title>{row.name}</span>
                            <span class="file-size">{row.size_label}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
