//! Owned reactive state of the uploader.
//!
//! Created once when the page mounts and handed to every component as a
//! prop. All fields are signals, so the bundle is `Copy` and can be moved
//! into event handlers freely.

use leptos::*;
use web_sys::{File, FileList};

use crate::intake::{stage_drop, stage_selection, PendingList};
use crate::types::IntakeReport;

#[derive(Clone, Copy)]
pub struct UploaderState {
    /// Files staged for the next dispatch cycle.
    pub pending: RwSignal<PendingList<File>>,
    /// A drag is hovering the drop zone.
    pub drag_active: RwSignal<bool>,
    /// A dispatch cycle is running.
    pub uploading: RwSignal<bool>,
}

impl UploaderState {
    pub fn new() -> Self {
        Self {
            pending: create_rw_signal(PendingList::new()),
            drag_active: create_rw_signal(false),
            uploading: create_rw_signal(false),
        }
    }

    /// Stages files picked in the chooser; `reset` clears the picker.
    pub fn stage_selection(&self, selected: Vec<File>, reset: impl FnOnce()) {
        let mut report = IntakeReport::default();
        self.pending
            .update(|pending| report = stage_selection(pending, selected, reset));
        self.log_intake(&report);
    }

    /// Stages dropped files; `mirror` copies them into the picker first.
    pub fn stage_drop(&self, dropped: Vec<File>, mirror: impl FnOnce()) {
        if dropped.is_empty() {
            return;
        }
        let mut report = None;
        self.pending
            .update(|pending| report = stage_drop(pending, dropped, mirror));
        if let Some(report) = report {
            self.log_intake(&report);
        }
    }

    fn log_intake(&self, report: &IntakeReport) {
        log::info!(
            "Files ready for upload: {} ({} added, {} skipped)",
            self.pending.with_untracked(PendingList::len),
            report.accepted,
            report.rejected.len()
        );
    }
}

impl Default for UploaderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies a DOM `FileList` into owned handles.
pub fn file_list_to_vec(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
