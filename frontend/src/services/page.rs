//! Browser side of a dispatch cycle: alerts, the busy button and reloads.

use leptos::*;

use crate::dispatch::UploadPage;
use crate::intake::PendingList;
use crate::state::UploaderState;

/// [`UploadPage`] backed by the live window and the uploader signals.
pub struct BrowserPage {
    state: UploaderState,
}

impl BrowserPage {
    pub fn new(state: UploaderState) -> Self {
        Self { state }
    }
}

impl UploadPage for BrowserPage {
    fn notify(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }

    fn set_busy(&self, busy: bool) {
        self.state.uploading.set(busy);
    }

    fn clear_pending(&self) {
        self.state.pending.update(PendingList::clear);
    }

    fn reload(&self) {
        if let Err(e) = gloo_utils::window().location().reload() {
            log::error!("Failed to reload page: {:?}", e);
        }
    }
}
