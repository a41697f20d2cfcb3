//! Dispatch cycle: upload every staged file, wait for all, then reset.
//!
//! The cycle is written against two seams so it can run outside a browser:
//!
//! - [`UploadTransport`] sends one file and reports what the server answered.
//! - [`UploadPage`] owns the visible side effects (notification, busy
//!   button, clearing the list, reloading).
//!
//! Requests are started in pending-list order and polled together; one
//! failure never cancels or short-circuits its siblings.

use futures::future::join_all;

use crate::types::{AppResult, DispatchSummary, PendingFile, UploadOutcome, UploadReply};
use crate::{ACCEPTED_REDIRECT_STATUS, EMPTY_DISPATCH_MESSAGE};

/// Sends one pending file to the upload endpoint.
#[allow(async_fn_in_trait)]
pub trait UploadTransport<H> {
    async fn send(&self, file: &PendingFile<H>) -> AppResult<UploadReply>;
}

/// Page-level effects of a dispatch cycle.
pub trait UploadPage {
    /// Blocking user notification.
    fn notify(&self, message: &str);
    /// Toggles the upload trigger between idle and uploading.
    fn set_busy(&self, busy: bool);
    /// Empties both the pending list and the visible list.
    fn clear_pending(&self);
    /// Reloads the page so server-side state becomes visible.
    fn reload(&self);
}

/// Whether a reply counts as an acknowledged upload.
pub fn is_accepted_status(status: u16) -> bool {
    (200..300).contains(&status) || status == ACCEPTED_REDIRECT_STATUS
}

/// Turns a server reply into an outcome for `name`.
pub fn classify_reply(name: &str, reply: &UploadReply) -> UploadOutcome {
    if is_accepted_status(reply.status) {
        return UploadOutcome::Uploaded { name: name.to_string() };
    }

    let detail = if reply.body.trim().is_empty() {
        reply.status_text.as_str()
    } else {
        reply.body.as_str()
    };
    UploadOutcome::Failed {
        name: name.to_string(),
        reason: format!("Upload failed for {}: {}", name, detail),
    }
}

async fn upload_one<H, T>(transport: &T, file: &PendingFile<H>) -> UploadOutcome
where
    T: UploadTransport<H>,
{
    match transport.send(file).await {
        Ok(reply) => classify_reply(&file.name, &reply),
        Err(e) => UploadOutcome::Failed {
            name: file.name.clone(),
            reason: format!("Upload failed for {}: {}", file.name, e),
        },
    }
}

/// Uploads every file concurrently and waits until all of them settle.
///
/// Outcomes are returned in the order of `files`, whatever the completion
/// order was.
pub async fn upload_all<H, T>(transport: &T, files: &[PendingFile<H>]) -> Vec<UploadOutcome>
where
    T: UploadTransport<H>,
{
    join_all(files.iter().map(|file| upload_one(transport, file))).await
}

/// Runs one full dispatch cycle over `files`.
///
/// Returns `None` when there was nothing to upload; in that case the only
/// effect is a single notification.
pub async fn run_dispatch_cycle<H, T, P>(
    files: Vec<PendingFile<H>>,
    transport: &T,
    page: &P,
) -> Option<DispatchSummary>
where
    T: UploadTransport<H>,
    P: UploadPage,
{
    if files.is_empty() {
        page.notify(EMPTY_DISPATCH_MESSAGE);
        return None;
    }

    page.set_busy(true);
    log::info!("📤 Uploading {} file(s)...", files.len());

    let outcomes = upload_all(transport, &files).await;
    let summary = DispatchSummary::from_outcomes(&outcomes);

    page.set_busy(false);
    page.clear_pending();

    if summary.failed == 0 {
        log::info!("✅ {}/{} file(s) uploaded", summary.succeeded, summary.total());
    } else {
        log::warn!(
            "Upload finished: {}/{} succeeded, {} failed",
            summary.succeeded,
            summary.total(),
            summary.failed
        );
        for reason in &summary.failures {
            log::warn!("{}", reason);
        }
    }

    page.reload();
    Some(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::tests::FakeFile;
    use crate::intake::PendingList;
    use crate::types::AppError;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Answers from a fixed table keyed by file name and counts requests.
    struct ScriptedTransport {
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedTransport {
        fn new() -> Self {
            Self { calls: RefCell::new(Vec::new()) }
        }
    }

    impl UploadTransport<FakeFile> for ScriptedTransport {
        async fn send(&self, file: &PendingFile<FakeFile>) -> AppResult<UploadReply> {
            self.calls.borrow_mut().push(file.name.clone());
            match file.name.as_str() {
                "ok.png" => Ok(reply(200, "OK", "")),
                "redirect.png" => Ok(reply(302, "Found", "")),
                "bad.png" => Ok(reply(400, "Bad Request", "File type not allowed")),
                "empty.png" => Ok(reply(500, "Internal Server Error", "")),
                _ => Err(AppError::Network("connection reset".into())),
            }
        }
    }

    /// Records every page effect.
    struct RecordingPage {
        pending: RefCell<PendingList<FakeFile>>,
        notifications: RefCell<Vec<String>>,
        busy_changes: RefCell<Vec<bool>>,
        reloads: Cell<usize>,
    }

    impl RecordingPage {
        fn with(files: Vec<FakeFile>) -> Self {
            let mut pending = PendingList::new();
            pending.accept(files);
            Self {
                pending: RefCell::new(pending),
                notifications: RefCell::new(Vec::new()),
                busy_changes: RefCell::new(Vec::new()),
                reloads: Cell::new(0),
            }
        }

        fn staged(&self) -> Vec<PendingFile<FakeFile>> {
            self.pending.borrow().entries().to_vec()
        }
    }

    impl UploadPage for RecordingPage {
        fn notify(&self, message: &str) {
            self.notifications.borrow_mut().push(message.to_string());
        }

        fn set_busy(&self, busy: bool) {
            self.busy_changes.borrow_mut().push(busy);
        }

        fn clear_pending(&self) {
            self.pending.borrow_mut().clear();
        }

        fn reload(&self) {
            self.reloads.set(self.reloads.get() + 1);
        }
    }

    fn reply(status: u16, status_text: &str, body: &str) -> UploadReply {
        UploadReply {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_accepted_statuses() {
        assert!(is_accepted_status(200));
        assert!(is_accepted_status(201));
        assert!(is_accepted_status(204));
        assert!(is_accepted_status(302));
        assert!(!is_accepted_status(301));
        assert!(!is_accepted_status(304));
        assert!(!is_accepted_status(404));
        assert!(!is_accepted_status(500));
    }

    #[test]
    fn test_failure_reason_prefers_body_over_status_text() {
        let with_body = classify_reply("a.png", &reply(413, "Payload Too Large", "too big"));
        assert_eq!(
            with_body,
            UploadOutcome::Failed {
                name: "a.png".into(),
                reason: "Upload failed for a.png: too big".into(),
            }
        );

        let without_body = classify_reply("a.png", &reply(413, "Payload Too Large", "  "));
        assert_eq!(
            without_body,
            UploadOutcome::Failed {
                name: "a.png".into(),
                reason: "Upload failed for a.png: Payload Too Large".into(),
            }
        );
    }

    #[test]
    fn test_empty_dispatch_notifies_once_and_sends_nothing() {
        let transport = ScriptedTransport::new();
        let page = RecordingPage::with(vec![]);

        let summary = block_on(run_dispatch_cycle(page.staged(), &transport, &page));

        assert!(summary.is_none());
        assert!(transport.calls.borrow().is_empty());
        assert_eq!(*page.notifications.borrow(), vec![EMPTY_DISPATCH_MESSAGE.to_string()]);
        assert!(page.busy_changes.borrow().is_empty());
        assert_eq!(page.reloads.get(), 0);
    }

    #[test]
    fn test_mixed_outcomes_clear_everything_and_reload_once() {
        let transport = ScriptedTransport::new();
        let page = RecordingPage::with(vec![
            FakeFile::image("ok.png", 1),
            FakeFile::image("bad.png", 2),
            FakeFile::image("redirect.png", 3),
            FakeFile::image("offline.png", 4),
            FakeFile::image("empty.png", 5),
        ]);

        let summary = block_on(run_dispatch_cycle(page.staged(), &transport, &page))
            .expect("non-empty dispatch returns a summary");

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 3);
        assert_eq!(
            summary.failures,
            vec![
                "Upload failed for bad.png: File type not allowed".to_string(),
                "Upload failed for offline.png: Network error: connection reset".to_string(),
                "Upload failed for empty.png: Internal Server Error".to_string(),
            ]
        );

        assert_eq!(
            *transport.calls.borrow(),
            ["ok.png", "bad.png", "redirect.png", "offline.png", "empty.png"]
        );
        assert!(page.pending.borrow().is_empty());
        assert!(page.pending.borrow().rows().is_empty());
        assert_eq!(*page.busy_changes.borrow(), vec![true, false]);
        assert!(page.notifications.borrow().is_empty());
        assert_eq!(page.reloads.get(), 1);
    }

    #[test]
    fn test_all_failures_still_clear_and_reload() {
        let transport = ScriptedTransport::new();
        let page = RecordingPage::with(vec![
            FakeFile::image("bad.png", 2),
            FakeFile::image("down.png", 7),
        ]);

        let summary = block_on(run_dispatch_cycle(page.staged(), &transport, &page));

        assert_eq!(summary.map(|s| (s.succeeded, s.failed)), Some((0, 2)));
        assert!(page.pending.borrow().is_empty());
        assert_eq!(page.reloads.get(), 1);
    }

    #[test]
    fn test_upload_all_keeps_input_order() {
        let transport = ScriptedTransport::new();
        let files: Vec<_> = ["redirect.png", "bad.png", "ok.png"]
            .into_iter()
            .map(|name| PendingFile {
                name: name.to_string(),
                size_bytes: 1,
                handle: FakeFile::image("unused", 1),
            })
            .collect();

        let outcomes = block_on(upload_all(&transport, &files));
        let successes: Vec<bool> = outcomes
            .iter()
            .map(|outcome| matches!(outcome, UploadOutcome::Uploaded { .. }))
            .collect();
        assert_eq!(successes, vec![true, false, true]);
    }
}
