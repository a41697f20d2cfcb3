//! Intake filter and the pending list it feeds.
//!
//! Candidates come from the picker or from a drop. Each one is checked
//! against two soft rules (image media type, not already staged) and either
//! appended or skipped with a warning in the console. Nothing here reaches
//! the user as an error.

use crate::format::format_file_size;
use crate::types::{FileRow, IntakeReport, PendingFile, RejectReason, Rejection};
use crate::ACCEPTED_MEDIA_PREFIX;

/// Anything the intake filter can inspect.
pub trait FileCandidate {
    fn name(&self) -> String;
    fn size_bytes(&self) -> u64;
    /// Declared media type, possibly empty.
    fn media_type(&self) -> String;
}

impl FileCandidate for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size_bytes(&self) -> u64 {
        self.size() as u64
    }

    fn media_type(&self) -> String {
        self.type_()
    }
}

/// Ordered, duplicate-free list of files staged for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingList<H> {
    entries: Vec<PendingFile<H>>,
}

impl<H> Default for PendingList<H> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<H> PendingList<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PendingFile<H>] {
        &self.entries
    }

    pub fn contains(&self, name: &str, size_bytes: u64) -> bool {
        self.entries.iter().any(|e| e.matches(name, size_bytes))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Projection rendered by the file list, one row per entry, same order.
    pub fn rows(&self) -> Vec<FileRow> {
        self.entries
            .iter()
            .map(|entry| FileRow {
                key: entry.key(),
                name: entry.name.clone(),
                title: entry.name.clone(),
                size_label: format_file_size(entry.size_bytes),
            })
            .collect()
    }
}

impl<H: FileCandidate> PendingList<H> {
    /// Runs every candidate through the filter, appending the ones that pass.
    pub fn accept<I>(&mut self, candidates: I) -> IntakeReport
    where
        I: IntoIterator<Item = H>,
    {
        let mut report = IntakeReport::default();

        for candidate in candidates {
            let name = candidate.name();
            let size_bytes = candidate.size_bytes();

            let reason = if !candidate.media_type().starts_with(ACCEPTED_MEDIA_PREFIX) {
                Some(RejectReason::NotAnImage)
            } else if self.contains(&name, size_bytes) {
                Some(RejectReason::Duplicate)
            } else {
                None
            };

            match reason {
                Some(reason) => {
                    log::warn!("File skipped: {} {}.", name, reason);
                    report.rejected.push(Rejection { name, reason });
                }
                None => {
                    self.entries.push(PendingFile {
                        name,
                        size_bytes,
                        handle: candidate,
                    });
                    report.accepted += 1;
                }
            }
        }

        report
    }
}

/// Stages a dropped collection.
///
/// An empty drop is ignored and returns `None`. Otherwise `mirror` runs
/// before the files go through the filter.
pub fn stage_drop<H, F>(
    pending: &mut PendingList<H>,
    dropped: Vec<H>,
    mirror: F,
) -> Option<IntakeReport>
where
    H: FileCandidate,
    F: FnOnce(),
{
    if dropped.is_empty() {
        return None;
    }
    mirror();
    Some(pending.accept(dropped))
}

/// Stages a picker selection, then runs `reset` so the same file can be
/// picked again.
pub fn stage_selection<H, F>(
    pending: &mut PendingList<H>,
    selected: Vec<H>,
    reset: F,
) -> IntakeReport
where
    H: FileCandidate,
    F: FnOnce(),
{
    let report = pending.accept(selected);
    reset();
    report
}
