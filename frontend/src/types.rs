//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Pending Types** - files staged for upload and their rendered rows
//! - **Upload Types** - per-request outcomes and cycle summaries
//! - **Error Types** - frontend error handling

use std::fmt;
use thiserror::Error;

// =============================================================================
// Pending Types
// =============================================================================

/// Uniqueness key of a staged file: name plus byte size.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileKey {
    pub name: String,
    pub size_bytes: u64,
}

/// A file accepted by the intake filter and waiting for upload.
///
/// `H` is the opaque handle to the underlying file (`web_sys::File` in the
/// browser).
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFile<H> {
    pub name: String,
    pub size_bytes: u64,
    pub handle: H,
}

impl<H> PendingFile<H> {
    pub fn key(&self) -> FileKey {
        FileKey {
            name: self.name.clone(),
            size_bytes: self.size_bytes,
        }
    }

    /// Same name and same byte size.
    pub fn matches(&self, name: &str, size_bytes: u64) -> bool {
        self.name == name && self.size_bytes == size_bytes
    }
}

/// One visible row of the pending list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRow {
    pub key: FileKey,
    /// Displayed (possibly truncated by CSS) name.
    pub name: String,
    /// Full name, exposed as hover/accessibility label.
    pub title: String,
    pub size_label: String,
}

/// Why the intake filter skipped a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Media type does not start with `image/`.
    NotAnImage,
    /// Same name and size already staged.
    Duplicate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NotAnImage => write!(f, "is not an image"),
            RejectReason::Duplicate => write!(f, "already added"),
        }
    }
}

/// A skipped candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    pub name: String,
    pub reason: RejectReason,
}

/// Result of one intake batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeReport {
    pub accepted: usize,
    pub rejected: Vec<Rejection>,
}

// =============================================================================
// Upload Types
// =============================================================================

/// What the server answered to one upload request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// Settled result of one upload request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { name: String },
    Failed { name: String, reason: String },
}

/// Aggregate of one dispatch cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Failure reasons, in pending-list order.
    pub failures: Vec<String>,
}

impl DispatchSummary {
    pub fn from_outcomes(outcomes: &[UploadOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                UploadOutcome::Uploaded { .. } => summary.succeeded += 1,
                UploadOutcome::Failed { reason, .. } => {
                    summary.failed += 1;
                    summary.failures.push(reason.clone());
                }
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be built.
    #[error("Request error: {0}")]
    Request(String),

    /// A browser API call failed.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_and_keeps_failure_order() {
        let outcomes = vec![
            UploadOutcome::Failed {
                name: "a.png".into(),
                reason: "Upload failed for a.png: boom".into(),
            },
            UploadOutcome::Uploaded { name: "b.png".into() },
            UploadOutcome::Failed {
                name: "c.png".into(),
                reason: "Upload failed for c.png: Bad Request".into(),
            },
        ];

        let summary = DispatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.total(), 3);
        assert!(summary.failures[0].contains("a.png"));
        assert!(summary.failures[1].contains("c.png"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
