//! Application configuration.
//!
//! Centralized configuration for the picdrop uploader. Everything is
//! compile-time: the widget is served by the same origin as the upload
//! endpoint, so relative paths are enough.

/// Upload endpoint, relative to the page origin.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// Media type prefix a candidate must carry to be staged.
pub const ACCEPTED_MEDIA_PREFIX: &str = "image/";

/// Hint passed to the native file chooser (`accept` attribute).
pub const PICKER_ACCEPT: &str = "image/*";

/// Redirect status treated as a successful upload.
///
/// The gallery server answers a form POST with a redirect back to the index,
/// so this status counts as an acknowledgement.
pub const ACCEPTED_REDIRECT_STATUS: u16 = 302;

/// Server-rendered gallery page linked from the header.
pub const GALLERY_URL: &str = "/gallery";

/// Upload button label while idle.
pub const UPLOAD_LABEL: &str = "Upload";

/// Upload button label while a dispatch cycle is running.
pub const UPLOADING_LABEL: &str = "Uploading...";

/// Blocking notification shown when Upload is pressed with nothing staged.
pub const EMPTY_DISPATCH_MESSAGE: &str = "Please select files to upload first.";

/// Stable DOM ids of the widget's elements.
pub mod ids {
    pub const DROP_ZONE: &str = "drop-zone";
    pub const FILE_INPUT: &str = "file-input";
    pub const BROWSE_BUTTON: &str = "browse-btn";
    pub const FILE_LIST: &str = "file-list";
    pub const UPLOAD_BUTTON: &str = "upload-btn";
}
