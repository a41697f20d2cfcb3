//! UI Components for the picdrop uploader.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the gallery link
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DropZone`] - Drag & drop area and hidden file picker
//! - [`PendingFileList`] - Files staged for upload
//! - [`UploadButton`] - Starts a dispatch cycle

mod header;
mod hero;
mod drop_zone;
mod file_list;
mod upload_button;
mod footer;

pub use header::*;
pub use hero::*;
pub use drop_zone::*;
pub use file_list::*;
pub use upload_button::*;
pub use footer::*;
