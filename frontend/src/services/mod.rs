//! Backend communication.
//!
//! # Services
//!
//! - [`upload`] - multipart image upload to the gallery server
//! - [`page`] - browser page effects (alert, reload)

pub mod upload;
pub mod page;

pub use upload::*;
pub use page::*;
