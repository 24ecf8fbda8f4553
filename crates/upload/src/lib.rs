//! txt2json upload stage.
//!
//! This is where a request body becomes a file the pipeline can work
//! with. Two operations live here:
//!
//! - [`extract`] — parse a `multipart/form-data` body and lift out the
//!   first part that carries a filename, as an [`UploadedFile`].
//! - [`validate`] — apply the acceptance rules (extension, declared
//!   content type, size ceiling) from an [`UploadConfig`].
//!
//! Errors are typed ([`UploadError`]) and carry their own HTTP status
//! suggestion so the server layer maps them mechanically: 413 for the
//! size ceiling, 400 for everything else.

mod config;
mod error;
mod extract;
mod types;
mod validate;

pub use crate::config::UploadConfig;
pub use crate::error::UploadError;
pub use crate::extract::extract;
pub use crate::types::UploadedFile;
pub use crate::validate::validate;
