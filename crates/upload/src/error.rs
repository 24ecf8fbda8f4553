//! Error surface of the upload stage.
//!
//! Extraction and validation share one enum so the HTTP layer has a
//! single mapping: everything here is a client error, 413 for the
//! size ceiling and 400 for the rest.

use thiserror::Error;

/// Errors produced while extracting or validating an uploaded file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UploadError {
    /// Content-Type header missing or media type is not multipart/form-data.
    #[error("content type must be multipart/form-data")]
    UnsupportedContentType,

    /// multipart/form-data without a boundary parameter.
    #[error("multipart content type is missing a boundary parameter")]
    MissingBoundary,

    /// No part carried a `filename` attribute.
    #[error("request contains no file part")]
    NoFilePart,

    /// Body did not parse as well-formed multipart.
    #[error("malformed multipart body: {0}")]
    Malformed(String),

    /// Filename extension is not the accepted one.
    #[error("invalid file extension for '{0}': only .txt files are accepted")]
    InvalidExtension(String),

    /// Declared content type of the part is not the accepted one.
    #[error("invalid content type '{0}': only text/plain is accepted")]
    InvalidContentType(String),

    /// File exceeds the configured size ceiling.
    #[error("file size {size} exceeds limit of {limit} bytes")]
    FileTooLarge { size: usize, limit: usize },
}

impl UploadError {
    /// Suggested HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            UploadError::FileTooLarge { .. } => 413,
            _ => 400,
        }
    }
}
