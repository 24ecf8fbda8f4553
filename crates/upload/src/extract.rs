//! Multipart extraction: raw (Content-Type, body) to [`UploadedFile`].
//!
//! Parsing is delegated to `multer`, the same parser axum's multipart
//! extractor is built on. We drive it directly because this stage's
//! contract is over the raw header value and body bytes, and because
//! the error taxonomy needs "not multipart at all" and "multipart
//! without a boundary" told apart.
//!
//! Only the single-file case is supported: the first part carrying a
//! `filename` attribute wins, any further parts are ignored. Nested
//! multipart is out of scope.

use std::convert::Infallible;

use bytes::Bytes;
use futures::stream;
use tracing::{debug, warn};

use crate::error::UploadError;
use crate::types::UploadedFile;

/// Content type assumed for parts that declare none.
const DEFAULT_PART_CONTENT_TYPE: &str = "text/plain";

/// Extract the first file part from a multipart request body.
///
/// # Errors
///
/// - [`UploadError::UnsupportedContentType`] — header absent or media
///   type is not `multipart/form-data`.
/// - [`UploadError::MissingBoundary`] — no `boundary=` parameter.
/// - [`UploadError::NoFilePart`] — no part carries a filename.
/// - [`UploadError::Malformed`] — body violates the multipart framing.
pub async fn extract(
    content_type: Option<&str>,
    body: Bytes,
) -> Result<UploadedFile, UploadError> {
    let content_type = match content_type {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(UploadError::UnsupportedContentType),
    };

    let boundary = multer::parse_boundary(content_type).map_err(|err| match err {
        multer::Error::NoMultipart => UploadError::UnsupportedContentType,
        multer::Error::NoBoundary => UploadError::MissingBoundary,
        other => UploadError::Malformed(other.to_string()),
    })?;

    let stream = stream::once(async move { Ok::<Bytes, Infallible>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| UploadError::Malformed(err.to_string()))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            // Non-file parts (plain form fields) are skipped.
            debug!(field = ?field.name(), "skipping part without filename");
            continue;
        };

        let declared_content_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| DEFAULT_PART_CONTENT_TYPE.to_string());

        let content = field
            .bytes()
            .await
            .map_err(|err| UploadError::Malformed(err.to_string()))?;

        debug!(
            file_name,
            declared_content_type,
            size = content.len(),
            "extracted file part"
        );
        return Ok(UploadedFile::new(file_name, content, declared_content_type));
    }

    warn!("multipart body contained no file part");
    Err(UploadError::NoFilePart)
}
