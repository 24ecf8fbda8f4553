//! Workspace umbrella crate for txt2json.
//!
//! This crate stitches the upload pipeline together so callers can run
//! an already-extracted file through validation and conversion with a
//! single entry point, and re-exports the stage crates' public types.
//!
//! The pipeline, in request order:
//!
//! 1. [`authenticate`] — Basic credentials against the secret store
//! 2. [`extract`] — multipart body to [`UploadedFile`]
//! 3. [`validate`] — extension / content type / size rules
//! 4. [`convert`] — line records plus processing metadata
//!
//! The HTTP server lives in `txt2json-server` and drives the same
//! functions; nothing here depends on axum.

use uuid::Uuid;

pub use auth::{
    authenticate, parse_basic_header, AuthError, AuthOutcome, Credentials, PASSWORD_SECRET,
    USERNAME_SECRET,
};
pub use convert::{convert, ConversionResult, LineRecord, ProcessingMetadata, ENCODING_UTF8};
pub use secrets::{HttpSecretStore, InMemorySecretStore, SecretStore, SecretStoreError};
pub use upload::{extract, validate, UploadConfig, UploadError, UploadedFile};

/// Validate an extracted file and convert it into line records.
///
/// The two stages short-circuit on the first validation failure;
/// conversion itself cannot fail. `correlation_id` is carried through
/// into the result envelope.
pub fn process_upload(
    file: &UploadedFile,
    cfg: &UploadConfig,
    correlation_id: Uuid,
) -> Result<ConversionResult, UploadError> {
    upload::validate(file, cfg)?;
    Ok(convert::convert(
        &file.file_name,
        &file.declared_content_type,
        &file.content,
        correlation_id,
    ))
}
