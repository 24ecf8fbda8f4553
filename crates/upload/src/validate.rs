//! File validation: acceptance rules applied before conversion.
//!
//! Check order is part of the contract (it pins error-message
//! determinism for clients): extension first, then declared content
//! type, then size.

use std::path::Path;

use tracing::warn;

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::types::UploadedFile;

/// Validate an extracted file against the configured acceptance rules.
pub fn validate(file: &UploadedFile, cfg: &UploadConfig) -> Result<(), UploadError> {
    let extension = Path::new(&file.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    if !extension.eq_ignore_ascii_case(&cfg.allowed_extension) {
        warn!(file_name = %file.file_name, "rejected upload: bad extension");
        return Err(UploadError::InvalidExtension(file.file_name.clone()));
    }

    if !file
        .declared_content_type
        .eq_ignore_ascii_case(&cfg.allowed_content_type)
    {
        warn!(
            file_name = %file.file_name,
            content_type = %file.declared_content_type,
            "rejected upload: bad content type"
        );
        return Err(UploadError::InvalidContentType(
            file.declared_content_type.clone(),
        ));
    }

    if file.size > cfg.max_file_bytes {
        warn!(
            file_name = %file.file_name,
            size = file.size,
            limit = cfg.max_file_bytes,
            "rejected upload: too large"
        );
        return Err(UploadError::FileTooLarge {
            size: file.size,
            limit: cfg.max_file_bytes,
        });
    }

    Ok(())
}
