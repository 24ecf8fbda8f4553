use serde::{Deserialize, Serialize};

/// Acceptance rules for uploaded files.
///
/// The defaults reproduce the service contract: `.txt` extension,
/// `text/plain` declared type, 10 MiB ceiling. All fields are
/// overridable through the server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted file size in bytes.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: usize,

    /// Accepted filename extension, compared case-insensitively
    /// without the leading dot.
    #[serde(default = "default_allowed_extension")]
    pub allowed_extension: String,

    /// Accepted declared content type, compared case-insensitively.
    #[serde(default = "default_allowed_content_type")]
    pub allowed_content_type: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: default_max_file_bytes(),
            allowed_extension: default_allowed_extension(),
            allowed_content_type: default_allowed_content_type(),
        }
    }
}

fn default_max_file_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_allowed_extension() -> String {
    "txt".to_string()
}

fn default_allowed_content_type() -> String {
    "text/plain".to_string()
}
