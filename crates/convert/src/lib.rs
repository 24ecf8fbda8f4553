//! txt2json conversion stage.
//!
//! Takes the raw bytes of an already-validated text upload and builds
//! the line-by-line JSON model: one [`LineRecord`] per non-blank line,
//! plus [`ProcessingMetadata`] about the run.
//!
//! ## Contract
//!
//! - Decoding is best-effort UTF-8: malformed sequences are replaced,
//!   never rejected. Conversion cannot fail.
//! - Input is split on `\n`; each segment is trimmed of surrounding
//!   whitespace; segments that become empty are dropped.
//! - Numbering is dense and 1-based over the *kept* lines, not the
//!   physical line positions of the source file.
//! - Empty input is a valid conversion: `total_lines = 0`, `data = []`,
//!   `success = true`.
//!
//! ## Example
//!
//! ```
//! use uuid::Uuid;
//!
//! let result = convert::convert("notes.txt", "text/plain", b"a\n\nb\n", Uuid::new_v4());
//! assert!(result.success);
//! assert_eq!(result.total_lines, 2);
//! assert_eq!(result.data[1].content, "b");
//! assert_eq!(result.data[1].line_number, 2);
//! ```

use std::time::Instant;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

mod types;

pub use crate::types::{ConversionResult, LineRecord, ProcessingMetadata};

/// Charset reported in [`ProcessingMetadata::encoding`].
pub const ENCODING_UTF8: &str = "UTF-8";

/// Convert uploaded text content into its line-record representation.
///
/// `file_name` and `content_type` are echoed into the result envelope;
/// `correlation_id` is the per-request id minted at request entry and
/// is carried through unchanged.
pub fn convert(
    file_name: &str,
    content_type: &str,
    content: &[u8],
    correlation_id: Uuid,
) -> ConversionResult {
    let start = Instant::now();

    // Best-effort decode: replacement characters instead of failure.
    let text = String::from_utf8_lossy(content);

    let mut data = Vec::new();
    for segment in text.split('\n') {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }
        data.push(LineRecord {
            line_number: data.len() as u32 + 1,
            content: trimmed.to_string(),
            length: trimmed.chars().count(),
            word_count: trimmed.split_whitespace().count(),
            is_empty: false,
            timestamp: Utc::now(),
        });
    }

    let processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    let total_lines = data.len();

    info!(
        %correlation_id,
        file_name,
        total_lines,
        original_size = content.len(),
        processing_time_ms,
        "convert_success"
    );

    ConversionResult {
        success: true,
        correlation_id,
        processed_at: Utc::now(),
        total_lines,
        file_name: file_name.to_string(),
        data,
        metadata: ProcessingMetadata {
            original_size: content.len(),
            content_type: content_type.to_string(),
            encoding: ENCODING_UTF8.to_string(),
            processing_time_ms,
        },
    }
}
