//! Wire types produced by the conversion stage.
//!
//! Field names follow the public API contract (camelCase JSON), so the
//! structs here are serialization-first: what you see is what goes on
//! the wire for a successful conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One descriptor per kept (non-blank) source line.
///
/// `line_number` is 1-based and dense over the kept lines: blank lines
/// are dropped before numbering, so the sequence is always `1..=n`
/// with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRecord {
    pub line_number: u32,
    pub content: String,
    /// Length of the trimmed line in characters.
    pub length: usize,
    /// Number of whitespace-separated words in the line.
    pub word_count: usize,
    /// Always `false` on the wire today; kept for format stability.
    pub is_empty: bool,
    /// Captured at conversion time, per line.
    pub timestamp: DateTime<Utc>,
}

/// Processing metadata attached to every successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingMetadata {
    /// Byte length of the uploaded content before decoding.
    pub original_size: usize,
    /// Content type the client declared for the file part.
    pub content_type: String,
    /// Decode charset. Always `"UTF-8"`; decoding is best-effort and
    /// never fails (malformed sequences are replaced).
    pub encoding: String,
    /// Wall-clock conversion time in fractional milliseconds. Covers
    /// the conversion only, not the full request.
    pub processing_time_ms: f64,
}

/// Successful conversion envelope: the 200 response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub success: bool,
    pub correlation_id: Uuid,
    pub processed_at: DateTime<Utc>,
    pub total_lines: usize,
    pub file_name: String,
    pub data: Vec<LineRecord>,
    pub metadata: ProcessingMetadata,
}
