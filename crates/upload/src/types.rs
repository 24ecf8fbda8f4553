use bytes::Bytes;

/// A file part lifted out of a multipart request body.
///
/// Lives for one request only: produced by [`extract`](crate::extract),
/// consumed by validation and conversion, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Filename as declared in the part's `Content-Disposition`,
    /// surrounding quotes already stripped.
    pub file_name: String,

    /// Raw part content. Multipart framing (the trailing CRLF before
    /// the next boundary) is not part of this buffer.
    pub content: Bytes,

    /// Content type the client declared for the part, defaulting to
    /// `text/plain` when the part carried none.
    pub declared_content_type: String,

    /// Byte length of `content`.
    pub size: usize,
}

impl UploadedFile {
    pub fn new(file_name: String, content: Bytes, declared_content_type: String) -> Self {
        let size = content.len();
        Self {
            file_name,
            content,
            declared_content_type,
            size,
        }
    }
}
