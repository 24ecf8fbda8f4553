//! Authentication error surface.
//!
//! All variants map to HTTP 401 at the API boundary. The
//! `InvalidCredentials` message is deliberately the same whether the
//! username or the password was wrong — callers get no signal about
//! which field failed.

use thiserror::Error;

/// Errors produced by [`authenticate`](crate::authenticate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    /// Authorization header absent or blank.
    #[error("missing Authorization header")]
    MissingHeader,

    /// Header present but not the Basic scheme.
    #[error("Authorization header must use the Basic scheme")]
    MalformedScheme,

    /// Credential blob is not valid standard Base64 (or not UTF-8).
    #[error("Basic credentials are not valid base64")]
    MalformedEncoding,

    /// Decoded credentials are not of the form `username:password`.
    #[error("Basic credentials must be username:password")]
    MalformedCredentials,

    /// Expected credentials could not be fetched from the store.
    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),

    /// Presented credentials do not match the expected ones.
    #[error("invalid username or password")]
    InvalidCredentials,
}
