use thiserror::Error;

/// Errors produced by a [`SecretStore`](crate::SecretStore) fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SecretStoreError {
    /// The store has no secret under that name.
    #[error("secret '{0}' not found")]
    NotFound(String),

    /// The secret exists but its value is empty.
    #[error("secret '{0}' has an empty value")]
    EmptyValue(String),

    /// Transport or upstream failure while fetching.
    #[error("secret store unavailable: {0}")]
    Unavailable(String),
}
