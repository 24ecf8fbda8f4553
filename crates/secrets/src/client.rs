use crate::error::SecretStoreError;

/// A named-secret lookup service.
///
/// Implementations must be safe for concurrent use; the server shares
/// one instance across all in-flight requests. A call is a fresh
/// fetch — implementations must not cache values across calls.
#[async_trait::async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the secret stored under `name`.
    async fn get_secret(&self, name: &str) -> Result<String, SecretStoreError>;
}
