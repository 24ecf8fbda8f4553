//! In-memory secret store for tests and local development.

use std::collections::HashMap;

use crate::client::SecretStore;
use crate::error::SecretStoreError;

/// Map-backed [`SecretStore`]. Construct with the secrets it should
/// hold; lookups behave exactly like the HTTP store (not-found and
/// empty-value are distinct failures).
#[derive(Debug, Clone, Default)]
pub struct InMemorySecretStore {
    secrets: HashMap<String, String>,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret, builder-style.
    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

#[async_trait::async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret(&self, name: &str) -> Result<String, SecretStoreError> {
        let value = self
            .secrets
            .get(name)
            .ok_or_else(|| SecretStoreError::NotFound(name.to_string()))?;
        if value.is_empty() {
            return Err(SecretStoreError::EmptyValue(name.to_string()));
        }
        Ok(value.clone())
    }
}
