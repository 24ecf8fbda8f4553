//! HTTP-backed secret store.
//!
//! Talks to a secret service over `GET {base_url}/v1/secrets/{name}`,
//! which answers `{"name": "...", "value": "..."}` for known names and
//! 404 for unknown ones. Every call is a fresh fetch: credentials are
//! never cached here, so a rotation upstream takes effect on the next
//! request. The `reqwest::Client` owns connection pooling and
//! timeouts and is safe to share across concurrent requests.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::SecretStore;
use crate::error::SecretStoreError;

#[derive(Debug, Deserialize)]
struct SecretValue {
    value: String,
}

/// Secret store client over a plain HTTP secrets API.
#[derive(Debug, Clone)]
pub struct HttpSecretStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSecretStore {
    /// Create a client against `base_url` with a default transport.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a caller-configured transport. Timeouts
    /// and retries for the upstream store belong to this client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, client }
    }

    fn secret_url(&self, name: &str) -> String {
        format!("{}/v1/secrets/{}", self.base_url, name)
    }
}

#[async_trait::async_trait]
impl SecretStore for HttpSecretStore {
    async fn get_secret(&self, name: &str) -> Result<String, SecretStoreError> {
        let url = self.secret_url(name);
        debug!(secret = name, "fetching secret");

        let response = self.client.get(&url).send().await.map_err(|err| {
            warn!(secret = name, error = %err, "secret store request failed");
            SecretStoreError::Unavailable(err.to_string())
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SecretStoreError::NotFound(name.to_string()));
        }
        if !response.status().is_success() {
            warn!(secret = name, status = %response.status(), "secret store returned error status");
            return Err(SecretStoreError::Unavailable(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let secret: SecretValue = response
            .json()
            .await
            .map_err(|err| SecretStoreError::Unavailable(err.to_string()))?;

        if secret.value.is_empty() {
            return Err(SecretStoreError::EmptyValue(name.to_string()));
        }
        Ok(secret.value)
    }
}
