use crate::config::ServerConfig;
use secrets::{HttpSecretStore, SecretStore};
use std::sync::Arc;

/// Shared application state
///
/// Stateless per request by design: nothing here is mutated while
/// serving. The secret store is the one shared collaborator and must
/// be safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Credential store, injected at construction. Production wires
    /// the HTTP client; tests inject an in-memory store.
    pub secrets: Arc<dyn SecretStore>,
}

impl AppState {
    /// Create state with the HTTP secret store from the configuration.
    pub fn new(config: ServerConfig) -> Self {
        let secrets = Arc::new(HttpSecretStore::new(config.secret_store_url.clone()));
        Self::with_secret_store(config, secrets)
    }

    /// Create state with an explicit secret store implementation.
    pub fn with_secret_store(config: ServerConfig, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            config: Arc::new(config),
            secrets,
        }
    }
}
