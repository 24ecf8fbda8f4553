//! txt2json credential store client.
//!
//! The service validates Basic credentials against two named secrets
//! held by an external secret service. This crate defines the
//! [`SecretStore`] abstraction plus two implementations:
//!
//! - [`HttpSecretStore`] — production client over the store's HTTP API
//! - [`InMemorySecretStore`] — map-backed store for tests and local runs
//!
//! Nothing is cached: every lookup goes to the store, so rotated
//! credentials apply from the next request on.

mod client;
mod error;
mod http;
mod memory;

pub use crate::client::SecretStore;
pub use crate::error::SecretStoreError;
pub use crate::http::HttpSecretStore;
pub use crate::memory::InMemorySecretStore;
