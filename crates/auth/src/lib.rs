//! txt2json authentication stage.
//!
//! Validates an `Authorization: Basic <base64>` header against the
//! expected username and password held in the credential store. The
//! flow is split into a pure parsing step ([`parse_basic_header`]) and
//! the store-backed check ([`authenticate`]) so the parsing matrix is
//! testable without a store.
//!
//! Credential comparison is constant-time and length-checked: both the
//! username and the password are compared over their full length, and
//! both comparisons run regardless of the first one's outcome, so the
//! failure path gives no timing signal about which field was wrong or
//! where the first mismatching byte sits.

use subtle::ConstantTimeEq;
use tracing::{info, warn};

use secrets::SecretStore;

mod error;

pub use crate::error::AuthError;

/// Secret name of the expected username.
pub const USERNAME_SECRET: &str = "api-username";
/// Secret name of the expected password.
pub const PASSWORD_SECRET: &str = "api-password";

const BASIC_PREFIX_LEN: usize = "Basic ".len();

/// Credentials presented by the caller, decoded from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful authentication: who the caller is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthOutcome {
    pub username: String,
}

/// Parse an `Authorization` header value into Basic [`Credentials`].
///
/// The scheme prefix is matched case-insensitively; the payload must
/// be standard Base64 decoding to UTF-8 of the form
/// `username:password` (split on the first `:`).
pub fn parse_basic_header(header: Option<&str>) -> Result<Credentials, AuthError> {
    let header = match header {
        Some(value) if !value.trim().is_empty() => value.trim(),
        _ => return Err(AuthError::MissingHeader),
    };

    let encoded = header
        .get(..BASIC_PREFIX_LEN)
        .filter(|prefix| prefix.eq_ignore_ascii_case("basic "))
        .map(|_| &header[BASIC_PREFIX_LEN..])
        .ok_or(AuthError::MalformedScheme)?;

    use base64::Engine;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedEncoding)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedEncoding)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedCredentials)?;

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Authenticate a request's `Authorization` header against the store.
///
/// Fetches `api-username` and `api-password` fresh on every call (no
/// caching, so rotations apply immediately) and compares both fields
/// in constant time. Logs the username on success and the reason on
/// failure; the password never reaches a log line.
pub async fn authenticate(
    header: Option<&str>,
    store: &dyn SecretStore,
) -> Result<AuthOutcome, AuthError> {
    let credentials = match parse_basic_header(header) {
        Ok(credentials) => credentials,
        Err(err) => {
            warn!(error = %err, "authentication failed");
            return Err(err);
        }
    };

    let expected_username = fetch_secret(store, USERNAME_SECRET).await?;
    let expected_password = fetch_secret(store, PASSWORD_SECRET).await?;

    // Evaluate both comparisons before branching: no short-circuit.
    let username_ok = constant_time_eq(&credentials.username, &expected_username);
    let password_ok = constant_time_eq(&credentials.password, &expected_password);
    if !(username_ok & password_ok) {
        warn!(username = %credentials.username, "authentication failed: invalid credentials");
        return Err(AuthError::InvalidCredentials);
    }

    info!(username = %credentials.username, "authentication succeeded");
    Ok(AuthOutcome {
        username: credentials.username,
    })
}

async fn fetch_secret(store: &dyn SecretStore, name: &str) -> Result<String, AuthError> {
    match store.get_secret(name).await {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(secret = name, error = %err, "authentication failed: credential store");
            Err(AuthError::StoreUnavailable(err.to_string()))
        }
    }
}

/// Constant-time string equality. Unequal lengths are unequal; equal
/// lengths are compared over the full byte range.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
