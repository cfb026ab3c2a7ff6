//! Bearer token resolution
//!
//! Lookup order: the `--token` flag or `ASANA_PAT` (clap reads both), then
//! the system keyring entry `asana-deps` / `pat`, then `api.token` in the
//! config file. The keyring is only queried when the flag and env are unset.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Environment variable holding the personal access token
pub const TOKEN_ENV: &str = "ASANA_PAT";

/// Keyring service name
pub const KEYRING_SERVICE: &str = "asana-deps";

/// Keyring user name
pub const KEYRING_USER: &str = "pat";

#[derive(Debug, Error, PartialEq)]
pub enum CredentialError {
    #[error("No Asana token found. Set ASANA_PAT, pass --token, store it in the system keyring (service asana-deps, user pat), or add `token` under [api] in the config file")]
    Missing,

    #[error("Failed to read token from the system keyring: {0}")]
    Store(String),
}

/// A secure local store that may hold the token
pub trait SecretStore {
    /// Returns `Ok(None)` when the store has no entry
    fn token(&self) -> Result<Option<String>, CredentialError>;
}

impl<F> SecretStore for F
where
    F: Fn() -> Result<Option<String>, CredentialError>,
{
    fn token(&self) -> Result<Option<String>, CredentialError> {
        self()
    }
}

/// The platform keyring (Keychain, Credential Manager, kernel keyutils)
#[derive(Debug, Clone)]
pub struct Keyring {
    service: String,
    user: String,
}

impl Default for Keyring {
    fn default() -> Self {
        Self::new(KEYRING_SERVICE, KEYRING_USER)
    }
}

impl Keyring {
    pub fn new(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }
}

impl SecretStore for Keyring {
    fn token(&self) -> Result<Option<String>, CredentialError> {
        let entry = keyring::Entry::new(&self.service, &self.user)
            .map_err(|e| CredentialError::Store(e.to_string()))?;

        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => {
                debug!(service = %self.service, user = %self.user, "No keyring entry");
                Ok(None)
            }
            Err(e) => Err(CredentialError::Store(e.to_string())),
        }
    }
}

/// An opaque bearer token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Resolves the token: flag/env, then the store, then the config value
    pub fn resolve(
        flag: Option<&str>,
        store: Option<&dyn SecretStore>,
        config: Option<&str>,
    ) -> Result<Self, CredentialError> {
        if let Some(token) = non_blank(flag) {
            return Ok(Self::new(token));
        }

        if let Some(store) = store {
            if let Some(token) = non_blank(store.token()?.as_deref()) {
                debug!("Using token from the system keyring");
                return Ok(Self::new(token));
            }
        }

        non_blank(config)
            .map(Self::new)
            .ok_or(CredentialError::Missing)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

fn non_blank(token: Option<&str>) -> Option<&str> {
    token.map(str::trim).filter(|token| !token.is_empty())
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
