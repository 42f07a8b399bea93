//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// Path of the GraphQL API, relative to the endpoint.
pub const GRAPHQL_PATH: &str = "/v1/graphql";

/// Path of the schema/metadata query API that serves `run_sql`.
pub const SQL_PATH: &str = "/v2/query";

/// A validated Hasura endpoint, e.g. `http://localhost:8080`.
///
/// The endpoint is the base URL of the Hasura instance, the value usually
/// kept in `HASURA_GRAPHQL_ENDPOINT`. API paths are appended to it, so it
/// must not end with `/` or already carry one of those paths.
///
/// # Example
///
/// ```rust
/// use hasura::Endpoint;
///
/// let endpoint = Endpoint::new("http://localhost:8080").unwrap();
/// assert_eq!(endpoint.graphql_url(), "http://localhost:8080/v1/graphql");
/// assert_eq!(endpoint.sql_url(), "http://localhost:8080/v2/query");
///
/// assert!(Endpoint::new("http://localhost:8080/").is_err());
/// assert!(Endpoint::new("http://localhost:8080/v1/graphql").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEndpoint`] if the endpoint is empty, and
    /// [`ConfigError::InvalidEndpoint`] if it ends with `/`, `/v1/graphql`
    /// or `/v2/query`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();

        if endpoint.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }

        let reason = if endpoint.ends_with('/') {
            Some("must not end with '/'")
        } else if endpoint.ends_with(GRAPHQL_PATH) {
            Some("must not include the '/v1/graphql' path")
        } else if endpoint.ends_with(SQL_PATH) {
            Some("must not include the '/v2/query' path")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ConfigError::InvalidEndpoint { endpoint, reason });
        }

        Ok(Self(endpoint))
    }

    /// Returns the full URL of the GraphQL API.
    #[must_use]
    pub fn graphql_url(&self) -> String {
        format!("{}{GRAPHQL_PATH}", self.0)
    }

    /// Returns the full URL of the `run_sql` API.
    #[must_use]
    pub fn sql_url(&self) -> String {
        format!("{}{SQL_PATH}", self.0)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Hasura admin secret.
///
/// This newtype ensures the secret is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `AdminSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use hasura::AdminSecret;
///
/// let secret = AdminSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AdminSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdminSecret(String);

impl AdminSecret {
    /// Creates a new validated admin secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAdminSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyAdminSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AdminSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminSecret(*****)")
    }
}
