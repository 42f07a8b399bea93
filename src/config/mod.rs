//! Configuration types for the Hasura client.
//!
//! This module provides the configuration holder used by
//! [`HasuraClient`](crate::HasuraClient). A configuration only stores values;
//! building it never touches the network.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HasuraConfig`]: The immutable configuration holder
//! - [`HasuraConfigBuilder`]: A builder for constructing [`HasuraConfig`] instances
//! - [`Endpoint`]: A validated Hasura base URL
//! - [`AdminSecret`]: A validated admin secret with masked debug output
//!
//! # Example
//!
//! ```rust
//! use hasura::{HasuraConfig, Endpoint, AdminSecret};
//!
//! let config = HasuraConfig::builder()
//!     .endpoint(Endpoint::new("http://localhost:8080").unwrap())
//!     .admin_secret(AdminSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().graphql_url(), "http://localhost:8080/v1/graphql");
//! ```

mod newtypes;

pub use newtypes::{AdminSecret, Endpoint, GRAPHQL_PATH, SQL_PATH};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the Hasura client.
///
/// Holds the endpoint, the optional admin secret, and a few settings that are
/// passed through to the HTTP transport.
///
/// # Thread Safety
///
/// `HasuraConfig` is `Clone`, `Send`, and `Sync`. It is read-only after
/// construction, so one instance can back any number of concurrent calls.
///
/// # Example
///
/// ```rust
/// use hasura::HasuraConfig;
///
/// // Without admin secret: only non-admin GraphQL calls are possible
/// let config = HasuraConfig::new("http://localhost:8080", None).unwrap();
/// assert!(config.admin_secret().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct HasuraConfig {
    endpoint: Endpoint,
    admin_secret: Option<AdminSecret>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HasuraConfig {
    /// Creates a configuration from an endpoint string and an optional admin secret.
    ///
    /// An empty admin secret counts as not configured: the configuration is
    /// accepted, and admin-scoped calls fail with
    /// [`ConfigError::MissingAdminSecret`] before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the endpoint fails validation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hasura::HasuraConfig;
    ///
    /// let config = HasuraConfig::new("http://localhost:8080", Some("secret")).unwrap();
    /// assert_eq!(config.admin_secret().unwrap().as_ref(), "secret");
    /// ```
    pub fn new(endpoint: impl Into<String>, admin_secret: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder().endpoint(Endpoint::new(endpoint)?);
        if let Some(secret) = admin_secret.filter(|secret| !secret.is_empty()) {
            builder = builder.admin_secret(AdminSecret::new(secret)?);
        }
        builder.build()
    }

    /// Creates a new builder for constructing a `HasuraConfig`.
    #[must_use]
    pub fn builder() -> HasuraConfigBuilder {
        HasuraConfigBuilder::new()
    }

    /// Returns the endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the admin secret, if configured.
    #[must_use]
    pub const fn admin_secret(&self) -> Option<&AdminSecret> {
        self.admin_secret.as_ref()
    }

    /// Returns the admin secret, failing if it is not configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAdminSecret`] if no secret was set.
    pub fn require_admin_secret(&self) -> Result<&AdminSecret, ConfigError> {
        self.admin_secret
            .as_ref()
            .ok_or(ConfigError::MissingAdminSecret)
    }

    /// Returns the request timeout applied to clients built from this configuration.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify HasuraConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HasuraConfig>();
};

/// Builder for constructing [`HasuraConfig`] instances.
///
/// The only required field is `endpoint`.
///
/// # Defaults
///
/// - `admin_secret`: `None`
/// - `timeout`: `None` (no timeout)
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use hasura::{HasuraConfig, Endpoint, AdminSecret};
///
/// let config = HasuraConfig::builder()
///     .endpoint(Endpoint::new("http://localhost:8080").unwrap())
///     .admin_secret(AdminSecret::new("secret").unwrap())
///     .timeout(Duration::from_secs(10))
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct HasuraConfigBuilder {
    endpoint: Option<Endpoint>,
    admin_secret: Option<AdminSecret>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HasuraConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the admin secret, required for `Auth::Admin` and SQL calls.
    #[must_use]
    pub fn admin_secret(mut self, secret: AdminSecret) -> Self {
        self.admin_secret = Some(secret);
        self
    }

    /// Sets a timeout for the HTTP clients the library creates.
    ///
    /// Has no effect on a client supplied through
    /// [`HasuraClient::with_http_client`](crate::HasuraClient::with_http_client).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`HasuraConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set.
    pub fn build(self) -> Result<HasuraConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        Ok(HasuraConfig {
            endpoint,
            admin_secret: self.admin_secret,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_endpoint() {
        let result = HasuraConfigBuilder::new()
            .admin_secret(AdminSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "endpoint" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = HasuraConfig::builder()
            .endpoint(Endpoint::new("http://localhost:8080").unwrap())
            .build()
            .unwrap();

        assert!(config.admin_secret().is_none());
        assert!(config.timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_new_stores_args() {
        let config = HasuraConfig::new("http://localhost:8080", Some("fake secret")).unwrap();

        assert_eq!(config.endpoint().as_ref(), "http://localhost:8080");
        assert_eq!(config.endpoint().graphql_url(), "http://localhost:8080/v1/graphql");
        assert_eq!(config.endpoint().sql_url(), "http://localhost:8080/v2/query");
        assert_eq!(config.admin_secret().unwrap().as_ref(), "fake secret");
    }

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        assert!(matches!(
            HasuraConfig::new("http://localhost:8080/", None),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_new_treats_empty_admin_secret_as_unset() {
        let config = HasuraConfig::new("http://localhost:8080", Some("")).unwrap();

        assert!(config.admin_secret().is_none());
        assert_eq!(
            config.require_admin_secret(),
            Err(ConfigError::MissingAdminSecret)
        );
    }

    #[test]
    fn test_require_admin_secret_fails_when_unset() {
        let config = HasuraConfig::new("http://localhost:8080", None).unwrap();

        assert_eq!(
            config.require_admin_secret(),
            Err(ConfigError::MissingAdminSecret)
        );
    }

    #[test]
    fn test_config_debug_masks_admin_secret() {
        let config = HasuraConfig::new("http://localhost:8080", Some("fake secret")).unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("HasuraConfig"));
        assert!(!debug_str.contains("fake secret"));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = HasuraConfig::builder()
            .endpoint(Endpoint::new("http://localhost:8080").unwrap())
            .admin_secret(AdminSecret::new("secret").unwrap())
            .timeout(Duration::from_secs(10))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HasuraConfig>();
    }
}
