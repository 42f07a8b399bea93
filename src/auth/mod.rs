//! Authorization modes for Hasura requests.
//!
//! Every GraphQL call is made either with admin access or on behalf of a
//! caller-supplied `Authorization` value. [`Auth`] models that choice as two
//! variants, so a bearer token can never be mistaken for the admin sentinel.
//!
//! # Header Resolution
//!
//! - [`Auth::Admin`] sends `x-hasura-admin-secret` from the configuration and
//!   no `Authorization` header. It fails before any request is made when the
//!   configuration has no admin secret.
//! - [`Auth::Authorization`] sends its value verbatim as `authorization`.
//!
//! Caller-supplied headers are merged in first, so the auth-derived header
//! always survives a name clash.
//!
//! # Example
//!
//! ```rust
//! use hasura::{Auth, HasuraConfig};
//!
//! let config = HasuraConfig::new("http://localhost:8080", None).unwrap();
//! let auth = Auth::bearer("eyJ...");
//!
//! let headers = auth.resolve_headers(&config, None).unwrap();
//! assert_eq!(headers.get("authorization").unwrap(), "Bearer eyJ...");
//! ```

use std::collections::HashMap;

use crate::config::HasuraConfig;
use crate::error::ConfigError;

/// Header carrying the admin secret.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// Header carrying a non-admin authorization value.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// How a request is authorized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Auth {
    /// Use the admin secret from the configuration.
    Admin,
    /// Send this value verbatim as the `Authorization` header, e.g. `Bearer {JWT}`.
    Authorization(String),
}

impl Auth {
    /// Creates an [`Auth::Authorization`] holding `Bearer {token}`.
    #[must_use]
    pub fn bearer(token: impl AsRef<str>) -> Self {
        Self::Authorization(format!("Bearer {}", token.as_ref()))
    }

    /// Returns `true` for [`Auth::Admin`].
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Resolves the outgoing headers for this authorization mode.
    ///
    /// Names of `extra` headers are lower-cased before merging so that an
    /// extra `Authorization` header cannot shadow the auth-derived one.
    /// Extra names that differ only in case collapse into one header; the
    /// name that sorts last wins (`x-role` over `X-Role`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAdminSecret`] for [`Auth::Admin`] when
    /// the configuration has no admin secret.
    pub fn resolve_headers(
        &self,
        config: &HasuraConfig,
        extra: Option<&HashMap<String, String>>,
    ) -> Result<HashMap<String, String>, ConfigError> {
        let mut sorted: Vec<(&String, &String)> = extra.into_iter().flatten().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut headers: HashMap<String, String> = sorted
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.clone()))
            .collect();

        match self {
            Self::Admin => {
                let secret = config.require_admin_secret()?;
                headers.insert(ADMIN_SECRET_HEADER.to_string(), secret.as_ref().to_string());
            }
            Self::Authorization(value) => {
                headers.insert(AUTHORIZATION_HEADER.to_string(), value.clone());
            }
        }

        Ok(headers)
    }
}

impl From<String> for Auth {
    fn from(value: String) -> Self {
        Self::Authorization(value)
    }
}

impl From<&str> for Auth {
    fn from(value: &str) -> Self {
        Self::Authorization(value.to_string())
    }
}
