//! Configuration error types for the Hasura client.
//!
//! This module contains the error type used for configuration and validation
//! failures. These errors are detected before any network call is made.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. An admin-scoped call made without an admin secret
//! also surfaces as a [`ConfigError`], wrapped in
//! [`ClientError::Config`](crate::ClientError::Config).
//!
//! # Example
//!
//! ```rust
//! use hasura::{AdminSecret, ConfigError};
//!
//! let result = AdminSecret::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAdminSecret)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint cannot be empty.
    #[error("Endpoint cannot be empty. Please provide the Hasura base URL, e.g. 'http://localhost:8080'.")]
    EmptyEndpoint,

    /// Endpoint has a shape the client cannot append API paths to.
    #[error("Invalid endpoint '{endpoint}': {reason}.")]
    InvalidEndpoint {
        /// The invalid endpoint that was provided.
        endpoint: String,
        /// Why the endpoint was rejected.
        reason: &'static str,
    },

    /// Admin secret cannot be empty.
    #[error("Admin secret cannot be empty. Omit it instead if the client is not used with admin access.")]
    EmptyAdminSecret,

    /// An admin-scoped call was attempted without an admin secret.
    #[error("Admin secret is not configured. Admin-scoped GraphQL calls and all SQL calls require it.")]
    MissingAdminSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            endpoint: "http://localhost:8080/".to_string(),
            reason: "must not end with '/'",
        };
        let message = error.to_string();
        assert!(message.contains("http://localhost:8080/"));
        assert!(message.contains("must not end with '/'"));
    }

    #[test]
    fn test_missing_admin_secret_error_message() {
        let message = ConfigError::MissingAdminSecret.to_string();
        assert!(message.contains("Admin secret is not configured"));
        assert!(message.contains("SQL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyEndpoint;
        let _: &dyn std::error::Error = &error;
    }
}
