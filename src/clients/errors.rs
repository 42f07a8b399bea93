//! Error types returned by Hasura client calls.
//!
//! # Error Handling
//!
//! Every call returns [`ClientError`], which separates four failure kinds:
//!
//! - [`ClientError::Config`]: an admin-scoped call without an admin secret,
//!   detected before any request is sent
//! - [`ClientError::Hasura`]: Hasura answered with an `errors` (GraphQL) or
//!   `error` (SQL) marker; the parsed body is kept in [`HasuraError::response`]
//! - [`ClientError::UnexpectedResponse`]: a well-formed answer of a shape the
//!   client does not know how to normalize
//! - [`ClientError::Network`]: transport failures from reqwest, including
//!   bodies that are not JSON, passed through unchanged
//!
//! # Example
//!
//! ```rust,ignore
//! use hasura::{Auth, ClientError};
//!
//! match client.gql("query { item { id } }", &Auth::Admin, None, None).await {
//!     Ok(data) => println!("Items: {}", data["item"]),
//!     Err(ClientError::Hasura(e)) => {
//!         println!("Hasura rejected the query: {}", e.response["errors"]);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when a Hasura response contains an error marker.
///
/// No taxonomy is imposed on the underlying GraphQL or SQL errors; inspect
/// [`response`](Self::response) to branch on codes or messages.
///
/// # Example
///
/// ```rust
/// use hasura::HasuraError;
/// use serde_json::json;
///
/// let error = HasuraError::new(json!({"errors": [{"message": "field not found"}]}));
///
/// assert_eq!(error.response["errors"][0]["message"], "field not found");
/// assert!(error.to_string().contains("field not found"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("Hasura returned an error: {response}")]
pub struct HasuraError {
    /// The full parsed JSON response.
    pub response: Value,
}

impl HasuraError {
    /// Wraps a parsed response body.
    #[must_use]
    pub const fn new(response: Value) -> Self {
        Self { response }
    }
}

/// Unified error type for Hasura client calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configuration cannot serve this call.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Hasura reported an error in its response body.
    #[error(transparent)]
    Hasura(#[from] HasuraError),

    /// Hasura answered with a shape this client does not normalize.
    #[error("Unexpected response from Hasura: {response}")]
    UnexpectedResponse {
        /// The full parsed JSON response.
        response: Value,
    },

    /// Network, timeout or decoding error from the HTTP transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    /// Returns the parsed response body for [`ClientError::Hasura`] and
    /// [`ClientError::UnexpectedResponse`].
    #[must_use]
    pub const fn response(&self) -> Option<&Value> {
        match self {
            Self::Hasura(error) => Some(&error.response),
            Self::UnexpectedResponse { response } => Some(response),
            Self::Config(_) | Self::Network(_) => None,
        }
    }
}
