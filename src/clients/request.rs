//! Request construction for the Hasura APIs.
//!
//! This module provides the [`HasuraRequest`] type. Requests are built by
//! pure functions of the configuration and call arguments, and the same
//! request value is sent by both the async and the blocking transports.

use std::collections::HashMap;

use serde_json::{json, Map, Value};

use crate::auth::Auth;
use crate::config::HasuraConfig;
use crate::error::ConfigError;

/// GraphQL variables, keyed by variable name.
pub type Variables = Map<String, Value>;

/// Name of the database source `run_sql` statements are executed against.
pub const DEFAULT_SOURCE: &str = "default";

/// A fully resolved POST request to Hasura.
///
/// # Example
///
/// ```rust
/// use hasura::{Auth, HasuraConfig};
/// use hasura::clients::HasuraRequest;
/// use serde_json::json;
///
/// let config = HasuraConfig::new("http://localhost:8080", Some("secret")).unwrap();
///
/// let request = HasuraRequest::graphql(&config, "query { item { id } }", &Auth::Admin, None, None)
///     .unwrap();
///
/// assert_eq!(request.url, "http://localhost:8080/v1/graphql");
/// assert_eq!(request.headers["x-hasura-admin-secret"], "secret");
/// assert_eq!(request.body, json!({"query": "query { item { id } }", "variables": {}}));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HasuraRequest {
    /// Absolute URL the request is posted to.
    pub url: String,
    /// Headers to send, including the auth-derived ones.
    pub headers: HashMap<String, String>,
    /// JSON request body.
    pub body: Value,
}

impl HasuraRequest {
    /// Builds a request for the GraphQL API at `{endpoint}/v1/graphql`.
    ///
    /// # Arguments
    ///
    /// * `config` - The client configuration
    /// * `query` - GraphQL query or mutation, e.g. `query { item { id } }`
    /// * `auth` - Authorization mode
    /// * `variables` - Variables used in `query`, if any
    /// * `headers` - Optional extra headers
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAdminSecret`] if `auth` is
    /// [`Auth::Admin`] and no admin secret is configured.
    pub fn graphql(
        config: &HasuraConfig,
        query: &str,
        auth: &Auth,
        variables: Option<&Variables>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let headers = auth.resolve_headers(config, headers)?;

        let variables = variables.cloned().unwrap_or_default();
        let body = json!({
            "query": query,
            "variables": Value::Object(variables),
        });

        Ok(Self {
            url: config.endpoint().graphql_url(),
            headers,
            body,
        })
    }

    /// Builds a `run_sql` request for `{endpoint}/v2/query`.
    ///
    /// SQL always runs with admin access. The statement is flagged
    /// `read_only` when it is a `SELECT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAdminSecret`] if no admin secret is
    /// configured.
    pub fn run_sql(
        config: &HasuraConfig,
        sql: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let headers = Auth::Admin.resolve_headers(config, headers)?;

        let body = json!({
            "type": "run_sql",
            "args": {
                "source": DEFAULT_SOURCE,
                "sql": sql,
                "read_only": is_read_only(sql),
            }
        });

        Ok(Self {
            url: config.endpoint().sql_url(),
            headers,
            body,
        })
    }
}

/// Returns `true` if the statement starts with `SELECT`, ignoring case and
/// leading whitespace.
#[must_use]
pub fn is_read_only(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("select"))
}
