//! Hasura client implementation.
//!
//! This module provides the [`HasuraClient`] type with four entry points:
//! GraphQL and SQL, each in an async and a blocking flavor. Both flavors
//! build the same [`HasuraRequest`] and parse responses with the same
//! functions; only the transport differs.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;

use crate::auth::Auth;
use crate::clients::errors::ClientError;
use crate::clients::request::{HasuraRequest, Variables};
use crate::clients::response::{parse_graphql_response, parse_sql_response, Row};
use crate::config::HasuraConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Async and blocking client for Hasura.
///
/// Each call sends exactly one POST request. There are no retries and no
/// caching; a timeout applies only if one is configured.
///
/// # Thread Safety
///
/// `HasuraClient` is `Send + Sync`. The configuration is read-only, so a
/// single client can serve concurrent calls from many tasks or threads.
///
/// # Blocking Calls
///
/// [`gql_blocking`](Self::gql_blocking), [`sql_blocking`](Self::sql_blocking)
/// and [`call`](Self::call) use `reqwest::blocking`, created on first use.
/// Like any `reqwest::blocking` call, they must not be made from inside an
/// async runtime.
///
/// # Example
///
/// ```rust,ignore
/// use hasura::{Auth, HasuraClient, HasuraConfig};
/// use serde_json::json;
///
/// let config = HasuraConfig::new("http://localhost:8080", Some("secret"))?;
/// let client = HasuraClient::new(config)?;
///
/// // GraphQL with admin access
/// let data = client.gql("query { item { id } }", &Auth::Admin, None, None).await?;
///
/// // GraphQL on behalf of a user, with variables
/// let variables = json!({"id": 1}).as_object().cloned().unwrap();
/// let data = client
///     .gql(
///         "query($id: Int!) { item_by_pk(id: $id) { id } }",
///         &Auth::bearer(jwt),
///         Some(&variables),
///         None,
///     )
///     .await?;
///
/// // SQL always runs with admin access
/// let rows = client.sql(r#"SELECT "id" FROM "item""#, None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct HasuraClient {
    /// The immutable configuration.
    config: HasuraConfig,
    /// Transport for async calls.
    client: reqwest::Client,
    /// Transport for blocking calls, built on first use.
    blocking: OnceLock<reqwest::blocking::Client>,
    /// Headers sent with every request unless the call overrides them.
    default_headers: HashMap<String, String>,
}

// Verify HasuraClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HasuraClient>();
};

impl HasuraClient {
    /// Creates a client for the given configuration.
    ///
    /// No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the underlying HTTP client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: HasuraConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::with_http_client(config, client))
    }

    /// Creates a client that sends async requests through `client`.
    ///
    /// Use this to control pooling, proxies or timeouts of the async
    /// transport. Blocking calls still use a client built from `config`.
    #[must_use]
    pub fn with_http_client(config: HasuraConfig, client: reqwest::Client) -> Self {
        let default_headers = Self::build_default_headers(&config);

        Self {
            config,
            client,
            blocking: OnceLock::new(),
            default_headers,
        }
    }

    fn build_default_headers(config: &HasuraConfig) -> HashMap<String, String> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Hasura Client Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("user-agent".to_string(), user_agent);
        default_headers.insert("accept".to_string(), "application/json".to_string());
        default_headers
    }

    /// Returns the configuration of this client.
    #[must_use]
    pub const fn config(&self) -> &HasuraConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes a GraphQL query or mutation.
    ///
    /// # Arguments
    ///
    /// * `query` - GraphQL query, e.g. `query { item { id } }`
    /// * `auth` - [`Auth::Admin`] or a literal `Authorization` value
    /// * `variables` - Variables used in `query`, if any
    /// * `headers` - Optional extra headers; auth headers take precedence
    ///
    /// # Returns
    ///
    /// The `data` object of the response, e.g. `{"item": [{"id": "..."}]}`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if `auth` is [`Auth::Admin`] and no admin
    ///   secret is configured; no request is sent
    /// - [`ClientError::Hasura`] if the response contains `errors`
    /// - [`ClientError::Network`] for transport or JSON decoding failures
    pub async fn gql(
        &self,
        query: &str,
        auth: &Auth,
        variables: Option<&Variables>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, ClientError> {
        let request = HasuraRequest::graphql(&self.config, query, auth, variables, headers)?;
        let body = self.send(request).await?;
        parse_graphql_response(body)
    }

    /// Blocking version of [`gql`](Self::gql).
    ///
    /// # Errors
    ///
    /// Same as [`gql`](Self::gql).
    pub fn gql_blocking(
        &self,
        query: &str,
        auth: &Auth,
        variables: Option<&Variables>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, ClientError> {
        let request = HasuraRequest::graphql(&self.config, query, auth, variables, headers)?;
        let body = self.send_blocking(request)?;
        parse_graphql_response(body)
    }

    /// Shortcut for [`gql_blocking`](Self::gql_blocking).
    ///
    /// # Errors
    ///
    /// Same as [`gql`](Self::gql).
    pub fn call(
        &self,
        query: &str,
        auth: &Auth,
        variables: Option<&Variables>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, ClientError> {
        self.gql_blocking(query, auth, variables, headers)
    }

    /// Executes SQL through `run_sql`, always with admin access.
    ///
    /// # Returns
    ///
    /// Rows selected by a `SELECT`, e.g. `[{"id": "..."}]`, or `[{"ok": true}]`
    /// for a statement that returns no rows.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Config`] if no admin secret is configured; no request
    ///   is sent
    /// - [`ClientError::Hasura`] if the response contains `error`
    /// - [`ClientError::UnexpectedResponse`] for result shapes other than
    ///   `TuplesOk` and `CommandOk`
    /// - [`ClientError::Network`] for transport or JSON decoding failures
    pub async fn sql(
        &self,
        query: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Vec<Row>, ClientError> {
        let request = HasuraRequest::run_sql(&self.config, query, headers)?;
        let body = self.send(request).await?;
        parse_sql_response(body)
    }

    /// Blocking version of [`sql`](Self::sql).
    ///
    /// # Errors
    ///
    /// Same as [`sql`](Self::sql).
    pub fn sql_blocking(
        &self,
        query: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Vec<Row>, ClientError> {
        let request = HasuraRequest::run_sql(&self.config, query, headers)?;
        let body = self.send_blocking(request)?;
        parse_sql_response(body)
    }

    /// Merges default headers under the request headers.
    fn merged_headers(&self, request: &HasuraRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        for (key, value) in &request.headers {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }

    /// Posts the request and decodes the JSON body, whatever the status code.
    async fn send(&self, request: HasuraRequest) -> Result<Value, ClientError> {
        tracing::debug!("Sending request to Hasura at {}", request.url);

        let mut req_builder = self.client.post(&request.url);
        for (key, value) in &self.merged_headers(&request) {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.json(&request.body).send().await?;
        tracing::debug!("Hasura responded with status {}", res.status().as_u16());

        Ok(res.json::<Value>().await?)
    }

    /// Blocking counterpart of [`send`](Self::send).
    fn send_blocking(&self, request: HasuraRequest) -> Result<Value, ClientError> {
        tracing::debug!("Sending blocking request to Hasura at {}", request.url);

        let mut req_builder = self.blocking_client()?.post(&request.url);
        for (key, value) in &self.merged_headers(&request) {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.json(&request.body).send()?;
        tracing::debug!("Hasura responded with status {}", res.status().as_u16());

        Ok(res.json::<Value>()?)
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client, ClientError> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }

        let mut builder = reqwest::blocking::Client::builder().use_rustls_tls();
        if let Some(timeout) = self.config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(self.blocking.get_or_init(|| client))
    }
}
