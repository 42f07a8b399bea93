//! Client types for Hasura API communication.
//!
//! This module provides the request executor: it builds a POST request for
//! the GraphQL (`/v1/graphql`) or SQL (`/v2/query`) API, sends it, decodes the
//! JSON response and translates error markers into [`ClientError`].
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HasuraClient`]: The client with async and blocking entry points
//! - [`HasuraRequest`]: A fully resolved request, shared by both transports
//! - [`HasuraError`]: Hasura reported an error in the response body
//! - [`ClientError`]: Unified error type for all calls
//! - [`parse_graphql_response`] and [`parse_sql_response`]: Response translation
//!
//! # Example
//!
//! ```rust,ignore
//! use hasura::{Auth, HasuraClient, HasuraConfig};
//!
//! let client = HasuraClient::new(HasuraConfig::new("http://localhost:8080", Some("secret"))?)?;
//!
//! // Async
//! let data = client.gql("query { item { id } }", &Auth::Admin, None, None).await?;
//! let rows = client.sql("SELECT 1 AS one", None).await?;
//!
//! // Blocking
//! let data = client.call("query { item { id } }", &Auth::Admin, None, None)?;
//! let rows = client.sql_blocking("SELECT 1 AS one", None)?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call sends exactly one request and surfaces any failure to
//! the caller.

mod client;
mod errors;
mod request;
mod response;

pub use client::{HasuraClient, SDK_VERSION};
pub use errors::{ClientError, HasuraError};
pub use request::{is_read_only, HasuraRequest, Variables, DEFAULT_SOURCE};
pub use response::{parse_graphql_response, parse_sql_response, Row, COMMAND_OK, TUPLES_OK};
