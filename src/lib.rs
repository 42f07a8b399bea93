//! # Hasura Client
//!
//! A thin async and blocking client for the Hasura GraphQL and `run_sql`
//! endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HasuraConfig`] and [`HasuraConfigBuilder`]
//! - Validated newtypes for the endpoint and admin secret
//! - An explicit authorization mode, [`Auth`], instead of a magic string
//! - GraphQL calls returning the `data` object
//! - SQL calls returning rows keyed by column name
//! - A single [`HasuraError`] carrying the raw response when Hasura reports an error
//!
//! ## Quick Start
//!
//! ```rust
//! use hasura::{HasuraClient, HasuraConfig, Endpoint, AdminSecret};
//!
//! let config = HasuraConfig::builder()
//!     .endpoint(Endpoint::new("http://localhost:8080").unwrap())
//!     .admin_secret(AdminSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HasuraClient::new(config).unwrap();
//! ```
//!
//! ## GraphQL
//!
//! ```rust,ignore
//! use hasura::Auth;
//!
//! // Async, with admin access
//! let data = client.gql("query { item { id } }", &Auth::Admin, None, None).await?;
//!
//! // Blocking, on behalf of a user
//! let data = client.call("query { item { id } }", &Auth::bearer(jwt), None, None)?;
//! ```
//!
//! ## SQL
//!
//! ```rust,ignore
//! let rows = client.sql(r#"SELECT "id" FROM "item""#, None).await?;
//! let ok = client.sql_blocking(r#"DELETE FROM "item""#, None)?; // [{"ok": true}]
//! ```
//!
//! ## Errors
//!
//! ```rust,ignore
//! use hasura::ClientError;
//!
//! match client.call("bad query", &Auth::Admin, None, None) {
//!     Err(ClientError::Hasura(e)) => println!("{}", e.response["errors"]),
//!     Err(e) => println!("{e}"),
//!     Ok(data) => println!("{data}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction, admin-scoped
//!   calls check for the secret before sending anything
//! - **One request per call**: No retries, no caching, no batching
//! - **Thread-safe**: All types are `Send + Sync`

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{Auth, ADMIN_SECRET_HEADER, AUTHORIZATION_HEADER};
pub use config::{AdminSecret, Endpoint, HasuraConfig, HasuraConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{ClientError, HasuraClient, HasuraError, HasuraRequest, Row, Variables};
