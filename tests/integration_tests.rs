//! Integration tests for configuration, authorization and public exports.

use std::collections::HashMap;

use hasura::clients::{parse_graphql_response, parse_sql_response};
use hasura::{
    AdminSecret, Auth, ClientError, ConfigError, Endpoint, HasuraClient, HasuraConfig,
    HasuraRequest,
};
use serde_json::json;

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_create_client_requires_endpoint_only() {
    let config = HasuraConfig::new("http://localhost:8080", None).unwrap();
    let client = HasuraClient::new(config).unwrap();

    assert!(client.config().admin_secret().is_none());
}

#[test]
fn test_create_client_stores_args() {
    let config = HasuraConfig::new("http://localhost:8080", Some("fake secret")).unwrap();

    assert_eq!(
        config.endpoint().graphql_url(),
        "http://localhost:8080/v1/graphql"
    );
    assert_eq!(config.endpoint().sql_url(), "http://localhost:8080/v2/query");
    assert_eq!(config.admin_secret().unwrap().as_ref(), "fake secret");
}

#[test]
fn test_endpoint_shapes_are_rejected() {
    for endpoint in [
        "http://localhost:8080/",
        "http://localhost:8080/v1/graphql",
        "http://localhost:8080/v2/query",
    ] {
        assert!(matches!(
            HasuraConfig::new(endpoint, None),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    assert!(matches!(
        HasuraConfig::new("", None),
        Err(ConfigError::EmptyEndpoint)
    ));
}

#[test]
fn test_config_is_shared_by_clients() {
    let config = HasuraConfig::builder()
        .endpoint(Endpoint::new("http://localhost:8080").unwrap())
        .admin_secret(AdminSecret::new("fake secret").unwrap())
        .build()
        .unwrap();

    let client1 = HasuraClient::new(config.clone()).unwrap();
    let client2 = HasuraClient::new(config).unwrap();

    assert_eq!(
        client1.config().endpoint(),
        client2.config().endpoint()
    );
}

#[test]
fn test_client_with_custom_http_client() {
    let http = reqwest::Client::new();
    let config = HasuraConfig::new("http://localhost:8080", None).unwrap();

    let client = HasuraClient::with_http_client(config, http);

    assert!(client.default_headers().contains_key("user-agent"));
}

// ============================================================================
// Request Construction Tests
// ============================================================================

#[test]
fn test_requests_share_construction_across_modes() {
    let config = HasuraConfig::new("http://localhost:8080", Some("fake secret")).unwrap();
    let extra = HashMap::from([("x-hasura-role".to_string(), "user".to_string())]);

    let graphql = HasuraRequest::graphql(
        &config,
        "query { item { id } }",
        &Auth::bearer("jwt"),
        None,
        Some(&extra),
    )
    .unwrap();

    assert_eq!(graphql.headers["authorization"], "Bearer jwt");
    assert_eq!(graphql.headers["x-hasura-role"], "user");
    assert_eq!(graphql.headers.len(), 2);

    let sql = HasuraRequest::run_sql(&config, "SELECT 1", Some(&extra)).unwrap();

    assert_eq!(sql.headers["x-hasura-admin-secret"], "fake secret");
    assert_eq!(sql.headers["x-hasura-role"], "user");
    assert_eq!(sql.body["type"], "run_sql");
}

#[test]
fn test_authorization_value_is_passed_verbatim() {
    let config = HasuraConfig::new("http://localhost:8080", None).unwrap();

    for value in ["Bearer abc.def.ghi", "ADMIN", "  spaced  ", "Basic dXNlcjpwYXNz"] {
        let request =
            HasuraRequest::graphql(&config, "query { x }", &Auth::from(value), None, None).unwrap();
        assert_eq!(request.headers["authorization"], value);
    }
}

// ============================================================================
// Response Translation Tests
// ============================================================================

#[test]
fn test_graphql_response_returns_data_not_envelope() {
    let data = parse_graphql_response(json!({
        "data": {"item": []},
        "extensions": {"cost": 1},
    }))
    .unwrap();

    assert_eq!(data, json!({"item": []}));
}

#[test]
fn test_sql_response_carries_exact_error_body() {
    let body = json!({"error": "syntax error", "code": "postgres-error", "internal": {}});

    let error = parse_sql_response(body.clone()).unwrap_err();

    assert!(matches!(error, ClientError::Hasura(_)));
    assert_eq!(error.response(), Some(&body));
}

// ============================================================================
// Type Export Tests
// ============================================================================

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(hasura::HasuraClient) = |_| {};
    let _: fn(hasura::HasuraError) = |_| {};
    let _: fn(hasura::ClientError) = |_| {};
    let _: fn(hasura::Row) = |_| {};
}

#[test]
fn test_types_exported_from_clients_module() {
    let _: fn(hasura::clients::HasuraClient) = |_| {};
    let _: fn(hasura::clients::HasuraError) = |_| {};
    let _: fn(hasura::clients::HasuraRequest) = |_| {};
}

#[test]
fn test_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HasuraClient>();
    assert_send_sync::<HasuraConfig>();
    assert_send_sync::<ClientError>();
}
