//! Response translation for the Hasura APIs.
//!
//! These functions turn a parsed JSON body into the value returned to the
//! caller, or into a [`ClientError`]. They do not depend on how the body was
//! fetched.

use serde_json::{Map, Value};

use crate::clients::errors::{ClientError, HasuraError};

/// One SQL result row, keyed by column name in column order.
pub type Row = Map<String, Value>;

/// `result_type` of a `run_sql` statement that returned rows.
pub const TUPLES_OK: &str = "TuplesOk";

/// `result_type` of a `run_sql` statement that returned no rows.
pub const COMMAND_OK: &str = "CommandOk";

/// Extracts `data` from a GraphQL response.
///
/// A truthy `errors` value (anything but `null`, `false`, `0`, or an empty
/// string, array or object) fails the call before `data` is looked at. A
/// response without `data` yields an empty object.
///
/// # Errors
///
/// Returns [`ClientError::Hasura`] carrying the whole body when `errors` is
/// present and truthy.
///
/// # Example
///
/// ```rust
/// use hasura::clients::parse_graphql_response;
/// use serde_json::json;
///
/// let data = parse_graphql_response(json!({"data": {"item": [{"id": "X"}]}})).unwrap();
/// assert_eq!(data, json!({"item": [{"id": "X"}]}));
///
/// assert!(parse_graphql_response(json!({"errors": [{"message": "bad"}]})).is_err());
/// ```
pub fn parse_graphql_response(body: Value) -> Result<Value, ClientError> {
    if body.get("errors").is_some_and(is_truthy) {
        tracing::debug!("Hasura GraphQL response carries errors");
        return Err(HasuraError::new(body).into());
    }

    match body {
        Value::Object(mut envelope) => Ok(envelope
            .remove("data")
            .unwrap_or_else(|| Value::Object(Map::new()))),
        other => Err(ClientError::UnexpectedResponse { response: other }),
    }
}

/// Normalizes a `run_sql` response into rows.
///
/// - `TuplesOk`: the first `result` row holds the column names, each
///   following row is zipped against it
/// - `CommandOk`: a single `{"ok": true}` row
///
/// # Errors
///
/// Returns [`ClientError::Hasura`] when the body has an `error` key, and
/// [`ClientError::UnexpectedResponse`] for any other shape.
///
/// # Example
///
/// ```rust
/// use hasura::clients::parse_sql_response;
/// use serde_json::json;
///
/// let rows = parse_sql_response(json!({
///     "result_type": "TuplesOk",
///     "result": [["id", "name"], ["1", "Alice"]],
/// }))
/// .unwrap();
///
/// assert_eq!(serde_json::Value::from(rows[0].clone()), json!({"id": "1", "name": "Alice"}));
/// ```
pub fn parse_sql_response(body: Value) -> Result<Vec<Row>, ClientError> {
    if body.get("error").is_some() {
        tracing::debug!("Hasura run_sql response carries an error");
        return Err(HasuraError::new(body).into());
    }

    match body.get("result_type").and_then(Value::as_str) {
        Some(COMMAND_OK) => {
            let mut row = Row::new();
            row.insert("ok".to_string(), Value::Bool(true));
            Ok(vec![row])
        }
        Some(TUPLES_OK) => match tabular_rows(&body) {
            Some(rows) => Ok(rows),
            None => Err(ClientError::UnexpectedResponse { response: body }),
        },
        _ => Err(ClientError::UnexpectedResponse { response: body }),
    }
}

/// Zips data rows against the header row, or `None` if `result` is not a
/// list of lists with string column names.
fn tabular_rows(body: &Value) -> Option<Vec<Row>> {
    let (header, data) = body.get("result")?.as_array()?.split_first()?;

    let columns = header
        .as_array()?
        .iter()
        .map(|name| name.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()?;

    data.iter()
        .map(|row| {
            let values = row.as_array()?;
            Some(columns.iter().cloned().zip(values.iter().cloned()).collect())
        })
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
