use crate::error::{ApiError, Result};
use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

/// Sentinel filter value meaning "no filter"
pub const ALL: &str = "all";

/// Whether a filter value is left out of the query string: null, empty,
/// `false`, zero and the `"all"` sentinel
fn is_omitted(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty() || s == ALL,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Build a query string (without the leading `?`) from a filter object.
///
/// Keys follow the filter's serialized field names. Arrays are joined with
/// commas.
pub fn build_query<F: Serialize + ?Sized>(filters: &F) -> Result<String> {
    let value = serde_json::to_value(filters).map_err(|e| ApiError::Request(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(String::new()),
        other => return Err(ApiError::Request(format!("filters must be an object, got {other}"))),
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in map.iter().filter(|(_, v)| !is_omitted(v)) {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        };
        serializer.append_pair(key, &text);
    }
    Ok(serializer.finish())
}

/// Join a path and a filter object into `path?query`, or just `path`
pub fn with_query<F: Serialize + ?Sized>(path: &str, filters: &F) -> Result<String> {
    let query = build_query(filters)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}
