use crate::error::{ApiError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys a backend list endpoint may wrap its array in
const LIST_KEYS: &[&str] = &[
    "data",
    "items",
    "posts",
    "blogs",
    "partners",
    "properties",
    "projects",
    "contacts",
    "reviews",
    "wishlist",
];

/// Wrapper keys any entity endpoint may use; resource-specific keys are
/// passed by each accessor
const ENTITY_KEYS: &[&str] = &["data", "item"];

/// Canonical list shape every list accessor returns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, total: None }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> IntoIterator for ListPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Acknowledgement returned by delete and status endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

fn total_of(map: &serde_json::Map<String, Value>) -> Option<u64> {
    map.get("total")
        .or_else(|| map.get("count"))
        .and_then(Value::as_u64)
        .or_else(|| map.get("pagination").and_then(|p| p.get("total")).and_then(Value::as_u64))
}

/// Find the array inside a list response, with whatever total it reports
fn locate_list(body: Value) -> Result<(Vec<Value>, Option<u64>)> {
    match body {
        Value::Array(items) => Ok((items, None)),
        Value::Object(mut map) => {
            let total = total_of(&map);
            for key in LIST_KEYS {
                match map.remove(*key) {
                    Some(Value::Array(items)) => return Ok((items, total)),
                    Some(nested @ Value::Object(_)) => {
                        let (items, inner_total) = locate_list(nested)?;
                        return Ok((items, inner_total.or(total)));
                    }
                    Some(other) => {
                        map.insert((*key).to_string(), other);
                    }
                    None => {}
                }
            }
            Err(ApiError::UnexpectedShape(format!(
                "no list found among keys {:?}",
                map.keys().collect::<Vec<_>>()
            )))
        }
        other => Err(ApiError::UnexpectedShape(format!("expected a list, got {other}"))),
    }
}

/// Normalize any list envelope into a [`ListPage`]
pub fn list<T: DeserializeOwned>(body: Value) -> Result<ListPage<T>> {
    let (raw, total) = locate_list(body)?;
    let items = raw
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(ListPage { items, total })
}

/// A body carrying its own id is the entity itself unless it also says
/// `success`
fn is_envelope(map: &serde_json::Map<String, Value>) -> bool {
    map.contains_key("success") || !(map.contains_key("_id") || map.contains_key("id"))
}

/// Unwrap a single entity from its envelope, or take the body as-is.
///
/// Only `data`, `item` and the accessor's own `wrappers` are unwrapped, so
/// object-valued entity fields (a partner's `contact`) are never mistaken for
/// an envelope.
pub fn entity<T: DeserializeOwned>(body: Value, wrappers: &[&str]) -> Result<T> {
    let body = match body {
        Value::Object(mut map) if is_envelope(&map) => {
            let wrapped = ENTITY_KEYS
                .iter()
                .chain(wrappers)
                .find(|key| map.get(**key).is_some_and(Value::is_object))
                .and_then(|key| map.remove(*key));
            wrapped.unwrap_or(Value::Object(map))
        }
        other => other,
    };
    Ok(serde_json::from_value(body)?)
}

/// Read an acknowledgement; an empty body counts as success
pub fn ack(body: Value) -> Result<Ack> {
    match body {
        Value::Object(_) => Ok(serde_json::from_value(body)?),
        _ => Ok(Ack {
            success: true,
            message: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn bare_array() {
        let page: ListPage<Item> = list(json!([{ "id": 1 }, { "id": 2 }])).unwrap();
        assert_eq!(page.items, vec![Item { id: 1 }, Item { id: 2 }]);
        assert_eq!(page.total, None);
    }

    #[test]
    fn success_data_envelope() {
        let page: ListPage<Item> = list(json!({ "success": true, "data": [{ "id": 7 }], "total": 31 })).unwrap();
        assert_eq!(page.items, vec![Item { id: 7 }]);
        assert_eq!(page.total, Some(31));
    }

    #[test]
    fn resource_named_envelopes() {
        for key in ["blogs", "partners", "posts"] {
            let page: ListPage<Item> = list(json!({ key: [{ "id": 3 }] })).unwrap();
            assert_eq!(page.len(), 1, "{key}");
        }
    }

    #[test]
    fn nested_data_object_with_pagination() {
        let body = json!({
            "success": true,
            "data": { "posts": [{ "id": 1 }], "pagination": { "total": 12 } }
        });
        let page: ListPage<Item> = list(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, Some(12));
    }

    #[test]
    fn object_without_list_is_rejected() {
        let err = list::<Item>(json!({ "success": false, "message": "nope" })).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedShape(_)));
    }

    #[test]
    fn entity_unwraps_known_wrappers() {
        let wrapped: Item = entity(json!({ "success": true, "data": { "id": 5 } }), &[]).unwrap();
        assert_eq!(wrapped, Item { id: 5 });
        let post: Item = entity(json!({ "success": true, "post": { "id": 6 } }), &["post"]).unwrap();
        assert_eq!(post, Item { id: 6 });
        let bare: Item = entity(json!({ "id": 8 }), &[]).unwrap();
        assert_eq!(bare, Item { id: 8 });
    }

    #[derive(Debug, Deserialize)]
    struct Owner {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: String,
        contact: serde_json::Value,
    }

    #[test]
    fn object_fields_of_a_bare_entity_are_not_unwrapped() {
        let body = json!({ "_id": "p1", "name": "Emaar", "contact": { "phone": "+971" } });
        let owner: Owner = entity(body, &["partner"]).unwrap();
        assert_eq!(owner.id, "p1");
        assert_eq!(owner.name, "Emaar");
        assert_eq!(owner.contact["phone"], "+971");
    }

    #[test]
    fn foreign_wrapper_keys_are_ignored() {
        let body = json!({ "name": "Emaar", "contact": { "id": "c9", "name": "Desk" } });
        let owner: serde_json::Value = entity(body, &["partner"]).unwrap();
        assert_eq!(owner["name"], "Emaar");
    }

    #[test]
    fn empty_ack_is_success() {
        assert!(ack(json!({})).unwrap().success);
        let failed = ack(json!({ "success": false, "message": "locked" })).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("locked"));
    }
}
