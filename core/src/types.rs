//! Client-facing records for the catalog API.
//!
//! # Design
//! These records pass through the client unchanged except for one rule: a
//! numeric server-assigned `id` becomes its string form at the response
//! boundary, exactly once. Everything the server sends that this crate does
//! not model (error objects, future columns) is captured in the flattened
//! `extra` map, so normalize-then-serialize reproduces the wire object
//! byte-for-byte apart from the id. Known fields other than `id` are
//! optional for the same reason — a failure body like
//! `{ "error": "Component not found" }` still decodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog component as surfaced to callers. Immutable value
/// object; constructed fresh on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Component {
    /// Server-assigned identifier, stringified at the response boundary.
    /// Empty when the server sent no id at all (only possible on list
    /// responses carrying non-component payloads).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// Free-form key-value specification map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Fields the server sent that this crate does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn component_decodes_full_record() {
        let c: Component = serde_json::from_value(json!({
            "id": "123",
            "category": "cpu",
            "brand": "intel",
            "model": "Core i7-14700K",
            "sku": "BX8071514700K",
            "upc": null,
            "specs": { "cores": 20 },
            "created_at": "2024-01-15T10:30:00Z"
        }))
        .unwrap();
        assert_eq!(c.id, "123");
        assert_eq!(c.category.as_deref(), Some("cpu"));
        assert!(c.extra.is_empty());
    }

    #[test]
    fn component_keeps_unknown_fields_in_extra() {
        let c: Component = serde_json::from_value(json!({
            "id": "1",
            "error": "Component not found",
            "customField": "preserved"
        }))
        .unwrap();
        assert_eq!(c.extra["error"], "Component not found");
        assert_eq!(c.extra["customField"], "preserved");
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let c: Component = serde_json::from_value(json!({
            "error": "Component not found"
        }))
        .unwrap();
        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back, json!({ "error": "Component not found" }));
    }
}
