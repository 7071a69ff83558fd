//! Shape descriptors and response validation.
//!
//! # Design
//! Shape descriptors are JSON Schema documents held as `serde_json::Value`
//! statics, compiled on use with the `jsonschema` crate. `validate` collects
//! *every* violation and joins them into a single `Invalid API response: …`
//! message; failures are logged before the error is returned so diagnostics
//! survive even when the caller only renders the message. `is_valid` is the
//! lenient sibling for callers that prefer a boolean probe over an error.
//!
//! Only the health accessor runs validation today; the remaining schemas
//! describe the other resource kinds the backend serves (retailers, prices,
//! user builds) and are part of the public surface for downstream consumers.

use std::sync::LazyLock;

use serde_json::{json, Value};

use crate::error::ApiError;

/// Component categories accepted by the backend.
pub const CATEGORIES: [&str; 12] = [
    "cpu",
    "motherboard",
    "memory",
    "storage",
    "gpu",
    "powersupply",
    "case",
    "cooler",
    "monitor",
    "expansioncard",
    "peripherals",
    "other",
];

/// `{ message: string }` — health probe response.
pub static HEALTH_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": ["message"],
        "properties": {
            "message": { "type": "string" }
        }
    })
});

/// A single component as the backend stores it: numeric server-assigned id,
/// category enum, free-form specs object.
pub static COMPONENT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": ["id", "category", "brand", "model", "specs", "created_at"],
        "properties": {
            "id": { "type": "integer", "minimum": 1 },
            "category": { "enum": CATEGORIES },
            "brand": { "type": "string" },
            "model": { "type": "string" },
            "sku": { "type": ["string", "null"] },
            "upc": { "type": ["string", "null"] },
            "specs": { "type": "object" },
            "created_at": { "type": "string", "format": "date-time" }
        }
    })
});

/// List-endpoint body: a sequence of components.
pub static COMPONENT_LIST_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "array",
        "items": &*COMPONENT_SCHEMA
    })
});

pub static RETAILER_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": ["id", "name", "is_active", "created_at", "updated_at"],
        "properties": {
            "id": { "type": "integer", "minimum": 1 },
            "name": { "type": "string" },
            "website_url": { "type": ["string", "null"], "format": "uri" },
            "logo_url": { "type": ["string", "null"], "format": "uri" },
            "shipping_info": { "type": "object" },
            "return_policy": { "type": "object" },
            "is_active": { "type": "boolean" },
            "created_at": { "type": "string", "format": "date-time" },
            "updated_at": { "type": "string", "format": "date-time" }
        }
    })
});

pub static PRICE_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": [
            "id", "component_id", "retailer_id", "region", "currency",
            "price", "in_stock", "last_updated", "created_at"
        ],
        "properties": {
            "id": { "type": "integer", "minimum": 1 },
            "component_id": { "type": "integer", "minimum": 1 },
            "retailer_id": { "type": "integer", "minimum": 1 },
            "region": { "type": "string", "minLength": 2 },
            "currency": { "type": "string", "minLength": 3, "maxLength": 3 },
            "price": { "type": "number", "minimum": 0 },
            "in_stock": { "type": "boolean" },
            "product_url": { "type": ["string", "null"], "format": "uri" },
            "last_updated": { "type": "string", "format": "date-time" },
            "created_at": { "type": "string", "format": "date-time" }
        }
    })
});

pub static USER_BUILD_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "required": [
            "id", "user_id", "name", "is_public", "is_complete",
            "currency", "region", "created_at", "updated_at"
        ],
        "properties": {
            "id": { "type": "integer", "minimum": 1 },
            "user_id": { "type": "string", "minLength": 1 },
            "name": { "type": "string" },
            "description": { "type": ["string", "null"] },
            "is_public": { "type": "boolean" },
            "is_complete": { "type": "boolean" },
            "total_price": { "type": ["number", "null"], "minimum": 0 },
            "currency": { "type": "string", "minLength": 3, "maxLength": 3 },
            "region": { "type": "string", "minLength": 2 },
            "created_at": { "type": "string", "format": "date-time" },
            "updated_at": { "type": "string", "format": "date-time" }
        }
    })
});

fn compile(schema: &Value) -> Result<jsonschema::Validator, ApiError> {
    jsonschema::options()
        .should_validate_formats(true)
        .build(schema)
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Validate `data` against `schema`, aggregating every violated constraint
/// into one `Invalid API response: …` error.
pub fn validate(schema: &Value, data: &Value) -> Result<(), ApiError> {
    let validator = compile(schema)?;
    let violations: Vec<String> = validator.iter_errors(data).map(|e| e.to_string()).collect();
    if violations.is_empty() {
        return Ok(());
    }
    let joined = violations.join(", ");
    tracing::error!(violations = %joined, "API response validation failed");
    Err(ApiError::InvalidResponse(joined))
}

/// Lenient probe: true when `data` conforms to `schema`. Failures are still
/// logged by `validate` but not surfaced as errors.
pub fn is_valid(schema: &Value, data: &Value) -> bool {
    validate(schema, data).is_ok()
}
