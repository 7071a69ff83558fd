//! Stateless HTTP request builder and response parser for the catalog API.
//!
//! # Design
//! `CatalogClient` holds only the route builder and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping
//! the core deterministic and free of I/O dependencies; transport failures
//! therefore propagate in the executor's own error type and never reach this
//! module.
//!
//! Parsing runs through one `decode` step parameterized by an optional shape
//! descriptor. With a descriptor the full validated-fetch contract applies:
//! non-2xx statuses fail with `HTTP {status}: {text}`, then the body is
//! parsed and schema-validated. Without one the body is parsed and passed
//! through regardless of status — the component endpoints rely on this, a
//! failure body becomes an ordinary (if odd) record the caller must tolerate.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::routes::Routes;
use crate::schema::{self, HEALTH_SCHEMA};
use crate::types::{Component, Health};

/// Environment variable selecting the backend host.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Backend assumed when `BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Synchronous, stateless client for the catalog API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    routes: Routes,
}

impl CatalogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            routes: Routes::new(base_url),
        }
    }

    /// Construct against the host named by `BACKEND_URL`, falling back to
    /// the local default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BACKEND_URL_VAR).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        Self::new(&base_url)
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn build_list_components(&self, page: Option<&str>) -> HttpRequest {
        get(self.routes.components(page))
    }

    pub fn build_components_by_category(&self, category: &str, page: Option<&str>) -> HttpRequest {
        get(self.routes.components_by_category(category, page))
    }

    pub fn build_components_by_brand(
        &self,
        category: &str,
        brand: &str,
        page: Option<&str>,
    ) -> HttpRequest {
        get(self.routes.components_by_brand(category, brand, page))
    }

    pub fn build_component_by_id(&self, id: &str, page: Option<&str>) -> HttpRequest {
        get(self.routes.component_by_id(id, page))
    }

    pub fn build_health(&self) -> HttpRequest {
        get(self.routes.health())
    }

    /// Parse a list-endpoint response (all components, by category, or by
    /// category+brand).
    ///
    /// The status is deliberately not checked: a failure body parses like any
    /// other, and a body that is not a sequence is wrapped into a one-element
    /// sequence before normalization.
    pub fn parse_components(&self, response: HttpResponse) -> Result<Vec<Component>, ApiError> {
        let data = decode(&response, None)?;
        let items = match data {
            Value::Array(items) => items,
            other => vec![other],
        };
        items.into_iter().map(normalize_component).collect()
    }

    /// Parse a by-id response. If the body lacks an `id` field, the
    /// originally requested id is echoed back in its place.
    pub fn parse_component_by_id(
        &self,
        requested_id: &str,
        response: HttpResponse,
    ) -> Result<Component, ApiError> {
        let mut data = decode(&response, None)?;
        if let Some(obj) = data.as_object_mut() {
            if !obj.contains_key("id") {
                obj.insert("id".to_string(), Value::String(requested_id.to_string()));
            }
        }
        normalize_component(data)
    }

    /// Parse a health-probe response through the full validated-fetch
    /// contract: enforce 2xx, parse, schema-check, decode.
    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        let data = decode(&response, Some(&*HEALTH_SCHEMA))?;
        serde_json::from_value(data).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: Vec::new(),
    }
}

/// Unified fetch-and-validate decode step.
///
/// With a shape descriptor the response must be 2xx and the parsed body must
/// conform; without one the body is parsed as-is, whatever the status. The
/// unvalidated path is the degenerate case of "no descriptor supplied".
fn decode(response: &HttpResponse, shape: Option<&Value>) -> Result<Value, ApiError> {
    if shape.is_some() && !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            status_text: response.status_text.clone(),
        });
    }
    let data: Value = serde_json::from_str(&response.body)
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    if let Some(shape) = shape {
        schema::validate(shape, &data)?;
    }
    Ok(data)
}

/// Apply the single normalization rule: a numeric `id` becomes its string
/// form. No other field is transformed.
fn normalize_component(mut data: Value) -> Result<Component, ApiError> {
    if let Some(obj) = data.as_object_mut() {
        if let Some(id) = obj.get("id") {
            if let Some(n) = id.as_i64() {
                obj.insert("id".to_string(), Value::String(n.to_string()));
            }
        }
    }
    serde_json::from_value(data).map_err(|e| ApiError::Deserialization(e.to_string()))
}
