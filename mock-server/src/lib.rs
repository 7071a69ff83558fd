//! In-memory implementation of the catalog backend HTTP surface.
//!
//! Serves a fixed seed catalog over the same routes as the real backend:
//! component listing with `page` pagination, category and category+brand
//! filtering (brand matched case-insensitively, as the backend lowercases
//! the brand path segment), item lookup by numeric id, and a health probe.
//! Used by the core crate's integration tests and for local development.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Rows per page, matching the real backend's default.
pub const PAGE_SIZE: usize = 50;

/// A catalog component as stored server-side: numeric id, wire field names
/// from the backend's component model.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Component {
    pub id: i64,
    pub category: String,
    pub brand: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    pub specs: Value,
    pub created_at: String,
}

#[derive(Deserialize, Default)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Pages are positive integers encoded as strings; anything else is
    /// treated as page 1.
    fn number(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

type Catalog = Arc<Vec<Component>>;

fn seed() -> Vec<Component> {
    fn component(
        id: i64,
        category: &str,
        brand: &str,
        model: &str,
        sku: Option<&str>,
        specs: Value,
    ) -> Component {
        Component {
            id,
            category: category.to_string(),
            brand: brand.to_string(),
            model: model.to_string(),
            sku: sku.map(str::to_string),
            upc: None,
            specs,
            created_at: "2024-01-15T10:30:00Z".to_string(),
        }
    }

    vec![
        component(
            1,
            "cpu",
            "intel",
            "Core i7-14700K",
            Some("BX8071514700K"),
            json!({ "cores": 20, "threads": 28, "socket": "LGA1700" }),
        ),
        component(
            2,
            "cpu",
            "amd",
            "Ryzen 7 7800X3D",
            Some("100-100000910WOF"),
            json!({ "cores": 8, "threads": 16, "socket": "AM5" }),
        ),
        component(
            3,
            "gpu",
            "nvidia",
            "GeForce RTX 4070",
            None,
            json!({ "memory_gb": 12, "interface": "PCIe 4.0" }),
        ),
        component(
            4,
            "case",
            "fractal design",
            "North",
            Some("FD-C-NOR1C-01"),
            json!({ "form_factor": "ATX", "color": "charcoal" }),
        ),
        component(
            5,
            "memory",
            "corsair",
            "Vengeance 32GB DDR5-6000",
            None,
            json!({ "capacity_gb": 32, "speed": "DDR5-6000" }),
        ),
    ]
}

pub fn app() -> Router {
    let catalog: Catalog = Arc::new(seed());
    Router::new()
        .route("/health", get(health))
        .route("/components", get(list_components))
        .route("/components/{category}", get(components_by_category))
        .route("/components/{category}/{brand}", get(components_by_brand))
        .route("/components/item/{id}", get(component_by_id))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn paginate(components: Vec<Component>, page: usize) -> Vec<Component> {
    components
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect()
}

async fn health() -> Json<Value> {
    Json(json!({ "message": "Backend is running" }))
}

async fn list_components(
    State(catalog): State<Catalog>,
    Query(query): Query<PageQuery>,
) -> Json<Vec<Component>> {
    Json(paginate(catalog.as_ref().clone(), query.number()))
}

async fn components_by_category(
    State(catalog): State<Catalog>,
    Path(category): Path<String>,
    Query(query): Query<PageQuery>,
) -> Json<Vec<Component>> {
    let matches: Vec<Component> = catalog
        .iter()
        .filter(|c| c.category == category)
        .cloned()
        .collect();
    Json(paginate(matches, query.number()))
}

async fn components_by_brand(
    State(catalog): State<Catalog>,
    Path((category, brand)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
) -> Json<Vec<Component>> {
    let brand = brand.to_lowercase();
    let matches: Vec<Component> = catalog
        .iter()
        .filter(|c| c.category == category && c.brand == brand)
        .cloned()
        .collect();
    Json(paginate(matches, query.number()))
}

async fn component_by_id(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
) -> Response {
    let found = id
        .parse::<i64>()
        .ok()
        .and_then(|id| catalog.iter().find(|c| c.id == id).cloned());
    match found {
        Some(component) => Json(component).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Component not found" })),
        )
            .into_response(),
    }
}
