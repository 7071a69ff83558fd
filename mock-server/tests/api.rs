use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Component};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

// --- health ---

#[tokio::test]
async fn health_returns_message() {
    let resp = get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "message": "Backend is running" }));
}

// --- list ---

#[tokio::test]
async fn list_components_returns_seed_catalog() {
    let resp = get("/components").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let components: Vec<Component> = body_json(resp).await;
    assert_eq!(components.len(), 5);
    assert!(components.iter().all(|c| c.id >= 1));
}

#[tokio::test]
async fn list_components_page_past_end_is_empty() {
    let resp = get("/components?page=2").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let components: Vec<Component> = body_json(resp).await;
    assert!(components.is_empty());
}

#[tokio::test]
async fn list_components_junk_page_falls_back_to_first() {
    let resp = get("/components?page=abc").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let components: Vec<Component> = body_json(resp).await;
    assert_eq!(components.len(), 5);
}

// --- category ---

#[tokio::test]
async fn category_filter_matches_exactly() {
    let resp = get("/components/cpu").await;
    let components: Vec<Component> = body_json(resp).await;
    assert_eq!(components.len(), 2);
    assert!(components.iter().all(|c| c.category == "cpu"));
}

#[tokio::test]
async fn unknown_category_yields_empty_list() {
    let resp = get("/components/toaster").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let components: Vec<Component> = body_json(resp).await;
    assert!(components.is_empty());
}

// --- brand ---

#[tokio::test]
async fn brand_filter_is_case_insensitive() {
    let resp = get("/components/gpu/NVIDIA").await;
    let components: Vec<Component> = body_json(resp).await;
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].brand, "nvidia");
}

#[tokio::test]
async fn brand_filter_requires_matching_category() {
    let resp = get("/components/cpu/nvidia").await;
    let components: Vec<Component> = body_json(resp).await;
    assert!(components.is_empty());
}

// --- item ---

#[tokio::test]
async fn item_lookup_returns_component() {
    let resp = get("/components/item/3").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let component: Component = body_json(resp).await;
    assert_eq!(component.id, 3);
    assert_eq!(component.model, "GeForce RTX 4070");
}

#[tokio::test]
async fn unknown_item_returns_404_error_body() {
    let resp = get("/components/item/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "error": "Component not found" }));
}

#[tokio::test]
async fn non_numeric_item_id_returns_404() {
    let resp = get("/components/item/abc").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
