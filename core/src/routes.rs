//! Route builder for the catalog backend.
//!
//! # Design
//! `Routes` is a pure URL factory: given a base URL and request parameters it
//! produces the exact request URL, nothing else. Parameters are interpolated
//! verbatim — this layer performs **no percent-encoding**, so a category of
//! `"cpu cooler"` appears literally in the produced URL. The backend this
//! client targets accepts those URLs, and the test suite pins the unescaped
//! form; changing it would break compatibility. See the repository design
//! notes before touching this.

/// Page cursor used when the caller omits one. Pages are positive integers
/// encoded as strings.
pub const DEFAULT_PAGE: &str = "1";

/// Pure URL factory for every backend route.
#[derive(Debug, Clone)]
pub struct Routes {
    base_url: String,
}

impl Routes {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/components?page={page}`
    pub fn components(&self, page: Option<&str>) -> String {
        format!(
            "{}/components?page={}",
            self.base_url,
            page.unwrap_or(DEFAULT_PAGE)
        )
    }

    /// `{base}/components/{category}?page={page}`
    pub fn components_by_category(&self, category: &str, page: Option<&str>) -> String {
        format!(
            "{}/components/{category}?page={}",
            self.base_url,
            page.unwrap_or(DEFAULT_PAGE)
        )
    }

    /// `{base}/components/{category}/{brand}?page={page}`
    pub fn components_by_brand(&self, category: &str, brand: &str, page: Option<&str>) -> String {
        format!(
            "{}/components/{category}/{brand}?page={}",
            self.base_url,
            page.unwrap_or(DEFAULT_PAGE)
        )
    }

    /// `{base}/components/item/{id}?page={page}`
    pub fn component_by_id(&self, id: &str, page: Option<&str>) -> String {
        format!(
            "{}/components/item/{id}?page={}",
            self.base_url,
            page.unwrap_or(DEFAULT_PAGE)
        )
    }

    /// `{base}/health`
    pub fn health(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> Routes {
        Routes::new("http://localhost:8080")
    }

    #[test]
    fn components_defaults_to_page_one() {
        assert_eq!(
            routes().components(None),
            "http://localhost:8080/components?page=1"
        );
    }

    #[test]
    fn components_uses_given_page() {
        assert_eq!(
            routes().components(Some("7")),
            "http://localhost:8080/components?page=7"
        );
    }

    #[test]
    fn category_route_contains_category_and_page() {
        assert_eq!(
            routes().components_by_category("cpu", Some("3")),
            "http://localhost:8080/components/cpu?page=3"
        );
    }

    #[test]
    fn category_with_space_is_not_encoded() {
        assert_eq!(
            routes().components_by_category("cpu cooler", None),
            "http://localhost:8080/components/cpu cooler?page=1"
        );
    }

    #[test]
    fn brand_route_contains_both_segments() {
        assert_eq!(
            routes().components_by_brand("gpu", "NVIDIA", Some("2")),
            "http://localhost:8080/components/gpu/NVIDIA?page=2"
        );
    }

    #[test]
    fn brand_with_space_is_not_encoded() {
        assert_eq!(
            routes().components_by_brand("case", "Fractal Design", None),
            "http://localhost:8080/components/case/Fractal Design?page=1"
        );
    }

    #[test]
    fn punctuation_passes_through_verbatim() {
        assert_eq!(
            routes().components_by_brand("peripherals", "Logitech & Co.", Some("2")),
            "http://localhost:8080/components/peripherals/Logitech & Co.?page=2"
        );
    }

    #[test]
    fn item_route_contains_id_and_page() {
        assert_eq!(
            routes().component_by_id("12345", None),
            "http://localhost:8080/components/item/12345?page=1"
        );
    }

    #[test]
    fn health_route_has_no_query() {
        assert_eq!(routes().health(), "http://localhost:8080/health");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let r = Routes::new("http://localhost:8080/");
        assert_eq!(r.components(None), "http://localhost:8080/components?page=1");
    }
}
