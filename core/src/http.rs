//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test, and doubles as the dependency-injection seam for the transport:
//! there is no ambient global fetch to substitute, the executor simply sits
//! between `build_*` and `parse_*`.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved across
//! threads or stored without lifetime concerns.

/// HTTP method for a request. The catalog surface is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// An HTTP request described as plain data.
///
/// Built by `CatalogClient::build_*` methods. The caller is responsible for
/// executing this request against the network and returning the corresponding
/// `HttpResponse`. `headers` is the pass-through options bag: anything placed
/// here travels to the executor unchanged; nothing is constructed internally.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to `CatalogClient::parse_*` methods. `status_text` carries the reason
/// phrase so status failures can be reported as `HTTP {status}: {text}`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// True when the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
