//! Synchronous API client core for the PC-component catalog service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `CatalogClient` is stateless — it holds only the route builder.
//! - Each read operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit and the
//!   transport is injected rather than resolved from ambient state.
//! - One decode step serves both fetch flavors: the health probe runs the
//!   full validated contract (2xx enforced, body schema-checked), while the
//!   component endpoints parse bodies as-is and tolerate failure payloads.
//! - The single normalization rule: numeric server-assigned ids are
//!   stringified at the response boundary; no other field is transformed.
//! - Route parameters are interpolated verbatim, without percent-encoding —
//!   a pinned compatibility behavior, not an oversight.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod routes;
pub mod schema;
pub mod types;

pub use client::{CatalogClient, DEFAULT_BACKEND_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use routes::Routes;
pub use types::{Component, Health};
