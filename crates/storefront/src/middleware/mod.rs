//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transactions)
//! 2. CORS
//! 3. `TraceLayer` (request span)
//! 4. Request ID (recorded on the span)
//! 5. Security headers
//!
//! Authentication is not a layer: protected handlers take the
//! [`RequireAuth`] / [`RequireAdmin`] extractors.

pub mod auth;
pub mod request_id;
pub mod security_headers;

pub use auth::{RequireAdmin, RequireAuth};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
