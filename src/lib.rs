//! Filehub library modules.
//!
//! A file-sharing community backend: accounts with a role-gated upload
//! permission, a file registry with download accounting, and profiles with
//! derived file aggregates.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware attached to every route.
pub use middleware::trace::Trace;
