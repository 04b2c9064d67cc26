//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod error;
pub mod files;
pub mod health;
pub mod profiles;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod uploads;

pub use error::ApiResult;
