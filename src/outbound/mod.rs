//! Outbound (driven) adapters.
//!
//! Everything the domain calls out to lives here: the Diesel persistence
//! adapters and the HTTP content-store client.

pub mod persistence;
pub mod storage;
