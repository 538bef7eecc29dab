//! Client for the Shipyard server-management REST API.
//!
//! Layered the way the API reads: [`client::ApiClient`] owns the base URL
//! and bearer credential and speaks HTTP; [`resources`] holds one façade
//! per domain area pairing each operation with its request and response
//! mapping; [`types`] holds the immutable data objects those responses
//! decode into.

pub mod client;
pub mod error;
pub mod resources;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
