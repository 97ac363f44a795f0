//! REST operations against the registry backend.
//!
//! Endpoint functions live here, grouped per collection. All functions take
//! the [`ApiClient`](super::ApiClient) as first parameter; the client type
//! itself only exposes thin wrapper methods.

pub mod degrees;
pub mod universities;
