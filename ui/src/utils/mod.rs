//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **media**: logo file helpers (MIME inference, blob object URLs)
//! - **validation**: presentation helpers for field validation state

pub mod console_macros;
pub mod media;
pub mod validation;

pub use validation::*;
