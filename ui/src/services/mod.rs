//! Infrastructure Services
//!
//! This module provides the infrastructure the registry UI sits on:
//!
//! - **client**: REST client for the registry backend (collection reads,
//!   university and degree registration)
//! - **config**: backend endpoint configuration
//!
//! The services are designed to be WASM-first, using browser-backed HTTP and
//! async functions without Send/Sync bounds.

pub mod client;
pub mod config;
