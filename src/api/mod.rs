//! ConductR control API access
//!
//! Blocking HTTP client for the bundle endpoints.

pub mod client;

pub use client::{ConductrClient, LoadResponse};
