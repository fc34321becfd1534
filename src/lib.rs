//! conductr - ConductR bundle client library
//!
//! This library provides the core functionality for listing, querying and
//! loading bundles on a ConductR cluster.
//!
//! # Modules
//!
//! - [`api`]: ConductR control API client
//! - [`archive`]: Bundle archive access layer
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models and id matching
//! - [`error`]: Error types
//! - [`logging`]: Logger setup
//! - [`services`]: Overlay resolution, payload assembly and bundle resolution

pub mod api;
pub mod archive;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod services;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
