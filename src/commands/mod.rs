//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod info;
pub mod load;

pub use info::run_info;
pub use load::run_load;
