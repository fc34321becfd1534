//! Service layer for bundle operations
//!
//! Services encapsulate configuration overlay resolution, load payload
//! assembly, and bundle resolution.

pub mod overlay;
pub mod payload;
pub mod resolver;

pub use overlay::OverlayResolver;
pub use payload::{strategy_for, FieldValue, LoadPayload, PayloadField, PayloadStrategy};
pub use resolver::BundleResolver;
