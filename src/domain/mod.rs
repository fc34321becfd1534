//! Domain models for conductr
//!
//! Bundle records as reported by the server, id matching, and the
//! configuration trees read from bundle archives.

pub mod api_version;
pub mod bundle;
pub mod bundle_file;
pub mod conf;
pub mod identifier;

pub use api_version::ApiVersion;
pub use bundle::{short_id, BundleAttributes, BundleExecution, BundleRecord, DisplayId};
pub use bundle_file::BundleFile;
pub use conf::{Accessor, ConfigTree, BUNDLE_CONF};
pub use identifier::filter_by_id_or_name;
