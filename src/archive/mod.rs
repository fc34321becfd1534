//! Archive access layer
//!
//! Provides a trait-based abstraction over zip archives for testability.

pub mod traits;
pub mod zip_reader;

pub use traits::ArchiveReader;
pub use zip_reader::ZipArchiveReader;
