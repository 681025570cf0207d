//! Candidate store implementations.
//!
//! Available backends:
//! - `MemoryStore` - In-memory candidates (tests, embedding in a larger service)
//! - `JsonFileStore` - A JSON array on disk, re-read on every load

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
