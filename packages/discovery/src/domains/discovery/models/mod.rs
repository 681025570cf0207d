//! Discovery domain models.

pub mod cleanup_event;
pub mod community;
pub mod discovery_query;
pub mod partner;
pub mod traits;

pub use cleanup_event::*;
pub use community::*;
pub use discovery_query::*;
pub use partner::*;
pub use traits::*;
