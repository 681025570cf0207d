//! Capability traits the discovery operations are written against.
//!
//! Concrete records implement whichever of these apply; the operations only
//! ever see the trait surface, never a storage-backed type.

use chrono::{DateTime, Utc};

pub use crate::common::utils::geo::Locatable;

/// An entity that can be switched off and optionally limited to a date window.
pub trait TimeWindowed {
    fn enabled(&self) -> bool;

    /// Inclusive start of the active window, unbounded when `None`.
    fn window_start(&self) -> Option<DateTime<Utc>>;

    /// Inclusive end of the active window, unbounded when `None`.
    fn window_end(&self) -> Option<DateTime<Utc>>;
}

/// An entity addressable by a human-readable slug.
pub trait Slugged {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;

    /// The stored slug, as persisted (not necessarily normalized).
    fn slug(&self) -> &str;
}

/// Serde default for `enabled` flags: records without one are live.
pub(crate) fn enabled_by_default() -> bool {
    true
}
