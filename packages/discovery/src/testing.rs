//! Fixtures for tests of code built on the discovery library.
//!
//! Coordinates are city-hall level; `fixed_now` pins the clock so window
//! boundaries are reproducible.

use chrono::{DateTime, TimeZone, Utc};

use crate::common::utils::geo::GeoPoint;
use crate::domains::discovery::models::{CleanupEvent, Community};

pub const SEATTLE: GeoPoint = GeoPoint {
    latitude: 47.6062,
    longitude: -122.3321,
};

pub const PORTLAND: GeoPoint = GeoPoint {
    latitude: 45.5152,
    longitude: -122.6784,
};

pub const ISSAQUAH: GeoPoint = GeoPoint {
    latitude: 47.5301,
    longitude: -122.0326,
};

/// 2024-04-20T12:00:00Z
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 20, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Enabled, unwindowed Seattle community.
pub fn seattle() -> Community {
    Community::new("Seattle", "seattle")
        .in_city("Seattle", "WA")
        .at(SEATTLE.latitude, SEATTLE.longitude)
}

/// Enabled, unwindowed Portland community.
pub fn portland() -> Community {
    Community::new("Portland", "portland")
        .in_city("Portland", "OR")
        .at(PORTLAND.latitude, PORTLAND.longitude)
}

pub fn issaquah_cleanup() -> CleanupEvent {
    CleanupEvent::new("Issaquah Cleanup", "issaquah-cleanup", fixed_now())
        .at(ISSAQUAH.latitude, ISSAQUAH.longitude)
}
