//! Great-circle distance and radius membership.
//!
//! All distances are computed with the Haversine formula on a sphere of
//! Earth's mean radius. Nothing here validates coordinate ranges; NaN inputs
//! yield NaN distances, which compare false against any radius.

use serde::{Deserialize, Serialize};

/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Kilometres per statute mile.
pub const KM_PER_MILE: f64 = 1.609344;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Distance to `other` in miles.
    pub fn distance_miles_to(&self, other: &GeoPoint) -> f64 {
        distance_miles(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Anything that may carry a coordinate pair.
///
/// A record with only one of the two coordinates is unlocated.
pub trait Locatable {
    fn latitude(&self) -> Option<f64>;
    fn longitude(&self) -> Option<f64>;

    /// Both coordinates, or `None` if either is missing.
    fn location(&self) -> Option<GeoPoint> {
        match (self.latitude(), self.longitude()) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

impl Locatable for GeoPoint {
    fn latitude(&self) -> Option<f64> {
        Some(self.latitude)
    }

    fn longitude(&self) -> Option<f64> {
        Some(self.longitude)
    }
}

/// Calculate distance between two coordinates in miles
///
/// Uses Haversine formula for accuracy on Earth's surface
///
/// # Arguments
/// * `lat1`, `lon1` - First coordinate
/// * `lat2`, `lon2` - Second coordinate
///
/// # Returns
/// Distance in miles
pub fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal pairs just past 1.0; NaN passes through clamp.
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Same as [`distance_miles`], expressed in kilometres.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    miles_to_km(distance_miles(lat1, lon1, lat2, lon2))
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

/// Whether `candidate` lies within `radius_miles` of `origin`.
///
/// Unlocated candidates are never within any radius. The boundary is
/// inclusive, and a negative radius admits nothing.
pub fn within_radius<L>(origin: GeoPoint, candidate: &L, radius_miles: f64) -> bool
where
    L: Locatable + ?Sized,
{
    match candidate.location() {
        Some(point) => origin.distance_miles_to(&point) <= radius_miles,
        None => false,
    }
}
