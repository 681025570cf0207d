//! DiscoveryQuery model
//!
//! Per-call filter input for `find_enabled`. Geographic filtering only applies
//! when origin latitude, origin longitude and radius are all present.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::utils::geo::GeoPoint;
use crate::error::{DiscoveryError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryQuery {
    pub origin_latitude: Option<f64>,
    pub origin_longitude: Option<f64>,
    pub radius_miles: Option<f64>,

    /// Instant the active window is evaluated at. Callers that leave this
    /// unset get the current time.
    pub as_of: Option<DateTime<Utc>>,
}

impl DiscoveryQuery {
    /// A query with no geographic filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// A query around `origin` with the given radius.
    pub fn near(origin: GeoPoint, radius_miles: f64) -> Self {
        Self {
            origin_latitude: Some(origin.latitude),
            origin_longitude: Some(origin.longitude),
            radius_miles: Some(radius_miles),
            as_of: None,
        }
    }

    pub fn with_origin(mut self, latitude: f64, longitude: f64) -> Self {
        self.origin_latitude = Some(latitude);
        self.origin_longitude = Some(longitude);
        self
    }

    pub fn with_radius(mut self, radius_miles: f64) -> Self {
        self.radius_miles = Some(radius_miles);
        self
    }

    pub fn as_of(mut self, instant: DateTime<Utc>) -> Self {
        self.as_of = Some(instant);
        self
    }

    /// Origin and radius, when all three geographic fields are supplied.
    pub fn geo_filter(&self) -> Option<(GeoPoint, f64)> {
        match (self.origin_latitude, self.origin_longitude, self.radius_miles) {
            (Some(lat), Some(lon), Some(radius)) => Some((GeoPoint::new(lat, lon), radius)),
            _ => None,
        }
    }

    /// Some, but not all, geographic fields are present.
    pub fn has_partial_geo(&self) -> bool {
        let supplied = [
            self.origin_latitude.is_some(),
            self.origin_longitude.is_some(),
            self.radius_miles.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        supplied > 0 && supplied < 3
    }

    /// The evaluation instant, falling back to `now`.
    pub fn effective_as_of(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.as_of.unwrap_or(now)
    }

    /// Rejects non-finite geographic input.
    ///
    /// Only fields that are present are checked; absent fields mean
    /// "no geo filter" and are never an error.
    pub fn validate(&self) -> Result<()> {
        if let Some(radius) = self.radius_miles {
            if radius.is_nan() {
                return Err(DiscoveryError::invalid_argument("radius_miles is NaN"));
            }
        }
        for (name, value) in [
            ("origin_latitude", self.origin_latitude),
            ("origin_longitude", self.origin_longitude),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(DiscoveryError::invalid_argument(format!(
                        "{} must be finite, got {}",
                        name, v
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_filter_requires_all_three() {
        assert!(DiscoveryQuery::new().geo_filter().is_none());
        assert!(DiscoveryQuery::new()
            .with_origin(47.6, -122.3)
            .geo_filter()
            .is_none());
        assert!(DiscoveryQuery::new().with_radius(10.0).geo_filter().is_none());

        let (origin, radius) = DiscoveryQuery::new()
            .with_origin(47.6, -122.3)
            .with_radius(10.0)
            .geo_filter()
            .unwrap();
        assert_eq!(origin, GeoPoint::new(47.6, -122.3));
        assert_eq!(radius, 10.0);
    }

    #[test]
    fn test_partial_geo_detection() {
        assert!(!DiscoveryQuery::new().has_partial_geo());
        assert!(DiscoveryQuery {
            origin_latitude: Some(47.6),
            ..Default::default()
        }
        .has_partial_geo());
        assert!(!DiscoveryQuery::near(GeoPoint::new(47.6, -122.3), 5.0).has_partial_geo());
    }

    #[test]
    fn test_validate_rejects_nan_radius() {
        let query = DiscoveryQuery::new().with_radius(f64::NAN);
        assert!(matches!(
            query.validate(),
            Err(DiscoveryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_infinite_origin() {
        let query = DiscoveryQuery::new().with_origin(f64::INFINITY, 0.0);
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_validate_allows_negative_radius() {
        let query = DiscoveryQuery::near(GeoPoint::new(0.0, 0.0), -5.0);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let query: DiscoveryQuery = serde_json::from_str(r#"{"radius_miles": 25.0}"#).unwrap();
        assert_eq!(query.radius_miles, Some(25.0));
        assert!(query.as_of.is_none());
    }
}
