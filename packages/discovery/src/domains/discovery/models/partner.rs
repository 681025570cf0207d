use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::PartnerId;
use crate::domains::discovery::models::traits::enabled_by_default;
use crate::domains::discovery::models::{Locatable, Slugged, TimeWindowed};

/// A business or agency that supplies cleanup services. Partners have no
/// active window; they are either enabled or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub slug: String,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl Partner {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: PartnerId::new(),
            name: name.into(),
            slug: slug.into(),
            website: None,
            latitude: None,
            longitude: None,
            enabled: true,
        }
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

impl Locatable for Partner {
    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

impl TimeWindowed for Partner {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn window_start(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn window_end(&self) -> Option<DateTime<Utc>> {
        None
    }
}

impl Slugged for Partner {
    type Id = PartnerId;

    fn id(&self) -> &PartnerId {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
