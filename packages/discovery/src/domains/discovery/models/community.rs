use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::CommunityId;
use crate::domains::discovery::models::traits::enabled_by_default;
use crate::domains::discovery::models::{Locatable, Slugged, TimeWindowed};

/// A city or regional cleanup program with its own public landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub id: CommunityId,
    pub name: String,
    pub slug: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl Community {
    /// An enabled, unwindowed, unlocated community.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CommunityId::new(),
            name: name.into(),
            slug: slug.into(),
            city: None,
            region: None,
            country: None,
            latitude: None,
            longitude: None,
            enabled: true,
            start_date: None,
            end_date: None,
        }
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn in_city(mut self, city: impl Into<String>, region: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.region = Some(region.into());
        self
    }

    pub fn with_window(
        mut self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl Locatable for Community {
    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

impl TimeWindowed for Community {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn window_start(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    fn window_end(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }
}

impl Slugged for Community {
    type Id = CommunityId;

    fn id(&self) -> &CommunityId {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
