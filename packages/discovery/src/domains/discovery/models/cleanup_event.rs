use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::EventId;
use crate::domains::discovery::models::traits::enabled_by_default;
use crate::domains::discovery::models::{Locatable, Slugged, TimeWindowed};

/// A scheduled litter pickup.
///
/// `enabled` is false once the event is cancelled. The visibility window
/// controls when the event shows up in listings, independent of the date the
/// cleanup itself takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupEvent {
    pub id: EventId,
    pub name: String,
    pub slug: String,
    pub event_date: DateTime<Utc>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
    pub visible_from: Option<DateTime<Utc>>,
    pub visible_until: Option<DateTime<Utc>>,
}

impl CleanupEvent {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        event_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            slug: slug.into(),
            event_date,
            latitude: None,
            longitude: None,
            enabled: true,
            visible_from: None,
            visible_until: None,
        }
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn cancel(&mut self) {
        self.enabled = false;
    }
}

impl Locatable for CleanupEvent {
    fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

impl TimeWindowed for CleanupEvent {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn window_start(&self) -> Option<DateTime<Utc>> {
        self.visible_from
    }

    fn window_end(&self) -> Option<DateTime<Utc>> {
        self.visible_until
    }
}

impl Slugged for CleanupEvent {
    type Id = EventId;

    fn id(&self) -> &EventId {
        &self.id
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
