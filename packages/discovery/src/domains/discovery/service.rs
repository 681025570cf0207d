//! Store-backed discovery.
//!
//! `Discovery` loads candidates from a [`CandidateStore`] and runs the pure
//! discovery operations over them, returning owned results suitable for an
//! API or CLI layer to serialize.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{info, instrument};

use crate::common::utils::geo::{GeoPoint, Locatable};
use crate::domains::discovery::activities::find;
use crate::domains::discovery::models::{DiscoveryQuery, Slugged, TimeWindowed};
use crate::error::Result;
use crate::traits::store::CandidateStore;

/// A candidate paired with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyResult<E> {
    pub entity: E,
    pub distance_miles: f64,
}

pub struct Discovery<E, S> {
    store: S,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> Discovery<E, S>
where
    E: Clone + Send + 'static,
    S: CandidateStore<E>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active candidates matching `query`, in store order.
    #[instrument(skip(self))]
    pub async fn find_enabled(&self, query: &DiscoveryQuery) -> Result<Vec<E>>
    where
        E: TimeWindowed + Locatable,
    {
        let candidates = self.store.load_all().await?;
        let found: Vec<E> = find::find_enabled(&candidates, query)?.cloned().collect();

        info!(
            loaded = candidates.len(),
            matched = found.len(),
            "Discovery query complete"
        );

        Ok(found)
    }

    /// Active candidates within `radius_miles` of `origin`, nearest first.
    #[instrument(skip(self))]
    pub async fn find_nearby(
        &self,
        origin: GeoPoint,
        radius_miles: f64,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<NearbyResult<E>>>
    where
        E: TimeWindowed + Locatable,
    {
        let candidates = self.store.load_all().await?;
        let hits = find::find_nearby(&candidates, origin, radius_miles, as_of)?;

        Ok(hits
            .into_iter()
            .map(|(entity, distance_miles)| NearbyResult {
                entity: entity.clone(),
                distance_miles,
            })
            .collect())
    }

    /// The active candidate holding `slug`, if any.
    #[instrument(skip(self))]
    pub async fn find_by_slug(&self, slug: &str, as_of: DateTime<Utc>) -> Result<Option<E>>
    where
        E: TimeWindowed + Slugged,
    {
        let candidates = self.store.load_all().await?;
        Ok(find::find_by_slug(&candidates, slug, as_of).cloned())
    }

    /// Whether `slug` is free across every stored candidate, ignoring
    /// `exclude_id`.
    #[instrument(skip(self, exclude_id))]
    pub async fn is_slug_available(
        &self,
        slug: &str,
        exclude_id: Option<&<E as Slugged>::Id>,
    ) -> Result<bool>
    where
        E: Slugged,
    {
        let candidates = self.store.load_all().await?;
        Ok(find::is_slug_available(&candidates, slug, exclude_id))
    }

    /// A free slug derived from `name`.
    #[instrument(skip(self, exclude_id))]
    pub async fn suggest_slug(
        &self,
        name: &str,
        exclude_id: Option<&<E as Slugged>::Id>,
    ) -> Result<String>
    where
        E: Slugged,
    {
        let candidates = self.store.load_all().await?;
        find::suggest_available_slug(&candidates, name, exclude_id)
    }
}
