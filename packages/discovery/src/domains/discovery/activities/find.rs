//! Discovery over an already-loaded candidate set.
//!
//! These functions compose the window gate, the radius filter and slug
//! normalization. They never reorder candidates and never touch storage;
//! loading is the caller's job (see [`crate::domains::discovery::Discovery`]).

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::common::utils::geo::{within_radius, GeoPoint, Locatable};
use crate::domains::discovery::activities::slug::{normalize_slug, slugify};
use crate::domains::discovery::activities::window_gate::is_active;
use crate::domains::discovery::models::{DiscoveryQuery, Slugged, TimeWindowed};
use crate::error::{DiscoveryError, Result};

/// Active candidates matching `query`, in input order.
///
/// The returned iterator is lazy and borrows `candidates`; call again for a
/// fresh pass. Geographic filtering applies only when origin and radius are
/// all supplied; partial geographic input is treated as no geographic filter.
///
/// # Errors
///
/// `InvalidArgument` if the query carries a NaN radius or a non-finite origin.
pub fn find_enabled<'a, E>(
    candidates: &'a [E],
    query: &DiscoveryQuery,
) -> Result<impl Iterator<Item = &'a E> + 'a>
where
    E: TimeWindowed + Locatable,
{
    query.validate()?;

    let as_of = query.as_of.unwrap_or_else(Utc::now);
    let geo = query.geo_filter();

    if query.has_partial_geo() {
        warn!(
            origin_latitude = ?query.origin_latitude,
            origin_longitude = ?query.origin_longitude,
            radius_miles = ?query.radius_miles,
            "Partial location filter supplied, skipping location step"
        );
    }

    debug!(
        candidates = candidates.len(),
        %as_of,
        geo_filter = geo.is_some(),
        "Filtering discovery candidates"
    );

    Ok(candidates
        .iter()
        .filter(move |entity| is_active(*entity, as_of))
        .filter(move |entity| match geo {
            Some((origin, radius)) => within_radius(origin, *entity, radius),
            None => true,
        }))
}

/// Active, located candidates within `radius_miles` of `origin`, nearest
/// first, paired with their distance in miles.
///
/// Candidates at equal distance keep their input order.
pub fn find_nearby<'a, E>(
    candidates: &'a [E],
    origin: GeoPoint,
    radius_miles: f64,
    as_of: DateTime<Utc>,
) -> Result<Vec<(&'a E, f64)>>
where
    E: TimeWindowed + Locatable,
{
    DiscoveryQuery::near(origin, radius_miles).validate()?;

    let mut hits: Vec<(&E, f64)> = candidates
        .iter()
        .filter(|entity| is_active(*entity, as_of))
        .filter_map(|entity| {
            let point = entity.location()?;
            let distance = origin.distance_miles_to(&point);
            (distance <= radius_miles).then_some((entity, distance))
        })
        .collect();

    hits.sort_by(|a, b| a.1.total_cmp(&b.1));

    debug!(
        candidates = candidates.len(),
        matched = hits.len(),
        radius_miles,
        "Nearby discovery complete"
    );

    Ok(hits)
}

/// The first active candidate whose stored slug matches `slug`.
///
/// Comparison is trimmed and case-insensitive. An entity outside its active
/// window is indistinguishable from a missing one.
pub fn find_by_slug<'a, E>(
    candidates: &'a [E],
    slug: &str,
    as_of: DateTime<Utc>,
) -> Option<&'a E>
where
    E: TimeWindowed + Slugged,
{
    let wanted = normalize_slug(slug);

    let found = candidates
        .iter()
        .filter(|entity| is_active(*entity, as_of))
        .find(|entity| normalize_slug(entity.slug()) == wanted);

    if found.is_none() {
        debug!(slug = %wanted, "No active entity for slug");
    }

    found
}

/// Whether no candidate, active or not, already holds `slug`.
///
/// The entity identified by `exclude_id` is ignored, which lets an update
/// keep its own slug.
pub fn is_slug_available<E>(candidates: &[E], slug: &str, exclude_id: Option<&E::Id>) -> bool
where
    E: Slugged,
{
    let wanted = normalize_slug(slug);

    !candidates
        .iter()
        .filter(|entity| exclude_id.map_or(true, |excluded| entity.id() != excluded))
        .any(|entity| normalize_slug(entity.slug()) == wanted)
}

/// Slugify `name` and, if that slug is taken, append `-2`, `-3`, ... until a
/// free one is found.
///
/// # Errors
///
/// `InvalidArgument` if `name` contains no ASCII letters or digits.
pub fn suggest_available_slug<E>(
    candidates: &[E],
    name: &str,
    exclude_id: Option<&E::Id>,
) -> Result<String>
where
    E: Slugged,
{
    let base = slugify(name);
    if base.is_empty() {
        return Err(DiscoveryError::invalid_argument(format!(
            "cannot derive a slug from {:?}",
            name
        )));
    }

    if is_slug_available(candidates, &base, exclude_id) {
        return Ok(base);
    }

    // At most candidates.len() suffixes can be taken, so this terminates.
    let mut n = 2usize;
    loop {
        let suggestion = format!("{}-{}", base, n);
        if is_slug_available(candidates, &suggestion, exclude_id) {
            return Ok(suggestion);
        }
        n += 1;
    }
}
