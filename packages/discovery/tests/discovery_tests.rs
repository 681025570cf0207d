//! Integration tests for store-backed discovery.
//!
//! These exercise the scenarios a community landing page and the partner
//! signup form rely on:
//! 1. Radius search around a city
//! 2. Window-gated visibility
//! 3. Slug resolution and availability on update

use chrono::Duration;
use discovery_core::testing::{
    fixed_now, issaquah_cleanup, portland, seattle, ISSAQUAH, PORTLAND, SEATTLE,
};
use discovery_core::{
    find_enabled, CandidateStore, CleanupEvent, Community, Discovery, DiscoveryError,
    DiscoveryQuery, GeoPoint, JsonFileStore, MemoryStore, Partner,
};

fn community_discovery(candidates: Vec<Community>) -> Discovery<Community, MemoryStore<Community>> {
    Discovery::new(MemoryStore::with_candidates(candidates))
}

#[tokio::test]
async fn test_radius_around_seattle_excludes_portland() {
    let discovery = community_discovery(vec![seattle(), portland()]);
    let query = DiscoveryQuery::near(SEATTLE, 100.0).as_of(fixed_now());

    let found = discovery.find_enabled(&query).await.unwrap();

    let slugs: Vec<_> = found.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["seattle"]);
}

#[tokio::test]
async fn test_wide_radius_keeps_store_order() {
    let discovery = community_discovery(vec![portland(), seattle()]);
    let query = DiscoveryQuery::near(SEATTLE, 500.0).as_of(fixed_now());

    let found = discovery.find_enabled(&query).await.unwrap();

    let slugs: Vec<_> = found.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["portland", "seattle"]);
}

#[tokio::test]
async fn test_nearby_reports_distances_nearest_first() {
    let discovery = community_discovery(vec![portland(), seattle()]);

    let hits = discovery
        .find_nearby(ISSAQUAH, 200.0, fixed_now())
        .await
        .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].entity.slug, "seattle");
    assert!(hits[0].distance_miles < 20.0);
    assert_eq!(hits[1].entity.slug, "portland");
    assert!(hits[0].distance_miles <= hits[1].distance_miles);
}

#[tokio::test]
async fn test_window_opens_on_start_date() {
    let tomorrow = fixed_now() + Duration::days(1);
    let discovery = community_discovery(vec![seattle().with_window(Some(tomorrow), None)]);

    let today = DiscoveryQuery::new().as_of(fixed_now());
    assert!(discovery.find_enabled(&today).await.unwrap().is_empty());

    let opening = DiscoveryQuery::new().as_of(tomorrow);
    assert_eq!(discovery.find_enabled(&opening).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_expired_community_is_hidden_from_slug_lookup() {
    let yesterday = fixed_now() - Duration::days(1);
    let discovery = community_discovery(vec![seattle().with_window(None, Some(yesterday))]);

    assert!(discovery
        .find_by_slug("seattle", fixed_now())
        .await
        .unwrap()
        .is_none());
    assert!(discovery
        .find_by_slug("seattle", yesterday)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_slug_lookup_ignores_case_and_whitespace() {
    let event = issaquah_cleanup();
    let discovery: Discovery<CleanupEvent, _> =
        Discovery::new(MemoryStore::with_candidates(vec![event.clone()]));

    for slug in [" Issaquah-Cleanup ", "issaquah-cleanup", "ISSAQUAH-CLEANUP"] {
        let found = discovery.find_by_slug(slug, fixed_now()).await.unwrap();
        assert_eq!(found.map(|e| e.id), Some(event.id));
    }
}

#[tokio::test]
async fn test_cancelled_event_still_holds_its_slug() {
    let mut event = issaquah_cleanup();
    event.cancel();
    let discovery: Discovery<CleanupEvent, _> =
        Discovery::new(MemoryStore::with_candidates(vec![event.clone()]));

    assert!(discovery
        .find_by_slug("issaquah-cleanup", fixed_now())
        .await
        .unwrap()
        .is_none());
    assert!(!discovery
        .is_slug_available("issaquah-cleanup", None)
        .await
        .unwrap());
    assert!(discovery
        .is_slug_available("issaquah-cleanup", Some(&event.id))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_partner_rename_keeps_own_slug() {
    let acme = Partner::new("Acme Hauling", "acme");
    let discovery: Discovery<Partner, _> =
        Discovery::new(MemoryStore::with_candidates(vec![acme.clone()]));

    assert!(!discovery.is_slug_available("ACME ", None).await.unwrap());
    assert!(discovery
        .is_slug_available("ACME ", Some(&acme.id))
        .await
        .unwrap());
    assert_eq!(
        discovery.suggest_slug("Acme", None).await.unwrap(),
        "acme-2"
    );
}

#[tokio::test]
async fn test_invalid_query_surfaces_before_filtering() {
    let discovery = community_discovery(vec![seattle()]);
    let query = DiscoveryQuery::new()
        .with_origin(47.6, -122.3)
        .with_radius(f64::NAN);

    let result = discovery.find_enabled(&query).await;
    assert!(matches!(result, Err(DiscoveryError::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_json_file_store_feeds_discovery() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("communities.json");
    let communities = vec![seattle(), portland().disabled()];
    std::fs::write(&path, serde_json::to_vec(&communities).unwrap()).unwrap();

    let store: JsonFileStore<Community> = JsonFileStore::new(&path);
    assert_eq!(store.count().await.unwrap(), 2);

    let discovery: Discovery<Community, _> = Discovery::new(store);
    let found = discovery
        .find_enabled(&DiscoveryQuery::new().as_of(fixed_now()))
        .await
        .unwrap();

    assert_eq!(found, vec![communities[0].clone()]);
}

#[test]
fn test_pure_filter_over_borrowed_slice() {
    let candidates = vec![seattle(), portland()];
    let query = DiscoveryQuery::near(GeoPoint::new(PORTLAND.latitude, PORTLAND.longitude), 1.0)
        .as_of(fixed_now());

    let mut found = find_enabled(&candidates, &query).unwrap();
    assert_eq!(found.next().map(|c| c.slug.as_str()), Some("portland"));
    assert!(found.next().is_none());
}
