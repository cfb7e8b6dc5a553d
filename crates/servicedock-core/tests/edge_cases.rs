//! Edge case and boundary condition tests
//!
//! These tests verify the dashboard handles odd stored data, restarts and
//! mismatched references without falling over.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use servicedock_core::store::{CompletionMarker, ProviderArrivedMarker, StoredUser};
use servicedock_core::{
    Booking, BookingApi, BookingRef, BookingStatus, Dashboard, DockConfig, DockResult, FetchMode,
    SharedStore, Storage, StoreKey,
};
use tempfile::tempdir;

struct EmptyApi;

#[async_trait]
impl BookingApi for EmptyApi {
    async fn fetch_user_bookings(&self, _user_id: &str) -> DockResult<Vec<Booking>> {
        Ok(Vec::new())
    }
}

fn persistent(dir: &std::path::Path) -> SharedStore {
    SharedStore::new(Arc::new(Storage::open_in(dir).unwrap()))
}

// ============================================================================
// Persistence
// ============================================================================

/// Markers written before a restart are picked up after it
#[tokio::test]
async fn test_markers_survive_restart() {
    let dir = tempdir().unwrap();
    {
        let store = persistent(dir.path());
        store
            .write(StoreKey::User, &StoredUser::nested("u1", "tok"))
            .unwrap();
        store
            .write(
                StoreKey::ServiceCompleted,
                &CompletionMarker {
                    id: BookingRef::Key("sample3".into()),
                    timestamp: 1,
                },
            )
            .unwrap();
    }

    let mut dashboard = Dashboard::with_parts(Arc::new(EmptyApi), persistent(dir.path()));
    dashboard.refresh(FetchMode::Manual, Utc::now()).await;

    let sample3 = dashboard.find(&BookingRef::Key("sample3".into())).unwrap();
    assert_eq!(sample3.status, BookingStatus::Completed);
    assert!(dashboard
        .store()
        .read_text(StoreKey::ServiceCompleted)
        .unwrap()
        .is_none());
}

/// `Dashboard::open` creates the data directory
#[test]
fn test_open_creates_data_dir() {
    let dir = tempdir().unwrap();
    let data_dir = dir.path().join("a").join("b");
    let config = DockConfig::default().with_data_dir(&data_dir);
    let dashboard = Dashboard::open(&config).unwrap();
    assert!(data_dir.exists());
    assert!(dashboard.bookings().is_empty());
}

#[test]
fn test_open_rejects_bad_api_url() {
    let dir = tempdir().unwrap();
    let config = DockConfig::default()
        .with_data_dir(dir.path())
        .with_api_base_url("::not a url::");
    assert!(Dashboard::open(&config).is_err());
}

#[test]
fn test_clear_removes_known_keys() {
    let dir = tempdir().unwrap();
    let storage = Storage::open_in(dir.path()).unwrap();
    let store = SharedStore::new(Arc::new(storage.clone()));
    store.write(StoreKey::OpenBookingsDrawer, &true).unwrap();
    store.write(StoreKey::User, &StoredUser::nested("u1", "t")).unwrap();
    assert_eq!(storage.entries().unwrap().len(), 2);

    storage.clear().unwrap();
    assert!(storage.entries().unwrap().is_empty());
}

// ============================================================================
// Odd Stored Data
// ============================================================================

#[tokio::test]
async fn test_numeric_user_id() {
    let store = SharedStore::in_memory();
    store
        .write(StoreKey::User, &serde_json::json!({ "id": 1234, "token": "t" }))
        .unwrap();
    let mut dashboard = Dashboard::with_parts(Arc::new(EmptyApi), store);
    dashboard.refresh(FetchMode::Manual, Utc::now()).await;
    assert!(dashboard.bookings().iter().all(|b| b.user_id == "1234"));
}

#[tokio::test]
async fn test_user_without_id_keeps_list_empty() {
    let store = SharedStore::in_memory();
    store
        .write(StoreKey::User, &serde_json::json!({ "token": "t" }))
        .unwrap();
    let mut dashboard = Dashboard::with_parts(Arc::new(EmptyApi), store);
    dashboard.refresh(FetchMode::Manual, Utc::now()).await;
    assert!(dashboard.bookings().is_empty());
    assert_eq!(
        dashboard.error(),
        Some("Could not find user ID in stored data")
    );
}

#[tokio::test]
async fn test_marker_for_unknown_booking_is_harmless() {
    let store = SharedStore::in_memory();
    store
        .write(StoreKey::User, &StoredUser::nested("u1", "t"))
        .unwrap();
    store
        .write(
            StoreKey::ProviderArrived,
            &ProviderArrivedMarker {
                booking_id: BookingRef::Numeric(999_999),
                provider_name: "Ghost".into(),
                timestamp: 0,
            },
        )
        .unwrap();

    let mut dashboard = Dashboard::with_parts(Arc::new(EmptyApi), store);
    let directive = dashboard.refresh(FetchMode::Manual, Utc::now()).await;
    assert!(directive.open_drawer);
    assert!(dashboard.bookings().iter().all(|b| !b.is_provider_arrived()));
}

#[tokio::test]
async fn test_malformed_marker_is_dropped() {
    let store = SharedStore::in_memory();
    store
        .write(StoreKey::User, &StoredUser::nested("u1", "t"))
        .unwrap();
    store
        .write_text(StoreKey::UpdateBookingStatus, r#"{"id":"sample1","status":"archived"}"#)
        .unwrap();

    let mut dashboard = Dashboard::with_parts(Arc::new(EmptyApi), store);
    dashboard.refresh(FetchMode::Manual, Utc::now()).await;
    assert_eq!(
        dashboard.find(&BookingRef::Key("sample1".into())).unwrap().status,
        BookingStatus::Pending
    );
    assert!(dashboard
        .store()
        .read_text(StoreKey::UpdateBookingStatus)
        .unwrap()
        .is_none());
}
