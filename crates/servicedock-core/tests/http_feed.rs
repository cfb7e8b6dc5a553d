//! Booking feed against a real HTTP endpoint
//!
//! Spins up a local axum server standing in for the bookings API and checks
//! the fallback rules end to end.

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use servicedock_core::sample::SAMPLE_COUNT;
use servicedock_core::store::StoredUser;
use servicedock_core::{
    BookingFeed, BookingStatus, FetchMode, HttpBookingApi, SharedStore, StoreKey,
};

// ============================================================================
// Helpers
// ============================================================================

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn feed_for(base: &str, user_id: &str) -> BookingFeed {
    let store = SharedStore::in_memory();
    store
        .write(StoreKey::User, &StoredUser::nested(user_id, "token"))
        .unwrap();
    BookingFeed::new(Arc::new(HttpBookingApi::new(base).unwrap()), store)
}

fn record(id: &str, user_id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "userId": user_id,
        "firstname": "Ana",
        "productName": "Plumbing Services",
        "providerName": "PipeFix Pros",
        "providerId": 7,
        "workerCount": 2,
        "bookingDate": "2025-03-14T09:00:00Z",
        "bookingTime": "9:00 AM",
        "location": { "name": "Makati", "lat": 14.5547, "lng": 121.0244, "distance": 3.0 },
        "pricing": { "baseRate": 1200, "distanceCharge": 60, "totalRate": 1260 },
        "status": status,
        "createdAt": "2025-03-10T09:00:00Z"
    })
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_remote_records_are_used() {
    let app = Router::new().route(
        "/bookings/user/:user_id",
        get(|Path(user_id): Path<String>| async move {
            Json(json!([
                record("65f1c2aa9be01a", &user_id, "pending"),
                record("65f1c2aa9be01b", &user_id, "ongoing"),
            ]))
        }),
    );
    let base = serve(app).await;

    let outcome = feed_for(&base, "u-42").fetch(FetchMode::Manual, Utc::now()).await;
    assert!(!outcome.used_sample());
    let bookings = outcome.into_bookings().unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].user_id, "u-42");
    assert_eq!(bookings[1].status, BookingStatus::Ongoing);
    assert_eq!(bookings[0].display().id, Some(0x9be01a));
}

#[tokio::test]
async fn test_empty_array_gives_samples() {
    let app = Router::new().route("/bookings/user/:user_id", get(|| async { Json(json!([])) }));
    let base = serve(app).await;

    let outcome = feed_for(&base, "u-1").fetch(FetchMode::Manual, Utc::now()).await;
    assert!(outcome.used_sample());
    assert_eq!(outcome.error(), None);

    let bookings = outcome.into_bookings().unwrap();
    assert_eq!(bookings.len(), SAMPLE_COUNT);
    let count = |s: BookingStatus| bookings.iter().filter(|b| b.status == s).count();
    assert_eq!(count(BookingStatus::Pending), 2);
    assert_eq!(count(BookingStatus::Ongoing), 2);
    assert_eq!(count(BookingStatus::Cancelled), 2);
    assert_eq!(count(BookingStatus::Completed), 3);
}

#[tokio::test]
async fn test_server_error_gives_samples_and_message() {
    let app = Router::new().route(
        "/bookings/user/:user_id",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(app).await;

    let outcome = feed_for(&base, "u-1").fetch(FetchMode::Manual, Utc::now()).await;
    assert!(outcome.used_sample());
    assert_eq!(
        outcome.error(),
        Some("Failed to fetch bookings: Internal Server Error")
    );
    assert_eq!(outcome.bookings().unwrap().len(), SAMPLE_COUNT);
}

#[tokio::test]
async fn test_malformed_body_gives_samples() {
    let app = Router::new().route(
        "/bookings/user/:user_id",
        get(|| async { Json(json!({ "bookings": "nope" })) }),
    );
    let base = serve(app).await;

    let outcome = feed_for(&base, "u-1").fetch(FetchMode::Silent, Utc::now()).await;
    assert!(outcome.used_sample());
    assert!(outcome.error().is_some());
}

#[tokio::test]
async fn test_unreachable_server_gives_samples() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let outcome = feed_for(&format!("http://{}", addr), "u-1")
        .fetch(FetchMode::Manual, Utc::now())
        .await;
    assert!(outcome.used_sample());
    assert!(outcome.error().is_some());
}
