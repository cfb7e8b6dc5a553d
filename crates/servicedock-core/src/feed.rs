//! Booking list retrieval with sample-data fallback.
//!
//! The sample set is substituted if and only if the request fails or comes
//! back empty. A missing or unrecognisable `user` entry stops before any
//! request and leaves the current list alone.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::api::BookingApi;
use crate::error::{DockError, DockResult};
use crate::sample::{sample_bookings, SAMPLE_USER_ID};
use crate::store::{SharedStore, StoreKey, StoredUser};
use crate::types::Booking;

/// How a fetch was triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// User-initiated: shows the loading indicator
    Manual,
    /// Background poll: no indicator, quiet logging
    Silent,
}

/// Where the bookings in an outcome came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingSource {
    Remote,
    Sample,
}

/// Result of one fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Fetch succeeded; samples are used when it returned nothing
    Loaded {
        bookings: Vec<Booking>,
        source: BookingSource,
    },
    /// Fetch failed; samples substituted and the error surfaced
    Fallback { bookings: Vec<Booking>, error: String },
    /// No user to fetch for; the current list stays as it is
    Unavailable { error: String },
}

impl FetchOutcome {
    /// Replacement list, if any
    pub fn bookings(&self) -> Option<&[Booking]> {
        match self {
            FetchOutcome::Loaded { bookings, .. } | FetchOutcome::Fallback { bookings, .. } => {
                Some(bookings)
            }
            FetchOutcome::Unavailable { .. } => None,
        }
    }

    pub fn into_bookings(self) -> Option<Vec<Booking>> {
        match self {
            FetchOutcome::Loaded { bookings, .. } | FetchOutcome::Fallback { bookings, .. } => {
                Some(bookings)
            }
            FetchOutcome::Unavailable { .. } => None,
        }
    }

    /// Message for the inline error state
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchOutcome::Loaded { .. } => None,
            FetchOutcome::Fallback { error, .. } | FetchOutcome::Unavailable { error } => {
                Some(error)
            }
        }
    }

    pub fn used_sample(&self) -> bool {
        matches!(
            self,
            FetchOutcome::Loaded {
                source: BookingSource::Sample,
                ..
            } | FetchOutcome::Fallback { .. }
        )
    }
}

/// Id of the logged-in user from the `user` entry.
pub fn resolve_user_id(store: &SharedStore) -> DockResult<String> {
    let raw: serde_json::Value = match store.read(StoreKey::User) {
        Some(raw) => raw,
        None => return Err(DockError::UserNotLoggedIn),
    };
    let user = StoredUser(raw);
    user.user_id().ok_or_else(|| {
        warn!("User data structure: {}", user.0);
        DockError::MissingUserId
    })
}

/// Fetches the customer's bookings.
#[derive(Clone)]
pub struct BookingFeed {
    api: Arc<dyn BookingApi>,
    store: SharedStore,
}

impl BookingFeed {
    pub fn new(api: Arc<dyn BookingApi>, store: SharedStore) -> Self {
        Self { api, store }
    }

    /// Fetch bookings for the stored user.
    pub async fn fetch(&self, mode: FetchMode, now: DateTime<Utc>) -> FetchOutcome {
        let user_id = match resolve_user_id(&self.store) {
            Ok(id) => id,
            Err(e) => {
                if mode == FetchMode::Manual {
                    warn!("Cannot fetch bookings: {}", e);
                }
                return FetchOutcome::Unavailable {
                    error: e.to_string(),
                };
            }
        };

        if mode == FetchMode::Manual {
            info!("Fetching bookings for user: {}", user_id);
        } else {
            debug!("Refreshing bookings for user: {}", user_id);
        }

        match self.api.fetch_user_bookings(&user_id).await {
            Ok(bookings) if bookings.is_empty() => {
                if mode == FetchMode::Manual {
                    info!("No bookings found, using sample data");
                }
                FetchOutcome::Loaded {
                    bookings: sample_bookings(&user_id, now),
                    source: BookingSource::Sample,
                }
            }
            Ok(bookings) => {
                debug!("Fetched {} bookings", bookings.len());
                FetchOutcome::Loaded {
                    bookings,
                    source: BookingSource::Remote,
                }
            }
            Err(e) => {
                if mode == FetchMode::Manual {
                    warn!("Error fetching bookings, using sample data: {}", e);
                } else {
                    debug!("Background refresh failed: {}", e);
                }
                FetchOutcome::Fallback {
                    bookings: sample_bookings(SAMPLE_USER_ID, now),
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SAMPLE_COUNT;
    use async_trait::async_trait;

    struct FixedApi(DockResult<Vec<Booking>>);

    #[async_trait]
    impl BookingApi for FixedApi {
        async fn fetch_user_bookings(&self, _user_id: &str) -> DockResult<Vec<Booking>> {
            match &self.0 {
                Ok(list) => Ok(list.clone()),
                Err(_) => Err(DockError::HttpStatus("Internal Server Error".into())),
            }
        }
    }

    fn logged_in_store() -> SharedStore {
        let store = SharedStore::in_memory();
        store.write(StoreKey::User, &StoredUser::nested("u-1", "tok")).unwrap();
        store
    }

    fn feed(api: FixedApi, store: SharedStore) -> BookingFeed {
        BookingFeed::new(Arc::new(api), store)
    }

    #[tokio::test]
    async fn test_empty_result_uses_samples() {
        let outcome = feed(FixedApi(Ok(vec![])), logged_in_store())
            .fetch(FetchMode::Manual, Utc::now())
            .await;
        assert!(outcome.used_sample());
        assert_eq!(outcome.error(), None);
        let bookings = outcome.bookings().unwrap();
        assert_eq!(bookings.len(), SAMPLE_COUNT);
        assert!(bookings.iter().all(|b| b.user_id == "u-1"));
    }

    #[tokio::test]
    async fn test_failure_uses_samples_and_surfaces_error() {
        let outcome = feed(
            FixedApi(Err(DockError::HttpStatus("x".into()))),
            logged_in_store(),
        )
        .fetch(FetchMode::Silent, Utc::now())
        .await;
        assert!(outcome.used_sample());
        assert_eq!(
            outcome.error(),
            Some("Failed to fetch bookings: Internal Server Error")
        );
        assert_eq!(outcome.bookings().unwrap()[0].user_id, SAMPLE_USER_ID);
    }

    #[tokio::test]
    async fn test_remote_bookings_pass_through() {
        let mut remote = sample_bookings("u-1", Utc::now());
        remote.truncate(1);
        remote[0].key = "65f1c2aa9be01a".into();

        let outcome = feed(FixedApi(Ok(remote.clone())), logged_in_store())
            .fetch(FetchMode::Manual, Utc::now())
            .await;
        assert!(!outcome.used_sample());
        assert_eq!(outcome.into_bookings().unwrap(), remote);
    }

    #[tokio::test]
    async fn test_no_user_skips_fetch() {
        let outcome = feed(FixedApi(Ok(vec![])), SharedStore::in_memory())
            .fetch(FetchMode::Manual, Utc::now())
            .await;
        assert_eq!(outcome.error(), Some("User not logged in"));
        assert!(outcome.bookings().is_none());
        assert!(!outcome.used_sample());
    }

    #[test]
    fn test_unrecognised_user_shape() {
        let store = SharedStore::in_memory();
        store
            .write(StoreKey::User, &serde_json::json!({ "email": "a@b.c" }))
            .unwrap();
        assert!(matches!(
            resolve_user_id(&store),
            Err(DockError::MissingUserId)
        ));
    }
}
