//! Typed shared store for cross-component state.
//!
//! Booking cards, the drawer and external pages (payment, tracking) never
//! call each other directly. They leave JSON markers under well-known keys
//! and pick them up on their next poll tick:
//!
//! ```text
//! BookingCard ──write──► providerArrived ◄──poll (2s)── BookingCard
//! PaymentPage ──write──► recentBookingPayment ──take (mount)──► Drawer
//! ```
//!
//! The raw byte store is a [`KeyValueStore`]; [`SharedStore`] wraps one with
//! typed reads and writes. Malformed values are logged and read as absent.
//! Writes are last-write-wins and there is no atomicity across keys.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::DockResult;

mod markers;
mod memory;

pub use markers::{
    CompletionMarker, ProviderArrivedMarker, RecentPaymentMarker, ReviewMarker,
    StatusUpdateMarker, StoredUser,
};
pub use memory::MemoryStore;

/// Well-known keys in the shared store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    User,
    ProviderArrived,
    CurrentBookingDetails,
    ServiceReview,
    ServiceCompleted,
    OpenBookingsDrawer,
    UpdateBookingStatus,
    RecentBookingPayment,
}

impl StoreKey {
    pub const ALL: [StoreKey; 8] = [
        StoreKey::User,
        StoreKey::ProviderArrived,
        StoreKey::CurrentBookingDetails,
        StoreKey::ServiceReview,
        StoreKey::ServiceCompleted,
        StoreKey::OpenBookingsDrawer,
        StoreKey::UpdateBookingStatus,
        StoreKey::RecentBookingPayment,
    ];

    /// Key name as written to the store
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::User => "user",
            StoreKey::ProviderArrived => "providerArrived",
            StoreKey::CurrentBookingDetails => "currentBookingDetails",
            StoreKey::ServiceReview => "serviceReview",
            StoreKey::ServiceCompleted => "serviceCompleted",
            StoreKey::OpenBookingsDrawer => "openBookingsDrawer",
            StoreKey::UpdateBookingStatus => "updateBookingStatus",
            StoreKey::RecentBookingPayment => "recentBookingPayment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw byte storage behind the shared store.
///
/// Implemented by the redb-backed [`crate::Storage`] and by [`MemoryStore`].
pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: &str) -> DockResult<Option<Vec<u8>>>;
    fn put_raw(&self, key: &str, value: &[u8]) -> DockResult<()>;
    fn remove_raw(&self, key: &str) -> DockResult<()>;
}

/// Typed repository over a [`KeyValueStore`].
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<dyn KeyValueStore>,
}

impl SharedStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Store backed by process memory only
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Read and decode a value.
    ///
    /// Missing keys, storage failures and malformed JSON all read as `None`;
    /// the latter two are logged.
    pub fn read<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let bytes = match self.inner.get_raw(key.as_str()) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read '{}' from shared store: {}", key, e);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed '{}' entry: {}", key, e);
                None
            }
        }
    }

    /// Encode and write a value, replacing whatever was there.
    pub fn write<T: Serialize>(&self, key: StoreKey, value: &T) -> DockResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.inner.put_raw(key.as_str(), &bytes)?;
        debug!("Wrote '{}' ({} bytes)", key, bytes.len());
        Ok(())
    }

    /// Read a value and remove the key.
    ///
    /// The key is removed even when the value is malformed, so a bad marker
    /// can't be retried forever.
    pub fn take<T: DeserializeOwned>(&self, key: StoreKey) -> Option<T> {
        let present = matches!(self.inner.get_raw(key.as_str()), Ok(Some(_)));
        let value = self.read(key);
        if present {
            self.remove(key);
        }
        value
    }

    /// Remove a key. Failures are logged.
    pub fn remove(&self, key: StoreKey) {
        if let Err(e) = self.inner.remove_raw(key.as_str()) {
            warn!("Failed to remove '{}' from shared store: {}", key, e);
        }
    }

    /// Raw JSON text for a key (diagnostics)
    pub fn read_text(&self, key: StoreKey) -> DockResult<Option<String>> {
        Ok(self
            .inner
            .get_raw(key.as_str())?
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Write raw JSON text after checking it parses.
    pub fn write_text(&self, key: StoreKey, json: &str) -> DockResult<()> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        self.write(key, &value)
    }
}

impl fmt::Debug for SharedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookingRef;

    #[test]
    fn test_key_names() {
        assert_eq!(StoreKey::RecentBookingPayment.as_str(), "recentBookingPayment");
        assert_eq!(StoreKey::from_name("providerArrived"), Some(StoreKey::ProviderArrived));
        assert_eq!(StoreKey::from_name("nope"), None);
    }

    #[test]
    fn test_write_then_read() {
        let store = SharedStore::in_memory();
        let marker = CompletionMarker {
            id: BookingRef::Key("sample3".into()),
            timestamp: 1_700_000_000_000,
        };
        store.write(StoreKey::ServiceCompleted, &marker).unwrap();
        let back: CompletionMarker = store.read(StoreKey::ServiceCompleted).unwrap();
        assert_eq!(back, marker);
    }

    #[test]
    fn test_malformed_reads_as_absent() {
        let store = SharedStore::in_memory();
        store.inner.put_raw("serviceCompleted", b"{not json").unwrap();
        assert!(store.read::<CompletionMarker>(StoreKey::ServiceCompleted).is_none());
    }

    #[test]
    fn test_take_removes_even_malformed() {
        let store = SharedStore::in_memory();
        store.inner.put_raw("updateBookingStatus", b"[1,2,3]").unwrap();
        assert!(store.take::<StatusUpdateMarker>(StoreKey::UpdateBookingStatus).is_none());
        assert!(store.read_text(StoreKey::UpdateBookingStatus).unwrap().is_none());
    }

    #[test]
    fn test_write_text_validates() {
        let store = SharedStore::in_memory();
        assert!(store.write_text(StoreKey::OpenBookingsDrawer, "true").is_ok());
        assert!(store.write_text(StoreKey::OpenBookingsDrawer, "tru").is_err());
        assert_eq!(store.read::<bool>(StoreKey::OpenBookingsDrawer), Some(true));
    }
}
