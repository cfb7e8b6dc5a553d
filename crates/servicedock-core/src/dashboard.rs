//! Customer dashboard: the one object the UI and CLI talk to.
//!
//! Dashboard coordinates the booking feed, the shared store and the signal
//! bus for:
//! - Loading the booking list (manual and silent refreshes)
//! - Folding store markers and deep links into the list
//! - Persisting the markers each card action leaves behind
//! - The notification popup
//!
//! # Example
//!
//! ```ignore
//! use servicedock_core::{Dashboard, DockConfig, FetchMode};
//!
//! let mut dashboard = Dashboard::open(&DockConfig::from_env())?;
//! let directive = dashboard.refresh(FetchMode::Manual, chrono::Utc::now()).await;
//! if directive.open_drawer {
//!     // show the bookings drawer
//! }
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::api::{BookingApi, HttpBookingApi};
use crate::config::DockConfig;
use crate::error::DockResult;
use crate::feed::{BookingFeed, FetchMode, FetchOutcome};
use crate::filter::{filter_bookings, BookingStats, BookingTab};
use crate::payment::PaymentRequest;
use crate::reconcile::{
    apply_status, apply_store_updates, merge_fetched, DeepLink, DrawerDirective,
};
use crate::signals::{BookingSignal, SignalBus};
use crate::storage::Storage;
use crate::store::{
    CompletionMarker, ProviderArrivedMarker, RecentPaymentMarker, ReviewMarker, SharedStore,
    StoreKey,
};
use crate::types::{Booking, BookingRef, BookingStatus, DisplayBooking, NotificationCenter};

pub struct Dashboard {
    store: SharedStore,
    bus: SignalBus,
    feed: BookingFeed,
    bookings: Vec<Booking>,
    loading: bool,
    error: Option<String>,
    notifications: NotificationCenter,
    /// Applied once, after the first fetch that produces a list
    pending_link: Option<DeepLink>,
}

impl Dashboard {
    /// Open the redb store in the configured data directory and talk to the
    /// configured API.
    pub fn open(config: &DockConfig) -> DockResult<Self> {
        info!(data_dir = ?config.data_dir, api = %config.api_base_url, "Opening dashboard");
        std::fs::create_dir_all(&config.data_dir)?;
        let storage = Storage::open_in(&config.data_dir)?;
        let api = HttpBookingApi::new(&config.api_base_url)?;
        Ok(Self::with_parts(
            Arc::new(api),
            SharedStore::new(Arc::new(storage)),
        ))
    }

    pub fn with_parts(api: Arc<dyn BookingApi>, store: SharedStore) -> Self {
        Self {
            feed: BookingFeed::new(api, store.clone()),
            store,
            bus: SignalBus::new(),
            bookings: Vec::new(),
            loading: false,
            error: None,
            notifications: NotificationCenter::seeded(),
            pending_link: None,
        }
    }

    /// Publish on an existing bus instead of a private one.
    pub fn with_bus(mut self, bus: SignalBus) -> Self {
        self.bus = bus;
        self
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    /// Feed handle, for fetching without holding the dashboard
    pub fn feed(&self) -> BookingFeed {
        self.feed.clone()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn stats(&self) -> BookingStats {
        BookingStats::from_bookings(&self.bookings)
    }

    pub fn filtered(&self, query: &str, tab: BookingTab) -> Vec<&Booking> {
        filter_bookings(&self.bookings, query, tab)
    }

    pub fn find(&self, id: &BookingRef) -> Option<&Booking> {
        self.bookings.iter().find(|b| id.matches(b))
    }

    /// Queue a start-up deep link.
    pub fn set_deep_link(&mut self, link: DeepLink) {
        if link.is_empty() {
            return;
        }
        debug!(?link, "Deep link queued");
        self.pending_link = Some(link);
    }

    /// Mark a fetch as started. Only manual fetches show the spinner.
    pub fn begin_fetch(&mut self, mode: FetchMode) {
        if mode == FetchMode::Manual {
            self.loading = true;
            self.error = None;
        }
    }

    /// Merge a finished fetch into the list, then reconcile markers and the
    /// deep link.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> DrawerDirective {
        self.loading = false;
        self.error = outcome.error().map(str::to_string);

        let Some(bookings) = outcome.into_bookings() else {
            return DrawerDirective::default();
        };
        self.bookings = merge_fetched(&self.bookings, bookings);

        let mut directive = self.reconcile();
        if let Some(link) = self.pending_link.take() {
            directive = directive.merge(link.apply(&mut self.bookings));
        }
        directive
    }

    /// Fetch and apply in one step.
    pub async fn refresh(&mut self, mode: FetchMode, now: DateTime<Utc>) -> DrawerDirective {
        self.begin_fetch(mode);
        let outcome = self.feed.fetch(mode, now).await;
        self.apply_fetch(outcome)
    }

    /// Fold pending store markers into the current list.
    pub fn reconcile(&mut self) -> DrawerDirective {
        apply_store_updates(&mut self.bookings, &self.store)
    }

    /// Whether the `providerArrived` marker names this booking.
    pub fn arrival_for(&self, id: &BookingRef) -> bool {
        let Some(marker) = self.store.read::<ProviderArrivedMarker>(StoreKey::ProviderArrived)
        else {
            return false;
        };
        marker.booking_id == *id || self.find(id).is_some_and(|b| marker.booking_id.matches(b))
    }

    /// Record a status change made on a card.
    pub fn record_status(&mut self, id: &BookingRef, status: BookingStatus) -> bool {
        let mut changed = false;
        for booking in self.bookings.iter_mut().filter(|b| id.matches(b)) {
            changed |= apply_status(booking, status);
        }
        if changed {
            self.bus.publish(BookingSignal::StatusUpdated {
                booking_id: id.clone(),
                status,
            });
        }
        changed
    }

    /// "View Details": hand the booking to the details view.
    pub fn view_details(&self, booking: &DisplayBooking) -> DockResult<()> {
        self.store.write(StoreKey::CurrentBookingDetails, booking)
    }

    /// "Manage Payment": hand the booking to the payment page.
    pub fn begin_payment(&self, booking: &DisplayBooking) -> DockResult<PaymentRequest> {
        self.store.write(StoreKey::CurrentBookingDetails, booking)?;
        let request = PaymentRequest::for_booking(booking);
        info!(booking = %booking.booking_ref(), total = request.total(), "Payment started");
        Ok(request)
    }

    /// Payment page reported success.
    ///
    /// Leaves the same marker the payment page would and applies it right
    /// away, so the drawer switches to the Ongoing tab.
    pub fn confirm_payment(&mut self, id: &BookingRef) -> DockResult<DrawerDirective> {
        self.store.write(
            StoreKey::RecentBookingPayment,
            &RecentPaymentMarker {
                id: id.clone(),
                status: Some(BookingStatus::Ongoing),
                track_provider: true,
            },
        )?;
        let directive = self.reconcile();
        self.bus.publish(BookingSignal::PaymentCompleted {
            booking_id: id.clone(),
        });
        self.notifications
            .push("Payment Received", "Your payment was received. Your provider is on the way.");
        Ok(directive)
    }

    /// Provider reached the customer (simulation end or forced).
    pub fn announce_arrival(&mut self, booking: &DisplayBooking, now_ms: i64) -> DockResult<()> {
        let id = booking.booking_ref();
        self.store.write(
            StoreKey::ProviderArrived,
            &ProviderArrivedMarker {
                booking_id: id.clone(),
                provider_name: booking.company_name.clone(),
                timestamp: now_ms,
            },
        )?;
        for b in self.bookings.iter_mut().filter(|b| id.matches(b)) {
            b.provider_arrived = Some(true);
        }
        self.bus.publish(BookingSignal::ProviderForceArrival {
            booking_id: id.clone(),
        });
        self.bus.publish(BookingSignal::ProviderArrived { booking_id: id });
        self.notifications.push(
            "Provider Arrived",
            format!("{} has arrived at your location.", booking.company_name),
        );
        Ok(())
    }

    pub fn record_review(&self, review: &ReviewMarker) -> DockResult<()> {
        info!(booking = %review.id, rating = ?review.rating, "Review submitted");
        self.store.write(StoreKey::ServiceReview, review)
    }

    /// Customer confirmed the service is done.
    pub fn record_completion(&mut self, done: &CompletionMarker) -> DockResult<()> {
        self.store.write(StoreKey::ServiceCompleted, done)?;
        self.store.remove(StoreKey::ProviderArrived);
        for b in self.bookings.iter_mut().filter(|b| done.id.matches(b)) {
            apply_status(b, BookingStatus::Completed);
            b.provider_arrived = Some(false);
        }
        self.bus.publish(BookingSignal::ServiceCompleted {
            booking_id: done.id.clone(),
        });
        Ok(())
    }

    /// Forget the logged-in user.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.store.remove(StoreKey::User);
        self.bookings.clear();
        self.error = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DockError;
    use crate::lifecycle::BookingLifecycle;
    use crate::sample::SAMPLE_COUNT;
    use crate::store::StoredUser;
    use async_trait::async_trait;

    struct EmptyApi;

    #[async_trait]
    impl BookingApi for EmptyApi {
        async fn fetch_user_bookings(&self, _user_id: &str) -> DockResult<Vec<Booking>> {
            Ok(Vec::new())
        }
    }

    struct DownApi;

    #[async_trait]
    impl BookingApi for DownApi {
        async fn fetch_user_bookings(&self, _user_id: &str) -> DockResult<Vec<Booking>> {
            Err(DockError::HttpStatus("Service Unavailable".into()))
        }
    }

    fn dashboard(api: impl BookingApi + 'static) -> Dashboard {
        let store = SharedStore::in_memory();
        store
            .write(StoreKey::User, &StoredUser::nested("u1", "tok"))
            .unwrap();
        Dashboard::with_parts(Arc::new(api), store)
    }

    fn key(k: &str) -> BookingRef {
        BookingRef::Key(k.into())
    }

    #[tokio::test]
    async fn test_refresh_loads_samples() {
        let mut d = dashboard(EmptyApi);
        d.refresh(FetchMode::Manual, Utc::now()).await;
        assert_eq!(d.bookings().len(), SAMPLE_COUNT);
        assert!(!d.is_loading());
        assert_eq!(d.error(), None);
        assert_eq!(d.stats().total, SAMPLE_COUNT);
    }

    #[tokio::test]
    async fn test_refresh_failure_surfaces_error() {
        let mut d = dashboard(DownApi);
        d.refresh(FetchMode::Manual, Utc::now()).await;
        assert_eq!(d.bookings().len(), SAMPLE_COUNT);
        assert_eq!(
            d.error(),
            Some("Failed to fetch bookings: Service Unavailable")
        );
    }

    #[tokio::test]
    async fn test_logout_stops_fetching() {
        let mut d = dashboard(EmptyApi);
        d.refresh(FetchMode::Manual, Utc::now()).await;
        d.logout();
        assert!(d.bookings().is_empty());

        d.refresh(FetchMode::Manual, Utc::now()).await;
        assert!(d.bookings().is_empty());
        assert_eq!(d.error(), Some("User not logged in"));
    }

    #[tokio::test]
    async fn test_deep_link_applied_once() {
        let mut d = dashboard(EmptyApi);
        d.set_deep_link(DeepLink::parse("?bookingId=sample1&status=cancelled&openBookings=true"));

        let first = d.refresh(FetchMode::Manual, Utc::now()).await;
        assert!(first.open_drawer);
        assert_eq!(d.find(&key("sample1")).unwrap().status, BookingStatus::Cancelled);

        let second = d.refresh(FetchMode::Silent, Utc::now()).await;
        assert!(!second.open_drawer);
        assert_eq!(d.find(&key("sample1")).unwrap().status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_silent_refresh_keeps_cancel_and_payment() {
        let mut d = dashboard(EmptyApi);
        d.refresh(FetchMode::Manual, Utc::now()).await;

        assert!(d.record_status(&key("sample1"), BookingStatus::Cancelled));
        d.confirm_payment(&key("sample4")).unwrap();

        d.refresh(FetchMode::Silent, Utc::now()).await;
        d.refresh(FetchMode::Silent, Utc::now()).await;

        assert_eq!(d.bookings().len(), SAMPLE_COUNT);
        assert_eq!(d.find(&key("sample1")).unwrap().status, BookingStatus::Cancelled);
        let paid = d.find(&key("sample4")).unwrap();
        assert_eq!(paid.status, BookingStatus::Ongoing);
        assert!(paid.is_payment_complete());
        assert_eq!(d.stats().pending, 1);

        // a card mounted from the refreshed list never times out
        let mut card = BookingLifecycle::new(&paid.display());
        assert!(!card.countdown_running());
        for _ in 0..40 {
            assert_eq!(card.tick(), None);
        }
        assert_eq!(card.status(), BookingStatus::Ongoing);
    }

    #[tokio::test]
    async fn test_payment_then_arrival_then_completion() {
        let mut d = dashboard(EmptyApi);
        d.refresh(FetchMode::Manual, Utc::now()).await;
        let mut signals = d.bus().subscribe();

        let view = d.find(&key("sample4")).unwrap().display();
        let request = d.begin_payment(&view).unwrap();
        assert_eq!(request.seller.name, "CoolAir Technicians");
        assert!(d
            .store()
            .read::<DisplayBooking>(StoreKey::CurrentBookingDetails)
            .is_some());

        let directive = d.confirm_payment(&view.booking_ref()).unwrap();
        assert_eq!(directive.tab, Some(BookingTab::Status(BookingStatus::Ongoing)));
        assert!(d.find(&key("sample4")).unwrap().is_payment_complete());
        assert!(matches!(
            signals.recv().await.unwrap(),
            BookingSignal::PaymentCompleted { .. }
        ));

        d.announce_arrival(&view, 1).unwrap();
        assert!(d.arrival_for(&view.booking_ref()));
        assert!(!d.arrival_for(&key("sample3")));
        assert!(matches!(
            signals.recv().await.unwrap(),
            BookingSignal::ProviderForceArrival { .. }
        ));

        d.record_completion(&CompletionMarker {
            id: view.booking_ref(),
            timestamp: 2,
        })
        .unwrap();
        let done = d.find(&key("sample4")).unwrap();
        assert_eq!(done.status, BookingStatus::Completed);
        assert!(!done.is_provider_arrived());
        assert!(!d.arrival_for(&view.booking_ref()));
    }

    #[tokio::test]
    async fn test_record_status_publishes_only_on_change() {
        let mut d = dashboard(EmptyApi);
        d.refresh(FetchMode::Manual, Utc::now()).await;
        let rx = d.bus().subscribe();

        assert!(d.record_status(&key("sample1"), BookingStatus::Cancelled));
        assert!(!d.record_status(&key("sample1"), BookingStatus::Cancelled));
        assert!(!d.record_status(&key("sample7"), BookingStatus::Pending));
        assert_eq!(rx.len(), 1);
    }
}
