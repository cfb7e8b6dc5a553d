//! Mount-time reconciliation of store markers and deep links.
//!
//! Markers left by other pages are folded into the booking list once, when
//! the drawer mounts and after each fetch. One-shot markers are removed as
//! they are consumed; `providerArrived` stays until the card completes the
//! service. Applying the same markers twice gives the same list.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::filter::BookingTab;
use crate::store::{
    CompletionMarker, ProviderArrivedMarker, RecentPaymentMarker, SharedStore,
    StatusUpdateMarker, StoreKey,
};
use crate::types::{Booking, BookingRef, BookingStatus};

/// What reconciliation asks of the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerDirective {
    pub open_drawer: bool,
    /// Tab to switch to, if any
    pub tab: Option<BookingTab>,
}

impl DrawerDirective {
    fn open() -> Self {
        Self {
            open_drawer: true,
            tab: None,
        }
    }

    fn open_on(tab: BookingTab) -> Self {
        Self {
            open_drawer: true,
            tab: Some(tab),
        }
    }

    /// Combine two directives; a later tab wins.
    pub fn merge(self, other: DrawerDirective) -> Self {
        Self {
            open_drawer: self.open_drawer || other.open_drawer,
            tab: other.tab.or(self.tab),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.open_drawer && self.tab.is_none()
    }
}

/// Move a booking to `to` if the edge is allowed.
///
/// Returns true when the status changed.
pub fn apply_status(booking: &mut Booking, to: BookingStatus) -> bool {
    if booking.status == to {
        return false;
    }
    if !booking.status.can_transition_to(to) {
        warn!(
            booking = %booking.key,
            "Ignoring status update: {} -> {}",
            booking.status,
            to
        );
        return false;
    }
    debug!(booking = %booking.key, "status {} -> {}", booking.status, to);
    booking.status = to;
    true
}

/// Fold a freshly fetched list into the current one.
///
/// Membership and order follow `incoming`. For a booking already on screen
/// the fetched status is only taken along an allowed edge, and the payment
/// and arrival flags never switch back off.
pub fn merge_fetched(current: &[Booking], incoming: Vec<Booking>) -> Vec<Booking> {
    incoming
        .into_iter()
        .map(|fetched| {
            let Some(known) = current.iter().find(|b| b.key == fetched.key) else {
                return fetched;
            };
            let mut merged = fetched.clone();
            merged.status = known.status;
            apply_status(&mut merged, fetched.status);
            if known.is_payment_complete() {
                merged.payment_complete = Some(true);
            }
            if merged.status == BookingStatus::Completed {
                merged.provider_arrived = known.provider_arrived;
            } else if known.is_provider_arrived() {
                merged.provider_arrived = Some(true);
            }
            merged
        })
        .collect()
}

/// Mark a booking paid. Only an ongoing booking carries the flag.
fn mark_paid(booking: &mut Booking) {
    if booking.status == BookingStatus::Ongoing {
        booking.payment_complete = Some(true);
    } else {
        debug!(booking = %booking.key, "Ignoring payment for {} booking", booking.status);
    }
}

fn for_each_match(bookings: &mut [Booking], id: &BookingRef, mut f: impl FnMut(&mut Booking)) -> usize {
    let mut hits = 0;
    for booking in bookings.iter_mut().filter(|b| id.matches(b)) {
        f(booking);
        hits += 1;
    }
    if hits == 0 {
        debug!("No booking matches {}", id);
    }
    hits
}

fn wants_drawer(value: &Value) -> bool {
    matches!(value, Value::Bool(true)) || value.as_str() == Some("true")
}

/// Consume pending markers from the store into `bookings`.
pub fn apply_store_updates(bookings: &mut [Booking], store: &SharedStore) -> DrawerDirective {
    let mut directive = DrawerDirective::default();

    if let Some(flag) = store.take::<Value>(StoreKey::OpenBookingsDrawer) {
        if wants_drawer(&flag) {
            directive = directive.merge(DrawerDirective::open());
        }
    }

    if let Some(update) = store.take::<StatusUpdateMarker>(StoreKey::UpdateBookingStatus) {
        for_each_match(bookings, &update.id, |b| {
            apply_status(b, update.status);
        });
    }

    if let Some(payment) = store.take::<RecentPaymentMarker>(StoreKey::RecentBookingPayment) {
        info!("Applying payment for booking {}", payment.id);
        for_each_match(bookings, &payment.id, |b| {
            if let Some(status) = payment.status {
                apply_status(b, status);
            }
            mark_paid(b);
        });
        if payment.track_provider {
            directive = directive.merge(DrawerDirective::open_on(BookingTab::Status(
                BookingStatus::Ongoing,
            )));
        }
    }

    // Left in place: the card clears it when the service completes
    if let Some(arrival) = store.read::<ProviderArrivedMarker>(StoreKey::ProviderArrived) {
        for_each_match(bookings, &arrival.booking_id, |b| {
            b.provider_arrived = Some(true);
        });
        directive = directive.merge(DrawerDirective::open_on(BookingTab::Status(
            BookingStatus::Ongoing,
        )));
    }

    if let Some(done) = store.take::<CompletionMarker>(StoreKey::ServiceCompleted) {
        for_each_match(bookings, &done.id, |b| {
            apply_status(b, BookingStatus::Completed);
            b.provider_arrived = Some(false);
        });
    }

    directive
}

/// Query parameters recognised at start-up
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeepLink {
    pub booking_id: Option<String>,
    pub status: Option<String>,
    pub payment_complete: bool,
    pub open_bookings: bool,
}

impl DeepLink {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let mut link = DeepLink::default();
        for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                "bookingId" if !value.is_empty() => link.booking_id = Some(value.into_owned()),
                "status" if !value.is_empty() => link.status = Some(value.into_owned()),
                "paymentComplete" => link.payment_complete = value == "true",
                "openBookings" => link.open_bookings = value == "true",
                _ => {}
            }
        }
        link
    }

    pub fn is_empty(&self) -> bool {
        *self == DeepLink::default()
    }

    /// Apply the link to `bookings`.
    ///
    /// A status update needs both `bookingId` and `status`. Unknown status
    /// names are ignored.
    pub fn apply(&self, bookings: &mut [Booking]) -> DrawerDirective {
        if let (Some(id), Some(status)) = (&self.booking_id, &self.status) {
            match status.parse::<BookingStatus>() {
                Ok(status) => {
                    let id = BookingRef::parse(id);
                    let payment_complete = self.payment_complete;
                    for_each_match(bookings, &id, |b| {
                        apply_status(b, status);
                        if payment_complete {
                            mark_paid(b);
                        }
                    });
                }
                Err(e) => warn!("Ignoring deep link status: {}", e),
            }
        }

        if self.open_bookings {
            DrawerDirective::open()
        } else {
            DrawerDirective::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_bookings;
    use chrono::Utc;

    fn bookings() -> Vec<Booking> {
        sample_bookings("u1", Utc::now())
    }

    fn find<'a>(list: &'a [Booking], key: &str) -> &'a Booking {
        list.iter().find(|b| b.key == key).unwrap()
    }

    #[test]
    fn test_open_flag_accepts_bool_and_string() {
        let store = SharedStore::in_memory();
        let mut list = bookings();

        store.write(StoreKey::OpenBookingsDrawer, &true).unwrap();
        assert!(apply_store_updates(&mut list, &store).open_drawer);
        assert!(!apply_store_updates(&mut list, &store).open_drawer);

        store.write(StoreKey::OpenBookingsDrawer, &"true").unwrap();
        assert!(apply_store_updates(&mut list, &store).open_drawer);

        store.write(StoreKey::OpenBookingsDrawer, &false).unwrap();
        assert!(apply_store_updates(&mut list, &store).is_empty());
    }

    #[test]
    fn test_status_update_validated() {
        let store = SharedStore::in_memory();
        let mut list = bookings();

        store
            .write(
                StoreKey::UpdateBookingStatus,
                &StatusUpdateMarker {
                    id: BookingRef::Key("sample1".into()),
                    status: BookingStatus::Ongoing,
                },
            )
            .unwrap();
        apply_store_updates(&mut list, &store);
        assert_eq!(find(&list, "sample1").status, BookingStatus::Ongoing);

        // completed is terminal
        store
            .write(
                StoreKey::UpdateBookingStatus,
                &StatusUpdateMarker {
                    id: BookingRef::Key("sample7".into()),
                    status: BookingStatus::Pending,
                },
            )
            .unwrap();
        apply_store_updates(&mut list, &store);
        assert_eq!(find(&list, "sample7").status, BookingStatus::Completed);
        assert!(store.read_text(StoreKey::UpdateBookingStatus).unwrap().is_none());
    }

    #[test]
    fn test_payment_with_tracking() {
        let store = SharedStore::in_memory();
        let mut list = bookings();
        store
            .write(
                StoreKey::RecentBookingPayment,
                &RecentPaymentMarker {
                    id: BookingRef::Key("sample4".into()),
                    status: None,
                    track_provider: true,
                },
            )
            .unwrap();

        let directive = apply_store_updates(&mut list, &store);
        assert!(directive.open_drawer);
        assert_eq!(directive.tab, Some(BookingTab::Status(BookingStatus::Ongoing)));
        assert!(find(&list, "sample4").is_payment_complete());
    }

    #[test]
    fn test_arrival_marker_is_kept() {
        let store = SharedStore::in_memory();
        let mut list = bookings();
        store
            .write(
                StoreKey::ProviderArrived,
                &ProviderArrivedMarker {
                    booking_id: BookingRef::Key("sample3".into()),
                    provider_name: "CleanPro Services".into(),
                    timestamp: 0,
                },
            )
            .unwrap();

        let first = apply_store_updates(&mut list, &store);
        let snapshot = list.clone();
        let second = apply_store_updates(&mut list, &store);

        assert_eq!(first, second);
        assert_eq!(list, snapshot);
        assert!(find(&list, "sample3").is_provider_arrived());
    }

    #[test]
    fn test_completion_clears_arrival() {
        let store = SharedStore::in_memory();
        let mut list = bookings();
        list.iter_mut()
            .filter(|b| b.key == "sample3")
            .for_each(|b| b.provider_arrived = Some(true));
        store
            .write(
                StoreKey::ServiceCompleted,
                &CompletionMarker {
                    id: BookingRef::Key("sample3".into()),
                    timestamp: 1,
                },
            )
            .unwrap();

        apply_store_updates(&mut list, &store);
        let done = find(&list, "sample3");
        assert_eq!(done.status, BookingStatus::Completed);
        assert!(!done.is_provider_arrived());
    }

    #[test]
    fn test_deep_link_parse() {
        let link = DeepLink::parse("?bookingId=sample4&status=cancelled&openBookings=true");
        assert_eq!(link.booking_id.as_deref(), Some("sample4"));
        assert_eq!(link.status.as_deref(), Some("cancelled"));
        assert!(link.open_bookings);
        assert!(!link.payment_complete);
        assert!(DeepLink::parse("").is_empty());
    }

    #[test]
    fn test_deep_link_apply() {
        let mut list = bookings();
        let link = DeepLink::parse("bookingId=sample2&status=ongoing&paymentComplete=true");
        let directive = link.apply(&mut list);
        assert!(directive.is_empty());
        let b = find(&list, "sample2");
        assert_eq!(b.status, BookingStatus::Ongoing);
        assert!(b.is_payment_complete());
    }

    #[test]
    fn test_payment_ignored_for_closed_bookings() {
        let store = SharedStore::in_memory();
        let mut list = bookings();
        for key in ["sample5", "sample7"] {
            store
                .write(
                    StoreKey::RecentBookingPayment,
                    &RecentPaymentMarker {
                        id: BookingRef::Key(key.into()),
                        status: Some(BookingStatus::Ongoing),
                        track_provider: false,
                    },
                )
                .unwrap();
            apply_store_updates(&mut list, &store);
        }
        assert_eq!(find(&list, "sample5").status, BookingStatus::Cancelled);
        assert!(!find(&list, "sample5").is_payment_complete());
        assert_eq!(find(&list, "sample7").status, BookingStatus::Completed);
        assert!(!find(&list, "sample7").is_payment_complete());

        DeepLink::parse("bookingId=sample8&status=ongoing&paymentComplete=true").apply(&mut list);
        assert_eq!(find(&list, "sample8").status, BookingStatus::Completed);
        assert!(!find(&list, "sample8").is_payment_complete());
    }

    #[test]
    fn test_merge_keeps_local_progress() {
        let mut current = bookings();
        current
            .iter_mut()
            .filter(|b| b.key == "sample1")
            .for_each(|b| b.status = BookingStatus::Cancelled);
        current
            .iter_mut()
            .filter(|b| b.key == "sample4")
            .for_each(|b| {
                b.payment_complete = Some(true);
                b.provider_arrived = Some(true);
            });

        let merged = merge_fetched(&current, bookings());
        assert_eq!(merged.len(), current.len());
        assert_eq!(find(&merged, "sample1").status, BookingStatus::Cancelled);
        assert!(find(&merged, "sample4").is_payment_complete());
        assert!(find(&merged, "sample4").is_provider_arrived());
    }

    #[test]
    fn test_merge_takes_server_progress() {
        let current = bookings();
        let mut incoming = bookings();
        incoming.retain(|b| b.key != "sample9");
        incoming
            .iter_mut()
            .filter(|b| b.key == "sample2")
            .for_each(|b| b.status = BookingStatus::Ongoing);
        incoming
            .iter_mut()
            .filter(|b| b.key == "sample3")
            .for_each(|b| b.status = BookingStatus::Completed);

        let merged = merge_fetched(&current, incoming);
        assert_eq!(merged.len(), current.len() - 1);
        assert!(merged.iter().all(|b| b.key != "sample9"));
        assert_eq!(find(&merged, "sample2").status, BookingStatus::Ongoing);
        assert_eq!(find(&merged, "sample3").status, BookingStatus::Completed);
    }

    #[test]
    fn test_deep_link_needs_both_params() {
        let mut list = bookings();
        let before = list.clone();
        DeepLink::parse("status=cancelled").apply(&mut list);
        DeepLink::parse("bookingId=sample1&status=bogus").apply(&mut list);
        assert_eq!(list, before);
    }
}
