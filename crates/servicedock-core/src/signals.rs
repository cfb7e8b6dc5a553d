//! In-process signal bus for same-tick reactions.
//!
//! The shared store carries state across polls; the bus carries the moment a
//! change happens so mounted components can react without waiting for the
//! next poll tick (e.g. the tracking map jumping to "arrived" when the card
//! forces arrival).
//!
//! ```text
//! ┌──────────────┐  publish   ┌────────────┐  subscribe  ┌──────────────┐
//! │ BookingCard  │──────────► │ SignalBus  │ ──────────► │ TrackingMap  │
//! └──────────────┘            │ (broadcast)│ ──────────► │ Drawer       │
//!                             └────────────┘             └──────────────┘
//! ```

use tokio::sync::broadcast;
use tracing::trace;

use crate::types::{BookingRef, BookingStatus};

/// Buffer size for the broadcast channel.
const BROADCAST_CHANNEL_SIZE: usize = 64;

/// Something that just happened to a booking
#[derive(Debug, Clone, PartialEq)]
pub enum BookingSignal {
    /// Skip the tracking simulation and mark the provider as arrived
    ProviderForceArrival { booking_id: BookingRef },
    /// Provider reached the customer
    ProviderArrived { booking_id: BookingRef },
    /// Payment page reported success
    PaymentCompleted { booking_id: BookingRef },
    /// Customer confirmed completion
    ServiceCompleted { booking_id: BookingRef },
    /// Status changed (cancel, timeout, external update)
    StatusUpdated {
        booking_id: BookingRef,
        status: BookingStatus,
    },
}

impl BookingSignal {
    /// Booking the signal is about
    pub fn booking_id(&self) -> &BookingRef {
        match self {
            BookingSignal::ProviderForceArrival { booking_id }
            | BookingSignal::ProviderArrived { booking_id }
            | BookingSignal::PaymentCompleted { booking_id }
            | BookingSignal::ServiceCompleted { booking_id }
            | BookingSignal::StatusUpdated { booking_id, .. } => booking_id,
        }
    }
}

/// Broadcast bus shared by every mounted component.
///
/// Cloning is cheap; all clones publish to the same subscribers. Signals
/// published while nobody listens are dropped.
#[derive(Debug, Clone)]
pub struct SignalBus {
    tx: broadcast::Sender<BookingSignal>,
}

impl SignalBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CHANNEL_SIZE);
        Self { tx }
    }

    /// Publish to all current subscribers. Returns how many received it.
    pub fn publish(&self, signal: BookingSignal) -> usize {
        trace!(?signal, "publishing booking signal");
        // No subscribers is fine
        self.tx.send(signal).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BookingSignal> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_all_subscribers() {
        let bus = SignalBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.clone().subscribe();

        let signal = BookingSignal::ProviderForceArrival {
            booking_id: BookingRef::Key("sample3".into()),
        };
        assert_eq!(bus.publish(signal.clone()), 2);

        assert_eq!(a.recv().await.unwrap(), signal);
        assert_eq!(b.recv().await.unwrap(), signal);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = SignalBus::new();
        let delivered = bus.publish(BookingSignal::ServiceCompleted {
            booking_id: BookingRef::Numeric(1),
        });
        assert_eq!(delivered, 0);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_booking_id_accessor() {
        let signal = BookingSignal::StatusUpdated {
            booking_id: BookingRef::Numeric(9),
            status: BookingStatus::Cancelled,
        };
        assert_eq!(signal.booking_id(), &BookingRef::Numeric(9));
    }
}
