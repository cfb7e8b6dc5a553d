//! Per-card booking lifecycle.
//!
//! ```text
//! pending ──► ongoing ───────────────────────────────────────────► completed
//!    │          AwaitingPayment ─► AwaitingProvider ─► ProviderArrived ─► ReviewPending ─┘
//!    │          │ (30s countdown)
//!    └──────────┴──► cancelled
//! ```
//!
//! The controller holds no timers; the UI calls [`BookingLifecycle::tick`]
//! once a second and forwards arrival/payment signals as they come in.

use tracing::{debug, info};

use crate::error::{DockError, DockResult};
use crate::store::{CompletionMarker, ReviewMarker};
use crate::types::{BookingRef, BookingStatus, DisplayBooking};

/// Seconds an ongoing booking has to be paid before it is cancelled
pub const COUNTDOWN_SECS: u32 = 30;

/// Sub-state of an ongoing booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OngoingPhase {
    AwaitingPayment,
    AwaitingProvider,
    ProviderArrived,
    ReviewPending,
}

/// Colour band of the countdown pill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownUrgency {
    /// More than 20 seconds left
    Calm,
    /// 11 to 20 seconds left
    Warning,
    /// 10 seconds or less
    Critical,
}

impl CountdownUrgency {
    pub fn for_seconds(seconds: u32) -> Self {
        if seconds > 20 {
            CountdownUrgency::Calm
        } else if seconds > 10 {
            CountdownUrgency::Warning
        } else {
            CountdownUrgency::Critical
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CountdownUrgency::Calm => "countdown calm",
            CountdownUrgency::Warning => "countdown warning",
            CountdownUrgency::Critical => "countdown critical",
        }
    }
}

/// What a lifecycle operation changed
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    StatusChanged {
        from: BookingStatus,
        to: BookingStatus,
    },
    /// Countdown reached zero and the booking was cancelled
    TimedOut,
}

/// Lifecycle state of one booking card.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingLifecycle {
    booking: BookingRef,
    status: BookingStatus,
    payment_complete: bool,
    provider_arrived: bool,
    review_open: bool,
    review_submitted: bool,
    rating: Option<u8>,
    review_text: String,
    time_left: u32,
}

impl BookingLifecycle {
    pub fn new(booking: &DisplayBooking) -> Self {
        Self {
            booking: booking.booking_ref(),
            status: booking.status,
            payment_complete: booking.payment_complete,
            provider_arrived: booking.provider_arrived,
            review_open: false,
            review_submitted: false,
            rating: None,
            review_text: String::new(),
            time_left: COUNTDOWN_SECS,
        }
    }

    pub fn booking_ref(&self) -> &BookingRef {
        &self.booking
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn payment_complete(&self) -> bool {
        self.payment_complete
    }

    pub fn provider_arrived(&self) -> bool {
        self.provider_arrived
    }

    pub fn rating(&self) -> Option<u8> {
        self.rating
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    /// Sub-state while ongoing, `None` otherwise
    pub fn phase(&self) -> Option<OngoingPhase> {
        if self.status != BookingStatus::Ongoing {
            return None;
        }
        Some(if self.review_open || self.review_submitted {
            OngoingPhase::ReviewPending
        } else if self.provider_arrived {
            OngoingPhase::ProviderArrived
        } else if self.payment_complete {
            OngoingPhase::AwaitingProvider
        } else {
            OngoingPhase::AwaitingPayment
        })
    }

    /// The countdown runs while ongoing and unpaid.
    pub fn countdown_running(&self) -> bool {
        self.status == BookingStatus::Ongoing && !self.payment_complete
    }

    /// The pill is hidden once the provider has arrived, even if unpaid.
    pub fn countdown_visible(&self) -> bool {
        self.countdown_running() && !self.provider_arrived
    }

    pub fn urgency(&self) -> CountdownUrgency {
        CountdownUrgency::for_seconds(self.time_left)
    }

    pub fn review_modal_open(&self) -> bool {
        self.review_open && !self.review_submitted
    }

    pub fn success_modal_open(&self) -> bool {
        self.review_submitted && self.status == BookingStatus::Ongoing
    }

    /// Move to `to` if it is an allowed edge.
    ///
    /// Re-applying the current status is a no-op and returns `Ok(None)`.
    pub fn transition(&mut self, to: BookingStatus) -> DockResult<Option<LifecycleEvent>> {
        let from = self.status;
        if from == to {
            return Ok(None);
        }
        if !from.can_transition_to(to) {
            return Err(DockError::InvalidTransition { from, to });
        }

        self.status = to;
        if to.is_terminal() {
            self.review_open = false;
            self.review_submitted = false;
        }
        debug!(booking = %self.booking, %from, %to, "booking status changed");
        Ok(Some(LifecycleEvent::StatusChanged { from, to }))
    }

    /// Customer cancelled from the card or details modal.
    pub fn cancel(&mut self) -> DockResult<Option<LifecycleEvent>> {
        self.transition(BookingStatus::Cancelled)
    }

    /// One-second countdown tick.
    ///
    /// Does nothing unless the countdown is running. Cancels the booking when
    /// the last second elapses.
    pub fn tick(&mut self) -> Option<LifecycleEvent> {
        if !self.countdown_running() {
            return None;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.status = BookingStatus::Cancelled;
            self.review_open = false;
            info!(booking = %self.booking, "payment window expired, booking cancelled");
            return Some(LifecycleEvent::TimedOut);
        }
        self.time_left -= 1;
        None
    }

    /// Payment page reported success. Returns true when this changed anything.
    pub fn complete_payment(&mut self) -> bool {
        if self.status != BookingStatus::Ongoing || self.payment_complete {
            return false;
        }
        self.payment_complete = true;
        true
    }

    /// Provider reached the customer. Returns true when this changed anything.
    pub fn mark_provider_arrived(&mut self) -> bool {
        if self.status != BookingStatus::Ongoing || self.provider_arrived {
            return false;
        }
        self.provider_arrived = true;
        true
    }

    /// "Complete Service": open the review step.
    pub fn request_completion(&mut self) -> DockResult<()> {
        if self.status != BookingStatus::Ongoing || !self.provider_arrived {
            return Err(DockError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Completed,
            });
        }
        self.review_open = true;
        Ok(())
    }

    /// Star rating, clamped to 1..=5
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = Some(rating.clamp(1, 5));
    }

    pub fn set_review_text(&mut self, text: impl Into<String>) {
        self.review_text = text.into();
    }

    /// Close the review modal without submitting.
    pub fn skip_review(&mut self) {
        self.review_open = false;
    }

    /// Submit the review; the success modal opens next.
    pub fn submit_review(&mut self, now_ms: i64) -> DockResult<ReviewMarker> {
        if !self.review_open {
            return Err(DockError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Completed,
            });
        }
        let rating = self.rating.ok_or(DockError::ReviewRatingRequired)?;
        self.review_submitted = true;
        Ok(ReviewMarker {
            id: self.booking.clone(),
            timestamp: now_ms,
            rating: Some(rating),
            text: self.review_text.clone(),
        })
    }

    /// Confirm on the success modal: the booking is completed.
    pub fn confirm_completion(&mut self, now_ms: i64) -> DockResult<CompletionMarker> {
        if !self.review_submitted {
            return Err(DockError::InvalidTransition {
                from: self.status,
                to: BookingStatus::Completed,
            });
        }
        self.transition(BookingStatus::Completed)?;
        self.provider_arrived = false;
        Ok(CompletionMarker {
            id: self.booking.clone(),
            timestamp: now_ms,
        })
    }

    /// "Book Again" has no behaviour yet.
    pub fn book_again(&self) {
        info!(booking = %self.booking, "book again requested; not available yet");
    }

    /// Fold a refreshed server view into local state.
    ///
    /// Status moves only along allowed edges; flags only ever turn on.
    /// Applying the same view twice changes nothing.
    pub fn sync_from(&mut self, booking: &DisplayBooking) {
        if booking.status != self.status {
            if let Err(e) = self.transition(booking.status) {
                debug!(booking = %self.booking, "ignoring server status: {}", e);
            }
        }
        if booking.payment_complete {
            self.complete_payment();
        }
        if booking.provider_arrived {
            self.mark_provider_arrived();
        }
    }
}
