//! Booking card
//!
//! One card per booking in the drawer. Owns a [`BookingLifecycle`] and the
//! three timers that drive it: the payment countdown, the arrival poll and
//! the signal bus subscription.

use chrono::Utc;
use dioxus::prelude::*;
use servicedock_core::config::{ARRIVAL_POLL, CLOCK_TICK};
use servicedock_core::{
    format, Booking, BookingLifecycle, BookingSignal, BookingStatus, LifecycleEvent,
    OngoingPhase, PaymentRequest,
};
use tokio::sync::broadcast::error::RecvError;

use super::booking_modals::{
    DetailsModal, PaymentModal, ReviewModal, SuccessModal, TrackingModal, WaitingForProvider,
};
use crate::context::{use_dashboard, use_dock_view, use_drawer, use_signal_bus, with_dashboard};

/// Fold a bus signal about this card's booking into its lifecycle.
fn apply_signal(lc: &mut BookingLifecycle, signal: &BookingSignal) -> bool {
    match signal {
        BookingSignal::ProviderForceArrival { .. } | BookingSignal::ProviderArrived { .. } => {
            lc.mark_provider_arrived()
        }
        BookingSignal::PaymentCompleted { .. } => lc.complete_payment(),
        BookingSignal::ServiceCompleted { .. } => {
            matches!(lc.transition(BookingStatus::Completed), Ok(Some(_)))
        }
        BookingSignal::StatusUpdated { status, .. } => {
            matches!(lc.transition(*status), Ok(Some(_)))
        }
    }
}

#[component]
pub fn BookingCard(booking: Booking) -> Element {
    let dashboard = use_dashboard();
    let view = use_dock_view();
    let mut drawer = use_drawer();
    let bus = use_signal_bus();

    let display = booking.display();
    let mut lifecycle = use_signal({
        let display = display.clone();
        move || BookingLifecycle::new(&display)
    });
    // Latest projection, for handlers that hand the booking to the dashboard
    let mut current = use_signal({
        let display = display.clone();
        move || display
    });

    let mut show_details = use_signal(|| false);
    let mut payment: Signal<Option<PaymentRequest>> = use_signal(|| None);
    let mut show_tracking = use_signal(|| false);

    // Follow refreshed server data
    use_effect(use_reactive((&booking,), move |(booking,)| {
        let display = booking.display();
        lifecycle.with_mut(|lc| lc.sync_from(&display));
        current.set(display);
    }));

    // Payment countdown
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(CLOCK_TICK).await;
                if !lifecycle.peek().countdown_running() {
                    continue;
                }
                if let Some(LifecycleEvent::TimedOut) = lifecycle.with_mut(|lc| lc.tick()) {
                    let id = lifecycle.peek().booking_ref().clone();
                    with_dashboard(dashboard(), view, |d| {
                        d.record_status(&id, BookingStatus::Cancelled)
                    })
                    .await;
                }
            }
        });
    });

    // Arrival written by another window or page
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(ARRIVAL_POLL).await;
                let (id, waiting) = {
                    let lc = lifecycle.peek();
                    (
                        lc.booking_ref().clone(),
                        lc.status() == BookingStatus::Ongoing && !lc.provider_arrived(),
                    )
                };
                if !waiting {
                    continue;
                }
                let shared = dashboard();
                let guard = shared.read().await;
                let arrived = guard.as_ref().is_some_and(|d| d.arrival_for(&id));
                drop(guard);
                if arrived {
                    lifecycle.with_mut(|lc| lc.mark_provider_arrived());
                }
            }
        });
    });

    use_effect(move || {
        let mut rx = bus.subscribe();
        spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(signal) => {
                        if lifecycle.peek().booking_ref() != signal.booking_id() {
                            continue;
                        }
                        lifecycle.with_mut(|lc| apply_signal(lc, &signal));
                    }
                    Err(RecvError::Lagged(n)) => {
                        tracing::warn!("Booking card missed {} signals", n);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    let mut cancel = move || {
        let Ok(Some(_)) = lifecycle.with_mut(|lc| lc.cancel()) else {
            return;
        };
        let id = lifecycle.peek().booking_ref().clone();
        spawn(async move {
            with_dashboard(dashboard(), view, |d| {
                d.record_status(&id, BookingStatus::Cancelled)
            })
            .await;
        });
    };

    let open_payment = move || {
        let display = current.peek().clone();
        spawn(async move {
            let shared = dashboard();
            let guard = shared.read().await;
            let Some(d) = guard.as_ref() else {
                return;
            };
            match d.begin_payment(&display) {
                Ok(request) => payment.set(Some(request)),
                Err(e) => tracing::error!("Failed to start payment: {}", e),
            }
        });
    };

    let confirm_payment = move |_: ()| {
        let id = lifecycle.peek().booking_ref().clone();
        payment.set(None);
        lifecycle.with_mut(|lc| lc.complete_payment());
        spawn(async move {
            match with_dashboard(dashboard(), view, |d| d.confirm_payment(&id)).await {
                Some(Ok(directive)) => drawer.with_mut(|state| state.apply(directive)),
                Some(Err(e)) => tracing::error!("Failed to record payment: {}", e),
                None => {}
            }
        });
    };

    let view_details = move |_: MouseEvent| {
        let display = current.peek().clone();
        show_details.set(true);
        spawn(async move {
            let shared = dashboard();
            let guard = shared.read().await;
            if let Some(d) = guard.as_ref() {
                if let Err(e) = d.view_details(&display) {
                    tracing::warn!("Failed to store booking details: {}", e);
                }
            }
        });
    };

    let on_arrived = move |_: ()| {
        lifecycle.with_mut(|lc| lc.mark_provider_arrived());
        let display = current.peek().clone();
        spawn(async move {
            let now_ms = Utc::now().timestamp_millis();
            if let Some(Err(e)) =
                with_dashboard(dashboard(), view, |d| d.announce_arrival(&display, now_ms)).await
            {
                tracing::error!("Failed to record arrival: {}", e);
            }
        });
    };

    let mut complete_service = move || {
        show_tracking.set(false);
        if let Err(e) = lifecycle.with_mut(|lc| lc.request_completion()) {
            tracing::warn!("Cannot complete service yet: {}", e);
        }
    };

    let submit_review = move |_: ()| {
        let now_ms = Utc::now().timestamp_millis();
        match lifecycle.with_mut(|lc| lc.submit_review(now_ms)) {
            Ok(review) => {
                spawn(async move {
                    let shared = dashboard();
                    let guard = shared.read().await;
                    if let Some(Err(e)) = guard.as_ref().map(|d| d.record_review(&review)) {
                        tracing::warn!("Failed to store review: {}", e);
                    }
                });
            }
            Err(e) => tracing::warn!("Review not submitted: {}", e),
        }
    };

    let confirm_completion = move |_: ()| {
        let now_ms = Utc::now().timestamp_millis();
        match lifecycle.with_mut(|lc| lc.confirm_completion(now_ms)) {
            Ok(done) => {
                spawn(async move {
                    if let Some(Err(e)) =
                        with_dashboard(dashboard(), view, |d| d.record_completion(&done)).await
                    {
                        tracing::error!("Failed to record completion: {}", e);
                    }
                });
            }
            Err(e) => tracing::warn!("Completion not confirmed: {}", e),
        }
    };

    let lc = lifecycle.read().clone();
    let status = lc.status();
    let price = format::peso(display.price);
    let workers = display.workers_label();
    let badge_class = format!("status-badge {}", status.as_str());
    let countdown_class = lc.urgency().css_class();
    let time_left = lc.time_left();

    rsx! {
        div { class: "booking-card",
            div { class: "booking-image",
                img { src: "{display.image}", alt: "{display.service}" }
            }

            div { class: "booking-body",
                div { class: "booking-head",
                    div {
                        h3 { class: "booking-company", "{display.company_name}" }
                        p { class: "booking-service", "{display.service}" }
                        if display.worker_count > 0 {
                            span { class: "booking-workers", "{workers}" }
                        }
                    }
                    span { class: "{badge_class}", "{status.label()}" }
                }

                div { class: "booking-meta",
                    span { class: "booking-date", "{display.date}" }
                    span { class: "booking-price", "{price}" }
                }

                button { class: "btn-details", onclick: view_details, "View Details" }

                {match status {
                    BookingStatus::Pending => rsx! {
                        div { class: "booking-actions",
                            button {
                                class: "btn-action again",
                                onclick: move |_| lifecycle.read().book_again(),
                                "Book Again"
                            }
                            button {
                                class: "btn-action cancel",
                                onclick: move |_| cancel(),
                                "Cancel"
                            }
                        }
                    },
                    BookingStatus::Ongoing => rsx! {
                        div { class: "booking-actions stacked",
                            if lc.countdown_visible() {
                                div { class: "{countdown_class}",
                                    span { "Time left to pay" }
                                    span { class: "countdown-value", "{time_left}s" }
                                }
                            }
                            {match lc.phase() {
                                Some(OngoingPhase::ProviderArrived) | Some(OngoingPhase::ReviewPending) => rsx! {
                                    button {
                                        class: "btn-action complete",
                                        onclick: move |_| complete_service(),
                                        "Complete Service"
                                    }
                                },
                                Some(OngoingPhase::AwaitingProvider) => rsx! {
                                    WaitingForProvider {
                                        on_complete: move |_| show_tracking.set(true),
                                    }
                                },
                                _ => rsx! {
                                    button {
                                        class: "btn-action pay",
                                        onclick: move |_| open_payment(),
                                        "Manage Payment"
                                    }
                                },
                            }}
                        }
                    },
                    BookingStatus::Cancelled | BookingStatus::Completed => rsx! {
                        button {
                            class: "btn-action again wide",
                            onclick: move |_| lifecycle.read().book_again(),
                            "Book Again"
                        }
                    },
                }}
            }

            if show_details() {
                DetailsModal {
                    booking: display.clone(),
                    status,
                    payment_complete: lc.payment_complete(),
                    on_close: move |_| show_details.set(false),
                    on_cancel: move |_| {
                        cancel();
                        show_details.set(false);
                    },
                    on_pay: move |_| {
                        show_details.set(false);
                        open_payment();
                    },
                }
            }

            if let Some(request) = payment() {
                PaymentModal {
                    request,
                    on_close: move |_| payment.set(None),
                    on_confirm: confirm_payment,
                }
            }

            if show_tracking() {
                TrackingModal {
                    booking: display.clone(),
                    payment_complete: lc.payment_complete(),
                    provider_arrived: lc.provider_arrived(),
                    on_close: move |_| show_tracking.set(false),
                    on_arrived,
                    on_complete: move |_| complete_service(),
                }
            }

            if lc.review_modal_open() {
                ReviewModal {
                    rating: lc.rating(),
                    text: lc.review_text().to_string(),
                    on_rate: move |stars: u8| lifecycle.with_mut(|lc| lc.set_rating(stars)),
                    on_text: move |text: String| lifecycle.with_mut(|lc| lc.set_review_text(text)),
                    on_skip: move |_| lifecycle.with_mut(|lc| lc.skip_review()),
                    on_submit: submit_review,
                }
            }

            if lc.success_modal_open() {
                SuccessModal { on_confirm: confirm_completion }
            }
        }
    }
}
