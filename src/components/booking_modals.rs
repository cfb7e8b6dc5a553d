//! Modals opened from a booking card.
//!
//! Each modal is stateless apart from the tracking map; the card owns the
//! lifecycle and passes callbacks in.

use dioxus::prelude::*;
use servicedock_core::tracking::{TRACKING_TICK, WAITING_FOR_PROVIDER};
use servicedock_core::{format, BookingStatus, DisplayBooking, PaymentRequest, TrackingSession};
use tokio::sync::broadcast::error::RecvError;

use crate::context::use_signal_bus;

fn status_badge_class(status: BookingStatus) -> String {
    format!("status-badge {}", status.as_str())
}

/// Spinner for ten seconds, then the "Track Service" button.
#[component]
pub fn WaitingForProvider(on_complete: EventHandler<()>) -> Element {
    let mut waiting = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(WAITING_FOR_PROVIDER).await;
            waiting.set(false);
        });
    });

    rsx! {
        if waiting() {
            div { class: "waiting-provider",
                div { class: "spinner small" }
                "Waiting for provider..."
            }
        } else {
            button {
                class: "btn-action track",
                onclick: move |_| on_complete.call(()),
                "Track Service"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DetailsModalProps {
    pub booking: DisplayBooking,
    pub status: BookingStatus,
    pub payment_complete: bool,
    pub on_close: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
    pub on_pay: EventHandler<()>,
}

/// Full booking details with a payment summary.
#[component]
pub fn DetailsModal(props: DetailsModalProps) -> Element {
    let b = &props.booking;
    let on_close = props.on_close;
    let on_cancel = props.on_cancel;
    let on_pay = props.on_pay;

    let scheduled = format::long_date(&b.scheduled_for);
    let starting = format::peso(b.starting_rate());
    let distance_line = format!(
        "Distance Charge ({:.1} km \u{00D7} {})",
        b.distance,
        format::peso(b.rate_per_km)
    );
    let distance_charge = format::peso_cents(b.distance_charge());
    let total = format::peso(b.price);
    let show_distance = b.distance > 0.0 && b.rate_per_km > 0.0;

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content details-modal",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "section-header", "Booking Details" }
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body",
                    div { class: "details-provider",
                        img { class: "details-image", src: "{b.image}", alt: "{b.service}" }
                        div {
                            h3 { "{b.company_name}" }
                            p { class: "muted", "{b.service}" }
                        }
                        span { class: status_badge_class(props.status), "{props.status.label()}" }
                    }

                    div { class: "details-columns",
                        div { class: "details-info",
                            h4 { "Service Information" }
                            dl {
                                dt { "Date" }
                                dd { "{scheduled}" }
                                if !b.service_type.is_empty() {
                                    dt { "Service Type" }
                                    dd { "{b.service_type}" }
                                }
                                dt { "Location" }
                                dd { "{b.location}" }
                                dt { "Workers" }
                                dd { "{b.workers_label()}" }
                                dt { "Estimated Time" }
                                dd { "{b.estimated_time}" }
                            }
                        }

                        div { class: "details-summary",
                            h4 { "Payment Summary" }
                            div { class: "summary-row",
                                span { "Starting Rate" }
                                span { "{starting}" }
                            }
                            if show_distance {
                                div { class: "summary-row",
                                    span { "{distance_line}" }
                                    span { "{distance_charge}" }
                                }
                            }
                            div { class: "summary-row total",
                                span { "Total" }
                                span { "{total}" }
                            }
                        }
                    }
                }

                footer { class: "modal-footer",
                    if props.status == BookingStatus::Pending {
                        button {
                            class: "btn-small btn-danger",
                            onclick: move |_| on_cancel.call(()),
                            "Cancel Booking"
                        }
                    }
                    if props.status == BookingStatus::Ongoing && !props.payment_complete {
                        button {
                            class: "btn-primary",
                            onclick: move |_| on_pay.call(()),
                            "Manage Payment"
                        }
                    }
                    button {
                        class: "btn-small btn-cancel",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}

/// Payment page: seller summary, cost breakdown, confirm.
#[component]
pub fn PaymentModal(
    request: PaymentRequest,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let seller = &request.seller;
    let booking = &request.booking;
    let stars = "\u{2605}".repeat(seller.rating.floor() as usize);
    let base = format::peso_cents(booking.base_rate);
    let distance_charge = format::peso_cents(booking.distance_charge);
    let fees = format::peso_cents(booking.additional_fees);
    let total = format::peso_cents(request.total());
    let workers = format::workers(booking.worker_count);

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content payment-modal",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "section-header", "Payment" }
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body",
                    div { class: "seller-card",
                        h3 { "{seller.name}" }
                        p { class: "seller-rating",
                            span { class: "stars", "{stars}" }
                            " {seller.rating} ({seller.reviews} reviews)"
                        }
                        p { class: "muted", "{seller.location}" }
                        p { "{seller.description}" }
                    }

                    div { class: "details-summary",
                        div { class: "summary-row",
                            span { "Service" }
                            span { "{booking.service}" }
                        }
                        div { class: "summary-row",
                            span { "Date" }
                            span { "{booking.date}" }
                        }
                        div { class: "summary-row",
                            span { "Team" }
                            span { "{workers} \u{2022} {booking.estimated_time}" }
                        }
                        div { class: "summary-row",
                            span { "Starting Rate" }
                            span { "{base}" }
                        }
                        div { class: "summary-row",
                            span { "Distance Charge ({booking.distance:.1} km)" }
                            span { "{distance_charge}" }
                        }
                        if booking.additional_fees > 0.0 {
                            div { class: "summary-row",
                                span { "Additional Fees" }
                                span { "{fees}" }
                            }
                        }
                        div { class: "summary-row total",
                            span { "Total" }
                            span { "{total}" }
                        }
                    }
                }

                footer { class: "modal-footer",
                    button {
                        class: "btn-small btn-cancel",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn-primary",
                        onclick: move |_| on_confirm.call(()),
                        "Pay {total}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TrackingModalProps {
    pub booking: DisplayBooking,
    pub payment_complete: bool,
    pub provider_arrived: bool,
    pub on_close: EventHandler<()>,
    /// Provider reached the customer, by simulation or by force
    pub on_arrived: EventHandler<()>,
    pub on_complete: EventHandler<()>,
}

/// Live map of the provider's trip.
///
/// The simulation advances every [`TRACKING_TICK`] and stops on arrival.
/// A `ProviderForceArrival` on the bus ends it early.
#[component]
pub fn TrackingModal(props: TrackingModalProps) -> Element {
    let bus = use_signal_bus();
    let booking_ref = props.booking.booking_ref();
    let provider = props.booking.company_name.clone();
    let already_there = props.provider_arrived;
    let on_close = props.on_close;
    let on_arrived = props.on_arrived;
    let on_complete = props.on_complete;

    let mut session = use_signal(move || {
        let mut s = TrackingSession::new(booking_ref, provider);
        if already_there {
            s.force_arrival();
        }
        s
    });

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(TRACKING_TICK).await;
                if session.peek().has_arrived() {
                    break;
                }
                if session.with_mut(|s| s.advance()) {
                    on_arrived.call(());
                    break;
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
                        if session.with_mut(|s| s.handle_signal(&signal)) {
                            tracing::debug!("Tracking ended by {:?}", signal);
                        }
                    }
                    Err(RecvError::Lagged(n)) => {
                        tracing::warn!("Tracking map missed {} signals", n);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    });

    let mut force = move || {
        if session.with_mut(|s| s.force_arrival()) {
            on_arrived.call(());
        }
    };

    let s = session.read();
    let progress_pct = s.progress() * 100.0;
    let remaining = format!("{:.1} km", s.remaining_km());
    let eta = if s.has_arrived() {
        "Arrived".to_string()
    } else {
        format!("{} min", s.eta_minutes())
    };
    let position = s.position();
    let destination = s.destination();
    let provider_name = s.provider_name().to_string();
    let arrived = s.has_arrived() || props.provider_arrived;
    // Map the trip onto a 0..100 track
    let marker_left = progress_pct.clamp(0.0, 100.0);

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-content tracking-modal",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "section-header", "Track Service" }
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body",
                    div { class: "tracking-map",
                        div { class: "tracking-route" }
                        div {
                            class: if arrived { "tracking-provider arrived" } else { "tracking-provider" },
                            style: "left: {marker_left:.1}%;",
                            title: "{position.lat:.4}, {position.lng:.4}",
                        }
                        div {
                            class: "tracking-destination",
                            title: "{destination.lat:.4}, {destination.lng:.4}",
                        }
                    }

                    div { class: "tracking-stats",
                        div { class: "tracking-stat",
                            span { class: "stat-title", "Provider" }
                            span { "{provider_name}" }
                        }
                        div { class: "tracking-stat",
                            span { class: "stat-title", "Distance" }
                            span { "{remaining}" }
                        }
                        div { class: "tracking-stat",
                            span { class: "stat-title", "ETA" }
                            span { "{eta}" }
                        }
                    }

                    if arrived {
                        p { class: "tracking-note arrived",
                            "{provider_name} has arrived at your location."
                        }
                    } else {
                        p { class: "tracking-note", "Your provider is on the way." }
                    }
                }

                footer { class: "modal-footer",
                    if arrived {
                        button {
                            class: "btn-primary",
                            onclick: move |_| on_complete.call(()),
                            "Complete"
                        }
                    } else if props.payment_complete {
                        WaitingForProvider { on_complete: move |_| force() }
                    } else {
                        button { class: "btn-primary", onclick: move |_| force(), "Complete Simulation" }
                    }
                }
            }
        }
    }
}

/// Star rating and optional text after a completed service.
#[component]
pub fn ReviewModal(
    rating: Option<u8>,
    text: String,
    on_rate: EventHandler<u8>,
    on_text: EventHandler<String>,
    on_skip: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let can_submit = rating.is_some();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_skip.call(()),

            div {
                class: "modal-content review-modal",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "section-header", "Rate Your Experience" }
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| on_skip.call(()),
                        "\u{00D7}"
                    }
                }

                div { class: "modal-body",
                    div { class: "star-row",
                        for star in 1..=5u8 {
                            button {
                                key: "review-rating-{star}",
                                class: if rating.is_some_and(|r| star <= r) { "star filled" } else { "star" },
                                onclick: move |_| on_rate.call(star),
                                "\u{2605}"
                            }
                        }
                    }
                    label { r#for: "review", "Share your experience (optional)" }
                    textarea {
                        id: "review",
                        rows: "3",
                        placeholder: "How was your experience with this service?",
                        value: "{text}",
                        oninput: move |evt| on_text.call(evt.value()),
                    }
                }

                footer { class: "modal-footer",
                    button {
                        class: "btn-small btn-cancel",
                        onclick: move |_| on_skip.call(()),
                        "Skip"
                    }
                    button {
                        class: "btn-primary",
                        disabled: !can_submit,
                        onclick: move |_| {
                            if can_submit {
                                on_submit.call(());
                            }
                        },
                        "Submit Review"
                    }
                }
            }
        }
    }
}

/// Thank-you screen; confirming completes the booking.
#[component]
pub fn SuccessModal(on_confirm: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal-content success-modal",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-body success-body",
                    div { class: "success-check", "\u{2713}" }
                    h2 { "Service Completed!" }
                    p { "Thank you for using our service. We hope you had a great experience!" }
                }

                footer { class: "modal-footer",
                    button {
                        class: "btn-primary",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                }
            }
        }
    }
}
