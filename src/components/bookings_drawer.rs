//! Bookings drawer: the customer's booking dashboard.

use chrono::Local;
use dioxus::prelude::*;
use servicedock_core::config::CLOCK_TICK;
use servicedock_core::filter::{filter_bookings, visible, PREVIEW_LIMIT};
use servicedock_core::{format, BookingStats, BookingTab, FetchMode};

use super::booking_card::BookingCard;
use crate::context::{
    refresh_bookings, use_dashboard, use_dock_view, use_drawer, with_dashboard,
};

/// Direction of a stat card's trend badge
#[derive(Clone, Copy, PartialEq, Debug)]
enum Trend {
    Up(u8),
    Down(u8),
}

impl Trend {
    fn class(&self) -> &'static str {
        match self {
            Trend::Up(_) => "trend up",
            Trend::Down(_) => "trend down",
        }
    }

    fn label(&self) -> String {
        match self {
            Trend::Up(pct) => format!("\u{2191} {}%", pct),
            Trend::Down(pct) => format!("\u{2193} {}%", pct),
        }
    }
}

#[component]
fn StatCard(title: &'static str, count: usize, trend: Trend) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-title", "{title}" }
            div { class: "stat-row",
                span { class: "stat-count", "{count}" }
                span { class: "{trend.class()}", "{trend.label()}" }
            }
        }
    }
}

fn tab_class(tab: BookingTab, active: BookingTab) -> String {
    if tab == active {
        format!("drawer-tab active {}", tab)
    } else {
        "drawer-tab".to_string()
    }
}

/// Side drawer with clock, search, tabs, stats and booking cards.
///
/// Reconciles pending store markers when it mounts, so anything another
/// page left behind is applied before the list renders.
#[component]
pub fn BookingsDrawer() -> Element {
    let dashboard = use_dashboard();
    let view = use_dock_view();
    let mut drawer = use_drawer();

    let mut now = use_signal(Local::now);
    let mut query = use_signal(String::new);
    let mut show_all = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(CLOCK_TICK).await;
                now.set(Local::now());
            }
        });
    });

    use_effect(move || {
        spawn(async move {
            if let Some(directive) = with_dashboard(dashboard(), view, |d| d.reconcile()).await {
                if !directive.is_empty() {
                    drawer.with_mut(|state| state.apply(directive));
                }
            }
        });
    });

    let retry = move |_: MouseEvent| {
        spawn(async move {
            refresh_bookings(dashboard(), FetchMode::Manual, view, drawer).await;
        });
    };

    let snapshot = view.read();
    let active_tab = drawer.read().tab;
    let stats = BookingStats::from_bookings(&snapshot.bookings);
    let query_text = query();
    let filtered = filter_bookings(&snapshot.bookings, &query_text, active_tab);
    let shown = visible(&filtered, show_all());
    let has_more = filtered.len() > PREVIEW_LIMIT;
    // With bookings on screen a failure is a banner, not a blocking state
    let blocking_error = snapshot
        .error
        .clone()
        .filter(|_| snapshot.bookings.is_empty());

    let clock_time = format::clock_time(&now());
    let clock_date = format::clock_date(&now());

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| drawer.with_mut(|state| state.open = false),
        }

        aside { class: "bookings-drawer",
            header { class: "drawer-header",
                div { class: "drawer-title",
                    h2 { "Booking Dashboard" }
                    div { class: "drawer-clock",
                        span { "{clock_time}" }
                        span { class: "dot-separator", "\u{2022}" }
                        span { "{clock_date}" }
                    }
                }
                button {
                    class: "modal-close-btn",
                    onclick: move |_| drawer.with_mut(|state| state.open = false),
                    "\u{00D7}"
                }
            }

            div { class: "drawer-filters",
                input {
                    class: "drawer-search",
                    r#type: "text",
                    placeholder: "Search Services or Companies",
                    value: "{query_text}",
                    oninput: move |evt| query.set(evt.value()),
                }
                div { class: "drawer-tabs",
                    for tab in BookingTab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: tab_class(tab, active_tab),
                            onclick: move |_| {
                                drawer.with_mut(|state| state.tab = tab);
                                show_all.set(false);
                            },
                            "{tab.label()}"
                        }
                    }
                }
            }

            div { class: "drawer-stats",
                StatCard { title: "Total", count: stats.total, trend: Trend::Up(12) }
                StatCard { title: "Pending", count: stats.pending, trend: Trend::Down(5) }
                StatCard { title: "Ongoing", count: stats.ongoing, trend: Trend::Up(8) }
            }

            div { class: "drawer-list",
                if snapshot.loading {
                    div { class: "drawer-state",
                        div { class: "spinner" }
                        p { "Loading bookings..." }
                    }
                } else if let Some(err) = blocking_error {
                    div { class: "drawer-state error",
                        p { "Error loading bookings" }
                        p { class: "hint", "{err}" }
                        button { class: "btn-primary", onclick: retry, "Retry" }
                    }
                } else if shown.is_empty() {
                    div { class: "drawer-state",
                        p { "No bookings found" }
                        p { class: "hint", "Try adjusting your filters" }
                    }
                } else {
                    if let Some(err) = snapshot.error.clone() {
                        div { class: "drawer-banner",
                            span { "{err}" }
                            button { class: "btn-small", onclick: retry, "Retry" }
                        }
                    }
                    for booking in shown.iter() {
                        BookingCard {
                            key: "booking-{booking.key}",
                            booking: (*booking).clone(),
                        }
                    }
                }

                if has_more {
                    button {
                        class: "btn-secondary view-more",
                        onclick: move |_| show_all.set(!show_all()),
                        if show_all() { "Show Less" } else { "View More" }
                    }
                }
            }
        }
    }
}
