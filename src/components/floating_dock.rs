//! Floating dock
//!
//! Horizontal dock pinned to the bottom of every page. Owns the booking
//! refresh loop, the notification popup and the bookings drawer.

use dioxus::prelude::*;
use servicedock_core::config::SILENT_REFRESH;
use servicedock_core::{FetchMode, Notification, NotificationId};

use super::bookings_drawer::BookingsDrawer;
use super::icons::{render_dock_icon, DockIcon};
use crate::app::Route;
use crate::context::{
    refresh_bookings, use_dashboard, use_dashboard_ready, use_dock_view, use_drawer,
    with_dashboard,
};

#[derive(Props, Clone, PartialEq)]
pub struct DockItemProps {
    pub icon: DockIcon,
    pub label: &'static str,
    #[props(default)]
    pub active: bool,
    #[props(default)]
    pub badge: usize,
    pub onclick: EventHandler<MouseEvent>,
}

/// One dock button with a hover label and optional badge
#[component]
pub fn DockItem(props: DockItemProps) -> Element {
    let class = if props.active {
        "dock-item active"
    } else {
        "dock-item"
    };

    rsx! {
        button {
            class: "{class}",
            title: "{props.label}",
            onclick: move |evt| props.onclick.call(evt),
            {render_dock_icon(props.icon)}
            if props.badge > 0 {
                span { class: "dock-badge", "{props.badge}" }
            }
            span { class: "dock-tooltip", "{props.label}" }
        }
    }
}

#[component]
pub fn FloatingDock() -> Element {
    let dashboard = use_dashboard();
    let ready = use_dashboard_ready();
    let view = use_dock_view();
    let mut drawer = use_drawer();
    let navigator = use_navigator();

    let mut dock_visible = use_signal(|| true);
    let mut show_notifications = use_signal(|| false);

    // First load shows the spinner
    use_effect(move || {
        if ready() {
            spawn(async move {
                refresh_bookings(dashboard(), FetchMode::Manual, view, drawer).await;
            });
        }
    });

    // Background refresh
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(SILENT_REFRESH).await;
                if *ready.peek() {
                    refresh_bookings(dashboard(), FetchMode::Silent, view, drawer).await;
                }
            }
        });
    });

    let logout = move |_: MouseEvent| {
        spawn(async move {
            with_dashboard(dashboard(), view, |d| d.logout()).await;
            drawer.with_mut(|state| state.open = false);
            navigator.push(Route::Landing {});
        });
    };

    let unread = view.read().unread;
    let drawer_open = drawer.read().open;

    rsx! {
        if dock_visible() {
            nav { class: "floating-dock",
                DockItem {
                    icon: DockIcon::Home,
                    label: "Home",
                    onclick: move |_| {
                        navigator.push(Route::Landing {});
                    },
                }
                DockItem {
                    icon: DockIcon::Bookmark,
                    label: "Bookings",
                    active: drawer_open,
                    onclick: move |_| drawer.with_mut(|state| state.open = true),
                }
                div { class: "dock-notifications",
                    DockItem {
                        icon: DockIcon::Bell,
                        label: "Notifications",
                        active: show_notifications(),
                        badge: unread,
                        onclick: move |_| show_notifications.set(!show_notifications()),
                    }
                    if show_notifications() {
                        NotificationPopup {
                            on_close: move |_| show_notifications.set(false),
                        }
                    }
                }
                DockItem {
                    icon: DockIcon::User,
                    label: "Profile",
                    onclick: move |_| {
                        navigator.push(Route::Profile {});
                    },
                }
                DockItem {
                    icon: DockIcon::Newspaper,
                    label: "News",
                    onclick: move |_| {
                        navigator.push(Route::News {});
                    },
                }
                DockItem {
                    icon: DockIcon::Chat,
                    label: "Chats",
                    onclick: move |_| {
                        navigator.push(Route::Chats {});
                    },
                }
                DockItem { icon: DockIcon::Power, label: "Logout", onclick: logout }
                DockItem {
                    icon: DockIcon::ChevronDown,
                    label: "Hide",
                    onclick: move |_| dock_visible.set(false),
                }
            }
        } else {
            button {
                class: "dock-reopen",
                title: "Show dock",
                onclick: move |_| dock_visible.set(true),
                {render_dock_icon(DockIcon::Coffee)}
                if unread > 0 {
                    span { class: "dock-reopen-dot" }
                }
            }
        }

        if drawer_open {
            BookingsDrawer {}
        }
    }
}

/// Popup listing notifications above the bell
#[component]
fn NotificationPopup(on_close: EventHandler<()>) -> Element {
    let dashboard = use_dashboard();
    let view = use_dock_view();

    let mark_read = move |id: NotificationId| {
        spawn(async move {
            with_dashboard(dashboard(), view, |d| d.notifications_mut().mark_read(id)).await;
        });
    };

    let dismiss = move |id: NotificationId| {
        spawn(async move {
            with_dashboard(dashboard(), view, |d| d.notifications_mut().dismiss(id)).await;
        });
    };

    let mark_all = move |_: MouseEvent| {
        spawn(async move {
            with_dashboard(dashboard(), view, |d| d.notifications_mut().mark_all_read()).await;
        });
    };

    let notifications: Vec<Notification> = view.read().notifications.clone();
    let unread = view.read().unread;

    rsx! {
        div {
            class: "notification-popup",
            onclick: move |evt| evt.stop_propagation(),

            header { class: "notification-header",
                h3 { "Notifications" }
                if unread > 0 {
                    button { class: "btn-link", onclick: mark_all, "Mark all as read" }
                }
                button {
                    class: "modal-close-btn",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
            }

            div { class: "notification-list",
                if notifications.is_empty() {
                    p { class: "empty-hint", "You're all caught up." }
                }
                for item in notifications {
                    div {
                        key: "{item.id}",
                        class: if item.read { "notification-item" } else { "notification-item unread" },
                        onclick: {
                            let id = item.id;
                            move |_| mark_read(id)
                        },
                        div { class: "notification-text",
                            h4 { "{item.title}" }
                            p { "{item.content}" }
                            span { class: "notification-time", "{item.time}" }
                        }
                        button {
                            class: "notification-dismiss",
                            onclick: {
                                let id = item.id;
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    dismiss(id);
                                }
                            },
                            "\u{00D7}"
                        }
                    }
                }
            }
        }
    }
}
