use std::sync::Arc;

use dioxus::prelude::*;
use servicedock_core::{Dashboard, SignalBus};
use tokio::sync::RwLock;

use crate::context::{get_config, DockView, DrawerState, SharedDashboard};
use crate::pages::{Chats, Landing, News, Profile};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the feature showcase, dock and bookings drawer
/// - `/profile`, `/news`, `/chats` - Dock destinations
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/profile")]
    Profile {},
    #[route("/news")]
    News {},
    #[route("/chats")]
    Chats {},
}

/// Root application component.
///
/// Provides global styles, dashboard context, and routing.
#[component]
pub fn App() -> Element {
    let dashboard: Signal<SharedDashboard> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut dashboard_ready: Signal<bool> = use_signal(|| false);
    let mut view: Signal<DockView> = use_signal(DockView::default);
    let drawer: Signal<DrawerState> = use_signal(DrawerState::default);
    let bus = use_hook(SignalBus::new);

    use_context_provider(|| dashboard);
    use_context_provider(|| dashboard_ready);
    use_context_provider(|| view);
    use_context_provider(|| drawer);
    use_context_provider({
        let bus = bus.clone();
        move || bus
    });

    // Open the store on mount
    use_effect(move || {
        let bus = bus.clone();
        spawn(async move {
            let config = get_config();
            match Dashboard::open(&config) {
                Ok(d) => {
                    let mut d = d.with_bus(bus);
                    d.set_deep_link(crate::get_deep_link());

                    let shared = dashboard();
                    let mut guard = shared.write().await;
                    view.set(DockView::from_dashboard(&d));
                    *guard = Some(d);
                    drop(guard);
                    dashboard_ready.set(true);
                    tracing::info!("Dashboard ready");
                }
                Err(e) => {
                    tracing::error!("Failed to open dashboard: {}", e);
                    view.with_mut(|v| v.error = Some(e.to_string()));
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
