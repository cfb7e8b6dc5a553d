//! Dashboard context provider for ServiceDock.
//!
//! Provides the Dashboard instance and the render snapshot to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let dashboard = use_dashboard();
//! let view = use_dock_view();
//!
//! spawn(async move {
//!     refresh_bookings(dashboard(), FetchMode::Manual, view, drawer).await;
//! });
//! ```

use std::sync::Arc;

use chrono::Utc;
use dioxus::prelude::*;
use servicedock_core::{
    Booking, BookingTab, Dashboard, DockConfig, DrawerDirective, FetchMode, Notification,
    SignalBus,
};
use tokio::sync::RwLock;

/// Shared dashboard type for context.
///
/// `None` until the store has been opened.
pub type SharedDashboard = Arc<RwLock<Option<Dashboard>>>;

/// Get the configuration passed on the command line.
pub fn get_config() -> DockConfig {
    crate::get_config()
}

/// What the components render, copied out of the dashboard after each change
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DockView {
    pub bookings: Vec<Booking>,
    pub loading: bool,
    pub error: Option<String>,
    pub notifications: Vec<Notification>,
    pub unread: usize,
}

impl DockView {
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        Self {
            bookings: dashboard.bookings().to_vec(),
            loading: dashboard.is_loading(),
            error: dashboard.error().map(str::to_string),
            notifications: dashboard.notifications().items().to_vec(),
            unread: dashboard.notifications().unread_count(),
        }
    }
}

/// Drawer visibility and selected tab
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DrawerState {
    pub open: bool,
    pub tab: BookingTab,
}

impl DrawerState {
    /// Follow a reconciliation directive.
    pub fn apply(&mut self, directive: DrawerDirective) {
        if directive.open_drawer {
            self.open = true;
        }
        if let Some(tab) = directive.tab {
            self.tab = tab;
        }
    }
}

/// Hook to access the Dashboard from context.
pub fn use_dashboard() -> Signal<SharedDashboard> {
    use_context::<Signal<SharedDashboard>>()
}

/// Hook to check if the dashboard is open.
pub fn use_dashboard_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to the render snapshot.
pub fn use_dock_view() -> Signal<DockView> {
    use_context::<Signal<DockView>>()
}

/// Hook to the drawer state.
pub fn use_drawer() -> Signal<DrawerState> {
    use_context::<Signal<DrawerState>>()
}

/// Hook to the booking signal bus.
pub fn use_signal_bus() -> SignalBus {
    use_context::<SignalBus>()
}

/// Run `f` against the dashboard, then republish the snapshot.
pub async fn with_dashboard<R>(
    shared: SharedDashboard,
    mut view: Signal<DockView>,
    f: impl FnOnce(&mut Dashboard) -> R,
) -> Option<R> {
    let mut guard = shared.write().await;
    let dashboard = guard.as_mut()?;
    let result = f(dashboard);
    view.set(DockView::from_dashboard(dashboard));
    Some(result)
}

/// Fetch bookings without holding the lock across the request.
pub async fn refresh_bookings(
    shared: SharedDashboard,
    mode: FetchMode,
    view: Signal<DockView>,
    mut drawer: Signal<DrawerState>,
) {
    let Some(feed) = with_dashboard(shared.clone(), view, |d| {
        d.begin_fetch(mode);
        d.feed()
    })
    .await
    else {
        return;
    };

    let outcome = feed.fetch(mode, Utc::now()).await;

    if let Some(directive) = with_dashboard(shared, view, |d| d.apply_fetch(outcome)).await {
        if !directive.is_empty() {
            drawer.with_mut(|state| state.apply(directive));
        }
    }
}
