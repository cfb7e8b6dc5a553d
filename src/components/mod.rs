//! UI components for ServiceDock.
//!
//! The dock and drawer sit on every page; cards and modals live inside the
//! drawer.

mod booking_card;
mod booking_modals;
mod bookings_drawer;
mod feature_showcase;
mod floating_dock;
mod icons;

pub use feature_showcase::{FeatureShowcase, PerformanceStrip};
pub use floating_dock::FloatingDock;
