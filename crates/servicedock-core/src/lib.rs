//! ServiceDock Core Library
//!
//! Customer-side booking dashboard for a home-services marketplace.
//!
//! ## Overview
//!
//! A customer sees their bookings in a drawer, pays for accepted jobs,
//! follows the provider on a simulated map, and reviews the service once
//! the provider has arrived. Pages that never talk to each other directly
//! coordinate through JSON markers in a shared store and a signal bus.
//!
//! ## Core Pieces
//!
//! - **Feed**: bookings from `GET /bookings/user/{id}`, with a sample set
//!   when the endpoint is empty or down
//! - **Lifecycle**: per-card status machine with a 30 second payment window
//! - **Shared store**: redb-backed markers that survive restarts
//! - **Reconcile**: folds markers and deep links into the booking list
//!
//! ## Quick Start
//!
//! ```ignore
//! use servicedock_core::{Dashboard, DockConfig, FetchMode, BookingTab};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut dashboard = Dashboard::open(&DockConfig::from_env())?;
//!     dashboard.refresh(FetchMode::Manual, chrono::Utc::now()).await;
//!
//!     for booking in dashboard.filtered("clean", BookingTab::All) {
//!         println!("{} - {}", booking.company_name(), booking.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod filter;
pub mod format;
pub mod lifecycle;
pub mod payment;
pub mod reconcile;
pub mod sample;
pub mod showcase;
pub mod signals;
pub mod storage;
pub mod store;
pub mod tracking;
pub mod types;

// Re-exports
pub use api::{BookingApi, HttpBookingApi};
pub use config::DockConfig;
pub use dashboard::Dashboard;
pub use error::{DockError, DockResult};
pub use feed::{BookingFeed, BookingSource, FetchMode, FetchOutcome};
pub use filter::{BookingStats, BookingTab};
pub use lifecycle::{BookingLifecycle, CountdownUrgency, LifecycleEvent, OngoingPhase};
pub use payment::PaymentRequest;
pub use reconcile::{DeepLink, DrawerDirective};
pub use showcase::ShowcaseState;
pub use signals::{BookingSignal, SignalBus};
pub use storage::Storage;
pub use store::{KeyValueStore, SharedStore, StoreKey};
pub use tracking::TrackingSession;
pub use types::*;
