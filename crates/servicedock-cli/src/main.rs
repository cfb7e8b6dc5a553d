//! ServiceDock CLI
//!
//! Thin wrapper around servicedock-core for inspecting bookings and the
//! shared store from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Show configuration and the logged-in user
//! servicedock info
//!
//! # Store a user so bookings can be fetched
//! servicedock login 65f1c2aa9be01a
//!
//! # List bookings (falls back to sample data when the API is down)
//! servicedock bookings list --tab ongoing --search clean
//!
//! # Leave a marker for the desktop app to pick up
//! servicedock mark payment sample4 --track
//!
//! # Inspect or edit raw store entries
//! servicedock store show
//! servicedock store set openBookingsDrawer true
//!
//! # Run the provider tracking simulation
//! servicedock track sample3
//! ```
//!
//! The desktop app holds the store open while it runs, so store commands
//! only work while it is closed.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use servicedock_core::config::{default_data_dir, API_URL_ENV};
use servicedock_core::filter::visible;
use servicedock_core::format::{long_date, peso};
use servicedock_core::showcase::{PERFORMANCE_STATS, SYSTEM_FEATURES};
use servicedock_core::store::{
    CompletionMarker, ProviderArrivedMarker, RecentPaymentMarker, StatusUpdateMarker, StoredUser,
};
use servicedock_core::{
    Booking, BookingRef, BookingStatus, BookingTab, Dashboard, DeepLink, DockConfig, DockError,
    FetchMode, StoreKey, TrackingSession,
};

/// ServiceDock - customer booking dock
#[derive(Parser)]
#[command(name = "servicedock")]
#[command(version = "0.1.0")]
#[command(about = "ServiceDock - customer booking dock")]
#[command(
    long_about = "Inspect bookings, shared-store markers and the tracking simulation used by the ServiceDock desktop app."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir /servicedock)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Bookings API base URL
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show configuration and the logged-in user
    Info,

    /// Store a user id in the shared store
    Login {
        /// User id (`_id`) to fetch bookings for
        user_id: String,

        /// Session token to store alongside
        #[arg(long, default_value = "")]
        token: String,
    },

    /// Remove the stored user
    Logout,

    /// Booking list
    Bookings {
        #[command(subcommand)]
        action: BookingsAction,
    },

    /// Leave a marker for the desktop app
    Mark {
        #[command(subcommand)]
        action: MarkAction,
    },

    /// Raw shared-store access
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// List the showcased features
    Showcase,

    /// Run the provider tracking simulation for a booking
    Track {
        /// Booking id (`_id`, numeric id or short id)
        booking_id: String,

        /// Delay between simulation steps in milliseconds
        #[arg(long, default_value = "0")]
        step_ms: u64,
    },
}

#[derive(Subcommand)]
enum BookingsAction {
    /// List bookings
    List {
        /// Tab: all, pending, ongoing, cancelled, completed
        #[arg(short, long, default_value = "all")]
        tab: BookingTab,

        /// Case-insensitive search on provider, service and service type
        #[arg(short, long, default_value = "")]
        search: String,

        /// Show every match instead of the first four
        #[arg(short, long)]
        all: bool,

        /// Deep-link query applied once after loading (e.g. "?bookingId=1&status=ongoing")
        #[arg(long)]
        link: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one booking in detail
    Show {
        /// Booking id (`_id`, numeric id or short id)
        booking_id: String,
    },

    /// Show the drawer stat cards
    Stats,
}

#[derive(Subcommand)]
enum MarkAction {
    /// Ask the app to open the bookings drawer
    OpenDrawer,

    /// Request a status change
    Status {
        booking_id: String,
        status: BookingStatus,
    },

    /// Report a completed payment
    Payment {
        booking_id: String,

        /// Status to apply along with the payment
        #[arg(long)]
        status: Option<BookingStatus>,

        /// Open the drawer on the Ongoing tab
        #[arg(long)]
        track: bool,
    },

    /// Report that the provider arrived
    Arrived {
        booking_id: String,

        #[arg(long, default_value = "")]
        provider: String,
    },

    /// Report that the service was completed
    Completed { booking_id: String },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Show all entries, or one key
    Show { key: Option<String> },

    /// Set a key to a JSON value
    Set { key: String, json: String },

    /// Remove a key
    Remove { key: String },

    /// Remove every known key
    Clear,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Parse a store key name
fn parse_key(name: &str) -> Result<StoreKey> {
    StoreKey::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = StoreKey::ALL.iter().map(|k| k.as_str()).collect();
        anyhow!("Unknown key '{}'. Known keys: {}", name, known.join(", "))
    })
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn print_booking_row(b: &Booking) {
    let view = b.display();
    println!(
        "  {:<10} {:<24} {:<22} {:>10}  {}",
        b.status.as_str(),
        view.company_name,
        view.service,
        peso(view.price),
        view.date
    );
    println!("             ref: {}", b.booking_ref());
}

async fn load(dashboard: &mut Dashboard) {
    dashboard.refresh(FetchMode::Manual, Utc::now()).await;
    if let Some(error) = dashboard.error() {
        eprintln!("Warning: {}", error);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = DockConfig::from_env().with_data_dir(cli.data_dir.unwrap_or_else(default_data_dir));
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }

    tracing::debug!(data_dir = ?config.data_dir, api = %config.api_base_url, "Opening dashboard");

    let mut dashboard = Dashboard::open(&config)
        .with_context(|| format!("Failed to open data directory {:?}", config.data_dir))?;

    match cli.command {
        Commands::Info => {
            println!("ServiceDock v0.1.0");
            println!();
            println!("Data directory: {}", config.data_dir.display());
            println!("API base URL:   {}", config.api_base_url);
            println!();
            match servicedock_core::feed::resolve_user_id(dashboard.store()) {
                Ok(id) => println!("User: {}", id),
                Err(e) => println!("User: ({})", e),
            }
        }

        Commands::Login { user_id, token } => {
            dashboard
                .store()
                .write(StoreKey::User, &StoredUser::nested(&user_id, token))?;
            println!("Logged in as {}", user_id);
        }

        Commands::Logout => {
            dashboard.logout();
            println!("Logged out");
        }

        Commands::Bookings { action } => match action {
            BookingsAction::List {
                tab,
                search,
                all,
                link,
                json,
            } => {
                if let Some(query) = link {
                    dashboard.set_deep_link(DeepLink::parse(&query));
                }
                load(&mut dashboard).await;

                let filtered = dashboard.filtered(&search, tab);
                let shown = visible(&filtered, all);

                if json {
                    println!("{}", serde_json::to_string_pretty(&shown)?);
                    return Ok(());
                }

                if filtered.is_empty() {
                    println!("No bookings found.");
                    return Ok(());
                }

                println!("{} ({} of {}):", tab.label(), shown.len(), filtered.len());
                for b in shown {
                    print_booking_row(b);
                }
                if shown.len() < filtered.len() {
                    println!();
                    println!("Use --all to view {} more.", filtered.len() - shown.len());
                }
            }

            BookingsAction::Show { booking_id } => {
                load(&mut dashboard).await;
                let id = BookingRef::parse(&booking_id);
                let booking = dashboard
                    .find(&id)
                    .ok_or(DockError::BookingNotFound(booking_id))?;
                let view = booking.display();

                println!("{} - {}", view.company_name, view.service);
                println!("  Ref:        {}", view.booking_ref());
                println!("  Status:     {}", view.status.label());
                println!("  Scheduled:  {} {}", long_date(&view.scheduled_for), booking.booking_time);
                println!("  Location:   {} ({} km)", view.location, view.distance);
                println!("  Workers:    {}", view.workers_label());
                println!("  Estimate:   {}", view.estimated_time);
                println!("  Base rate:  {}", peso(view.starting_rate()));
                println!("  Distance:   {}", peso(view.distance_charge()));
                if view.additional_fees > 0.0 {
                    println!("  Fees:       {}", peso(view.additional_fees));
                }
                println!("  Total:      {}", peso(view.price));
                println!("  Paid:       {}", if view.payment_complete { "yes" } else { "no" });
                if view.provider_arrived {
                    println!("  Provider has arrived");
                }
            }

            BookingsAction::Stats => {
                load(&mut dashboard).await;
                let stats = dashboard.stats();
                println!("Total:   {}", stats.total);
                println!("Pending: {}", stats.pending);
                println!("Ongoing: {}", stats.ongoing);
            }
        },

        Commands::Mark { action } => {
            let store = dashboard.store();
            match action {
                MarkAction::OpenDrawer => {
                    store.write(StoreKey::OpenBookingsDrawer, &true)?;
                }
                MarkAction::Status { booking_id, status } => {
                    store.write(
                        StoreKey::UpdateBookingStatus,
                        &StatusUpdateMarker {
                            id: BookingRef::parse(&booking_id),
                            status,
                        },
                    )?;
                }
                MarkAction::Payment {
                    booking_id,
                    status,
                    track,
                } => {
                    store.write(
                        StoreKey::RecentBookingPayment,
                        &RecentPaymentMarker {
                            id: BookingRef::parse(&booking_id),
                            status,
                            track_provider: track,
                        },
                    )?;
                }
                MarkAction::Arrived {
                    booking_id,
                    provider,
                } => {
                    store.write(
                        StoreKey::ProviderArrived,
                        &ProviderArrivedMarker {
                            booking_id: BookingRef::parse(&booking_id),
                            provider_name: provider,
                            timestamp: now_ms(),
                        },
                    )?;
                }
                MarkAction::Completed { booking_id } => {
                    store.write(
                        StoreKey::ServiceCompleted,
                        &CompletionMarker {
                            id: BookingRef::parse(&booking_id),
                            timestamp: now_ms(),
                        },
                    )?;
                }
            }
            println!("Marker written");
        }

        Commands::Store { action } => match action {
            StoreAction::Show { key } => {
                let keys = match key {
                    Some(name) => vec![parse_key(&name)?],
                    None => StoreKey::ALL.to_vec(),
                };
                let mut any = false;
                for key in keys {
                    if let Some(text) = dashboard.store().read_text(key)? {
                        println!("{}: {}", key, text);
                        any = true;
                    }
                }
                if !any {
                    println!("(empty)");
                }
            }
            StoreAction::Set { key, json } => {
                let key = parse_key(&key)?;
                dashboard
                    .store()
                    .write_text(key, &json)
                    .with_context(|| format!("Value for '{}' is not valid JSON", key))?;
                println!("Set {}", key);
            }
            StoreAction::Remove { key } => {
                let key = parse_key(&key)?;
                dashboard.store().remove(key);
                println!("Removed {}", key);
            }
            StoreAction::Clear => {
                for key in StoreKey::ALL {
                    dashboard.store().remove(key);
                }
                println!("Store cleared");
            }
        },

        Commands::Showcase => {
            println!("Features:");
            for (i, feature) in SYSTEM_FEATURES.iter().enumerate() {
                println!("  {}. {}", i + 1, feature.title);
                println!("     {}", feature.description);
            }
            println!();
            println!("Performance:");
            for stat in PERFORMANCE_STATS {
                println!("  {:<8} {} ({})", stat.value, stat.label, stat.caption);
            }
        }

        Commands::Track {
            booking_id,
            step_ms,
        } => {
            load(&mut dashboard).await;
            let id = BookingRef::parse(&booking_id);
            let booking = dashboard
                .find(&id)
                .ok_or(DockError::BookingNotFound(booking_id))?;
            let view = booking.display();

            let mut session = TrackingSession::new(view.booking_ref(), view.company_name.clone());
            println!("Tracking {}", session.provider_name());
            while !session.has_arrived() {
                println!(
                    "  {:>5.1}%  {:.2} km away, ETA {} min",
                    session.progress() * 100.0,
                    session.remaining_km(),
                    session.eta_minutes()
                );
                session.advance();
                if step_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(step_ms)).await;
                }
            }
            println!("{} has arrived.", session.provider_name());
            dashboard.announce_arrival(&view, now_ms())?;
        }
    }

    Ok(())
}
