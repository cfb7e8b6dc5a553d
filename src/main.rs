#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use servicedock_core::config::{default_data_dir, instance_data_dir, API_URL_ENV};
use servicedock_core::{DeepLink, DockConfig};

/// Global configuration, set from command line
static CONFIG: OnceLock<DockConfig> = OnceLock::new();

/// Start-up deep link, set from command line
static DEEP_LINK: OnceLock<DeepLink> = OnceLock::new();

/// Get the dock configuration (set from command line or defaults)
pub fn get_config() -> DockConfig {
    CONFIG.get().cloned().unwrap_or_else(DockConfig::from_env)
}

/// Get the start-up deep link, if one was passed
pub fn get_deep_link() -> DeepLink {
    DEEP_LINK.get().cloned().unwrap_or_default()
}

/// ServiceDock - customer booking dock
#[derive(Parser, Debug)]
#[command(name = "servicedock-desktop")]
#[command(about = "ServiceDock - bookings, payments and provider tracking for customers")]
struct Args {
    /// Data directory for the shared store (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: servicedock-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// Bookings API base URL
    #[arg(long, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Deep-link query applied at start-up, e.g. "?bookingId=42&status=ongoing&openBookings=true"
    #[arg(long)]
    link: Option<String>,
}

fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, name)
    } else if let Some(ref name) = args.name {
        (instance_data_dir(name), name.clone())
    } else {
        (default_data_dir(), String::new())
    };

    let mut config = DockConfig::from_env().with_data_dir(data_dir);
    if let Some(url) = args.api_url {
        config = config.with_api_base_url(url);
    }

    tracing::info!(
        "Starting '{}' with data dir {:?}, API {}",
        display_name,
        config.data_dir,
        config.api_base_url
    );

    let _ = CONFIG.set(config);
    if let Some(query) = args.link {
        let _ = DEEP_LINK.set(DeepLink::parse(&query));
    }

    let title = if !display_name.is_empty() {
        format!("ServiceDock - {}", display_name)
    } else {
        "ServiceDock".to_string()
    };

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
