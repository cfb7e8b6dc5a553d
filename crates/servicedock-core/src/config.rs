//! Runtime configuration shared by the desktop app and the CLI.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::api::DEFAULT_API_BASE;

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "SERVICEDOCK_API_URL";

/// Directory name under the platform data directory
pub const APP_DIR_NAME: &str = "servicedock";

/// Drawer clock and payment countdown
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Arrival marker poll on booking cards
pub const ARRIVAL_POLL: Duration = Duration::from_secs(2);

/// Background booking refresh
pub const SILENT_REFRESH: Duration = Duration::from_secs(5);

/// Where bookings come from and where markers live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockConfig {
    pub api_base_url: String,
    pub data_dir: PathBuf,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            data_dir: default_data_dir(),
        }
    }
}

impl DockConfig {
    /// Defaults, with the API base taken from `SERVICEDOCK_API_URL` when set.
    ///
    /// Callers load `.env` first if they want it honoured.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                debug!("API base from {}: {}", API_URL_ENV, url);
                config.api_base_url = url.trim().to_string();
            }
        }
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

/// `<platform data dir>/servicedock`
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// `<platform data dir>/servicedock-<name>`, for side-by-side instances
pub fn instance_data_dir(name: &str) -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(format!("{}-{}", APP_DIR_NAME, name))
}
