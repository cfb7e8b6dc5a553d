//! Bookings endpoint client.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::{DockError, DockResult};
use crate::types::Booking;

/// Default API base when none is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Source of a user's bookings.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn fetch_user_bookings(&self, user_id: &str) -> DockResult<Vec<Booking>>;
}

/// `GET {base}/bookings/user/{userId}` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    base: Url,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: &str) -> DockResult<Self> {
        Ok(Self {
            base: Url::parse(base_url)?,
            client: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Endpoint URL for a user, with the id percent-encoded as one segment.
    pub fn bookings_url(&self, user_id: &str) -> DockResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| DockError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(["bookings", "user", user_id]);
        Ok(url)
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn fetch_user_bookings(&self, user_id: &str) -> DockResult<Vec<Booking>> {
        let url = self.bookings_url(user_id)?;
        debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DockError::HttpStatus(
                status.canonical_reason().unwrap_or(status.as_str()).to_string(),
            ));
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
