//! Booking records and their display projection.
//!
//! The bookings endpoint has shipped several shapes over time. [`Booking`]
//! accepts all of them; [`DisplayBooking`] is the single normalised view the
//! UI renders from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookingRef, BookingStatus};
use crate::format;

/// Image shown when a booking carries none
pub const DEFAULT_BOOKING_IMAGE: &str =
    "https://cdn.pixabay.com/photo/2016/11/18/17/20/living-room-1835923_1280.jpg";

/// Estimated duration shown when a booking carries none
pub const DEFAULT_ESTIMATED_TIME: &str = "2-4 hours";

/// Per-kilometre rate used when it can't be derived from the pricing
pub const DEFAULT_RATE_PER_KM: f64 = 20.0;

/// Service location with the distance from the provider in kilometres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub distance: f64,
}

/// Pricing breakdown as computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub base_rate: f64,
    #[serde(default)]
    pub distance_charge: f64,
    pub total_rate: f64,
}

/// Booking record as returned by `GET /bookings/user/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Server key (`_id`)
    #[serde(rename = "_id")]
    pub key: String,
    /// Legacy numeric id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub provider_id: u64,
    #[serde(default = "default_worker_count")]
    pub worker_count: u32,
    pub booking_date: DateTime<Utc>,
    #[serde(default)]
    pub booking_time: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    pub pricing: Pricing,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,

    // Legacy display fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_complete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_arrived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_fees: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_rate: Option<f64>,
}

fn default_worker_count() -> u32 {
    1
}

/// Legacy strings count only when non-empty.
fn text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Legacy amounts count only when non-zero.
fn amount(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && v.is_finite())
}

impl Booking {
    /// Numeric id derived from the last six characters of `_id`.
    ///
    /// Only produced when those characters are all hex digits, so keys like
    /// `sample1` never collapse onto the same number.
    pub fn short_id(&self) -> Option<u64> {
        let chars: Vec<char> = self.key.chars().collect();
        if chars.len() < 6 {
            return None;
        }
        let tail: String = chars[chars.len() - 6..].iter().collect();
        if !tail.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u64::from_str_radix(&tail, 16).ok()
    }

    /// Reference used in store markers for this booking.
    pub fn booking_ref(&self) -> BookingRef {
        match self.id.or_else(|| self.short_id()) {
            Some(n) => BookingRef::Numeric(n),
            None => BookingRef::Key(self.key.clone()),
        }
    }

    /// Provider name as shown to the customer
    pub fn company_name(&self) -> &str {
        text(&self.company_name).unwrap_or(&self.provider_name)
    }

    /// Service name as shown to the customer
    pub fn service_name(&self) -> &str {
        text(&self.service).unwrap_or(&self.product_name)
    }

    /// Free-form service type, empty when absent
    pub fn service_type(&self) -> &str {
        text(&self.service_type).unwrap_or("")
    }

    pub fn is_payment_complete(&self) -> bool {
        self.payment_complete.unwrap_or(false)
    }

    pub fn is_provider_arrived(&self) -> bool {
        self.provider_arrived.unwrap_or(false)
    }

    /// Normalised display view of this booking.
    pub fn display(&self) -> DisplayBooking {
        DisplayBooking::from(self)
    }
}

/// Display-oriented projection of a [`Booking`].
///
/// Precedence for every field: legacy value when present (non-empty,
/// non-zero), else the structured value, else a fixed default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBooking {
    /// Server key (`_id`)
    pub key: String,
    /// Legacy id, else the short id derived from `_id`
    pub id: Option<u64>,
    pub company_name: String,
    pub service: String,
    pub service_type: String,
    pub status: BookingStatus,
    /// Short date label (`M/D/YYYY`), or the legacy `date` string
    pub date: String,
    pub scheduled_for: DateTime<Utc>,
    pub price: f64,
    pub image: String,
    pub worker_count: u32,
    pub estimated_time: String,
    /// Location name
    pub location: String,
    /// Distance in kilometres
    pub distance: f64,
    pub base_rate: f64,
    pub rate_per_km: f64,
    pub additional_fees: f64,
    pub payment_complete: bool,
    pub provider_arrived: bool,
}

impl From<&Booking> for DisplayBooking {
    fn from(b: &Booking) -> Self {
        let distance = b.location.distance;
        let derived_rate = if distance > 0.0 {
            amount(Some(b.pricing.distance_charge / distance))
        } else {
            None
        };

        Self {
            key: b.key.clone(),
            id: b.id.or_else(|| b.short_id()),
            company_name: b.company_name().to_string(),
            service: b.service_name().to_string(),
            service_type: b.service_type().to_string(),
            status: b.status,
            date: text(&b.date)
                .map(str::to_string)
                .unwrap_or_else(|| format::short_date(&b.booking_date)),
            scheduled_for: b.booking_date,
            price: amount(b.price).unwrap_or(b.pricing.total_rate),
            image: text(&b.image).unwrap_or(DEFAULT_BOOKING_IMAGE).to_string(),
            worker_count: b.worker_count,
            estimated_time: text(&b.estimated_time)
                .unwrap_or(DEFAULT_ESTIMATED_TIME)
                .to_string(),
            location: b.location.name.clone(),
            distance,
            base_rate: amount(b.base_rate).unwrap_or(b.pricing.base_rate),
            rate_per_km: amount(b.rate_per_km)
                .or(derived_rate)
                .unwrap_or(DEFAULT_RATE_PER_KM),
            additional_fees: amount(b.additional_fees).unwrap_or(0.0),
            payment_complete: b.is_payment_complete(),
            provider_arrived: b.is_provider_arrived(),
        }
    }
}

impl DisplayBooking {
    /// Reference used in store markers for this booking.
    pub fn booking_ref(&self) -> BookingRef {
        match self.id {
            Some(n) => BookingRef::Numeric(n),
            None => BookingRef::Key(self.key.clone()),
        }
    }

    /// Distance charge (`distance × rate_per_km`)
    pub fn distance_charge(&self) -> f64 {
        self.distance * self.rate_per_km
    }

    /// Base rate, or the price minus the distance charge when no base is known
    pub fn starting_rate(&self) -> f64 {
        if self.base_rate != 0.0 {
            self.base_rate
        } else {
            self.price - self.distance_charge()
        }
    }

    /// "1 worker" / "3 workers"
    pub fn workers_label(&self) -> String {
        format::workers(self.worker_count)
    }
}
