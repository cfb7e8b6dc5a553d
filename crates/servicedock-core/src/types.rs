//! Core types for ServiceDock

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod booking;
pub mod notification;

pub use booking::{Booking, DisplayBooking, Location, Pricing, DEFAULT_BOOKING_IMAGE};
pub use notification::{Notification, NotificationCenter, NotificationId};

/// Status of a booking as reported by the bookings endpoint.
///
/// Allowed edges:
///
/// ```text
/// pending ──► ongoing ──► completed
///    │           │
///    └──► cancelled ◄─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Ongoing,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// All statuses in tab order
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Ongoing,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];

    /// Wire name (`"pending"`, `"ongoing"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Ongoing => "ongoing",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Capitalised label for badges
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Ongoing => "Ongoing",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }

    /// Cancelled and completed bookings never move again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }

    /// Whether `self -> next` is one of the allowed edges.
    ///
    /// Staying in the same status is not an edge; callers treat it as a no-op.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Ongoing) | (Pending, Cancelled) | (Ongoing, Completed) | (Ongoing, Cancelled)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "ongoing" => Ok(BookingStatus::Ongoing),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(format!(
                "Invalid status '{}'. Must be one of: pending, ongoing, cancelled, completed",
                other
            )),
        }
    }
}

/// Reference to a booking as carried by store markers and deep links.
///
/// Markers written by older pages carry the numeric display id, newer ones
/// carry the `_id` key. Both forms match the same booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingRef {
    Numeric(u64),
    Key(String),
}

impl BookingRef {
    /// Parse a reference from a query-string value.
    pub fn parse(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) => BookingRef::Numeric(n),
            Err(_) => BookingRef::Key(s.to_string()),
        }
    }

    /// Whether this reference points at `booking`.
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            BookingRef::Numeric(n) => {
                booking.id == Some(*n)
                    || booking.short_id() == Some(*n)
                    || booking.key == n.to_string()
            }
            BookingRef::Key(key) => {
                booking.key == *key
                    || booking.id.map(|id| id.to_string()).as_deref() == Some(key.as_str())
                    || booking.short_id().map(|id| id.to_string()).as_deref() == Some(key.as_str())
            }
        }
    }
}

impl fmt::Display for BookingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingRef::Numeric(n) => write!(f, "{}", n),
            BookingRef::Key(key) => f.write_str(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_bookings;

    #[test]
    fn test_allowed_edges() {
        use BookingStatus::*;
        assert!(Pending.can_transition_to(Ongoing));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Ongoing.can_transition_to(Completed));
        assert!(Ongoing.can_transition_to(Cancelled));
    }

    #[test]
    fn test_rejected_edges() {
        use BookingStatus::*;
        for from in BookingStatus::ALL {
            for to in BookingStatus::ALL {
                let allowed = matches!(
                    (from, to),
                    (Pending, Ongoing)
                        | (Pending, Cancelled)
                        | (Ongoing, Completed)
                        | (Ongoing, Cancelled)
                );
                assert_eq!(from.can_transition_to(to), allowed, "{} -> {}", from, to);
            }
        }
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
        assert!(!Ongoing.is_terminal());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("Ongoing".parse::<BookingStatus>().unwrap(), BookingStatus::Ongoing);
        assert!("archived".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }

    #[test]
    fn test_ref_matches_key_and_numeric() {
        let bookings = sample_bookings("u1", chrono::Utc::now());
        let first = &bookings[0];

        assert!(BookingRef::Key("sample1".into()).matches(first));
        assert!(!BookingRef::Key("sample2".into()).matches(first));

        let mut with_object_id = first.clone();
        with_object_id.key = "65f1c2aa00ff1e".to_string();
        let short = with_object_id.short_id().unwrap();
        assert!(BookingRef::Numeric(short).matches(&with_object_id));
        assert!(BookingRef::parse(&short.to_string()).matches(&with_object_id));
    }

    #[test]
    fn test_ref_untagged_serde() {
        let n: BookingRef = serde_json::from_str("42").unwrap();
        assert_eq!(n, BookingRef::Numeric(42));
        let k: BookingRef = serde_json::from_str("\"sample3\"").unwrap();
        assert_eq!(k, BookingRef::Key("sample3".into()));
    }
}
