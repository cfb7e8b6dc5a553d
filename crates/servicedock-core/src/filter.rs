//! Drawer search, tab filtering and stats.

use std::fmt;
use std::str::FromStr;

use crate::types::{Booking, BookingStatus};

/// Bookings shown before "View More" is toggled
pub const PREVIEW_LIMIT: usize = 4;

/// Drawer tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookingTab {
    #[default]
    All,
    Status(BookingStatus),
}

impl BookingTab {
    /// Tabs in drawer order
    pub const ALL: [BookingTab; 5] = [
        BookingTab::All,
        BookingTab::Status(BookingStatus::Pending),
        BookingTab::Status(BookingStatus::Ongoing),
        BookingTab::Status(BookingStatus::Cancelled),
        BookingTab::Status(BookingStatus::Completed),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingTab::All => "All Bookings",
            BookingTab::Status(status) => status.label(),
        }
    }

    pub fn accepts(&self, status: BookingStatus) -> bool {
        match self {
            BookingTab::All => true,
            BookingTab::Status(s) => *s == status,
        }
    }
}

impl fmt::Display for BookingTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingTab::All => f.write_str("all"),
            BookingTab::Status(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for BookingTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(BookingTab::All);
        }
        s.parse::<BookingStatus>().map(BookingTab::Status)
    }
}

/// Whether `booking` matches a free-text search.
///
/// Case-insensitive substring match on company name, service name or
/// service type. An empty query matches everything.
pub fn matches_query(booking: &Booking, query: &str) -> bool {
    let needle = query.to_lowercase();
    [
        booking.company_name(),
        booking.service_name(),
        booking.service_type(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Bookings matching both the search query and the tab, in list order.
pub fn filter_bookings<'a>(bookings: &'a [Booking], query: &str, tab: BookingTab) -> Vec<&'a Booking> {
    bookings
        .iter()
        .filter(|b| matches_query(b, query) && tab.accepts(b.status))
        .collect()
}

/// Slice shown in the drawer: the first [`PREVIEW_LIMIT`] unless expanded.
pub fn visible<T>(filtered: &[T], show_all: bool) -> &[T] {
    if show_all || filtered.len() <= PREVIEW_LIMIT {
        filtered
    } else {
        &filtered[..PREVIEW_LIMIT]
    }
}

/// Counters for the drawer stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub ongoing: usize,
}

impl BookingStats {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let count = |status| bookings.iter().filter(|b| b.status == status).count();
        Self {
            total: bookings.len(),
            pending: count(BookingStatus::Pending),
            ongoing: count(BookingStatus::Ongoing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_bookings;
    use chrono::Utc;

    #[test]
    fn test_query_is_case_insensitive() {
        let bookings = sample_bookings("u1", Utc::now());
        let hits = filter_bookings(&bookings, "PIPEFIX", BookingTab::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "sample1");

        let hits = filter_bookings(&bookings, "cleaning", BookingTab::All);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_service_type_is_searched() {
        let mut bookings = sample_bookings("u1", Utc::now());
        bookings[4].service_type = Some("Deep Sanitation".to_string());
        let hits = filter_bookings(&bookings, "sanitation", BookingTab::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "sample5");
    }

    #[test]
    fn test_tab_requires_exact_status() {
        let bookings = sample_bookings("u1", Utc::now());
        let completed = filter_bookings(&bookings, "", BookingTab::Status(BookingStatus::Completed));
        assert_eq!(completed.len(), 3);
        assert!(completed.iter().all(|b| b.status == BookingStatus::Completed));

        let none = filter_bookings(&bookings, "PipeFix", BookingTab::Status(BookingStatus::Ongoing));
        assert!(none.is_empty());
    }

    #[test]
    fn test_visible_preview() {
        let items: Vec<u32> = (0..9).collect();
        assert_eq!(visible(&items, false).len(), PREVIEW_LIMIT);
        assert_eq!(visible(&items, true).len(), 9);
        assert_eq!(visible(&items[..3], false).len(), 3);
    }

    #[test]
    fn test_stats() {
        let bookings = sample_bookings("u1", Utc::now());
        let stats = BookingStats::from_bookings(&bookings);
        assert_eq!(stats, BookingStats { total: 9, pending: 2, ongoing: 2 });
    }

    #[test]
    fn test_tab_parse_roundtrip() {
        for tab in BookingTab::ALL {
            assert_eq!(tab.to_string().parse::<BookingTab>().unwrap(), tab);
        }
    }
}
