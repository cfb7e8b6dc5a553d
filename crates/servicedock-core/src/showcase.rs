//! Feature showcase carousel state.
//!
//! One selected index over [`SYSTEM_FEATURES`]. Changing the selection shows
//! a loading overlay and, after [`RELOAD_DEBOUNCE`], reloads both mock-up
//! videos together. A newer selection supersedes a pending reload.

use std::time::Duration;

/// Delay between selecting a feature and replaying its videos
pub const RELOAD_DEBOUNCE: Duration = Duration::from_millis(300);

/// Icon drawn on a feature card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Calendar,
    MapPin,
    Wallet,
    ShieldCheck,
    Star,
    Bell,
}

/// One showcased feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
    /// Video played in both the phone and laptop mock-ups
    pub video: &'static str,
}

pub const SYSTEM_FEATURES: [Feature; 6] = [
    Feature {
        title: "Instant Booking",
        description: "Find a nearby provider and lock in a schedule in a few taps, with pricing shown up front.",
        icon: FeatureIcon::Calendar,
        video: "/assets/videos/instant-booking.mp4",
    },
    Feature {
        title: "Live Tracking",
        description: "Follow your provider on the map from dispatch to doorstep with a live arrival estimate.",
        icon: FeatureIcon::MapPin,
        video: "/assets/videos/live-tracking.mp4",
    },
    Feature {
        title: "Secure Payments",
        description: "Pay inside the app once a job is accepted; distance charges are itemised before you confirm.",
        icon: FeatureIcon::Wallet,
        video: "/assets/videos/secure-payments.mp4",
    },
    Feature {
        title: "Verified Providers",
        description: "Every provider is screened and rated by customers in your area.",
        icon: FeatureIcon::ShieldCheck,
        video: "/assets/videos/verified-providers.mp4",
    },
    Feature {
        title: "Ratings & Reviews",
        description: "Rate each completed service and help neighbours pick the right team.",
        icon: FeatureIcon::Star,
        video: "/assets/videos/ratings-reviews.mp4",
    },
    Feature {
        title: "Smart Notifications",
        description: "Get told when a booking is confirmed, a provider is on the way, or payment is due.",
        icon: FeatureIcon::Bell,
        video: "/assets/videos/smart-notifications.mp4",
    },
];

/// Headline stat under the showcase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceStat {
    pub value: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
}

pub const PERFORMANCE_STATS: [PerformanceStat; 4] = [
    PerformanceStat {
        value: "99.9%",
        label: "Uptime",
        caption: "System Reliability",
    },
    PerformanceStat {
        value: "<50ms",
        label: "Response Time",
        caption: "Lightning Fast",
    },
    PerformanceStat {
        value: "256-bit",
        label: "Encryption",
        caption: "Bank-Level Security",
    },
    PerformanceStat {
        value: "24/7",
        label: "Monitoring",
        caption: "Always Protected",
    },
];

/// Handle for a pending video reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadTicket {
    generation: u64,
}

/// Carousel state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShowcaseState {
    current: usize,
    loading: bool,
    /// Bumped on every selection; stale tickets are ignored
    generation: u64,
    /// Bumped on every completed reload; keys the video elements
    playback: u64,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_feature(&self) -> &'static Feature {
        &SYSTEM_FEATURES[self.current]
    }

    /// Whether the loading overlay is shown
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Changes whenever both videos should reload and replay
    pub fn playback(&self) -> u64 {
        self.playback
    }

    /// Select a feature.
    ///
    /// Selecting the current feature or an index past the end does nothing.
    /// Otherwise the overlay is shown and a ticket is returned; pass it to
    /// [`ShowcaseState::finish_reload`] after [`RELOAD_DEBOUNCE`].
    pub fn select(&mut self, index: usize) -> Option<ReloadTicket> {
        if index == self.current || index >= SYSTEM_FEATURES.len() {
            return None;
        }
        self.current = index;
        self.loading = true;
        self.generation += 1;
        Some(ReloadTicket {
            generation: self.generation,
        })
    }

    /// Debounce elapsed: replay videos and hide the overlay.
    ///
    /// Returns false when a newer selection superseded the ticket.
    pub fn finish_reload(&mut self, ticket: ReloadTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.loading = false;
        self.playback += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_same_index_is_noop() {
        let mut state = ShowcaseState::new();
        assert!(state.select(0).is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut state = ShowcaseState::new();
        assert!(state.select(SYSTEM_FEATURES.len()).is_none());
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn test_select_shows_overlay_until_reload() {
        let mut state = ShowcaseState::new();
        let ticket = state.select(2).unwrap();
        assert_eq!(state.current(), 2);
        assert!(state.is_loading());
        assert_eq!(state.playback(), 0);

        assert!(state.finish_reload(ticket));
        assert!(!state.is_loading());
        assert_eq!(state.playback(), 1);
        assert_eq!(state.current_feature().title, "Secure Payments");
    }

    #[test]
    fn test_newer_selection_supersedes() {
        let mut state = ShowcaseState::new();
        let first = state.select(2).unwrap();
        let second = state.select(4).unwrap();

        assert!(!state.finish_reload(first));
        assert!(state.is_loading());
        assert!(state.finish_reload(second));
        assert_eq!(state.current(), 4);
        assert_eq!(state.playback(), 1);
    }
}
