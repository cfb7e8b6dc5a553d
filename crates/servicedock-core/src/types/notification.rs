//! Customer notifications and the unread badge.

use serde::{Deserialize, Serialize};

/// Identifier for a notification
pub type NotificationId = u32;

/// A single notification shown in the dock popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub content: String,
    /// Relative time label ("5 min ago")
    pub time: String,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn new(
        id: NotificationId,
        title: impl Into<String>,
        content: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            time: time.into(),
            read: false,
        }
    }

    fn read(mut self) -> Self {
        self.read = true;
        self
    }
}

/// Notification list with read tracking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Seed set shown on first launch: two unread, two read.
    pub fn seeded() -> Self {
        Self::new(vec![
            Notification::new(
                1,
                "Booking Confirmed",
                "PipeFix Pros accepted your plumbing request.",
                "5 min ago",
            ),
            Notification::new(
                2,
                "Provider On The Way",
                "CleanPro Services is heading to your location.",
                "20 min ago",
            ),
            Notification::new(
                3,
                "Payment Received",
                "Your payment for Aircon Maintenance was received.",
                "2 hours ago",
            )
            .read(),
            Notification::new(
                4,
                "Rate Your Service",
                "Tell us how GreenThumb Landscaping did.",
                "1 day ago",
            )
            .read(),
        ])
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Count driving the dock badge
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification read. Returns false when the id is unknown.
    pub fn mark_read(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    /// Remove a notification from the list.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Add a notification at the top of the list.
    pub fn push(&mut self, title: impl Into<String>, content: impl Into<String>) -> NotificationId {
        let id = self.items.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        self.items.insert(0, Notification::new(id, title, content, "just now"));
        id
    }
}
