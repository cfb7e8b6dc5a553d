//! JSON shapes stored under the shared-store keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{BookingRef, BookingStatus};

/// `user`: cached identity of the logged-in customer.
///
/// Three shapes exist in the wild and are all accepted:
///
/// 1. `{ "user": { "_id": "..." }, "token": "..." }`
/// 2. `{ "_id": "...", "token": "..." }`
/// 3. `{ "id": "..." | 123, "token": "..." }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredUser(pub Value);

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl StoredUser {
    /// Build the nested (first) shape
    pub fn nested(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self(serde_json::json!({
            "user": { "_id": user_id.into() },
            "token": token.into(),
        }))
    }

    /// User id, trying the shapes in order.
    pub fn user_id(&self) -> Option<String> {
        [
            self.0.pointer("/user/_id"),
            self.0.get("_id"),
            self.0.get("id"),
        ]
        .into_iter()
        .flatten()
        .find_map(id_text)
    }
}

/// `providerArrived`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderArrivedMarker {
    pub booking_id: BookingRef,
    #[serde(default)]
    pub provider_name: String,
    /// Milliseconds since the epoch
    #[serde(default)]
    pub timestamp: i64,
}

/// `serviceReview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMarker {
    pub id: BookingRef,
    pub timestamp: i64,
    pub rating: Option<u8>,
    #[serde(default)]
    pub text: String,
}

/// `serviceCompleted`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMarker {
    pub id: BookingRef,
    pub timestamp: i64,
}

/// `updateBookingStatus`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateMarker {
    pub id: BookingRef,
    pub status: BookingStatus,
}

/// `recentBookingPayment`: left by the payment page on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPaymentMarker {
    pub id: BookingRef,
    #[serde(default)]
    pub status: Option<BookingStatus>,
    /// Open the drawer on the Ongoing tab
    #[serde(default)]
    pub track_provider: bool,
}
