//! Payment hand-off for "Manage Payment".

use serde::{Deserialize, Serialize};

use crate::types::{BookingRef, DisplayBooking};

/// Placeholder provider rating shown on the payment page
const SELLER_RATING: f32 = 4.5;
const SELLER_REVIEWS: u32 = 24;

/// Provider summary shown at the top of the payment page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInfo {
    pub id: BookingRef,
    pub name: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    pub price: f64,
    pub starting_rate: f64,
    pub rate_per_km: f64,
    pub description: String,
    pub worker_count: u32,
}

/// Cost breakdown of the booking being paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub id: BookingRef,
    pub service: String,
    pub service_type: String,
    pub date: String,
    pub location: String,
    pub distance: f64,
    pub base_rate: f64,
    pub distance_charge: f64,
    pub additional_fees: f64,
    pub price: f64,
    pub worker_count: u32,
    pub estimated_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub seller: SellerInfo,
    pub booking: PaymentBreakdown,
}

impl PaymentRequest {
    pub fn for_booking(b: &DisplayBooking) -> Self {
        let id = b.booking_ref();
        let starting_rate = b.starting_rate();
        let location = if b.location.is_empty() {
            "Local Service Provider".to_string()
        } else {
            b.location.clone()
        };

        Self {
            seller: SellerInfo {
                id: id.clone(),
                name: b.company_name.clone(),
                rating: SELLER_RATING,
                reviews: SELLER_REVIEWS,
                location,
                price: b.price,
                starting_rate,
                rate_per_km: b.rate_per_km,
                description: format!("{} - {}", b.service, b.service_type)
                    .trim()
                    .trim_end_matches('-')
                    .trim()
                    .to_string(),
                worker_count: b.worker_count.max(1),
            },
            booking: PaymentBreakdown {
                id,
                service: b.service.clone(),
                service_type: b.service_type.clone(),
                date: b.date.clone(),
                location: b.location.clone(),
                distance: b.distance,
                base_rate: starting_rate,
                distance_charge: b.distance_charge(),
                additional_fees: b.additional_fees,
                price: b.price,
                worker_count: b.worker_count,
                estimated_time: b.estimated_time.clone(),
            },
        }
    }

    /// Amount due
    pub fn total(&self) -> f64 {
        self.booking.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_bookings;
    use chrono::Utc;

    #[test]
    fn test_breakdown_from_sample() {
        let view = sample_bookings("u1", Utc::now())[3].display();
        let req = PaymentRequest::for_booking(&view);

        assert_eq!(req.seller.name, "CoolAir Technicians");
        assert_eq!(req.seller.rating, 4.5);
        assert_eq!(req.booking.worker_count, 2);
        assert!((req.booking.distance_charge - view.distance * view.rate_per_km).abs() < 1e-9);
        assert_eq!(req.total(), view.price);
    }

    #[test]
    fn test_description_without_type() {
        let mut view = sample_bookings("u1", Utc::now())[0].display();
        view.service_type.clear();
        let req = PaymentRequest::for_booking(&view);
        assert_eq!(req.seller.description, view.service);
    }
}
