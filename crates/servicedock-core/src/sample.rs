//! Demo bookings shown when the bookings endpoint is empty or unreachable.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Booking, BookingStatus, Location, Pricing};

/// User id stamped on samples when no user could be resolved
pub const SAMPLE_USER_ID: &str = "sample_user_id";

/// Number of bookings in the sample set
pub const SAMPLE_COUNT: usize = 9;

struct Seed {
    key: &'static str,
    firstname: &'static str,
    product: &'static str,
    provider: &'static str,
    provider_id: u64,
    workers: u32,
    /// Booking date offset from now, in hours
    booked_in: i64,
    time: &'static str,
    place: &'static str,
    lat: f64,
    lng: f64,
    distance: f64,
    estimate: &'static str,
    base: f64,
    distance_charge: f64,
    status: BookingStatus,
    payment_complete: Option<bool>,
    /// Creation offset from now, in hours (negative = past)
    created: i64,
}

const SEEDS: [Seed; SAMPLE_COUNT] = [
    Seed {
        key: "sample1",
        firstname: "John",
        product: "Plumbing Services",
        provider: "PipeFix Pros",
        provider_id: 1,
        workers: 1,
        booked_in: 0,
        time: "10:00 AM",
        place: "123 Main St, Cebu City",
        lat: 10.3157,
        lng: 123.8854,
        distance: 3.5,
        estimate: "1-2 hours",
        base: 1200.0,
        distance_charge: 87.5,
        status: BookingStatus::Pending,
        payment_complete: None,
        created: 0,
    },
    Seed {
        key: "sample2",
        firstname: "Maria",
        product: "Electrical Repair",
        provider: "PowerFix Solutions",
        provider_id: 2,
        workers: 2,
        booked_in: 24,
        time: "2:00 PM",
        place: "456 Park Avenue, Makati City",
        lat: 14.5547,
        lng: 121.0244,
        distance: 2.8,
        estimate: "3-4 hours",
        base: 1500.0,
        distance_charge: 70.0,
        status: BookingStatus::Pending,
        payment_complete: None,
        created: 0,
    },
    Seed {
        key: "sample3",
        firstname: "Carlos",
        product: "House Cleaning",
        provider: "CleanPro Services",
        provider_id: 3,
        workers: 3,
        booked_in: 0,
        time: "9:30 AM",
        place: "789 Seaside Blvd, Manila",
        lat: 14.5995,
        lng: 120.9842,
        distance: 5.2,
        estimate: "4-5 hours",
        base: 2200.0,
        distance_charge: 130.0,
        status: BookingStatus::Ongoing,
        payment_complete: Some(true),
        created: -1,
    },
    Seed {
        key: "sample4",
        firstname: "Elena",
        product: "Aircon Maintenance",
        provider: "CoolAir Technicians",
        provider_id: 4,
        workers: 2,
        booked_in: 0,
        time: "11:00 AM",
        place: "101 Green Hills, Pasig City",
        lat: 14.5764,
        lng: 121.0851,
        distance: 4.1,
        estimate: "1-2 hours",
        base: 1800.0,
        distance_charge: 102.5,
        status: BookingStatus::Ongoing,
        payment_complete: Some(false),
        created: -2,
    },
    Seed {
        key: "sample5",
        firstname: "Miguel",
        product: "Furniture Assembly",
        provider: "BuildIt Experts",
        provider_id: 5,
        workers: 2,
        booked_in: -48,
        time: "3:00 PM",
        place: "222 Orchard Road, Quezon City",
        lat: 14.676,
        lng: 121.0437,
        distance: 3.7,
        estimate: "2-3 hours",
        base: 1350.0,
        distance_charge: 92.5,
        status: BookingStatus::Cancelled,
        payment_complete: None,
        created: -72,
    },
    Seed {
        key: "sample6",
        firstname: "Isabella",
        product: "Pest Control",
        provider: "BugBusters",
        provider_id: 6,
        workers: 1,
        booked_in: -96,
        time: "10:00 AM",
        place: "333 Coconut Avenue, Taguig",
        lat: 14.5176,
        lng: 121.0509,
        distance: 6.3,
        estimate: "2-3 hours",
        base: 1700.0,
        distance_charge: 157.5,
        status: BookingStatus::Cancelled,
        payment_complete: None,
        created: -120,
    },
    Seed {
        key: "sample7",
        firstname: "Rafael",
        product: "Lawn Mowing",
        provider: "GreenThumb Landscaping",
        provider_id: 7,
        workers: 2,
        booked_in: -168,
        time: "8:00 AM",
        place: "444 Hillside Drive, Antipolo",
        lat: 14.5885,
        lng: 121.1754,
        distance: 8.2,
        estimate: "3-4 hours",
        base: 1600.0,
        distance_charge: 205.0,
        status: BookingStatus::Completed,
        payment_complete: None,
        created: -192,
    },
    Seed {
        key: "sample8",
        firstname: "Sofia",
        product: "Carpet Cleaning",
        provider: "FreshStart Cleaners",
        provider_id: 8,
        workers: 2,
        booked_in: -336,
        time: "1:00 PM",
        place: "555 Beachfront Road, Parañaque",
        lat: 14.4793,
        lng: 120.9977,
        distance: 4.8,
        estimate: "2-3 hours",
        base: 1900.0,
        distance_charge: 120.0,
        status: BookingStatus::Completed,
        payment_complete: None,
        created: -360,
    },
    Seed {
        key: "sample9",
        firstname: "Diego",
        product: "Roof Repair",
        provider: "TopNotch Roofing",
        provider_id: 9,
        workers: 3,
        booked_in: -504,
        time: "9:00 AM",
        place: "666 Mountain View, Tagaytay",
        lat: 14.1153,
        lng: 120.9621,
        distance: 12.5,
        estimate: "5-6 hours",
        base: 3500.0,
        distance_charge: 312.5,
        status: BookingStatus::Completed,
        payment_complete: None,
        created: -528,
    },
];

/// Build the fixed demo dataset relative to `now`.
///
/// Always nine bookings: pending ×2, ongoing ×2 (the first already paid),
/// cancelled ×2, completed ×3.
pub fn sample_bookings(user_id: &str, now: DateTime<Utc>) -> Vec<Booking> {
    SEEDS
        .iter()
        .map(|s| Booking {
            key: s.key.to_string(),
            id: None,
            user_id: user_id.to_string(),
            firstname: s.firstname.to_string(),
            product_name: s.product.to_string(),
            provider_name: s.provider.to_string(),
            provider_id: s.provider_id,
            worker_count: s.workers,
            booking_date: now + Duration::hours(s.booked_in),
            booking_time: s.time.to_string(),
            location: Location {
                name: s.place.to_string(),
                lat: s.lat,
                lng: s.lng,
                distance: s.distance,
            },
            estimated_time: Some(s.estimate.to_string()),
            pricing: Pricing {
                base_rate: s.base,
                distance_charge: s.distance_charge,
                total_rate: s.base + s.distance_charge,
            },
            status: s.status,
            created_at: now + Duration::hours(s.created),
            company_name: None,
            service: None,
            date: None,
            price: None,
            image: None,
            payment_complete: s.payment_complete,
            provider_arrived: None,
            service_type: None,
            rate_per_km: None,
            additional_fees: None,
            base_rate: None,
        })
        .collect()
}
