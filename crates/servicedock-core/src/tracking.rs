//! Simulated provider tracking.
//!
//! The provider moves in a straight line from its start point to the
//! customer, one fixed step per tick. Arrival happens when the remaining
//! distance drops under [`ARRIVAL_RADIUS_KM`], on [`TrackingSession::force_arrival`],
//! or when a [`BookingSignal::ProviderForceArrival`] for the same booking
//! comes in over the bus.

use std::time::Duration;

use tracing::{debug, info};

use crate::signals::BookingSignal;
use crate::types::BookingRef;

/// Delay after payment before tracking can start
pub const WAITING_FOR_PROVIDER: Duration = Duration::from_secs(10);

/// Interval between simulation steps
pub const TRACKING_TICK: Duration = Duration::from_secs(1);

/// Remaining distance that counts as arrived (50 m)
pub const ARRIVAL_RADIUS_KM: f64 = 0.05;

/// Steps from start to destination
pub const SIMULATION_STEPS: u32 = 30;

/// Assumed travel speed for the ETA
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in kilometres
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }

    fn lerp(&self, other: &GeoPoint, t: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * t,
            lng: self.lng + (other.lng - self.lng) * t,
        }
    }
}

/// Makati, where the simulated provider sets off
pub const DEFAULT_PROVIDER_START: GeoPoint = GeoPoint::new(14.5547, 121.0244);

/// Manila, the simulated customer location
pub const DEFAULT_CUSTOMER_LOCATION: GeoPoint = GeoPoint::new(14.5995, 120.9842);

/// One provider's trip to a customer
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingSession {
    booking: BookingRef,
    provider_name: String,
    start: GeoPoint,
    destination: GeoPoint,
    step: u32,
    arrived: bool,
}

impl TrackingSession {
    pub fn new(booking: BookingRef, provider_name: impl Into<String>) -> Self {
        Self::between(
            booking,
            provider_name,
            DEFAULT_PROVIDER_START,
            DEFAULT_CUSTOMER_LOCATION,
        )
    }

    pub fn between(
        booking: BookingRef,
        provider_name: impl Into<String>,
        start: GeoPoint,
        destination: GeoPoint,
    ) -> Self {
        let mut session = Self {
            booking,
            provider_name: provider_name.into(),
            start,
            destination,
            step: 0,
            arrived: false,
        };
        session.check_arrival();
        session
    }

    pub fn booking_ref(&self) -> &BookingRef {
        &self.booking
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn destination(&self) -> GeoPoint {
        self.destination
    }

    pub fn has_arrived(&self) -> bool {
        self.arrived
    }

    /// Current provider position
    pub fn position(&self) -> GeoPoint {
        if self.arrived {
            return self.destination;
        }
        let t = f64::from(self.step) / f64::from(SIMULATION_STEPS);
        self.start.lerp(&self.destination, t)
    }

    pub fn remaining_km(&self) -> f64 {
        self.position().distance_km(&self.destination)
    }

    /// Share of the trip covered, 0.0 to 1.0
    pub fn progress(&self) -> f64 {
        if self.arrived {
            return 1.0;
        }
        f64::from(self.step) / f64::from(SIMULATION_STEPS)
    }

    /// Whole minutes until arrival at [`AVERAGE_SPEED_KMH`]
    pub fn eta_minutes(&self) -> u32 {
        if self.arrived {
            return 0;
        }
        (self.remaining_km() / AVERAGE_SPEED_KMH * 60.0).ceil() as u32
    }

    /// Advance one step. Returns true on the step that arrives.
    pub fn advance(&mut self) -> bool {
        if self.arrived {
            return false;
        }
        self.step = (self.step + 1).min(SIMULATION_STEPS);
        debug!(
            booking = %self.booking,
            step = self.step,
            remaining_km = self.remaining_km(),
            "provider moved"
        );
        self.check_arrival()
    }

    /// Skip the rest of the trip. Returns true when this caused the arrival.
    pub fn force_arrival(&mut self) -> bool {
        if self.arrived {
            return false;
        }
        self.step = SIMULATION_STEPS;
        self.arrived = true;
        info!(booking = %self.booking, "provider arrival forced");
        true
    }

    /// React to a bus signal. Returns true when it caused the arrival.
    pub fn handle_signal(&mut self, signal: &BookingSignal) -> bool {
        match signal {
            BookingSignal::ProviderForceArrival { booking_id }
            | BookingSignal::ProviderArrived { booking_id }
                if *booking_id == self.booking =>
            {
                self.force_arrival()
            }
            _ => false,
        }
    }

    fn check_arrival(&mut self) -> bool {
        if self.arrived || self.remaining_km() >= ARRIVAL_RADIUS_KM {
            return false;
        }
        self.arrived = true;
        info!(booking = %self.booking, provider = %self.provider_name, "provider arrived");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> TrackingSession {
        TrackingSession::new(BookingRef::Key("sample3".into()), "CleanPro Services")
    }

    #[test]
    fn test_makati_to_manila_distance() {
        let km = DEFAULT_PROVIDER_START.distance_km(&DEFAULT_CUSTOMER_LOCATION);
        assert!((km - 6.5).abs() < 0.5, "got {km}");
    }

    #[test]
    fn test_advances_until_arrival() {
        let mut s = session();
        assert!(!s.has_arrived());
        assert!(s.eta_minutes() > 0);

        let mut arrivals = 0;
        for _ in 0..SIMULATION_STEPS + 5 {
            if s.advance() {
                arrivals += 1;
            }
        }
        assert_eq!(arrivals, 1);
        assert!(s.has_arrived());
        assert_eq!(s.eta_minutes(), 0);
        assert_eq!(s.progress(), 1.0);
    }

    #[test]
    fn test_distance_shrinks() {
        let mut s = session();
        let before = s.remaining_km();
        s.advance();
        assert!(s.remaining_km() < before);
    }

    #[test]
    fn test_force_arrival_once() {
        let mut s = session();
        assert!(s.force_arrival());
        assert!(!s.force_arrival());
        assert_eq!(s.position(), DEFAULT_CUSTOMER_LOCATION);
    }

    #[test]
    fn test_signal_for_other_booking_ignored() {
        let mut s = session();
        let other = BookingSignal::ProviderForceArrival {
            booking_id: BookingRef::Key("sample4".into()),
        };
        assert!(!s.handle_signal(&other));

        let mine = BookingSignal::ProviderForceArrival {
            booking_id: BookingRef::Key("sample3".into()),
        };
        assert!(s.handle_signal(&mine));
        assert!(s.has_arrived());
    }

    #[test]
    fn test_already_close_arrives_immediately() {
        let here = GeoPoint::new(14.5995, 120.9842);
        let s = TrackingSession::between(BookingRef::Numeric(1), "x", here, here);
        assert!(s.has_arrived());
    }
}
