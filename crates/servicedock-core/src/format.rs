//! Display formatting for money, dates and counts.

use chrono::{DateTime, TimeZone};
use num_format::{Locale, ToFormattedString};

/// Currency symbol used throughout the dashboard
pub const CURRENCY: &str = "₱";

/// Group the integer part with commas and keep up to `max_fraction` decimals.
fn grouped(amount: f64, min_fraction: usize, max_fraction: usize) -> String {
    let negative = amount < 0.0;
    let scale = 10f64.powi(max_fraction as i32);
    let rounded = (amount.abs() * scale).round() / scale;

    let whole = rounded.trunc() as u64;
    let mut fraction = format!("{:.*}", max_fraction, rounded.fract());
    // "0.50" -> "50"
    fraction = fraction.split_once('.').map(|(_, f)| f.to_string()).unwrap_or_default();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let mut out = String::new();
    if negative && (whole > 0 || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&whole.to_formatted_string(&Locale::en));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Amount as shown on cards: `₱1,287.5`
pub fn peso(amount: f64) -> String {
    format!("{}{}", CURRENCY, grouped(amount, 0, 3))
}

/// Amount with exactly two decimals: `₱87.50`
pub fn peso_cents(amount: f64) -> String {
    format!("{}{}", CURRENCY, grouped(amount, 2, 2))
}

/// `10/18/2026`
pub fn short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%-m/%-d/%Y").to_string()
}

/// `Sunday, October 18, 2026`
pub fn long_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%A, %B %-d, %Y").to_string()
}

/// Drawer clock: `02:05 PM`
pub fn clock_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%I:%M %p").to_string()
}

/// Drawer clock date: `Sunday, Oct 18`
pub fn clock_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%A, %b %-d").to_string()
}

/// `1 worker` / `3 workers`
pub fn workers(count: u32) -> String {
    if count == 1 {
        "1 worker".to_string()
    } else {
        format!("{} workers", count)
    }
}
