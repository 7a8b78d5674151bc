//! Unit Conversion Functions
//!
//! Provides conversion functions between the units the trip computer
//! displays:
//! - Speed: m/s ↔ km/h
//! - Distance: meters ↔ kilometers

/// Convert meters per second to kilometers per hour
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}

/// Convert kilometers per hour to meters per second
pub fn kmh_to_mps(kmh: f64) -> f64 {
    kmh / 3.6
}

/// Convert meters to kilometers
pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / 1000.0
}

/// Convert kilometers to meters
pub fn kilometers_to_meters(kilometers: f64) -> f64 {
    kilometers * 1000.0
}
