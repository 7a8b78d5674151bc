//! Trip tracking engine
//!
//! Folds location samples and one-second clock ticks into live speed,
//! cumulative distance, and elapsed trip duration. The engine is a single
//! long-lived state object with one trip in flight at a time; all mutation
//! must arrive through one serialized entry point (see [`crate::session`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::format_duration_hms;
use crate::geo::{self, Position};
use crate::location::LocationSample;
use crate::unit_conversion::{meters_to_kilometers, mps_to_kmh};

/// Errors surfaced by the trip engine and session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TripError {
    /// Location services are disabled or the app is not authorized to use
    /// them. Raised by [`TripEngine::start`]; the presentation layer
    /// surfaces it as a prompt offering to open system settings.
    #[error("location services are disabled or not authorized")]
    LocationUnavailable,

    /// The session task has ended and no longer accepts commands.
    #[error("trip session is no longer running")]
    SessionClosed,
}

/// Published readings for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReadings {
    /// Current speed in m/s. Always finite and non-negative.
    pub speed_mps: f64,
    /// Current speed in km/h.
    pub speed_kmh: f64,
    /// Cumulative trip distance in meters.
    pub distance_meters: f64,
    /// Cumulative trip distance in kilometers.
    pub distance_km: f64,
    /// Whole seconds since the trip started.
    pub elapsed_seconds: u64,
    /// Elapsed duration rendered as zero-padded `HH:MM:SS`, hours unbounded.
    pub duration: String,
    /// Whether a trip is in flight.
    pub running: bool,
    /// Last known location permission/service state.
    pub location_available: bool,
}

/// Trip state: speed, distance, and duration accumulators plus the
/// lifecycle and availability flags.
#[derive(Debug)]
pub struct TripEngine {
    /// Last accepted sample's position; `None` until the first sample of a
    /// trip arrives.
    previous_position: Option<Position>,
    total_distance_meters: f64,
    elapsed_seconds: u64,
    current_speed_mps: f64,
    running: bool,
    location_available: bool,
}

impl TripEngine {
    /// Create an engine with zeroed accumulators, stopped, and availability
    /// unknown (false) until the first availability report arrives.
    pub fn new() -> Self {
        Self {
            previous_position: None,
            total_distance_meters: 0.0,
            elapsed_seconds: 0,
            current_speed_mps: 0.0,
            running: false,
            location_available: false,
        }
    }

    /// Begin a trip.
    ///
    /// Fails with [`TripError::LocationUnavailable`] and leaves all state
    /// untouched when location services are off. On success every
    /// accumulator is re-zeroed; calling while a trip is already running
    /// restarts it.
    pub fn start(&mut self) -> Result<(), TripError> {
        if !self.location_available {
            return Err(TripError::LocationUnavailable);
        }

        self.previous_position = None;
        self.total_distance_meters = 0.0;
        self.elapsed_seconds = 0;
        self.current_speed_mps = 0.0;
        self.running = true;
        tracing::debug!("trip started");
        Ok(())
    }

    /// End the trip. Idempotent.
    ///
    /// Zeroes the duration but keeps distance, speed, and the last position
    /// on display until the next [`start`](Self::start) or
    /// [`reset`](Self::reset).
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_seconds = 0;
        tracing::debug!("trip stopped");
    }

    /// Clear the displayed readings. No-op while a trip is running.
    pub fn reset(&mut self) {
        if self.running {
            return;
        }
        self.previous_position = None;
        self.total_distance_meters = 0.0;
        self.elapsed_seconds = 0;
        self.current_speed_mps = 0.0;
    }

    /// Fold one location fix. Ignored while stopped.
    ///
    /// The first sample of a trip establishes the reference position and
    /// contributes no distance. Non-finite or negative reported speeds
    /// normalize to 0.
    pub fn on_location_sample(&mut self, sample: &LocationSample) {
        if !self.running {
            return;
        }

        if let Some(previous) = self.previous_position {
            self.total_distance_meters += geo::distance_meters(previous, sample.position);
        }
        self.previous_position = Some(sample.position);

        let speed = sample.speed_mps;
        self.current_speed_mps = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
    }

    /// Advance the trip clock by one second. Ignored while stopped.
    pub fn on_clock_tick(&mut self) {
        if !self.running {
            return;
        }
        self.elapsed_seconds += 1;
    }

    /// Record the latest location permission/service check. Independent of
    /// the running flag.
    pub fn on_availability_changed(&mut self, available: bool) {
        self.location_available = available;
    }

    /// Current speed in m/s.
    pub fn speed_mps(&self) -> f64 {
        self.current_speed_mps
    }

    /// Current speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        mps_to_kmh(self.current_speed_mps)
    }

    /// Cumulative trip distance in meters.
    pub fn distance_meters(&self) -> f64 {
        self.total_distance_meters
    }

    /// Cumulative trip distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        meters_to_kilometers(self.total_distance_meters)
    }

    /// Whole seconds since the trip started.
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Elapsed duration as zero-padded `HH:MM:SS`.
    pub fn duration_hms(&self) -> String {
        format_duration_hms(self.elapsed_seconds)
    }

    /// Whether a trip is in flight.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Last known location permission/service state.
    pub fn is_location_available(&self) -> bool {
        self.location_available
    }

    /// Snapshot of everything the presentation layer renders.
    pub fn snapshot(&self) -> TripReadings {
        TripReadings {
            speed_mps: self.speed_mps(),
            speed_kmh: self.speed_kmh(),
            distance_meters: self.distance_meters(),
            distance_km: self.distance_km(),
            elapsed_seconds: self.elapsed_seconds,
            duration: self.duration_hms(),
            running: self.running,
            location_available: self.location_available,
        }
    }
}

impl Default for TripEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_basic_lifecycle() {
        let mut engine = TripEngine::new();
        assert!(!engine.is_running());

        engine.on_availability_changed(true);
        engine.start().unwrap();
        assert!(engine.is_running());

        engine.on_clock_tick();
        assert_eq!(engine.elapsed_seconds(), 1);

        engine.stop();
        assert!(!engine.is_running());
        assert_eq!(engine.elapsed_seconds(), 0);
    }

    #[test]
    fn test_start_requires_availability() {
        let mut engine = TripEngine::new();
        assert_eq!(engine.start(), Err(TripError::LocationUnavailable));
        assert!(!engine.is_running());
    }

    #[test]
    fn test_first_sample_contributes_no_distance() {
        let mut engine = TripEngine::new();
        engine.on_availability_changed(true);
        engine.start().unwrap();

        let sample = LocationSample::new(Position::new(48.0, 11.0), 10.0);
        engine.on_location_sample(&sample);

        assert_eq!(engine.distance_meters(), 0.0);
        assert_eq!(engine.speed_mps(), 10.0);
    }
}
