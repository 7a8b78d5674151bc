//! Demo Mode - Simulated drive generator for testing
//!
//! Generates plausible location fixes for UI testing without a real
//! positioning subsystem. Simulates an urban drive: cruise segments with
//! randomized target speeds, acceleration/braking ramps between them,
//! occasional full stops, and a gently wandering heading.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::geo::{self, Position};
use crate::location::{LocationProvider, LocationSample, ProviderError};

/// Acceleration limit when speeding up, m/s per second.
const ACCEL_MPS2: f64 = 2.0;
/// Deceleration limit when braking, m/s per second.
const BRAKE_MPS2: f64 = 3.5;
/// Urban cruise band, m/s (roughly 25 to 95 km/h).
const CRUISE_MIN_MPS: f64 = 7.0;
const CRUISE_MAX_MPS: f64 = 26.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DrivePhase {
    /// Holding near the current target speed.
    Cruise,
    /// Ramping toward a new target speed.
    Adjust,
    /// Standing at a stop, counting down the remaining wait.
    Halted { remaining_s: u32 },
}

/// Simulated drive implementing [`LocationProvider`].
///
/// Each poll advances the drive by one second and yields the resulting fix,
/// matching the 1 Hz cadence of the session loop.
pub struct DemoDrive {
    rng: StdRng,
    position: Position,
    heading_deg: f64,
    speed_mps: f64,
    target_mps: f64,
    phase: DrivePhase,
    /// Seconds of cruise left before the next speed change or stop.
    next_event_in_s: u32,
    updating: bool,
    primed: bool,
    available: bool,
}

impl DemoDrive {
    /// Create a simulator starting at the given position.
    pub fn new(start: Position) -> Self {
        Self::with_rng(start, StdRng::from_entropy())
    }

    /// Create a simulator with a fixed seed for a repeatable drive.
    pub fn seeded(start: Position, seed: u64) -> Self {
        Self::with_rng(start, StdRng::seed_from_u64(seed))
    }

    fn with_rng(start: Position, mut rng: StdRng) -> Self {
        let heading_deg = rng.gen_range(0.0..360.0);
        let target_mps = rng.gen_range(CRUISE_MIN_MPS..CRUISE_MAX_MPS);

        Self {
            rng,
            position: start,
            heading_deg,
            speed_mps: 0.0,
            target_mps,
            phase: DrivePhase::Adjust,
            next_event_in_s: 0,
            updating: false,
            primed: false,
            available: true,
        }
    }

    /// Force the reported availability, for exercising the
    /// location-unavailable start flow.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Current simulated position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Advance the drive by one second and produce the resulting fix.
    fn step(&mut self) -> LocationSample {
        self.advance_phase();

        // Ramp speed toward the target within the accel/brake limits
        let diff = self.target_mps - self.speed_mps;
        let max_change = if diff > 0.0 { ACCEL_MPS2 } else { BRAKE_MPS2 };
        self.speed_mps = (self.speed_mps + diff.clamp(-max_change, max_change)).max(0.0);

        // Heading wanders more at junction pace than at highway pace
        if self.speed_mps > 0.5 {
            let wander = if self.speed_mps < 10.0 { 12.0 } else { 3.0 };
            self.heading_deg =
                (self.heading_deg + self.rng.gen_range(-wander..wander)).rem_euclid(360.0);
            self.position = geo::destination(self.position, self.heading_deg, self.speed_mps);
        }

        // Reported speed carries a little sensor noise
        let noise = self.rng.gen_range(-0.2..0.2);
        LocationSample::new(self.position, (self.speed_mps + noise).max(0.0))
    }

    fn advance_phase(&mut self) {
        match self.phase {
            DrivePhase::Adjust => {
                if (self.speed_mps - self.target_mps).abs() < 0.5 {
                    self.phase = DrivePhase::Cruise;
                    self.next_event_in_s = self.rng.gen_range(8..30);
                }
            }
            DrivePhase::Cruise => {
                if self.next_event_in_s == 0 {
                    if self.rng.gen_bool(0.25) {
                        self.target_mps = 0.0;
                        self.phase = DrivePhase::Halted {
                            remaining_s: self.rng.gen_range(3..10),
                        };
                    } else {
                        self.target_mps = self.rng.gen_range(CRUISE_MIN_MPS..CRUISE_MAX_MPS);
                        self.phase = DrivePhase::Adjust;
                    }
                } else {
                    self.next_event_in_s -= 1;
                }
            }
            DrivePhase::Halted { remaining_s } => {
                // The wait counts down once the car has actually stopped
                if self.speed_mps < 0.3 {
                    if remaining_s == 0 {
                        self.target_mps = self.rng.gen_range(CRUISE_MIN_MPS..CRUISE_MAX_MPS);
                        self.phase = DrivePhase::Adjust;
                    } else {
                        self.phase = DrivePhase::Halted {
                            remaining_s: remaining_s - 1,
                        };
                    }
                }
            }
        }
    }
}

impl LocationProvider for DemoDrive {
    fn start_updates(&mut self) {
        self.updating = true;
    }

    fn stop_updates(&mut self) {
        self.updating = false;
    }

    fn request_one(&mut self) {
        self.primed = true;
    }

    fn next_sample(&mut self) -> Result<Option<LocationSample>, ProviderError> {
        if !self.updating && !self.primed {
            return Ok(None);
        }
        self.primed = false;
        Ok(Some(self.step()))
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Position = Position {
        latitude: 48.137154,
        longitude: 11.576124,
    };

    #[test]
    fn test_silent_until_started() {
        let mut drive = DemoDrive::seeded(START, 7);
        assert!(drive.next_sample().unwrap().is_none());

        drive.start_updates();
        assert!(drive.next_sample().unwrap().is_some());
    }

    #[test]
    fn test_speeds_stay_sane() {
        let mut drive = DemoDrive::seeded(START, 42);
        drive.start_updates();

        for _ in 0..300 {
            let sample = drive.next_sample().unwrap().unwrap();
            let speed = sample.speed_mps;
            assert!(speed.is_finite());
            assert!(speed >= 0.0, "speed {speed} went negative");
            assert!(speed < CRUISE_MAX_MPS + 1.0, "speed {speed} out of band");
        }
    }

    #[test]
    fn test_position_delta_matches_speed() {
        let mut drive = DemoDrive::seeded(START, 42);
        drive.start_updates();

        let mut previous = drive.next_sample().unwrap().unwrap();
        for _ in 0..120 {
            let sample = drive.next_sample().unwrap().unwrap();
            let delta = geo::distance_meters(previous.position, sample.position);
            // One second per step, so the delta should track the reported
            // speed to within the sensor noise
            assert!(
                (delta - sample.speed_mps).abs() < 1.0,
                "delta {delta} vs speed {}",
                sample.speed_mps
            );
            previous = sample;
        }
    }

    #[test]
    fn test_drive_eventually_moves() {
        let mut drive = DemoDrive::seeded(START, 1);
        drive.start_updates();

        let first = drive.next_sample().unwrap().unwrap();
        for _ in 0..60 {
            drive.next_sample().unwrap();
        }
        let later = drive.next_sample().unwrap().unwrap();
        assert!(geo::distance_meters(first.position, later.position) > 50.0);
    }
}
