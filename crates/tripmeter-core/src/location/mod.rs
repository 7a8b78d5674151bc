//! Location seam
//!
//! GPS fix types and the capability trait the session uses to talk to a
//! positioning subsystem. Providers are injectable so the engine and the
//! session run deterministically without real hardware.

mod replay;

pub use replay::ReplayProvider;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Position;

/// One GPS fix as delivered by a positioning subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSample {
    /// Reported position.
    pub position: Position,
    /// Reported instantaneous speed in m/s. May be negative, NaN, or
    /// infinite when the subsystem could not derive one; the engine
    /// sanitizes it.
    pub speed_mps: f64,
    /// Fix timestamp.
    pub timestamp: DateTime<Utc>,
}

impl LocationSample {
    /// Create a sample stamped with the current time.
    pub fn new(position: Position, speed_mps: f64) -> Self {
        Self {
            position,
            speed_mps,
            timestamp: Utc::now(),
        }
    }
}

/// Provider-level delivery errors.
///
/// These are observed and logged; they never alter trip state and are not
/// retried here, since the provider governs its own re-request policy.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// A requested or scheduled fix could not be produced.
    #[error("location fix failed: {0}")]
    Fix(String),
}

/// Capability interface over a positioning subsystem.
///
/// Pull-based: the session polls [`next_sample`](Self::next_sample) once per
/// clock tick so every engine mutation stays on one task.
pub trait LocationProvider: Send {
    /// Begin emitting location updates.
    fn start_updates(&mut self);

    /// Stop emitting location updates.
    fn stop_updates(&mut self);

    /// Request a single fix ahead of the regular update stream.
    fn request_one(&mut self);

    /// Take the next pending sample, if any.
    fn next_sample(&mut self) -> Result<Option<LocationSample>, ProviderError>;

    /// Whether location services are enabled and the app is authorized.
    fn is_available(&self) -> bool;
}
