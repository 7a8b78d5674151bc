//! Sample replay
//!
//! Replays a prerecorded sequence of location samples: the deterministic
//! provider used by tests and examples.

use super::{LocationProvider, LocationSample, ProviderError};

/// Replays recorded samples in order, one per poll, while updates are on.
pub struct ReplayProvider {
    samples: Vec<LocationSample>,
    position: usize,
    updating: bool,
    primed: bool,
    available: bool,
}

impl ReplayProvider {
    /// Create a provider over the given samples, reporting location
    /// services as available.
    pub fn new(samples: Vec<LocationSample>) -> Self {
        Self::with_availability(samples, true)
    }

    /// Create a provider with an explicit availability state.
    pub fn with_availability(samples: Vec<LocationSample>, available: bool) -> Self {
        Self {
            samples,
            position: 0,
            updating: false,
            primed: false,
            available,
        }
    }

    /// Change the reported availability.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Total number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if there are no recorded samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Index of the next sample to be replayed.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of samples not yet replayed.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.position
    }
}

impl LocationProvider for ReplayProvider {
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

        let sample = self.samples.get(self.position).cloned();
        if sample.is_some() {
            self.position += 1;
        }
        Ok(sample)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
