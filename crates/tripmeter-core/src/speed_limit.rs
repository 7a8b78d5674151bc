//! Speed-limit warning
//!
//! A configurable limit with a warning flag that holds while the current
//! speed exceeds it. Limits are km/h, matching the limit field on the
//! dashboard.

/// Limit shown before the driver configures one, km/h.
pub const DEFAULT_LIMIT_KMH: f64 = 80.0;

/// Warning state for the configurable speed limit.
#[derive(Debug, Clone)]
pub struct SpeedLimitAlert {
    limit_kmh: f64,
    active: bool,
}

impl Default for SpeedLimitAlert {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT_KMH)
    }
}

impl SpeedLimitAlert {
    /// Create an alert for the given limit in km/h. Negative limits clamp
    /// to 0.
    pub fn new(limit_kmh: f64) -> Self {
        Self {
            limit_kmh: limit_kmh.max(0.0),
            active: false,
        }
    }

    /// The configured limit in km/h.
    pub fn limit_kmh(&self) -> f64 {
        self.limit_kmh
    }

    /// Reconfigure the limit. Negative values clamp to 0.
    pub fn set_limit_kmh(&mut self, limit_kmh: f64) {
        self.limit_kmh = limit_kmh.max(0.0);
    }

    /// Reconfigure from the free-text limit field. Text that does not parse
    /// as a number falls back to a limit of 0.
    pub fn set_limit_text(&mut self, text: &str) {
        self.set_limit_kmh(text.trim().parse::<f64>().unwrap_or(0.0));
    }

    /// Evaluate the warning against the current speed and return the new
    /// state: active while strictly above the limit.
    pub fn update(&mut self, speed_kmh: f64) -> bool {
        self.active = speed_kmh > self.limit_kmh;
        self.active
    }

    /// Whether the warning is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
