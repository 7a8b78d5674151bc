//! # TripMeter Core Library
//!
//! Core functionality for the TripMeter GPS trip computer.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - The trip tracking engine: live speed, cumulative distance, and
//!   elapsed duration folded from location samples and clock ticks
//! - A location-provider capability seam with replay and simulated-drive
//!   implementations
//! - A serialized realtime session loop publishing dashboard snapshots
//! - Display preference persistence
//! - A configurable speed-limit warning
//! - Unit conversion helpers
//!
//! ## Example
//!
//! ```rust,ignore
//! use tripmeter_core::demo::DemoDrive;
//! use tripmeter_core::geo::Position;
//! use tripmeter_core::session::{SessionConfig, TripSession};
//!
//! // Drive the engine from the simulator; swap in a real provider on device
//! let drive = DemoDrive::new(Position::new(48.137154, 11.576124));
//! let session = TripSession::spawn(Box::new(drive), SessionConfig::default());
//!
//! session.start().await?;
//! let snapshot = session.snapshots().borrow().clone();
//! println!("{} km/h over {} km", snapshot.readings.speed_kmh, snapshot.readings.distance_km);
//! ```

pub mod clock;
pub mod demo;
pub mod geo;
pub mod location;
pub mod session;
pub mod settings;
pub mod speed_limit;
pub mod trip;
pub mod unit_conversion;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::demo::DemoDrive;
    pub use crate::geo::Position;
    pub use crate::location::{LocationProvider, LocationSample, ProviderError, ReplayProvider};
    pub use crate::session::{SessionConfig, SessionSnapshot, TripSession, TripSessionHandle};
    pub use crate::settings::{DisplaySettings, JsonFileStore, MemoryStore, SettingsStore};
    pub use crate::speed_limit::SpeedLimitAlert;
    pub use crate::trip::{TripEngine, TripError, TripReadings};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
