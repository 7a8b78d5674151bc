//! Display preferences
//!
//! The two persisted display-unit toggles, behind an injected key-value
//! store capability so engine logic never touches the filesystem. The
//! toggles are a pure formatting concern: the engine publishes base units
//! and the presentation layer converts.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted key for the distance unit toggle.
pub const KEY_DISTANCE_IN_KM: &str = "isDistanceInKm";
/// Persisted key for the speed unit toggle.
pub const KEY_SPEED_IN_M: &str = "isSpeedInM";

/// Errors at the settings load/save boundary.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding the settings payload failed.
    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Key-value store capability, consumed only at load/save boundaries.
pub trait SettingsStore {
    /// Read a boolean preference.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Write a boolean preference.
    fn set_bool(&mut self, key: &str, value: bool);

    /// Persist pending writes.
    fn flush(&mut self) -> Result<(), SettingsError>;
}

/// The display-unit preferences, read at launch and written on toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Show distance in kilometers (meters otherwise).
    #[serde(rename = "isDistanceInKm")]
    pub distance_in_km: bool,
    /// Show speed in m/s (km/h otherwise).
    #[serde(rename = "isSpeedInM")]
    pub speed_in_mps: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            distance_in_km: true,
            speed_in_mps: true,
        }
    }
}

impl DisplaySettings {
    /// Load both toggles from the store; missing keys keep their defaults.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            distance_in_km: store
                .get_bool(KEY_DISTANCE_IN_KM)
                .unwrap_or(defaults.distance_in_km),
            speed_in_mps: store
                .get_bool(KEY_SPEED_IN_M)
                .unwrap_or(defaults.speed_in_mps),
        }
    }

    /// Write both toggles and persist.
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), SettingsError> {
        store.set_bool(KEY_DISTANCE_IN_KM, self.distance_in_km);
        store.set_bool(KEY_SPEED_IN_M, self.speed_in_mps);
        store.flush()
    }
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, bool>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<(), SettingsError> {
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// Missing or unreadable files load as empty so defaults apply; the parent
/// directory is created on flush.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, bool>,
}

impl JsonFileStore {
    /// Open a store at the given path, reading any existing contents.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    /// The default settings location under the platform config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tripmeter")
            .join("settings.json")
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| SettingsError::Serialize(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| SettingsError::Io(e.to_string()))
    }
}
