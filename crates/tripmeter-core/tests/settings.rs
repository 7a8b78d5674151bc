use pretty_assertions::assert_eq;
use tripmeter_core::settings::{
    DisplaySettings, JsonFileStore, MemoryStore, SettingsStore, KEY_DISTANCE_IN_KM, KEY_SPEED_IN_M,
};

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("settings.json"));

    let settings = DisplaySettings::load(&store);
    assert_eq!(settings, DisplaySettings::default());
    assert!(settings.distance_in_km);
    assert!(settings.speed_in_mps);
}

#[test]
fn test_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = JsonFileStore::open(&path);
    let settings = DisplaySettings {
        distance_in_km: false,
        speed_in_mps: false,
    };
    settings.save(&mut store).unwrap();

    let reopened = JsonFileStore::open(&path);
    assert_eq!(DisplaySettings::load(&reopened), settings);
}

#[test]
fn test_persisted_keys_are_exactly_the_two_toggles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = JsonFileStore::open(&path);
    DisplaySettings::default().save(&mut store).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2);
    assert_eq!(object.get(KEY_DISTANCE_IN_KM), Some(&serde_json::json!(true)));
    assert_eq!(object.get(KEY_SPEED_IN_M), Some(&serde_json::json!(true)));
}

#[test]
fn test_corrupt_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "definitely not json {").unwrap();

    let store = JsonFileStore::open(&path);
    assert_eq!(DisplaySettings::load(&store), DisplaySettings::default());
}

#[test]
fn test_flush_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config").join("settings.json");

    let mut store = JsonFileStore::open(&path);
    store.set_bool(KEY_DISTANCE_IN_KM, false);
    store.flush().unwrap();

    assert!(path.exists());
    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get_bool(KEY_DISTANCE_IN_KM), Some(false));
}

#[test]
fn test_toggle_persists_independently() {
    let mut store = MemoryStore::new();
    let mut settings = DisplaySettings::load(&store);

    settings.distance_in_km = false;
    settings.save(&mut store).unwrap();

    let loaded = DisplaySettings::load(&store);
    assert!(!loaded.distance_in_km);
    assert!(loaded.speed_in_mps);
}
