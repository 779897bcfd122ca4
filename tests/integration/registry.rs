//! Device registry persistence on disk

use std::fs;

use charger_console::core::DeviceIndex;
use charger_console::device::DeviceRegistry;
use tempfile::TempDir;

fn fixture_copy(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("chIP.json");
    fs::write(&path, include_str!("../fixtures/chIP.json")).unwrap();
    path
}

#[test]
fn test_fixture_loads_in_index_order() {
    let dir = TempDir::new().unwrap();
    let registry = DeviceRegistry::load(&fixture_copy(&dir)).unwrap();

    let devices = registry.devices();
    assert_eq!(devices.len(), 3);
    assert_eq!(devices[0].index, DeviceIndex(1));
    assert_eq!(devices[2].ip, "192.168.3.13");
}

#[test]
fn test_update_ip_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = fixture_copy(&dir);

    let mut registry = DeviceRegistry::load(&path).unwrap();
    registry.update_ip(DeviceIndex(2), "10.0.0.2").unwrap();

    let reloaded = DeviceRegistry::load(&path).unwrap();
    assert_eq!(reloaded.ip(DeviceIndex(1)), Some("192.168.3.11"));
    assert_eq!(reloaded.ip(DeviceIndex(2)), Some("10.0.0.2"));
    assert_eq!(reloaded.ip(DeviceIndex(3)), Some("192.168.3.13"));
}

#[test]
fn test_malformed_address_is_not_written() {
    let dir = TempDir::new().unwrap();
    let path = fixture_copy(&dir);
    let before = fs::read_to_string(&path).unwrap();

    let mut registry = DeviceRegistry::load(&path).unwrap();
    assert!(registry.update_ip(DeviceIndex(1), "not-an-ip").is_err());

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_unknown_device_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut registry = DeviceRegistry::load(&fixture_copy(&dir)).unwrap();
    assert!(registry.update_ip(DeviceIndex(9), "10.0.0.9").is_err());
}
