//! Device registry: the persisted index -> IP map
//!
//! Stored as a JSON object with string keys (`{"1": "192.168.3.10"}`). The
//! registry is read once at startup and rewritten only by a successful IP
//! change, always from the main loop.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::common::prelude::*;
use crate::core::{is_ipv4_format, Device, DeviceIndex};

#[derive(Debug, Clone)]
pub struct DeviceRegistry {
    path: PathBuf,
    devices: BTreeMap<DeviceIndex, String>,
}

impl DeviceRegistry {
    /// Load the registry, rejecting unreadable files, malformed JSON, an
    /// empty map, or any entry that is not a dotted quad
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::RegistryRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let devices: BTreeMap<DeviceIndex, String> = serde_json::from_str(&content)
            .map_err(|e| Error::registry_invalid(format!("{}: {}", path.display(), e)))?;

        Self::from_entries(path, devices)
    }

    /// Build a registry from already-parsed entries (validates like `load`)
    pub fn from_entries(
        path: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = (DeviceIndex, String)>,
    ) -> Result<Self> {
        let devices: BTreeMap<DeviceIndex, String> = entries.into_iter().collect();

        if devices.is_empty() {
            return Err(Error::registry_invalid("no devices defined"));
        }
        if let Some((index, ip)) = devices.iter().find(|(_, ip)| !is_ipv4_format(ip)) {
            return Err(Error::registry_invalid(format!(
                "device {} has malformed address {:?}",
                index, ip
            )));
        }

        Ok(Self {
            path: path.into(),
            devices,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// All devices in ascending index order
    pub fn devices(&self) -> Vec<Device> {
        self.devices
            .iter()
            .map(|(index, ip)| Device::new(*index, ip.clone()))
            .collect()
    }

    /// Device shown at list row `row` (0-based)
    pub fn device_at(&self, row: usize) -> Option<Device> {
        self.devices
            .iter()
            .nth(row)
            .map(|(index, ip)| Device::new(*index, ip.clone()))
    }

    pub fn ip(&self, index: DeviceIndex) -> Option<&str> {
        self.devices.get(&index).map(String::as_str)
    }

    /// Replace the address of an existing device and persist immediately
    pub fn update_ip(&mut self, index: DeviceIndex, ip: &str) -> Result<()> {
        if !is_ipv4_format(ip) {
            return Err(Error::registry_invalid(format!(
                "refusing malformed address {:?}",
                ip
            )));
        }
        let Some(slot) = self.devices.get_mut(&index) else {
            return Err(Error::UnknownDevice { index: index.get() });
        };

        let previous = std::mem::replace(slot, ip.to_string());
        if let Err(e) = self.save() {
            // Keep memory and disk in agreement
            if let Some(slot) = self.devices.get_mut(&index) {
                *slot = previous;
            }
            return Err(e);
        }

        info!("Device {} address updated in {}", index, self.path.display());
        Ok(())
    }

    /// Write the registry as pretty JSON (temp file + rename)
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.devices)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).context("writing device registry")?;
        std::fs::rename(&tmp, &self.path).context("replacing device registry")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_registry(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("chIP.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_load_string_keyed_map() {
        let temp = tempdir().unwrap();
        let path = write_registry(
            temp.path(),
            r#"{"1": "192.168.3.11", "2": "192.168.3.12", "3": "192.168.3.13"}"#,
        );

        let registry = DeviceRegistry::load(&path).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.ip(DeviceIndex(2)), Some("192.168.3.12"));
        assert_eq!(registry.device_at(0), Some(Device::new(1, "192.168.3.11")));
        assert_eq!(registry.device_at(3), None);
    }

    #[test]
    fn test_devices_sorted_by_index() {
        let temp = tempdir().unwrap();
        let path = write_registry(temp.path(), r#"{"10": "10.0.0.10", "2": "10.0.0.2"}"#);

        let registry = DeviceRegistry::load(&path).unwrap();
        let indices: Vec<u32> = registry.devices().iter().map(|d| d.index.get()).collect();

        assert_eq!(indices, vec![2, 10]);
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let temp = tempdir().unwrap();
        let err = DeviceRegistry::load(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::RegistryRead { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_malformed_json_is_fatal() {
        let temp = tempdir().unwrap();
        let path = write_registry(temp.path(), "{ not json");
        let err = DeviceRegistry::load(&path).unwrap_err();
        assert!(matches!(err, Error::RegistryInvalid { .. }));
    }

    #[test]
    fn test_load_rejects_non_numeric_keys() {
        let temp = tempdir().unwrap();
        let path = write_registry(temp.path(), r#"{"first": "192.168.3.11"}"#);
        assert!(DeviceRegistry::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_bad_address() {
        let temp = tempdir().unwrap();
        let path = write_registry(temp.path(), r#"{"1": "charger.local"}"#);
        let err = DeviceRegistry::load(&path).unwrap_err();
        assert!(err.to_string().contains("malformed address"));
    }

    #[test]
    fn test_load_rejects_empty_map() {
        let temp = tempdir().unwrap();
        let path = write_registry(temp.path(), "{}");
        assert!(DeviceRegistry::load(&path).is_err());
    }

    #[test]
    fn test_update_ip_persists_only_target_entry() {
        let temp = tempdir().unwrap();
        let path = write_registry(
            temp.path(),
            r#"{"1": "192.168.3.11", "2": "192.168.3.12", "3": "192.168.3.13"}"#,
        );
        let mut registry = DeviceRegistry::load(&path).unwrap();

        registry.update_ip(DeviceIndex(2), "192.168.3.42").unwrap();

        let reloaded = DeviceRegistry::load(&path).unwrap();
        assert_eq!(reloaded.ip(DeviceIndex(2)), Some("192.168.3.42"));
        assert_eq!(reloaded.ip(DeviceIndex(1)), Some("192.168.3.11"));
        assert_eq!(reloaded.ip(DeviceIndex(3)), Some("192.168.3.13"));
    }

    #[test]
    fn test_saved_file_uses_string_keys_and_two_space_indent() {
        let temp = tempdir().unwrap();
        let path = write_registry(temp.path(), r#"{"1": "192.168.3.11"}"#);
        let mut registry = DeviceRegistry::load(&path).unwrap();

        registry.update_ip(DeviceIndex(1), "192.168.3.20").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"1\": \"192.168.3.20\"\n}");
    }

    #[test]
    fn test_update_unknown_index_is_rejected() {
        let temp = tempdir().unwrap();
        let path = write_registry(temp.path(), r#"{"1": "192.168.3.11"}"#);
        let mut registry = DeviceRegistry::load(&path).unwrap();

        let err = registry.update_ip(DeviceIndex(9), "192.168.3.99").unwrap_err();

        assert!(matches!(err, Error::UnknownDevice { index: 9 }));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("192.168.3.99"));
    }

    #[test]
    fn test_failed_save_restores_memory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("gone");
        std::fs::create_dir(&dir).unwrap();
        let path = write_registry(&dir, r#"{"1": "192.168.3.11"}"#);
        let mut registry = DeviceRegistry::load(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(registry.update_ip(DeviceIndex(1), "192.168.3.50").is_err());
        assert_eq!(registry.ip(DeviceIndex(1)), Some("192.168.3.11"));
    }
}
