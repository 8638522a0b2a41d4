//! Storage backends behind a single trait
//!
//! A backend covers some subset of whole-city save/open and per-occupant
//! import/export. Anything it leaves out reports `NotImplemented`.

use std::path::Path;

use crate::city::City;
use crate::core::config::DEFAULT_SNAPSHOT_EXTENSION;
use crate::core::error::{CityError, Result};
use crate::persistence::registry::OccupantRegistry;
use crate::persistence::{snapshot, transfer};

pub trait CityStore {
    fn name(&self) -> &str;

    /// Persist the whole city
    fn save(&self, _city: &City, _path: &Path) -> Result<()> {
        Err(CityError::NotImplemented(format!("{} save", self.name())))
    }

    /// Replace the whole city
    fn open(&self, _path: &Path) -> Result<City> {
        Err(CityError::NotImplemented(format!("{} open", self.name())))
    }

    /// Add occupants to an existing city, returning how many were placed
    fn import(&self, _city: &mut City, _path: &Path) -> Result<usize> {
        Err(CityError::NotImplemented(format!("{} import", self.name())))
    }

    /// Write one record per occupant, returning how many were written
    fn export(&self, _city: &City, _path: &Path) -> Result<usize> {
        Err(CityError::NotImplemented(format!("{} export", self.name())))
    }
}

/// Binary snapshots restricted to one file suffix
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    extension: String,
}

impl SnapshotStore {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_EXTENSION)
    }
}

impl CityStore for SnapshotStore {
    fn name(&self) -> &str {
        "snapshot"
    }

    fn save(&self, city: &City, path: &Path) -> Result<()> {
        snapshot::save_snapshot(city, path, &self.extension)
    }

    fn open(&self, path: &Path) -> Result<City> {
        snapshot::open_snapshot(path, &self.extension)
    }
}

/// Line-per-occupant text files
#[derive(Default)]
pub struct TextStore {
    registry: OccupantRegistry,
}

impl TextStore {
    pub fn new(registry: OccupantRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &OccupantRegistry {
        &self.registry
    }
}

impl CityStore for TextStore {
    fn name(&self) -> &str {
        "text"
    }

    fn import(&self, city: &mut City, path: &Path) -> Result<usize> {
        transfer::import_from_file(city, path, &self.registry)
    }

    fn export(&self, city: &City, path: &Path) -> Result<usize> {
        transfer::export_to_file(city, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operations() {
        let city = City::new(3);
        let snapshots = SnapshotStore::default();
        let text = TextStore::default();

        assert!(matches!(
            snapshots.export(&city, Path::new("city.txt")),
            Err(CityError::NotImplemented(_))
        ));
        assert!(matches!(
            text.save(&city, Path::new("city.dat")),
            Err(CityError::NotImplemented(_))
        ));
        assert!(matches!(
            text.open(Path::new("city.dat")),
            Err(CityError::NotImplemented(_))
        ));
    }

    #[test]
    fn test_snapshot_store_checks_suffix_first() {
        let store = SnapshotStore::new("city");
        assert_eq!(store.extension(), "city");
        assert!(matches!(
            store.open(Path::new("does-not-exist.dat")),
            Err(CityError::InvalidFileType { .. })
        ));
    }
}
