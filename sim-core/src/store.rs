//! Settings storage.
//!
//! The simulation and renderer only ever see a [`Config`] snapshot. A
//! [`SettingsStore`] is the collaborator that produces snapshots and
//! persists individual field edits.
//!
//! Edits travel as [`Setting`] values. A host that edits a whole snapshot
//! turns it into per-field saves with [`Config::changes_from`]:
//!
//! ```
//! use constellation_core::store::{MemoryStore, SettingsStore};
//!
//! let mut store = MemoryStore::default();
//! let before = store.load().unwrap();
//! let mut edited = before;
//! edited.node_count = 40;
//! for setting in edited.changes_from(&before) {
//!     store.save(setting).unwrap();
//! }
//! assert_eq!(store.load().unwrap().node_count, 40);
//! ```

use crate::{
    config::{Config, Setting},
    error::StoreError,
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub trait SettingsStore {
    /// Returns the current, validated settings snapshot.
    fn load(&self) -> Result<Config, StoreError>;

    /// Persists a single field.
    fn save(&mut self, setting: Setting) -> Result<(), StoreError>;
}

/// Keeps settings in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: Config,
}

impl MemoryStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Config, StoreError> {
        self.config.validate()?;
        Ok(self.config)
    }

    fn save(&mut self, setting: Setting) -> Result<(), StoreError> {
        self.config.apply(setting);
        Ok(())
    }
}

/// Stores settings as a pretty-printed JSON object in a single file.
///
/// A missing file loads as [`Config::default`]. Keys absent from the file
/// also take their default values.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Config, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Config, StoreError> {
        let config = self.read()?;
        config.validate()?;
        Ok(config)
    }

    fn save(&mut self, setting: Setting) -> Result<(), StoreError> {
        let mut config = self.read()?;
        config.apply(setting);
        let json = serde_json::to_string_pretty(&config)?;
        fs::write(&self.path, json)?;
        log::debug!("saved {setting:?} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ConfigError, types::Rgba};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "constellation-core-{}-{name}.json",
            std::process::id()
        ))
    }

    #[test]
    fn memory_store_round_trips_a_field() {
        let mut store = MemoryStore::default();
        store.save(Setting::LineDistance(42.0)).unwrap();
        assert_eq!(store.load().unwrap().line_distance, 42.0);
    }

    #[test]
    fn memory_store_rejects_invalid_snapshot() {
        let mut store = MemoryStore::default();
        store.save(Setting::MinRadius(9.0)).unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::Invalid(ConfigError::InvertedRange { .. }))
        ));
    }

    #[test]
    fn saving_a_diff_reproduces_the_edited_snapshot() {
        let mut store = MemoryStore::default();
        let before = store.load().unwrap();
        let mut edited = before;
        edited.line_distance = 120.0;
        edited.background_color = Rgba::new(0.0, 0.0, 0.2, 1.0);

        for setting in edited.changes_from(&before) {
            store.save(setting).unwrap();
        }

        assert_eq!(store.load().unwrap(), edited);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let store = JsonFileStore::new(temp_path("missing"));
        let _ = fs::remove_file(store.path());
        assert_eq!(store.load().unwrap(), Config::default());
    }

    #[test]
    fn file_store_persists_fields_across_instances() {
        let path = temp_path("persist");
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::new(&path);
        store.save(Setting::NodeCount(12)).unwrap();
        store
            .save(Setting::NodeColor(Rgba::new(1.0, 0.5, 0.0, 1.0)))
            .unwrap();

        let reopened = JsonFileStore::new(&path);
        let cfg = reopened.load().unwrap();
        assert_eq!(cfg.node_count, 12);
        assert_eq!(cfg.node_color, Rgba::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(cfg.line_distance, Config::default().line_distance);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"NumberOfNodes\": 12"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));

        fs::remove_file(&path).unwrap();
    }
}
