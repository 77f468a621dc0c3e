//! Persisted key-value settings that survive scene reloads.
//!
//! Scenes only ever see the [`SettingsStore`] trait; [`PlayerPrefs`] is the
//! JSON-file implementation owned by the application.

use crate::core::constants::PREFS_FILE;
use crate::error::GameResult;
use crate::utils::persistence::{data_path, load_json_or_default, save_json};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Narrow interface to the process-wide settings store.
pub trait SettingsStore {
    /// Read an integer; a missing key yields 0.
    fn get_int(&self, key: &str) -> i64;
    fn set_int(&mut self, key: &str, value: i64);
    fn has_key(&self, key: &str) -> bool;
    fn delete_key(&mut self, key: &str);
    /// Flush pending writes to durable storage.
    fn save(&mut self) -> GameResult<()>;
}

/// Integer settings kept in memory and flushed to a JSON file.
#[derive(Debug, Clone, Default)]
pub struct PlayerPrefs {
    values: BTreeMap<String, i64>,
    path: Option<PathBuf>,
    dirty: bool,
}

impl PlayerPrefs {
    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load from `path`; a missing or corrupt file starts empty.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values: BTreeMap<String, i64> = load_json_or_default(&path);
        log::debug!("Loaded {} settings from {}", values.len(), path.display());
        Self {
            values,
            path: Some(path),
            dirty: false,
        }
    }

    /// Load from ~/.skyflap/prefs.json.
    pub fn load_default() -> GameResult<Self> {
        Ok(Self::load_from(data_path(PREFS_FILE)?))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl SettingsStore for PlayerPrefs {
    fn get_int(&self, key: &str) -> i64 {
        self.values.get(key).copied().unwrap_or(0)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn delete_key(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.dirty = true;
        }
    }

    fn save(&mut self) -> GameResult<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(path) = &self.path {
            save_json(path, &self.values)?;
            log::debug!("Saved settings to {}", path.display());
        }
        self.dirty = false;
        Ok(())
    }
}
