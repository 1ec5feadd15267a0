//! User preferences
//!
//! Model-relevant preferences only: display units and the recent-document
//! list. Stored as JSON under the platform config directory.

use crate::error::{LabelError, Result};
use crate::types::Units;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_RECENT_FILES: usize = 10;

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Units used when displaying geometry
    pub units: Units,
    /// Recently opened documents, most recent first
    pub recent_files: Vec<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            units: Units::Pt,
            recent_files: Vec::new(),
        }
    }
}

impl Settings {
    /// Location of the settings file, when the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("label-tools-rs").join("settings.json"))
    }

    /// Load settings; any problem (missing file, bad JSON) yields defaults.
    pub fn load() -> Settings {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load from an explicit path, defaulting on any failure.
    pub fn load_from(path: &Path) -> Settings {
        fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| LabelError::Custom("no config directory".to_string()))?;
        self.save_to(&path)
    }

    /// Persist to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LabelError::Custom(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Record a document in the recent list, most recent first, deduped.
    pub fn add_recent_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.recent_files.retain(|p| *p != path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}
