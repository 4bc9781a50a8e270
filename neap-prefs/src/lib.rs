//! The two "last used" fields the client restores on startup: the last map
//! location and the last selected station. Nothing else is persisted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Last location the map was centered on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Last station the user selected; enough to re-render headings before the
/// station list is re-fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredStation {
    pub id: String,
    pub name: String,
    pub time_zone_offset: i32,
}

/// On-disk preferences document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prefs {
    pub last_location: Option<StoredLocation>,
    pub last_station: Option<StoredStation>,
}

impl Prefs {
    /// Loads the document at `path`. A missing file is a fresh start and an
    /// unreadable or unparseable one is treated the same way, after a warning;
    /// stale preferences are never worth failing startup over.
    pub fn load(path: &Path) -> Prefs {
        let Ok(content) = fs::read_to_string(path) else {
            return Prefs::default();
        };

        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "discarding corrupt prefs file");
                Prefs::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("neap").join("prefs.json"))
}
