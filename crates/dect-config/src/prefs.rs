use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ConfigError;
use crate::table::LoadMode;

/// Whether and how an external alpha table is layered onto the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExternalResourcePrefs {
    pub enable_external: bool,
    pub alpha_path: PathBuf,
    /// Keep the bundled defaults and add the file's entries on top. When
    /// false the file replaces the table.
    pub append_values: bool,
}

impl Default for ExternalResourcePrefs {
    fn default() -> Self {
        Self {
            enable_external: false,
            alpha_path: PathBuf::new(),
            append_values: true,
        }
    }
}

impl ExternalResourcePrefs {
    pub fn load_mode(&self) -> LoadMode {
        LoadMode::from_append(self.append_values)
    }
}

pub fn load_prefs(path: &Path) -> Result<ExternalResourcePrefs, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Prefs {
        path: path.to_path_buf(),
        source,
    })
}
