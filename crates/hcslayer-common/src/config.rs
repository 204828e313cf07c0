//! Configuration model for the activation binding.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LayerError, Result};

/// Configuration for the layer activation binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Path of the native host compute library to load.
    ///
    /// Defaults to the bare library file name, resolved through the
    /// platform's standard library search order.
    pub library_path: PathBuf,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            library_path: PathBuf::from(crate::constants::COMPUTE_LIBRARY),
        }
    }
}

impl BindingConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| LayerError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}
