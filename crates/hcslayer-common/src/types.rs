//! Domain primitive types used across the hcslayer workspace.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LayerError, Result};

/// Enumerated tag identifying which storage driver implementation manages a
/// given layer.
///
/// The native host compute service takes this as a plain integer, so the
/// type is a thin wrapper around the raw value rather than a closed enum:
/// a deserialized or foreign value outside the known set is representable
/// here and rejected by the binding before the native call is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverFlavour(i32);

impl DriverFlavour {
    /// Diff driver: layers are materialized as plain directories.
    pub const DIFF: Self = Self(0);
    /// Filter driver: layers are managed by the host filesystem filter.
    pub const FILTER: Self = Self(1);

    /// Wraps a raw flavour value without validating it.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw value passed to the native call.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Whether this value names a driver the host compute service supports.
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        matches!(self.0, 0 | 1)
    }
}

impl fmt::Display for DriverFlavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DIFF => write!(f, "diff"),
            Self::FILTER => write!(f, "filter"),
            Self(raw) => write!(f, "unknown({raw})"),
        }
    }
}

/// Identifies the storage driver responsible for a layer and the home
/// directory it keeps layer state under.
///
/// Constructed by the caller before activation and immutable for the
/// duration of the call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInfo {
    /// Storage driver flavour managing the layer.
    pub flavour: DriverFlavour,
    /// Driver home directory holding layer state.
    pub home_dir: PathBuf,
}

impl DriverInfo {
    /// Creates a new driver info value.
    #[must_use]
    pub fn new(flavour: DriverFlavour, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            flavour,
            home_dir: home_dir.into(),
        }
    }
}

/// Opaque identifier of a filesystem layer.
///
/// Guaranteed non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LayerId(String);

impl LayerId {
    /// Creates a layer ID from a string value.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::Encoding`] if the value is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(LayerError::Encoding {
                what: "layer id",
                value: id,
            });
        }
        Ok(Self(id))
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LayerId {
    type Error = LayerError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<LayerId> for String {
    fn from(id: LayerId) -> Self {
        id.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
