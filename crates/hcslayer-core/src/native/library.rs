//! Loading and procedure resolution for the host compute library.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use hcslayer_common::config::BindingConfig;
use hcslayer_common::constants;
use hcslayer_common::error::{LayerError, Result};

use crate::native::driver::RawDriverInfo;

/// Signature of the native layer activation procedure: a pointer to the
/// driver-info structure and a pointer to the wide layer id, returning a
/// platform status code.
pub type ActivateLayerFn = unsafe extern "system" fn(*const RawDriverInfo, *const u16) -> u32;

/// Process-wide cache of the loaded library.
///
/// Callers holding an `Arc` clone keep the library mapped, so it is never
/// unloaded while a native call is in flight. A failed load is not cached;
/// the next call retries.
static SHARED: Mutex<Option<Arc<ComputeLibrary>>> = Mutex::new(None);

/// A loaded host compute service library.
#[derive(Debug)]
pub struct ComputeLibrary {
    path: PathBuf,
    library: libloading::Library,
}

impl ComputeLibrary {
    /// Loads the library named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::Resolution`] with the platform diagnostic if
    /// the library cannot be loaded.
    pub fn open(config: &BindingConfig) -> Result<Self> {
        // SAFETY: loading the host compute library runs its platform-defined
        // initialization routines; no other safety obligations apply here.
        let library = unsafe { libloading::Library::new(&config.library_path) }.map_err(|e| {
            LayerError::Resolution {
                library: config.library_path.clone(),
                detail: e.to_string(),
            }
        })?;
        Ok(Self {
            path: config.library_path.clone(),
            library,
        })
    }

    /// Returns the process-wide shared library handle, loading it with the
    /// default configuration on first use.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::Resolution`] if the library cannot be loaded.
    pub fn shared() -> Result<Arc<Self>> {
        let mut slot = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(library) = slot.as_ref() {
            return Ok(Arc::clone(library));
        }
        let library = Arc::new(Self::open(&BindingConfig::default())?);
        *slot = Some(Arc::clone(&library));
        Ok(library)
    }

    /// Resolves the layer activation procedure.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::Resolution`] if the library does not export
    /// the procedure.
    pub fn activate_proc(&self) -> Result<libloading::Symbol<'_, ActivateLayerFn>> {
        // SAFETY: the exported procedure takes a driver-info pointer and a
        // wide-string pointer and returns a status code, matching
        // `ActivateLayerFn` exactly.
        unsafe {
            self.library
                .get(constants::ACTIVATE_LAYER_PROC.as_bytes())
        }
        .map_err(|e| LayerError::Resolution {
            library: self.path.clone(),
            detail: format!("{}: {e}", constants::ACTIVATE_LAYER_PROC),
        })
    }
}
