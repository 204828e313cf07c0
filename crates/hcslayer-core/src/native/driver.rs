//! Native structure layout for driver information.

use hcslayer_common::error::{LayerError, Result};
use hcslayer_common::types::{DriverFlavour, DriverInfo};

use crate::native::wide::WideString;

/// The driver-info structure layout the native procedure reads.
///
/// Mirrors the platform header: a 32-bit flavour tag followed by a pointer
/// to the null-terminated UTF-16 home directory path.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawDriverInfo {
    /// Raw flavour value.
    pub flavour: i32,
    /// Pointer to the wide home directory string.
    pub home_dir: *const u16,
}

/// Owning descriptor for the native driver-info argument.
///
/// Produced by a pure conversion from [`DriverInfo`]; holds the encoded
/// home directory buffer so the [`RawDriverInfo`] views it hands out stay
/// valid for the duration of a native call.
#[derive(Debug)]
pub struct NativeDriverInfo {
    flavour: DriverFlavour,
    home_dir: WideString,
}

impl NativeDriverInfo {
    /// The raw structure passed by reference to the native procedure.
    ///
    /// The embedded pointer is valid while `self` is alive.
    #[must_use]
    pub fn raw(&self) -> RawDriverInfo {
        RawDriverInfo {
            flavour: self.flavour.as_raw(),
            home_dir: self.home_dir.as_ptr(),
        }
    }
}

impl TryFrom<&DriverInfo> for NativeDriverInfo {
    type Error = LayerError;

    /// Converts caller-facing driver info into the native layout.
    ///
    /// Fails without side effects if the flavour is not one the host
    /// compute service supports, or if the home directory path cannot be
    /// encoded as a wide string.
    fn try_from(info: &DriverInfo) -> Result<Self> {
        if !info.flavour.is_recognized() {
            return Err(LayerError::Encoding {
                what: "driver flavour",
                value: info.flavour.to_string(),
            });
        }
        let home_dir = info.home_dir.to_str().ok_or_else(|| LayerError::Encoding {
            what: "driver home directory",
            value: info.home_dir.display().to_string(),
        })?;
        Ok(Self {
            flavour: info.flavour,
            home_dir: WideString::new(home_dir)?,
        })
    }
}
