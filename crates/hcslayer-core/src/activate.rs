//! Layer activation through the host compute service.

use hcslayer_common::constants;
use hcslayer_common::error::{LayerError, Result};
use hcslayer_common::types::{DriverInfo, LayerId};

use crate::native::driver::{NativeDriverInfo, RawDriverInfo};
use crate::native::library::{ActivateLayerFn, ComputeLibrary};
use crate::native::wide::WideString;

/// A resolved activation procedure.
///
/// Implemented by the real native symbol; tests substitute stubs to
/// simulate the host compute service.
pub trait ActivateProc {
    /// Invokes the procedure with the two marshaled arguments.
    ///
    /// The caller guarantees that the buffers `info` and `id` point into
    /// remain alive and unmoved until this returns.
    fn invoke(&self, info: &RawDriverInfo, id: &WideString) -> u32;
}

impl ActivateProc for libloading::Symbol<'_, ActivateLayerFn> {
    fn invoke(&self, info: &RawDriverInfo, id: &WideString) -> u32 {
        let proc: ActivateLayerFn = **self;
        // SAFETY: `info` and `id` are live for the whole call per the trait
        // contract, and the symbol was resolved against the matching
        // signature.
        unsafe { proc(std::ptr::from_ref(info), id.as_ptr()) }
    }
}

/// Activates the layer with the given id, mounting its filesystem.
///
/// For a read/write layer the mounted filesystem appears as a volume on the
/// host, while a read-only layer is generally a no-op on the native side.
/// An activated layer must later be deactivated through the service's
/// separate deactivation procedure.
///
/// The call blocks until the native procedure returns; it cannot be
/// interrupted and is never retried. Whether concurrent activation of the
/// same layer id is safe is undocumented at the native level, so callers
/// must serialize activate/deactivate calls on one id themselves.
///
/// # Errors
///
/// - [`LayerError::Resolution`] if the native library or the procedure
///   cannot be located; the call is never attempted.
/// - [`LayerError::Encoding`] if the id or driver info cannot be marshaled;
///   the call is never attempted.
/// - [`LayerError::Activation`] if the native procedure returns a non-zero
///   status. On any error the layer must be presumed not activated.
pub fn activate_layer(info: &DriverInfo, id: &LayerId) -> Result<()> {
    let library = ComputeLibrary::shared()?;
    let proc = library.activate_proc()?;
    activate_layer_with(&proc, info, id)
}

/// Activates a layer through an already-resolved procedure.
///
/// Marshals both arguments, invokes the procedure, and decodes the status
/// code. Argument validation and encoding happen before the invocation, so
/// a caller defect never reaches the native side.
///
/// # Errors
///
/// See [`activate_layer`].
pub fn activate_layer_with(
    proc: &impl ActivateProc,
    info: &DriverInfo,
    id: &LayerId,
) -> Result<()> {
    tracing::debug!(flavour = %info.flavour, id = %id, "activating layer");

    let wide_id = WideString::new(id.as_str()).inspect_err(|e| {
        tracing::error!(id = %id, error = %e, "failed to encode layer id");
    })?;
    let native_info = NativeDriverInfo::try_from(info).inspect_err(|e| {
        tracing::error!(flavour = %info.flavour, error = %e, "failed to convert driver info");
    })?;

    // `native_info` and `wide_id` own the marshaled buffers and outlive the
    // invocation below.
    let raw = native_info.raw();
    let code = proc.invoke(&raw, &wide_id);

    decode_status(code, info, id)
}

/// Single interpretation policy for the native status code.
fn decode_status(code: u32, info: &DriverInfo, id: &LayerId) -> Result<()> {
    if code == constants::STATUS_SUCCESS {
        tracing::debug!(flavour = %info.flavour, id = %id, "layer activated");
        return Ok(());
    }
    #[allow(clippy::cast_possible_wrap)]
    let description = std::io::Error::from_raw_os_error(code as i32).to_string();
    let err = LayerError::Activation {
        code,
        description,
        id: id.as_str().to_owned(),
        flavour: info.flavour,
    };
    tracing::error!(error = %err, "layer activation failed");
    Err(err)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::cell::Cell;

    use hcslayer_common::types::DriverFlavour;

    use super::*;

    /// Stub procedure that records invocations and returns a fixed status.
    struct RecordingProc {
        status: u32,
        calls: Cell<usize>,
    }

    impl RecordingProc {
        fn returning(status: u32) -> Self {
            Self {
                status,
                calls: Cell::new(0),
            }
        }
    }

    impl ActivateProc for RecordingProc {
        fn invoke(&self, _info: &RawDriverInfo, _id: &WideString) -> u32 {
            self.calls.set(self.calls.get() + 1);
            self.status
        }
    }

    fn filter_info() -> DriverInfo {
        DriverInfo::new(DriverFlavour::FILTER, "C:\\layers")
    }

    fn layer_id(id: &str) -> LayerId {
        LayerId::new(id).expect("valid layer id")
    }

    #[test]
    fn zero_status_is_success() {
        let proc = RecordingProc::returning(0);
        activate_layer_with(&proc, &filter_info(), &layer_id("layer-123"))
            .expect("status 0 must succeed");
        assert_eq!(proc.calls.get(), 1);
    }

    #[test]
    fn nonzero_status_carries_exact_code() {
        let proc = RecordingProc::returning(5);
        let err = activate_layer_with(&proc, &filter_info(), &layer_id("layer-123"))
            .expect_err("status 5 must fail");
        match err {
            LayerError::Activation {
                code, id, flavour, ..
            } => {
                assert_eq!(code, 5);
                assert_eq!(id, "layer-123");
                assert_eq!(flavour, DriverFlavour::FILTER);
            }
            other => panic!("expected Activation error, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_flavour_never_reaches_the_procedure() {
        let proc = RecordingProc::returning(0);
        let info = DriverInfo::new(DriverFlavour::from_raw(99), "C:\\layers");
        let err = activate_layer_with(&proc, &info, &layer_id("layer-123"))
            .expect_err("unknown flavour must fail");
        assert!(matches!(err, LayerError::Encoding { .. }));
        assert_eq!(proc.calls.get(), 0);
    }

    #[test]
    fn nul_in_id_never_reaches_the_procedure() {
        let proc = RecordingProc::returning(0);
        let err = activate_layer_with(&proc, &filter_info(), &layer_id("lay\0er"))
            .expect_err("interior NUL must fail");
        assert!(matches!(err, LayerError::Encoding { .. }));
        assert_eq!(proc.calls.get(), 0);
    }

    #[test]
    fn decode_status_description_mentions_code() {
        let err = decode_status(5, &filter_info(), &layer_id("layer-123"))
            .expect_err("non-zero must fail");
        assert!(err.to_string().contains("code=5"));
        assert!(err.to_string().contains("layer-123"));
        assert!(err.to_string().contains("filter"));
    }
}
