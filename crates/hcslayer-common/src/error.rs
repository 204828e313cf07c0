//! Unified error types for the hcslayer workspace.
//!
//! Every failure of the activation binding is surfaced to the immediate
//! caller through one of these variants; none are swallowed. Callers must
//! treat any returned error as "layer not activated".

use std::path::PathBuf;

use thiserror::Error;

use crate::types::DriverFlavour;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LayerError {
    /// The native library could not be loaded, or the activation procedure
    /// could not be found in it. The call was never attempted.
    #[error("failed to resolve host compute procedure in {library}: {detail}")]
    Resolution {
        /// Path of the native library that failed to resolve.
        library: PathBuf,
        /// Underlying platform diagnostic.
        detail: String,
    },

    /// A caller-supplied argument could not be translated into the native
    /// representation. Indicates a caller defect; the call was never
    /// attempted.
    #[error("cannot encode {what} {value:?} for the native call")]
    Encoding {
        /// Which argument failed to encode.
        what: &'static str,
        /// The offending value, for diagnostics.
        value: String,
    },

    /// The native call executed but returned a non-zero status code.
    #[error(
        "layer activation failed: code={code} ({description}) id={id} flavour={flavour}"
    )]
    Activation {
        /// Numeric status code returned by the native procedure.
        code: u32,
        /// Platform-decoded description of the status code.
        description: String,
        /// Identifier of the layer whose activation failed.
        id: String,
        /// Driver flavour the call was issued for.
        flavour: DriverFlavour,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LayerError>;
