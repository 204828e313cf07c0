//! # hcslayer-core
//!
//! Safe, synchronous binding to the platform host compute service's layer
//! activation procedure.
//!
//! The crate is a leaf adapter with exactly one external dependency, the
//! native procedure itself. It provides:
//! - **Marshaling**: conversion of a [`hcslayer_common::types::DriverInfo`]
//!   and a layer identifier into the native calling convention (a
//!   `#[repr(C)]` structure and a null-terminated UTF-16 string).
//! - **Resolution**: lazy, reference-counted loading of the native library
//!   and lookup of the activation procedure.
//! - **Decoding**: a single interpretation policy for the native status
//!   code (zero is success, anything else is a structured error).
//!
//! All unsafe foreign calls are encapsulated in safe wrappers with
//! `// SAFETY:` documentation.

pub mod activate;
pub mod native;

pub use activate::{ActivateProc, activate_layer, activate_layer_with};
