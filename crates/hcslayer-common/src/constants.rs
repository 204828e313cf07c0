//! System-wide constants for the hcslayer workspace.

/// File name of the native host compute service library.
pub const COMPUTE_LIBRARY: &str = "vmcompute.dll";

/// Name of the layer activation procedure exported by the library.
pub const ACTIVATE_LAYER_PROC: &str = "ActivateLayer";

/// Native status code meaning the call succeeded.
pub const STATUS_SUCCESS: u32 = 0;
