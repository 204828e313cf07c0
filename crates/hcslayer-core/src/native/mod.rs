//! Native calling-convention plumbing for the host compute service.

pub mod driver;
pub mod library;
pub mod wide;

pub use driver::{NativeDriverInfo, RawDriverInfo};
pub use library::ComputeLibrary;
pub use wide::WideString;
