//! Null-terminated UTF-16 string buffers for native calls.

use hcslayer_common::error::{LayerError, Result};

/// An owned, null-terminated UTF-16 string in the representation the native
/// host compute procedures expect.
///
/// The encoded units live on the heap, so moving a `WideString` never
/// relocates the buffer the native side sees: the pointer returned by
/// [`as_ptr`](Self::as_ptr) stays valid for as long as the value is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideString {
    /// UTF-16 units including the trailing NUL terminator.
    units: Vec<u16>,
}

impl WideString {
    /// Encodes a string into the native UTF-16 representation.
    ///
    /// Every Unicode scalar value is representable in UTF-16, so the only
    /// rejected input is one containing an interior NUL, which the native
    /// side would misread as the end of the string.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::Encoding`] if the value contains a NUL
    /// character.
    pub fn new(value: &str) -> Result<Self> {
        if value.chars().any(|c| c == '\0') {
            return Err(LayerError::Encoding {
                what: "wide string",
                value: value.to_owned(),
            });
        }
        let mut units: Vec<u16> = value.encode_utf16().collect();
        units.push(0);
        Ok(Self { units })
    }

    /// Pointer to the first UTF-16 unit, valid while `self` is alive.
    #[must_use]
    pub fn as_ptr(&self) -> *const u16 {
        self.units.as_ptr()
    }

    /// The encoded units without the trailing terminator.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.units[..self.units.len() - 1]
    }
}
