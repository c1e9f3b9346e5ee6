//! engine/region.rs
//! Caller-owned buffer regions handed to the engine for exactly one step.
//!
//! Both wrappers borrow; the engine cannot keep them past the call, and the
//! borrow checker rules out aliasing between the input and the output.

use crate::engine::types::SessionError;

/// Read-only bytes to feed the codec. May be empty.
#[derive(Debug, Clone, Copy)]
pub struct InputRegion<'a> {
    bytes: &'a [u8],
}

impl<'a> InputRegion<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<'a> From<&'a [u8]> for InputRegion<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        InputRegion::new(bytes)
    }
}

/// Write target for the codec. Always has non-zero capacity.
#[derive(Debug)]
pub struct OutputRegion<'a> {
    bytes: &'a mut [u8],
}

impl<'a> OutputRegion<'a> {
    /// Wrap `bytes` as an output region.
    ///
    /// # Errors
    /// - `SessionError::EmptyOutput` if `bytes` is empty.
    pub fn new(bytes: &'a mut [u8]) -> Result<Self, SessionError> {
        if bytes.is_empty() {
            return Err(SessionError::EmptyOutput);
        }
        Ok(Self { bytes })
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }
}

impl<'a> TryFrom<&'a mut [u8]> for OutputRegion<'a> {
    type Error = SessionError;

    fn try_from(bytes: &'a mut [u8]) -> Result<Self, Self::Error> {
        OutputRegion::new(bytes)
    }
}
