//! Stream configuration.

use crate::error::OptionsError;

/// Default number of bytes read from the input per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Options for [`crate::stream::run`].
///
/// Chunk size bounds memory use only; output does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
    /// Read buffer size in bytes.
    pub chunk_size: usize,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl StreamOptions {
    /// Checks option values before any I/O happens.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::ZeroChunkSize`] when `chunk_size` is zero.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.chunk_size == 0 {
            return Err(OptionsError::ZeroChunkSize);
        }
        Ok(())
    }
}
