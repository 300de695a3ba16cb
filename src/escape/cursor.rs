//! Forward-only byte cursor over one input chunk.

use crate::escape::class::ByteSet;

/// Byte-position cursor over a chunk of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Returns `true` if every byte of the chunk has been consumed.
    pub(crate) fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Returns the byte at cursor position.
    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Consumes and returns the byte at cursor position.
    pub(crate) fn advance_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.offset += 1;
        Some(byte)
    }

    /// Advances the cursor by `count` bytes, clamped to chunk length.
    pub(crate) fn advance_by(&mut self, count: usize) {
        self.offset = self.offset.saturating_add(count).min(self.input.len());
    }

    /// Consumes the longest run of bytes that are not in `stop` and returns it.
    pub(crate) fn take_until(&mut self, stop: &ByteSet) -> &'a [u8] {
        let input = self.input;
        let rest = &input[self.offset..];
        let len = rest
            .iter()
            .position(|byte| stop.contains(*byte))
            .unwrap_or(rest.len());
        self.offset += len;
        &rest[..len]
    }

    /// Consumes the longest run of bytes that are in `set`.
    pub(crate) fn skip_while(&mut self, set: &ByteSet) {
        let rest = &self.input[self.offset..];
        let len = rest
            .iter()
            .position(|byte| !set.contains(*byte))
            .unwrap_or(rest.len());
        self.offset += len;
    }
}
