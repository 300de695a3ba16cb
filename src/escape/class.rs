//! Byte classification tables for the escaping state machine.
//!
//! Every plain-run scan stops at NUL in addition to the bytes listed for
//! its quoting state.

/// Membership table over all 256 byte values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ByteSet([bool; 256]);

impl ByteSet {
    const fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = [false; 256];
        let mut index = 0;
        while index < bytes.len() {
            table[bytes[index] as usize] = true;
            index += 1;
        }
        Self(table)
    }

    /// Returns `true` when `byte` belongs to the set.
    pub(crate) const fn contains(&self, byte: u8) -> bool {
        self.0[byte as usize]
    }
}

/// Blanks skipped between words.
pub(crate) const BLANKS: ByteSet = ByteSet::from_bytes(b" \t");

/// Bytes that end a plain run inside an unquoted word.
pub(crate) const BARE_DELIMITERS: ByteSet =
    ByteSet::from_bytes(b"\0$<>{}()!&|=;*~#%'\"`\n\\\t ");

/// Bytes that end a plain run inside `'...'`.
pub(crate) const SINGLE_QUOTED_DELIMITERS: ByteSet = ByteSet::from_bytes(b"\0'\n");

/// Bytes that end a plain run inside `"..."`.
pub(crate) const DOUBLE_QUOTED_DELIMITERS: ByteSet = ByteSet::from_bytes(b"\0$\\`\"\n");

/// Returns `true` for the bytes a backslash escapes inside double quotes.
pub(crate) const fn is_double_quote_escapable(byte: u8) -> bool {
    matches!(byte, b'"' | b'\\' | b'$' | b'`')
}
