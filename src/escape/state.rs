//! Quoting state carried between bytes and between chunks.

/// Position of the escaper within shell token structure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotingState {
    /// Between words. Blanks are dropped here.
    #[default]
    Space,
    /// Inside an unquoted word.
    Bare,
    /// After a backslash inside an unquoted word.
    BareEscape,
    /// Inside `'...'`.
    SingleQuoted,
    /// Inside `"..."`.
    DoubleQuoted,
    /// After a backslash inside `"..."`.
    DoubleQuotedEscape,
}

impl QuotingState {
    /// Returns the quote byte that must be written to close the region left
    /// open when the stream ends in this state.
    pub const fn closing_quote(self) -> Option<u8> {
        match self {
            Self::SingleQuoted => Some(b'\''),
            Self::DoubleQuoted | Self::DoubleQuotedEscape => Some(b'"'),
            Self::Space | Self::Bare | Self::BareEscape => None,
        }
    }

    /// Returns `true` inside a single- or double-quoted region.
    pub const fn is_quoted(self) -> bool {
        self.closing_quote().is_some()
    }
}
