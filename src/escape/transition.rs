//! Transition function of the escaping state machine.
//!
//! Each step consumes zero or more bytes from the cursor, appends output to
//! `out`, and returns the next state. A step that consumes nothing always
//! hands the same byte to a state that will consume it, so driving
//! [`transduce`] until the cursor is exhausted terminates.

use crate::escape::class::{
    BARE_DELIMITERS, BLANKS, DOUBLE_QUOTED_DELIMITERS, SINGLE_QUOTED_DELIMITERS,
    is_double_quote_escapable,
};
use crate::escape::cursor::Cursor;
use crate::escape::state::QuotingState;

/// Runs the state machine over one chunk and returns the state to resume in.
pub(crate) fn transduce(
    mut state: QuotingState,
    chunk: &[u8],
    out: &mut Vec<u8>,
) -> QuotingState {
    let mut cursor = Cursor::new(chunk);
    while !cursor.is_eof() {
        state = step(state, &mut cursor, out);
    }
    state
}

fn step(state: QuotingState, cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> QuotingState {
    match state {
        QuotingState::Space => space(cursor),
        QuotingState::Bare => bare(cursor, out),
        QuotingState::BareEscape => bare_escape(cursor, out),
        QuotingState::SingleQuoted => single_quoted(cursor, out),
        QuotingState::DoubleQuoted => double_quoted(cursor, out),
        QuotingState::DoubleQuotedEscape => double_quoted_escape(cursor, out),
    }
}

fn push_escaped(out: &mut Vec<u8>, byte: u8) {
    out.extend_from_slice(&[b'\\', byte]);
}

fn space(cursor: &mut Cursor<'_>) -> QuotingState {
    cursor.skip_while(&BLANKS);
    match cursor.peek_byte() {
        None => QuotingState::Space,
        Some(b'\0') => {
            cursor.advance_by(1);
            QuotingState::Space
        }
        // The byte starts a word and is handled by `bare`.
        Some(_) => QuotingState::Bare,
    }
}

fn bare(cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> QuotingState {
    out.extend_from_slice(cursor.take_until(&BARE_DELIMITERS));

    match cursor.advance_byte() {
        None | Some(b'\0') => QuotingState::Bare,
        Some(byte @ (b'\n' | b'\t' | b' ')) => {
            out.push(byte);
            QuotingState::Space
        }
        Some(b'\\') => QuotingState::BareEscape,
        Some(b'\'') => {
            out.push(b'\'');
            QuotingState::SingleQuoted
        }
        Some(b'"') => {
            out.push(b'"');
            QuotingState::DoubleQuoted
        }
        Some(byte) => {
            push_escaped(out, byte);
            QuotingState::Bare
        }
    }
}

fn bare_escape(cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> QuotingState {
    match cursor.advance_byte() {
        // Line continuation: the pair vanishes.
        None | Some(b'\n' | b'\0') => {}
        Some(byte) => push_escaped(out, byte),
    }
    QuotingState::Bare
}

fn single_quoted(cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> QuotingState {
    out.extend_from_slice(cursor.take_until(&SINGLE_QUOTED_DELIMITERS));

    match cursor.peek_byte() {
        None => QuotingState::SingleQuoted,
        // Quotes never span lines; the newline itself is handled by `bare`.
        Some(b'\n') => {
            out.push(b'\'');
            QuotingState::Bare
        }
        Some(b'\'') => {
            cursor.advance_by(1);
            out.push(b'\'');
            QuotingState::Bare
        }
        Some(_) => {
            cursor.advance_by(1);
            QuotingState::SingleQuoted
        }
    }
}

fn double_quoted(cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> QuotingState {
    out.extend_from_slice(cursor.take_until(&DOUBLE_QUOTED_DELIMITERS));

    match cursor.peek_byte() {
        None => QuotingState::DoubleQuoted,
        Some(b'\n') => {
            out.push(b'"');
            QuotingState::Bare
        }
        Some(b'"') => {
            cursor.advance_by(1);
            out.push(b'"');
            QuotingState::Bare
        }
        Some(b'\\') => {
            cursor.advance_by(1);
            QuotingState::DoubleQuotedEscape
        }
        Some(byte @ (b'$' | b'`')) => {
            cursor.advance_by(1);
            push_escaped(out, byte);
            QuotingState::DoubleQuoted
        }
        Some(_) => {
            cursor.advance_by(1);
            QuotingState::DoubleQuoted
        }
    }
}

fn double_quoted_escape(cursor: &mut Cursor<'_>, out: &mut Vec<u8>) -> QuotingState {
    match cursor.peek_byte() {
        None => return QuotingState::DoubleQuotedEscape,
        Some(b'\n' | b'\0') => {
            cursor.advance_by(1);
        }
        Some(byte) if is_double_quote_escapable(byte) => {
            cursor.advance_by(1);
            push_escaped(out, byte);
        }
        // A backslash before any other byte is literal; the byte is left for
        // `double_quoted`.
        Some(_) => out.push(b'\\'),
    }
    QuotingState::DoubleQuoted
}
