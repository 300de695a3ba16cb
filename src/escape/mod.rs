//! Streaming escaper for POSIX shell quoting syntax.
//!
//! The escaper models bare words, backslash escapes, single-quoted regions
//! and double-quoted regions just far enough to decide whether each byte
//! needs a backslash before it is handed to `eval`. It keeps one
//! [`QuotingState`] between chunks and nothing else, so any fragmentation of
//! the input produces the same output.

mod class;
mod cursor;
mod state;
mod transition;

use std::io::{self, Write};

pub use state::QuotingState;

/// Streaming transducer writing escaped bytes to `W`.
///
/// Feed chunks in order with [`Escaper::process`], then call
/// [`Escaper::finish`] once to close any quote the input left open.
#[derive(Debug)]
pub struct Escaper<W> {
    sink: W,
    state: QuotingState,
    scratch: Vec<u8>,
}

impl<W: Write> Escaper<W> {
    /// Creates an escaper in [`QuotingState::Space`] writing to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            state: QuotingState::Space,
            scratch: Vec::new(),
        }
    }

    /// Returns the current quoting state.
    pub fn state(&self) -> QuotingState {
        self.state
    }

    /// Returns a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Escapes one chunk of input.
    ///
    /// An empty chunk is accepted and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if writing fails. The escaper state has
    /// already advanced past the chunk at that point.
    pub fn process(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.scratch.clear();
        self.state = transition::transduce(self.state, chunk, &mut self.scratch);
        if self.scratch.is_empty() {
            return Ok(());
        }
        self.sink.write_all(&self.scratch)
    }

    /// Closes a quoted region left open by the input and returns the sink.
    ///
    /// The sink is not flushed.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if writing the closing quote fails.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(quote) = self.state.closing_quote() {
            self.sink.write_all(&[quote])?;
        }
        Ok(self.sink)
    }
}

/// Escapes a complete input held in memory.
pub fn escape_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 8 + 1);
    let state = transition::transduce(QuotingState::Space, input, &mut out);
    out.extend(state.closing_quote());
    out
}

/// Wraps `arg` in double quotes so the escaper passes it through as a single
/// literal word.
///
/// Every `"`, `\`, `$` and `` ` `` gets a backslash first. The result is a
/// fixed point of [`escape_bytes`] as long as `arg` holds no newline or NUL.
pub fn quote_literal(arg: &[u8]) -> Vec<u8> {
    let mut quoted = Vec::with_capacity(arg.len() + 2);
    quoted.push(b'"');
    for &byte in arg {
        if class::is_double_quote_escapable(byte) {
            quoted.push(b'\\');
        }
        quoted.push(byte);
    }
    quoted.push(b'"');
    quoted
}
