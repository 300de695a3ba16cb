//! Read-escape-write pipeline over `std::io` handles.

use std::io::{ErrorKind, Read, Write};

use tracing::{debug, trace};

use crate::counting::CountingWriter;
use crate::error::StreamError;
use crate::escape::Escaper;
use crate::options::StreamOptions;

/// Totals gathered over one [`run`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Bytes read from the input.
    pub bytes_read: u64,
    /// Bytes written to the output, closing quote included.
    pub bytes_written: u64,
    /// Non-empty chunks processed.
    pub chunks: u64,
    /// Whether finalization had to close a quoted region.
    pub closed_quote: bool,
}

/// Escapes everything `reader` yields into `writer`.
///
/// Input is read in chunks of `options.chunk_size` bytes until end of
/// stream. Any open quote is then closed and `writer` is flushed.
///
/// # Errors
///
/// Returns [`StreamError::Options`] before touching either handle when the
/// options are invalid, and [`StreamError::Read`] or [`StreamError::Write`]
/// when the underlying I/O fails. There is no recovery; output written
/// before a failure is left as is.
pub fn run<R, W>(
    mut reader: R,
    writer: W,
    options: &StreamOptions,
) -> Result<StreamSummary, StreamError>
where
    R: Read,
    W: Write,
{
    options.validate()?;

    let mut escaper = Escaper::new(CountingWriter::new(writer));
    let mut buffer = vec![0; options.chunk_size];
    let mut summary = StreamSummary::default();

    loop {
        let len = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(len) => len,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(StreamError::Read { source }),
        };

        let before = escaper.state();
        escaper
            .process(&buffer[..len])
            .map_err(|source| StreamError::Write { source })?;
        trace!(
            chunk = summary.chunks,
            len,
            ?before,
            after = ?escaper.state(),
            "escaped chunk"
        );

        summary.chunks += 1;
        summary.bytes_read += len as u64;
    }

    let final_state = escaper.state();
    summary.closed_quote = final_state.is_quoted();

    let mut sink = escaper
        .finish()
        .map_err(|source| StreamError::Write { source })?;
    sink.flush()
        .map_err(|source| StreamError::Write { source })?;
    summary.bytes_written = sink.bytes_written();

    debug!(
        bytes_read = summary.bytes_read,
        bytes_written = summary.bytes_written,
        chunks = summary.chunks,
        ?final_state,
        closed_quote = summary.closed_quote,
        "input stream exhausted"
    );

    Ok(summary)
}
