//! Error types for the streaming pipeline.
//!
//! The escaping state machine itself cannot fail; only the surrounding I/O
//! and configuration can.

use std::io;

use miette::Diagnostic;

/// Failure of [`crate::stream::run`].
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum StreamError {
    #[error("Cannot read input stream")]
    #[diagnostic(code(shesc::read))]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("Cannot write output stream")]
    #[diagnostic(
        code(shesc::write),
        help("Output written before the failure may be incomplete.")
    )]
    Write {
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Options(#[from] OptionsError),
}

/// Invalid [`crate::options::StreamOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum OptionsError {
    #[error("Chunk size must be at least one byte")]
    #[diagnostic(code(shesc::options::chunk_size), help("Pass a positive value to --chunk-size."))]
    ZeroChunkSize,
}
