//! Library entrypoint for `shesc`.
//!
//! The crate escapes characters with special meaning to a POSIX shell so
//! that a byte stream can be handed to `eval` without side effects. The
//! [`escape`] module holds the state machine; [`stream`] drives it over
//! `std::io` handles.

pub mod counting;
pub mod error;
pub mod escape;
pub mod options;
pub mod stream;

pub use error::{OptionsError, StreamError};
pub use escape::{Escaper, QuotingState, escape_bytes, quote_literal};
pub use options::{DEFAULT_CHUNK_SIZE, StreamOptions};
pub use stream::{StreamSummary, run};
