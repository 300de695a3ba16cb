use clap::Parser;

use shesc::{DEFAULT_CHUNK_SIZE, StreamOptions};

#[derive(Debug, Parser)]
#[command(
    name = "shesc",
    about = "Escape shell-special characters read from stdin so the result is safe for `eval`.",
    version,
    after_help = "\
Input is always read from standard input and written to standard output.

To make an argument come out as one verbatim word, put a backslash in front
of every backslash and double quote in it and wrap it in double quotes.

Set RUST_LOG (for example RUST_LOG=shesc=debug) to log to standard error."
)]
pub struct Cli {
    /// Number of bytes read from standard input at a time
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

impl Cli {
    pub fn stream_options(&self) -> StreamOptions {
        StreamOptions {
            chunk_size: self.chunk_size,
        }
    }
}
