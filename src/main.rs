mod cli;

use std::io::{self, BufWriter};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.stream_options();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    shesc::run(stdin, stdout, &options)?;

    Ok(())
}
