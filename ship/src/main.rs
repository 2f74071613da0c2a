//! Ship — route planner for multi-level stations.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use ship_lib::{Cli, exit_status, run};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help lands here too, on stdout and with a zero status. If even
            // the usage text cannot be written there is nowhere left to say so.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let outcome = run(&cli, stdin.lock(), &mut out);
    ExitCode::from(exit_status(outcome, &mut io::stderr()))
}

/// Send log records to stderr, filtered by `-v` count or `RUST_LOG`.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}
