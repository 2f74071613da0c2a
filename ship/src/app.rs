use std::error::Error;
use std::io::{BufRead, Write};

use ship_paths::plan_route;

use crate::cli::Cli;

/// Load a station from `input`, plan a route and write the report to `out`.
///
/// Returns whether a route was found. Load failures and write failures are
/// returned as errors; nothing is written to `out` when loading fails.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<bool, Box<dyn Error>> {
    let mut station = ship_io::load(input)?;

    let mode = cli.search_mode();
    log::debug!("planning with {mode} search, {} output", cli.output);
    let route = plan_route(&mut station, mode);

    ship_io::write_report(out, &station, route.as_ref(), cli.output)?;
    out.flush()?;
    Ok(route.is_some())
}

/// Process exit status for the outcome of [`run`]: 0 when a route was found,
/// 1 when none was or when `run` failed. Failures are reported on `err`.
pub fn exit_status<E: Write>(outcome: Result<bool, Box<dyn Error>>, err: &mut E) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            // stderr is the last resort; a failed write leaves nothing to report to
            let _ = writeln!(err, "Error: {e}");
            1
        }
    }
}
