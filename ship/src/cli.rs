use clap::{ArgAction, Parser};
use ship_io::OutputFormat;
use ship_paths::SearchMode;

/// Plan a route from the start (S) to the hangar (H) of a multi-level station.
///
/// The station is read from standard input in map (M) or list (L) format and
/// the report is written to standard output. The exit status is 0 when a
/// route was found and 1 otherwise.
#[derive(Debug, Parser)]
#[command(name = "ship")]
#[command(override_usage = "ship [--stack | --queue] [--output M|L] < input_file > output_file")]
pub struct Cli {
    /// Search depth-first
    #[arg(short, long, conflicts_with = "queue")]
    pub stack: bool,

    /// Search breadth-first (the default)
    #[arg(short, long)]
    pub queue: bool,

    /// Report format: M draws the station, L lists the route
    #[arg(short, long, value_name = "M|L", default_value_t = OutputFormat::Map)]
    pub output: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The frontier discipline selected on the command line.
    pub fn search_mode(&self) -> SearchMode {
        if self.stack {
            SearchMode::Stack
        } else {
            SearchMode::Queue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ship").chain(args.iter().copied()))
    }

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]).unwrap();
        assert_eq!(cli.search_mode(), SearchMode::Queue);
        assert_eq!(cli.output, OutputFormat::Map);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn short_and_long_flags() {
        let cli = parse(&["-s", "-o", "L"]).unwrap();
        assert_eq!(cli.search_mode(), SearchMode::Stack);
        assert_eq!(cli.output, OutputFormat::List);

        let cli = parse(&["--queue", "--output", "M", "-vv"]).unwrap();
        assert_eq!(cli.search_mode(), SearchMode::Queue);
        assert_eq!(cli.output, OutputFormat::Map);
        assert_eq!(cli.verbose, 2);

        let cli = parse(&["--output=L"]).unwrap();
        assert_eq!(cli.output, OutputFormat::List);
    }

    #[test]
    fn stack_and_queue_conflict() {
        let err = parse(&["--stack", "--queue"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        let err = parse(&["-q", "-s"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn invalid_output() {
        let err = parse(&["--output", "X"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(parse(&["-o"]).is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
        assert_eq!(parse(&["-h"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }
}
