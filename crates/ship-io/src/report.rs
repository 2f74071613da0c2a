//! Rendering the outcome of a search.

use std::io::{self, Write};

use ship_core::{Station, Tile};
use ship_paths::Route;

use crate::encode::write_levels;
use crate::format::OutputFormat;

/// Printed when the hangar cannot be reached.
pub const NO_ROUTE: &str = "No valid route found.";

/// Write the search report for `station`.
///
/// The first line always names the start cell. In [`OutputFormat::Map`] the
/// whole station follows, with the route marked on it; in
/// [`OutputFormat::List`] only the cells of the route follow, start to
/// hangar. Either way a missing route is announced with [`NO_ROUTE`].
pub fn write_report<W: Write>(
    out: &mut W,
    station: &Station,
    route: Option<&Route>,
    format: OutputFormat,
) -> io::Result<()> {
    let start = station.start();
    writeln!(
        out,
        "Start in level {}, row {}, column {}",
        start.level, start.row, start.col
    )?;

    match (format, route) {
        (OutputFormat::Map, route) => {
            if route.is_none() {
                writeln!(out, "{NO_ROUTE}")?;
            }
            write_levels(out, station, Tile::symbol)
        }
        (OutputFormat::List, None) => writeln!(out, "{NO_ROUTE}"),
        (OutputFormat::List, Some(route)) => {
            writeln!(out, "//path taken")?;
            for &p in route.path() {
                writeln!(
                    out,
                    "({},{},{},{})",
                    p.level,
                    p.row,
                    p.col,
                    station.tile(p).symbol()
                )?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::load_str;
    use ship_paths::{SearchMode, plan_route};

    fn report(input: &str, mode: SearchMode, format: OutputFormat) -> String {
        let mut station = load_str(input).unwrap();
        let route = plan_route(&mut station, mode);
        let mut out = Vec::new();
        write_report(&mut out, &station, route.as_ref(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    const SMALL: &str = "M\n1 3\nS.#\n.#.\n..H\n";

    #[test]
    fn map_report() {
        assert_eq!(
            report(SMALL, SearchMode::Queue, OutputFormat::Map),
            "Start in level 0, row 0, column 0\n//level 0\nS.#\ns#.\nseH\n"
        );
    }

    #[test]
    fn list_report() {
        assert_eq!(
            report(SMALL, SearchMode::Queue, OutputFormat::List),
            "Start in level 0, row 0, column 0\n\
             //path taken\n\
             (0,0,0,S)\n\
             (0,1,0,s)\n\
             (0,2,0,s)\n\
             (0,2,1,e)\n\
             (0,2,2,H)\n"
        );
    }

    #[test]
    fn elevator_route_report() {
        let input = "L\n3 2\n(1,1,0,S)\n(1,0,0,E)\n(0,0,0,E)\n(2,0,0,E)\n(2,0,1,H)\n";
        assert_eq!(
            report(input, SearchMode::Queue, OutputFormat::List),
            "Start in level 1, row 1, column 0\n\
             //path taken\n\
             (1,1,0,S)\n\
             (1,0,0,E)\n\
             (2,0,0,E)\n\
             (2,0,1,H)\n"
        );
        assert_eq!(
            report(input, SearchMode::Stack, OutputFormat::Map),
            "Start in level 1, row 1, column 0\n\
             //level 0\nE.\n..\n\
             //level 1\nE.\nS.\n\
             //level 2\nEH\n..\n"
        );
    }

    #[test]
    fn unreachable_reports() {
        let input = "M\n1 3\nS.#\n.##\n.#H\n";
        assert_eq!(
            report(input, SearchMode::Queue, OutputFormat::List),
            "Start in level 0, row 0, column 0\nNo valid route found.\n"
        );
        assert_eq!(
            report(input, SearchMode::Stack, OutputFormat::Map),
            "Start in level 0, row 0, column 0\n\
             No valid route found.\n\
             //level 0\nS.#\n.##\n.#H\n"
        );
    }
}
