//! Writing stations back out in either input format.
//!
//! Trail marks are written as floor so that the output always loads again.

use std::io::{self, Write};

use ship_core::{Station, Tile};

use crate::format::InputMode;

/// Write every level as `//level <n>` followed by its rows, rendering each
/// tile with `symbol`.
pub(crate) fn write_levels<W: Write>(
    out: &mut W,
    station: &Station,
    symbol: impl Fn(Tile) -> char,
) -> io::Result<()> {
    let dims = station.dims();
    let mut line = String::with_capacity(dims.size);
    for level in 0..dims.levels {
        writeln!(out, "//level {level}")?;
        for row in 0..dims.size {
            line.clear();
            line.extend(station.row(level, row).iter().map(|&t| symbol(t)));
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn input_symbol(tile: Tile) -> char {
    match tile {
        Tile::Trail(_) => Tile::Floor.symbol(),
        t => t.symbol(),
    }
}

fn write_header<W: Write>(out: &mut W, mode: InputMode, station: &Station) -> io::Result<()> {
    let dims = station.dims();
    writeln!(out, "{}", mode.as_char())?;
    writeln!(out, "{} {}", dims.levels, dims.size)
}

/// Write `station` as map-mode input.
pub fn encode_map<W: Write>(out: &mut W, station: &Station) -> io::Result<()> {
    write_header(out, InputMode::Map, station)?;
    write_levels(out, station, input_symbol)
}

/// Write `station` as list-mode input, listing only non-floor cells.
pub fn encode_list<W: Write>(out: &mut W, station: &Station) -> io::Result<()> {
    write_header(out, InputMode::List, station)?;
    for (p, t) in station.iter() {
        let ch = input_symbol(t);
        if ch == Tile::Floor.symbol() {
            continue;
        }
        writeln!(out, "({},{},{},{ch})", p.level, p.row, p.col)?;
    }
    Ok(())
}
