//! List-mode body: one `(level,row,col,symbol)` entry per line.

use std::io::BufRead;

use ship_core::{Dims, Position, Station, StationBuilder, Tile};

use crate::error::LoadError;
use crate::load::Source;

pub(crate) fn read<R: BufRead>(src: &mut Source<R>, dims: Dims) -> Result<Station, LoadError> {
    let mut builder = StationBuilder::new(dims);

    while let Some((line, text)) = src.next_content()? {
        let Some((level, row, col, ch)) = parse_entry(text) else {
            return Err(LoadError::MalformedEntry {
                line,
                text: text.to_string(),
            });
        };
        let Some(pos) = position_in(dims, level, row, col) else {
            return Err(LoadError::OutOfRange {
                line,
                level,
                row,
                col,
            });
        };
        let Some(tile) = Tile::from_symbol(ch) else {
            return Err(LoadError::InvalidChar { line, ch, pos });
        };
        builder.place(pos, tile)?;
    }

    Ok(builder.finish()?)
}

/// Split `(level,row,col,ch)`. Whitespace around each field is allowed.
fn parse_entry(text: &str) -> Option<(i64, i64, i64, char)> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let mut fields = inner.splitn(4, ',').map(str::trim);
    let level = fields.next()?.parse().ok()?;
    let row = fields.next()?.parse().ok()?;
    let col = fields.next()?.parse().ok()?;
    let mut symbol = fields.next()?.chars();
    let ch = symbol.next()?;
    if symbol.next().is_some() {
        return None;
    }
    Some((level, row, col, ch))
}

fn position_in(dims: Dims, level: i64, row: i64, col: i64) -> Option<Position> {
    let p = Position::new(
        usize::try_from(level).ok()?,
        usize::try_from(row).ok()?,
        usize::try_from(col).ok()?,
    );
    dims.contains(p).then_some(p)
}
